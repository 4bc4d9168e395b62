// taboo-core/src/censor_match.rs
//! Provides core data structures and utility functions for censor matches,
//! their per-term summaries, and logging of matched text within the
//! `taboo-core` library.

use chrono::Utc;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::TabooError;

use lazy_static::lazy_static;

/// The character every matched character is replaced with.
pub const MASK_CHAR: char = '*';

lazy_static! {
    /// A static boolean that is initialized once to determine if matched text may appear in debug logs.
    static ref TERMS_DEBUG_ALLOWED: bool = {
        std::env::var("TABOO_ALLOW_DEBUG_TERMS")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

/// Represents a single censored span of the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CensorMatch {
    /// The term (as listed) whose alternative matched.
    pub term: String,
    /// The input text of the span, in its original casing.
    pub original_string: String,
    /// The run of asterisks that replaces the span.
    pub censored_string: String,
    /// Byte offset of the span start.
    pub start: u64,
    /// Byte offset one past the span end.
    pub end: u64,
    /// Number of characters in the span.
    pub char_len: u64,
    #[serde(default)]
    pub source_id: String,
}

/// Represents a single item in the censor summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CensorSummaryItem {
    pub term: String,
    pub occurrences: usize,
    /// The spellings that matched, in input order.
    pub matched_texts: Vec<String>,
}

/// Occurrence count for one term in a [`ScanReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermCount {
    pub term: String,
    pub occurrences: usize,
}

/// Machine-readable result of a scan, as emitted by `taboo scan --json-*`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanReport {
    /// RFC 3339 timestamp of report creation.
    pub generated_at: String,
    pub source: String,
    pub total_matches: usize,
    pub terms: Vec<TermCount>,
}

impl ScanReport {
    pub fn from_summary(source: &str, summary: &[CensorSummaryItem]) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            source: source.to_string(),
            total_matches: total_occurrences(summary),
            terms: summary
                .iter()
                .map(|item| TermCount { term: item.term.clone(), occurrences: item.occurrences })
                .collect(),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, TabooError> {
        serde_json::to_string_pretty(self).map_err(|e| TabooError::SerializationError(e.to_string()))
    }
}

/// Returns the asterisk run replacing `matched`, one `*` per character.
pub fn mask_for(matched: &str) -> String {
    std::iter::repeat(MASK_CHAR).take(matched.chars().count()).collect()
}

/// Rebuilds `content` with every match replaced by its mask.
///
/// `matches` must be ordered by position and must not overlap, as returned
/// by [`crate::CensorEngine::find_matches`].
pub fn apply_matches(content: &str, matches: &[CensorMatch]) -> String {
    let mut censored = String::with_capacity(content.len());
    let mut last_end = 0usize;
    for m in matches {
        censored.push_str(&content[last_end..m.start as usize]);
        censored.push_str(&m.censored_string);
        last_end = m.end as usize;
    }
    censored.push_str(&content[last_end..]);
    censored
}

/// Folds matches into per-term summary items, ordered by `terms`.
///
/// Terms without matches are left out.
pub fn summarize_matches(terms: &[String], matches: &[CensorMatch]) -> Vec<CensorSummaryItem> {
    terms
        .iter()
        .filter_map(|term| {
            let matched_texts: Vec<String> = matches
                .iter()
                .filter(|m| &m.term == term)
                .map(|m| m.original_string.clone())
                .collect();
            if matched_texts.is_empty() {
                None
            } else {
                Some(CensorSummaryItem {
                    term: term.clone(),
                    occurrences: matched_texts.len(),
                    matched_texts,
                })
            }
        })
        .collect()
}

/// Total number of matches across a summary.
pub fn total_occurrences(summary: &[CensorSummaryItem]) -> usize {
    summary.iter().map(|item| item.occurrences).sum()
}

pub fn redact_sensitive(s: &str) -> String {
    const MAX_LEN: usize = 8;
    let len = s.chars().count();
    if len <= MAX_LEN {
        "[CENSORED]".to_string()
    } else {
        format!("[CENSORED: {} chars]", len)
    }
}

fn get_loggable_content(matched: &str) -> String {
    if *TERMS_DEBUG_ALLOWED {
        matched.to_string()
    } else {
        redact_sensitive(matched)
    }
}

pub fn log_censor_match_debug(module_path: &str, m: &CensorMatch) {
    debug!(
        "{} Found CensorMatch: Term='{}', Original='{}', Span={}..{}",
        module_path,
        get_loggable_content(&m.term),
        get_loggable_content(&m.original_string),
        m.start,
        m.end
    );
}
