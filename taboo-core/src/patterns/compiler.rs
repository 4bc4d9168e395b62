//! compiler.rs - Compiles a term list into one case-insensitive alternation.
//!
//! The unique, non-empty terms are escaped and joined with `|` in term-list
//! order. The regex crate resolves alternations leftmost-first, which gives
//! the "first listed term wins" behavior at any starting position. The
//! pattern carries no capture groups; which term produced a match is worked
//! out from the matched text afterwards.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use regex::{Regex, RegexBuilder};
use std::collections::{HashMap, HashSet};

use crate::config::PatternOptions;
use crate::errors::TabooError;

/// The compiled matcher for a term list.
#[derive(Debug, Clone)]
pub struct CompiledTerms {
    /// `None` when there is nothing to match; an empty alternation would
    /// otherwise match the empty string everywhere.
    pub regex: Option<Regex>,
    /// The unique, non-empty terms, in alternation order.
    pub terms: Vec<String>,
    /// Lowercased term to the index of its first occurrence in `terms`.
    folded: HashMap<String, usize>,
}

fn fold(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

impl CompiledTerms {
    /// A matcher that never matches.
    pub fn empty() -> Self {
        Self { regex: None, terms: Vec::new(), folded: HashMap::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.regex.is_none()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns the term that produced `matched`.
    ///
    /// That is the first listed term equal to `matched` ignoring case: any
    /// earlier term equal to the span would have matched at the same
    /// position and won the alternation.
    pub fn term_for_match(&self, matched: &str) -> Option<&str> {
        if let Some(&i) = self.folded.get(&fold(matched)) {
            return self.terms.get(i).map(String::as_str);
        }

        // Lowercasing and the regex crate's simple case folding disagree on a
        // few characters (`ſ` matches `s`); ask the regex engine directly.
        self.terms
            .iter()
            .find(|term| {
                RegexBuilder::new(&format!("^{}$", regex::escape(term)))
                    .case_insensitive(true)
                    .build()
                    .map(|re| re.is_match(matched))
                    .unwrap_or(false)
            })
            .map(String::as_str)
    }
}

/// Builds the alternation source for `terms`.
///
/// Empty terms are skipped and only the first occurrence of a duplicate is
/// kept; neither changes what the pattern matches. Returns the pattern and
/// the terms it was built from.
pub fn build_alternation<S: AsRef<str>>(terms: &[S]) -> (String, Vec<String>) {
    let mut seen: HashSet<&str> = HashSet::with_capacity(terms.len());
    let mut unique = Vec::with_capacity(terms.len());
    let mut escaped = Vec::with_capacity(terms.len());

    for term in terms.iter().map(AsRef::as_ref) {
        if term.is_empty() || !seen.insert(term) {
            continue;
        }
        escaped.push(regex::escape(term));
        unique.push(term.to_string());
    }

    if unique.len() < terms.len() {
        debug!(
            "Skipped {} empty or duplicate terms while building the pattern.",
            terms.len() - unique.len()
        );
    }

    (escaped.join("|"), unique)
}

/// Compiles `terms` into a [`CompiledTerms`] matcher.
///
/// # Errors
///
/// Returns [`TabooError::InvalidPattern`] if the escaped alternation cannot
/// be compiled, which in practice means it outgrew `options.size_limit`.
pub fn compile_terms<S: AsRef<str>>(
    terms: &[S],
    options: &PatternOptions,
) -> Result<CompiledTerms, TabooError> {
    debug!("Starting compilation of {} terms.", terms.len());

    let (pattern, unique) = build_alternation(terms);
    if unique.is_empty() {
        debug!("Term list is empty; nothing will be censored.");
        return Ok(CompiledTerms::empty());
    }

    let regex = RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .size_limit(options.size_limit)
        .dfa_size_limit(options.dfa_size_limit)
        .build()?;

    log::debug!(
        target: "taboo_core::patterns",
        "Compiled {} unique terms into a {} byte pattern.",
        unique.len(),
        pattern.len()
    );

    let mut folded = HashMap::with_capacity(unique.len());
    for (i, term) in unique.iter().enumerate() {
        folded.entry(fold(term)).or_insert(i);
    }

    Ok(CompiledTerms { regex: Some(regex), terms: unique, folded })
}
