//! A `CensorEngine` implementation that compiles the term list into one
//! case-insensitive regular expression and masks every match.
//! License: MIT OR APACHE 2.0

use log::debug;
use std::sync::Arc;

use crate::censor_match::{
    apply_matches, log_censor_match_debug, mask_for, summarize_matches, CensorMatch, CensorSummaryItem, MASK_CHAR,
};
use crate::config::PatternOptions;
use crate::engine::CensorEngine;
use crate::errors::TabooError;
use crate::patterns::compiler::{compile_terms, CompiledTerms};
use crate::wordlist::TermList;

#[derive(Debug, Clone)]
pub struct RegexEngine {
    compiled_terms: Arc<CompiledTerms>,
    terms: TermList,
    options: PatternOptions,
}

impl RegexEngine {
    pub fn new(terms: TermList) -> Result<Self, TabooError> {
        Self::with_options(terms, PatternOptions::default())
    }

    pub fn with_options(terms: TermList, options: PatternOptions) -> Result<Self, TabooError> {
        let compiled_terms = compile_terms(terms.as_slice(), &options)?;

        Ok(Self {
            compiled_terms: Arc::new(compiled_terms),
            terms,
            options,
        })
    }

    /// The term list the engine was built from, duplicates included.
    pub fn terms(&self) -> &TermList {
        &self.terms
    }

    fn matched_term(&self, matched: &str) -> &str {
        self.compiled_terms.term_for_match(matched).unwrap_or_default()
    }
}

impl CensorEngine for RegexEngine {
    fn censor(&self, content: &str) -> String {
        let Some(regex) = self.compiled_terms.regex.as_ref() else {
            return content.to_string();
        };

        let mut censored = String::with_capacity(content.len());
        let mut last_end = 0usize;
        for m in regex.find_iter(content) {
            censored.push_str(&content[last_end..m.start()]);
            censored.extend(std::iter::repeat(MASK_CHAR).take(m.as_str().chars().count()));
            last_end = m.end();
        }
        censored.push_str(&content[last_end..]);
        censored
    }

    fn censor_with_summary(&self, content: &str, source_id: &str) -> (String, Vec<CensorSummaryItem>) {
        let matches = self.find_matches(content, source_id);
        let censored = apply_matches(content, &matches);

        debug!(
            "Content censored. Matches: {}, characters in: {}, characters out: {}",
            matches.len(),
            content.chars().count(),
            censored.chars().count()
        );
        let summary = summarize_matches(&self.compiled_terms.terms, &matches);
        (censored, summary)
    }

    fn find_matches(&self, content: &str, source_id: &str) -> Vec<CensorMatch> {
        let Some(regex) = self.compiled_terms.regex.as_ref() else {
            return Vec::new();
        };

        let mut matches = Vec::new();
        for whole in regex.find_iter(content) {
            let m = CensorMatch {
                term: self.matched_term(whole.as_str()).to_string(),
                original_string: whole.as_str().to_string(),
                censored_string: mask_for(whole.as_str()),
                start: whole.start() as u64,
                end: whole.end() as u64,
                char_len: whole.as_str().chars().count() as u64,
                source_id: source_id.to_string(),
            };
            log_censor_match_debug(module_path!(), &m);
            matches.push(m);
        }
        matches
    }

    fn analyze_for_stats(&self, content: &str, source_id: &str) -> Vec<CensorSummaryItem> {
        let matches = self.find_matches(content, source_id);
        summarize_matches(&self.compiled_terms.terms, &matches)
    }

    fn compiled_terms(&self) -> &CompiledTerms {
        &self.compiled_terms
    }

    fn get_options(&self) -> &PatternOptions {
        &self.options
    }
}
