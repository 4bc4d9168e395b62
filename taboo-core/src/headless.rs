// File: taboo-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for using the core engine in headless mode (non-UI).
//! Provides a one-shot censor call for callers that do not keep an engine
//! around between messages.

use crate::config::PatternOptions;
use crate::engine::CensorEngine;
use crate::engines::regex_engine::RegexEngine;
use crate::errors::TabooError;
use crate::wordlist::TermList;

/// Censors `message` against `terms` in a single call.
///
/// Compiles the pattern on every call; hosts censoring many messages should
/// build a [`RegexEngine`] once and reuse it.
///
/// # Errors
///
/// Returns [`TabooError::InvalidPattern`] if the terms cannot be compiled.
pub fn censor_message<S: AsRef<str>>(message: &str, terms: &[S]) -> Result<String, TabooError> {
    censor_message_with_options(message, terms, PatternOptions::default())
}

/// [`censor_message`] with explicit pattern limits.
pub fn censor_message_with_options<S: AsRef<str>>(
    message: &str,
    terms: &[S],
    options: PatternOptions,
) -> Result<String, TabooError> {
    let term_list = TermList::from_terms(terms.iter().map(|t| t.as_ref()));
    let engine = RegexEngine::with_options(term_list, options)?;
    Ok(engine.censor(message))
}
