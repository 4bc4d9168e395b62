// taboo-core/src/engine.rs
//! Defines the core CensorEngine trait.
//!
//! The `CensorEngine` trait decouples the shell from the way terms are
//! matched. An engine is built once from a term list and then only read, so
//! every method takes `&self` and engines can be shared across threads.
//!
//! License: MIT OR APACHE 2.0

use crate::censor_match::{CensorMatch, CensorSummaryItem};
use crate::config::PatternOptions;
use crate::patterns::compiler::CompiledTerms;

/// A trait that defines the core functionality of a censor engine.
pub trait CensorEngine: Send + Sync {
    /// Returns `content` with every match replaced by an equal-length run
    /// of asterisks.
    fn censor(&self, content: &str) -> String;

    /// Censors `content` and returns the per-term summary alongside it.
    ///
    /// # Arguments
    /// * `content` - The input string to censor.
    /// * `source_id` - The name or identifier of the source being processed.
    fn censor_with_summary(&self, content: &str, source_id: &str) -> (String, Vec<CensorSummaryItem>);

    /// Finds every match span in `content`, in input order, without
    /// modifying anything.
    fn find_matches(&self, content: &str, source_id: &str) -> Vec<CensorMatch>;

    /// Summarizes matches without producing censored text.
    ///
    /// Used by the `scan` command.
    fn analyze_for_stats(&self, content: &str, source_id: &str) -> Vec<CensorSummaryItem>;

    /// Returns a reference to the compiled matcher.
    fn compiled_terms(&self) -> &CompiledTerms;

    /// Returns a reference to the engine's options.
    fn get_options(&self) -> &PatternOptions;
}
