// taboo-core/src/lib.rs
//! # Taboo Core Library
//!
//! `taboo-core` provides the platform-independent logic for censoring taboo
//! words and phrases. It loads a word list, compiles it into a single literal,
//! case-insensitive matcher and replaces every match with asterisks of the
//! same length.
//!
//! The library is pure and stateless: the loaded [`TermList`] and the
//! compiled engine are plain values the caller constructs and passes around.
//!
//! ## Modules
//!
//! * `wordlist`: Loads a CSV word list into a [`TermList`].
//! * `patterns`: Escapes terms and compiles them into one alternation.
//! * `engine`: Defines the [`CensorEngine`] trait.
//! * `engines`: Contains the concrete [`RegexEngine`].
//! * `censor_match`: Match records and per-term summaries.
//! * `config`: YAML configuration (word list location, pattern limits).
//! * `headless`: One-shot [`censor_message`].
//! * `errors`: The [`TabooError`] enum.
//!
//! ## Usage Example
//!
//! ```rust
//! use taboo_core::{censor_message, CensorEngine, RegexEngine, TermList};
//!
//! fn main() -> Result<(), taboo_core::TabooError> {
//!     // One-shot use.
//!     let censored = censor_message("What the heck", &["heck"])?;
//!     assert_eq!(censored, "What the ****");
//!
//!     // Compile once, censor many messages.
//!     let engine = RegexEngine::new(TermList::from_terms(["bad word", "heck"]))?;
//!     assert_eq!(
//!         engine.censor("That's a bad word and a heck of a day"),
//!         "That's a ******** and a **** of a day"
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Matching Rules
//!
//! * Terms are literal text; `f.o.o` only matches `f.o.o`.
//! * Matching ignores case and word boundaries (`ass` matches inside `class`).
//! * When several terms match at the same position, the one listed first wins.
//! * Matches never overlap; scanning resumes after each match.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod censor_match;
pub mod config;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod headless;
pub mod patterns;
pub mod wordlist;

/// Re-exports the configuration types.
pub use config::{
    config_candidate_paths, CensorConfig, MissingWordlistPolicy, PatternOptions,
    DEFAULT_WORDLIST_PATH,
};

/// Re-exports the custom error type for clear error reporting.
pub use errors::TabooError;

pub use engine::CensorEngine;
pub use engines::regex_engine::RegexEngine;

/// Re-exports match records and summary helpers.
pub use censor_match::{
    apply_matches, mask_for, summarize_matches, total_occurrences, CensorMatch, CensorSummaryItem,
    ScanReport, TermCount, MASK_CHAR,
};

pub use headless::{censor_message, censor_message_with_options};

pub use patterns::compiler::{build_alternation, compile_terms, CompiledTerms};

pub use wordlist::{load_wordlist, load_wordlist_from_reader, TermList};
