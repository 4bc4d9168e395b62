//! Turns a term list into a single matcher.
//!
//! Terms are literal text, never regular expression fragments. This module
//! escapes them, joins them into one alternation in list order and compiles
//! the result case-insensitively, so the engine can find every term in a
//! single left-to-right pass.

pub mod compiler;
