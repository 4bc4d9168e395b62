//! Small helpers for the taboo CLI: input reading, engine setup and the clipboard.

pub mod clipboard;
pub mod engine_setup;
pub mod input;
