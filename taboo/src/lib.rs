// taboo/src/lib.rs
//! # Taboo CLI Application
//!
//! This crate provides the command-line shell around `taboo-core`: argument
//! parsing, configuration and word list resolution, logging and terminal
//! output. All censoring is delegated to the core engine.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
pub mod utils;

pub use commands::censor::{run_censor_opts, CensorOptions};
pub use commands::scan::{run_scan_opts, ScanOptions};
