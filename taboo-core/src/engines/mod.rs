//! This module contains censor engine implementations.
//!
//! Each engine is a separate file within this directory and implements the
//! `CensorEngine` trait.

pub mod regex_engine;
