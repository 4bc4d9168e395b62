//! Configuration management for `taboo-core`.
//!
//! This module defines where the word list lives, what to do when it is
//! missing, and the limits applied when the term pattern is compiled. It
//! handles deserialization of YAML configurations and the lookup of the
//! configuration file in the usual per-user locations.
//!
//! License: MIT OR Apache-2.0

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::errors::TabooError;

/// Default location of the word list, relative to the working directory.
pub const DEFAULT_WORDLIST_PATH: &str = "data/badword_list.csv";

/// Default limit for the compiled pattern, in bytes (10 MB).
pub const DEFAULT_SIZE_LIMIT: usize = 10 * (1 << 20);

/// What the shell does when the word list cannot be opened.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingWordlistPolicy {
    /// Surface the error and stop.
    #[default]
    Abort,
    /// Continue with an empty term list, which censors nothing.
    Empty,
}

/// Limits handed to the regex builder when the alternation is compiled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PatternOptions {
    /// Upper bound on the size of the compiled pattern.
    pub size_limit: usize,
    /// Upper bound on the lazy DFA cache.
    pub dfa_size_limit: usize,
}

impl Default for PatternOptions {
    fn default() -> Self {
        Self {
            size_limit: DEFAULT_SIZE_LIMIT,
            dfa_size_limit: DEFAULT_SIZE_LIMIT,
        }
    }
}

/// Represents the top-level configuration structure for taboo.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CensorConfig {
    /// Path to the CSV word list.
    pub wordlist: PathBuf,
    pub missing_wordlist: MissingWordlistPolicy,
    pub pattern: PatternOptions,
}

impl Default for CensorConfig {
    fn default() -> Self {
        Self {
            wordlist: PathBuf::from(DEFAULT_WORDLIST_PATH),
            missing_wordlist: MissingWordlistPolicy::default(),
            pattern: PatternOptions::default(),
        }
    }
}

impl CensorConfig {
    /// Loads a configuration from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, TabooError> {
        let path = path.as_ref();
        info!("Loading configuration from: {}", path.display());
        let text = std::fs::read_to_string(path).map_err(|e| {
            TabooError::ConfigError(format!("Failed to read config file {}: {}", path.display(), e))
        })?;
        let config: CensorConfig = serde_yml::from_str(&text).map_err(|e| {
            TabooError::ConfigError(format!("Failed to parse config file {}: {}", path.display(), e))
        })?;

        config.validate()?;
        debug!("Configuration loaded: wordlist={}", config.wordlist.display());
        Ok(config)
    }

    /// Resolves the configuration the way the CLI does.
    ///
    /// An explicit path must exist. Without one, the first existing file among
    /// [`config_candidate_paths`] is used, and the defaults otherwise.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, TabooError> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }

        match config_candidate_paths().into_iter().find(|p| p.is_file()) {
            Some(path) => Self::load_from_file(path),
            None => {
                debug!("No configuration file found, using defaults.");
                Ok(Self::default())
            }
        }
    }

    /// Replaces the word list path, e.g. from a command-line flag.
    pub fn with_wordlist<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.wordlist = path.into();
        self
    }

    /// Checks values serde cannot check on its own.
    pub fn validate(&self) -> Result<(), TabooError> {
        let mut errors = Vec::new();
        if self.wordlist.as_os_str().is_empty() {
            errors.push("`wordlist` must not be empty.".to_string());
        }
        if self.pattern.size_limit == 0 {
            errors.push("`pattern.size_limit` must be greater than zero.".to_string());
        }
        if self.pattern.dfa_size_limit == 0 {
            errors.push("`pattern.dfa_size_limit` must be greater than zero.".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(TabooError::ConfigError(errors.join("\n")))
        }
    }
}

/// Locations searched for `config.yaml` when no path is given, in order.
pub fn config_candidate_paths() -> Vec<PathBuf> {
    let candidates = vec![
        dirs::home_dir().map(|p| p.join(".taboo").join("config.yaml")),
        dirs::config_dir().map(|p| p.join("taboo").join("config.yaml")),
        Some(PathBuf::from("./config/taboo.yaml")),
    ];

    candidates.into_iter().flatten().collect()
}
