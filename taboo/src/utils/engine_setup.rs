//! Builds the censor engine from configuration and command-line overrides.
//!
//! This is the one place where the word list is loaded; the resulting engine
//! is handed to the commands by reference.

use anyhow::{Context, Result};
use log::{info, warn};
use std::path::Path;

use taboo_core::{
    load_wordlist, CensorConfig, MissingWordlistPolicy, RegexEngine, TabooError, TermList,
};

use crate::cli::WordlistArgs;

/// Resolves the configuration, applying the `--wordlist` override.
pub fn resolve_config(config_path: Option<&Path>, wordlist: &WordlistArgs) -> Result<CensorConfig> {
    let mut config = CensorConfig::resolve(config_path).context("Failed to load configuration")?;
    if let Some(path) = &wordlist.wordlist {
        config = config.with_wordlist(path);
    }
    Ok(config)
}

/// Loads the term list named by `config`, honoring its missing-file policy.
pub fn load_terms(config: &CensorConfig) -> Result<TermList> {
    match load_wordlist(&config.wordlist) {
        Ok(terms) => Ok(terms),
        Err(TabooError::ResourceNotFound { path, source })
            if config.missing_wordlist == MissingWordlistPolicy::Empty =>
        {
            warn!(
                "Word list {} could not be opened ({}); continuing with an empty list.",
                path.display(),
                source
            );
            Ok(TermList::default())
        }
        Err(e) => Err(e).with_context(|| {
            format!("Failed to load word list {}", config.wordlist.display())
        }),
    }
}

/// Loads the word list and compiles it into an engine.
pub fn build_engine(config: &CensorConfig) -> Result<RegexEngine> {
    let terms = load_terms(config)?;
    let engine = RegexEngine::with_options(terms, config.pattern)
        .context("Failed to compile the word list into a pattern")?;
    info!("Censor engine ready with {} terms.", engine.terms().len());
    Ok(engine)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use taboo_core::CensorEngine;

    #[test]
    fn missing_wordlist_aborts_by_default() {
        let config = CensorConfig::default().with_wordlist("/no/such/list.csv");
        let err = load_terms(&config).unwrap_err();
        assert!(err.to_string().contains("Failed to load word list"));
        assert!(matches!(
            err.downcast_ref::<TabooError>(),
            Some(TabooError::ResourceNotFound { .. })
        ));
    }

    #[test]
    fn missing_wordlist_can_degrade_to_empty() -> Result<()> {
        let mut config = CensorConfig::default().with_wordlist("/no/such/list.csv");
        config.missing_wordlist = MissingWordlistPolicy::Empty;
        let engine = build_engine(&config)?;
        assert_eq!(engine.censor("what the heck"), "what the heck");
        Ok(())
    }

    #[test]
    fn wordlist_flag_overrides_config() -> Result<()> {
        let args = WordlistArgs { wordlist: Some(PathBuf::from("override.csv")) };
        let dir = tempfile::tempdir()?;
        let config_path = dir.path().join("config.yaml");
        std::fs::write(&config_path, "wordlist: from_config.csv\n")?;

        let config = resolve_config(Some(config_path.as_path()), &args)?;
        assert_eq!(config.wordlist, PathBuf::from("override.csv"));
        Ok(())
    }
}
