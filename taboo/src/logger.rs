//! Logger setup for the taboo binary.
//!
//! Log records go to stderr so stdout only ever carries censored output.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Default filter when neither `RUST_LOG` nor a flag says otherwise.
pub const DEFAULT_FILTER: &str = "warn";

/// Initializes `env_logger`.
///
/// `level_override` wins over `RUST_LOG`; without it `RUST_LOG` is honored
/// and [`DEFAULT_FILTER`] applies when it is unset. Calling this twice is
/// harmless.
pub fn init_logger(level_override: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER));
    if let Some(level) = level_override {
        builder.filter_level(level);
    }
    builder.target(Target::Stderr).format_timestamp(None);

    if builder.try_init().is_err() {
        log::debug!("Logger already initialized; keeping the existing one.");
    }
}

/// Picks the level override from the global flags.
///
/// `--debug` beats `--disable-debug`, which beats `--quiet`.
pub fn level_from_flags(debug: bool, disable_debug: bool, quiet: bool) -> Option<LevelFilter> {
    if debug {
        Some(LevelFilter::Debug)
    } else if disable_debug {
        Some(LevelFilter::Warn)
    } else if quiet {
        Some(LevelFilter::Error)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_map_to_levels() {
        assert_eq!(level_from_flags(true, true, true), Some(LevelFilter::Debug));
        assert_eq!(level_from_flags(false, true, true), Some(LevelFilter::Warn));
        assert_eq!(level_from_flags(false, false, true), Some(LevelFilter::Error));
        assert_eq!(level_from_flags(false, false, false), None);
    }

    #[test]
    fn disable_debug_is_never_noisier_than_the_default() {
        let level = level_from_flags(false, true, false).unwrap();
        assert!(level <= DEFAULT_FILTER.parse::<LevelFilter>().unwrap());
    }
}
