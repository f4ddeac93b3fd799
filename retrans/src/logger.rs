// retrans/src/logger.rs
//! Logger setup for the `retrans` binary.
//!
//! Log records go to stderr so they never mix with transliterated output on stdout.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Default filter when neither `RUST_LOG` nor a CLI flag chooses one.
const DEFAULT_FILTER: &str = "warn";

/// Initializes `env_logger`.
///
/// `level_override` wins over `RUST_LOG` when given. Calling this more than
/// once is harmless; later calls are ignored.
pub fn init_logger(level_override: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER));
    builder.target(Target::Stderr);

    if let Some(level) = level_override {
        builder.filter_level(level);
    }

    // Ignored if a logger is already installed (e.g. by a test harness).
    let _ = builder.try_init();
}

/// Maps the `--quiet` / `--debug` flags to a level override.
pub fn level_from_flags(quiet: bool, debug: bool) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Off)
    } else if debug {
        Some(LevelFilter::Debug)
    } else {
        None
    }
}
