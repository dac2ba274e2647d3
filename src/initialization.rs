//! Process-level initialization helpers.

use crate::config::LogLevel;

/// Initializes the global logger at the requested level.
///
/// `RUST_LOG` takes precedence when set, matching env_logger conventions.
pub fn init_logger(level: LogLevel) {
    let filter: log::LevelFilter = level.into();
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(filter.to_string()),
    )
    .init();
}
