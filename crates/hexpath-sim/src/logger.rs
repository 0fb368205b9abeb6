//! Stderr logging through `env_logger`.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Environment variable holding an `env_logger` filter, e.g. `hexpath=trace`.
pub const LOG_ENV: &str = "HEXPATH_LOG";

/// Default level for a `-v` count.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Logger that uses `-v` unless `HEXPATH_LOG` says otherwise.
pub fn builder(verbosity: u8) -> Builder {
    let mut builder = Builder::new();
    builder
        .filter_level(level_for(verbosity))
        .parse_env(Env::default().filter(LOG_ENV));
    builder
}

/// Install the logger. Fails if another logger is already set.
pub fn init(verbosity: u8) -> Result<(), log::SetLoggerError> {
    builder(verbosity).try_init()
}
