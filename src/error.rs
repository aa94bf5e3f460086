// third-party imports
use config::ConfigError;
use thiserror::Error;

/// Error is an error which may occur while compiling a pattern or loading settings.
#[derive(Error, Debug)]
pub enum Error {
    #[error("malformed pattern {pattern:?}: unbalanced ']' at offset {offset}")]
    MalformedPattern { pattern: String, offset: usize },
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;
