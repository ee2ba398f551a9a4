use bcknd_config::ConfigError;
use thiserror::Error;

/// Errors raised while setting up the client handle.
///
/// Request-time failures are not listed here: they surface as
/// [`reqwest::Error`] from `send()` on the returned builders.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

/// Result type alias for client setup
pub type Result<T> = std::result::Result<T, ClientError>;
