use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A negative port was requested. Never retryable.
    #[error("port should be positive (got {0})")]
    InvalidPort(i32),
}

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid bind address: {0:?}")]
    Address(String),
}
