use crate::error::ConfigError;
use crate::port;
use crate::types::{PendingPort, Port};

/// Resolved server configuration, produced by `ConfigBuilder::build`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub port: Port,
}

/// The builder accumulates an unresolved port and produces a validated config.
///
/// Setters take and return `self` so calls chain. Nothing is checked until
/// `build`, which is where the port rule lives.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    port: PendingPort,
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

impl ConfigBuilder {
    /// Last call wins. Negative values are accepted here and rejected by `build`.
    pub fn port(mut self, port: i32) -> Self {
        self.port = port.into();
        self
    }

    /// Borrows the builder, so calling it again gives the same answer.
    pub fn build(&self) -> Result<Config, ConfigError> {
        let port = port::resolve(self.port)?;
        Ok(Config { port })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::{DEFAULT_PORT, random_port};

    #[test]
    fn explicit_port() {
        let config = Config::builder().port(8080).build().unwrap();
        assert_eq!(config.port.get(), 8080);
    }

    #[test]
    fn no_port_uses_default() {
        let config = Config::builder().build().unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn zero_port_is_allocated() {
        let config = Config::builder().port(0).build().unwrap();
        assert_eq!(config.port, random_port());
    }

    #[test]
    fn negative_port_fails() {
        let err = Config::builder().port(-1).build().unwrap_err();
        assert_eq!(err, ConfigError::InvalidPort(-1));
        assert!(err.to_string().contains("port should be positive"));
    }

    #[test]
    fn last_write_wins() {
        let config = Config::builder().port(-1).port(80).port(443).build().unwrap();
        assert_eq!(config.port.get(), 443);

        let err = Config::builder().port(443).port(-5).build().unwrap_err();
        assert_eq!(err, ConfigError::InvalidPort(-5));
    }

    #[test]
    fn build_is_repeatable() {
        let builder = Config::builder().port(9000);
        assert_eq!(builder.build(), builder.build());

        let builder = Config::builder().port(-3);
        assert_eq!(builder.build(), builder.build());
    }
}
