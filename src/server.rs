use crate::config::Config;
use crate::error::ServerError;
use crate::types::Port;

/// Handle for a configured server.
///
/// Nothing is bound here. Both configurators hand their validated result
/// to this type, which is as far as this crate goes.
#[derive(Debug)]
pub struct Server {
    addr: String,
    port: Port,
}

impl Server {
    /// Builder path: takes a whole resolved `Config`.
    pub fn new(addr: &str, config: &Config) -> Result<Self, ServerError> {
        Self::bind(addr, config.port)
    }

    /// Options path: takes the resolved port directly.
    pub fn bind(addr: &str, port: Port) -> Result<Self, ServerError> {
        if addr.trim().is_empty() {
            return Err(ServerError::Address(addr.to_string()));
        }

        tracing::info!("server configured for {addr}:{port}");
        Ok(Self {
            addr: addr.to_string(),
            port,
        })
    }

    #[allow(dead_code)]
    pub fn port(&self) -> Port {
        self.port
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.addr, self.port)
    }
}
