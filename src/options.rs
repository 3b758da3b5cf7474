use crate::error::{ConfigError, ServerError};
use crate::port;
use crate::server::Server;
use crate::types::PendingPort;

/// Settings collected while options are applied. Never leaves `new_server`.
#[derive(Debug, Default)]
pub struct Options {
    port: PendingPort,
}

/// A functional option: a closure that edits `Options` or refuses to.
///
/// Closures have anonymous types, so each one is boxed. That lets options
/// built by different functions live in the same list.
pub struct ServerOption(Box<dyn Fn(&mut Options) -> Result<(), ConfigError>>);

impl ServerOption {
    pub fn new<F>(apply: F) -> Self
    where
        F: Fn(&mut Options) -> Result<(), ConfigError> + 'static,
    {
        Self(Box::new(apply))
    }

    fn apply(&self, options: &mut Options) -> Result<(), ConfigError> {
        (self.0)(options)
    }
}

/// Request a port. The closure captures `port` and checks it when applied,
/// before the shared rule ever sees it.
pub fn with_port(port: i32) -> ServerOption {
    ServerOption::new(move |options| {
        if port < 0 {
            tracing::warn!("rejecting negative port {port}");
            return Err(ConfigError::InvalidPort(port));
        }
        options.port = port.into();
        Ok(())
    })
}

/// Apply options in order, resolve the port, then construct the server.
///
/// The first option that fails stops everything; later ones don't run.
pub fn new_server<I>(addr: &str, opts: I) -> Result<Server, ServerError>
where
    I: IntoIterator<Item = ServerOption>,
{
    let mut options = Options::default();
    for opt in opts {
        opt.apply(&mut options)?;
    }

    let port = port::resolve(options.port)?;
    Server::bind(addr, port)
}
