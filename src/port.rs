use crate::error::ConfigError;
use crate::types::{PendingPort, Port};

pub const DEFAULT_PORT: Port = match Port::new(8080) {
    Some(port) => port,
    None => unreachable!(),
};

const PLACEHOLDER_PORT: Port = match Port::new(4) {
    Some(port) => port,
    None => unreachable!(),
};

/// Stand-in for "assign an available port".
///
/// Always the same value, so anything built on top of it stays
/// reproducible. Chosen by fair dice roll.
pub fn random_port() -> Port {
    PLACEHOLDER_PORT
}

/// The one rule both configurators share.
///
/// Match arms are checked top to bottom, which gives the precedence:
/// unset, zero, negative, positive.
pub fn resolve(pending: PendingPort) -> Result<Port, ConfigError> {
    let port = match pending {
        PendingPort::Unset => {
            tracing::debug!("no port requested, using default {DEFAULT_PORT}");
            DEFAULT_PORT
        }
        PendingPort::Requested(0) => {
            let port = random_port();
            tracing::debug!("port 0 requested, allocated {port}");
            port
        }
        PendingPort::Requested(requested) if requested < 0 => {
            return Err(ConfigError::InvalidPort(requested));
        }
        PendingPort::Requested(requested) => u32::try_from(requested)
            .ok()
            .and_then(Port::new)
            .ok_or(ConfigError::InvalidPort(requested))?,
    };
    Ok(port)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_resolves_to_default() {
        assert_eq!(resolve(PendingPort::Unset), Ok(DEFAULT_PORT));
        assert_eq!(DEFAULT_PORT.get(), 8080);
    }

    #[test]
    fn zero_resolves_to_allocated_port() {
        assert_eq!(resolve(PendingPort::Requested(0)), Ok(random_port()));
        assert_eq!(random_port().get(), 4);
    }

    #[test]
    fn negative_is_rejected() {
        for requested in [-1, -80, i32::MIN] {
            assert_eq!(
                resolve(requested.into()),
                Err(ConfigError::InvalidPort(requested))
            );
        }
    }

    #[test]
    fn positive_is_kept() {
        for requested in [1, 80, 443, 8080, 65535, i32::MAX] {
            let port = resolve(requested.into()).unwrap();
            assert_eq!(port.get(), requested as u32);
        }
    }

    #[test]
    fn allocation_is_stable() {
        assert_eq!(random_port(), random_port());
    }
}
