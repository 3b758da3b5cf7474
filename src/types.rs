use std::fmt;
use std::num::NonZeroU32;

/// A resolved port number.
///
/// Wrapping `NonZeroU32` means a zero or negative port can't exist once
/// resolution is done. The compiler holds the invariant for us.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Port(NonZeroU32);

impl Port {
    /// `None` for zero.
    pub const fn new(port: u32) -> Option<Self> {
        match NonZeroU32::new(port) {
            Some(port) => Some(Self(port)),
            None => None,
        }
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A port request that hasn't been resolved yet.
///
/// `Unset` and `Requested(0)` are different things: the first means
/// "use the default", the second means "pick one for me". An enum keeps
/// that distinction explicit instead of hiding it behind a nullable value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PendingPort {
    #[default]
    Unset,
    Requested(i32),
}

impl From<i32> for PendingPort {
    fn from(port: i32) -> Self {
        Self::Requested(port)
    }
}
