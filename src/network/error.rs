//! Common error types for transport operations

/// A common error type for transport operations.
///
/// This enum defines the errors the platform HTTP service can report for a
/// single call. It is designed to be simple and portable for `no_std`
/// environments. [`Transport`](super::Transport) implementations map the
/// platform's result codes onto it; codes that have no portable meaning are
/// carried verbatim in [`Error::Platform`].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// An operation was attempted on a context that is not open.
    NotOpen,
    /// A timeout occurred.
    Timeout,
    /// The connection was closed.
    ConnectionClosed,
    /// A protocol-specific error occurred, or a payload could not be decoded.
    ProtocolError,
    /// A configuration value is out of range.
    InvalidConfig,
    /// A platform result code with no portable equivalent.
    Platform(i32),
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::NotOpen => defmt::write!(f, "NotOpen"),
            Error::Timeout => defmt::write!(f, "Timeout"),
            Error::ConnectionClosed => defmt::write!(f, "ConnectionClosed"),
            Error::ProtocolError => defmt::write!(f, "ProtocolError"),
            Error::InvalidConfig => defmt::write!(f, "InvalidConfig"),
            Error::Platform(code) => defmt::write!(f, "Platform({=i32:#x})", code),
        }
    }
}
