//! Pin backend errors

use thiserror::Error;
use crate::pin::Pin;

pub type PinResult<T> = Result<T, PinError>;

/// Errors raised by pin backends
#[derive(Debug, Error)]
pub enum PinError {
    /// Socket or device I/O failed
    #[error("Pin I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Hardware pin refused a level change
    #[error("Hardware error on {pin} pin: {kind}")]
    Hardware { pin: Pin, kind: String },

    /// Wire byte carried an unknown pin identifier
    #[error("Unknown pin identifier: {0}")]
    UnknownPin(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "no emulator");
        let err: PinError = io_err.into();
        assert!(err.to_string().contains("no emulator"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_hardware_error_names_pin() {
        let err = PinError::Hardware { pin: Pin::Latch, kind: "Other".into() };
        assert_eq!(err.to_string(), "Hardware error on latch pin: Other");
    }

    #[test]
    fn test_unknown_pin() {
        let err = PinError::UnknownPin(9);
        assert!(err.to_string().contains('9'));
    }
}
