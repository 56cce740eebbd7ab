//! Driver errors

use thiserror::Error;
use lights_core::PinError;

pub type DriverResult<T> = Result<T, DriverError>;

/// Errors of the shift register driver
#[derive(Debug, Error)]
pub enum DriverError {
    /// Chain length outside `1..=max`
    #[error("Invalid chain length: {chips} chips (supported: 1-{max})")]
    InvalidChainLength { chips: usize, max: usize },

    /// Pin backend failed; the frame on the chips is undefined
    #[error("Pin backend failed: {0}")]
    Pin(#[from] PinError),
}
