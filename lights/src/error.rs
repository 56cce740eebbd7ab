//! Light array errors

use thiserror::Error;
use lights_driver::DriverError;

pub type LightsResult<T> = Result<T, LightsError>;

/// Errors of patterns, light arrays and their configuration
#[derive(Debug, Error)]
pub enum LightsError {
    /// Rejected at construction, before any pin I/O
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// More lights than the chain has outputs
    #[error("Too many lights: {lights} lights on {chips} chips (max {capacity})")]
    TooManyLights {
        lights: usize,
        chips: usize,
        capacity: usize,
    },

    /// Light index past the pattern width
    #[error("Light index {index} out of range (width {width})")]
    IndexOutOfRange { index: usize, width: usize },

    /// Pattern built for a different light count
    #[error("Pattern width {actual} does not match {expected} lights")]
    WidthMismatch { expected: usize, actual: usize },

    /// Driver or pin backend failed
    #[error(transparent)]
    Driver(#[from] DriverError),

    /// Config file could not be read or parsed
    #[error("Config error: {0}")]
    Config(String),
}

impl LightsError {
    /// Configuration errors are raised before touching any pin
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            LightsError::InvalidConfig(_)
                | LightsError::TooManyLights { .. }
                | LightsError::Config(_)
                | LightsError::Driver(DriverError::InvalidChainLength { .. })
        )
    }
}
