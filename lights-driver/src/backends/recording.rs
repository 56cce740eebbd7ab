//! In-memory backend recording every pin operation

use std::io;
use lights_core::{Pin, PinError, PinMessage, PinResult, PinSink};

/// Records each level change in call order.
///
/// Can be told to fail after a number of operations to exercise error
/// propagation.
#[derive(Debug, Default, Clone)]
pub struct RecordingPins {
    operations: Vec<PinMessage>,
    control: bool,
    fail_after: Option<usize>,
}

impl RecordingPins {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts `operations` level changes, then fails every call
    pub fn failing_after(operations: usize) -> Self {
        Self {
            fail_after: Some(operations),
            ..Self::default()
        }
    }

    pub fn operations(&self) -> &[PinMessage] {
        &self.operations
    }

    pub fn clear(&mut self) {
        self.operations.clear();
    }

    /// Operations on `pin` only
    pub fn levels(&self, pin: Pin) -> Vec<bool> {
        self.operations
            .iter()
            .filter(|op| op.pin == pin)
            .map(|op| op.level)
            .collect()
    }

    /// Number of clock rising edges
    pub fn clock_pulses(&self) -> usize {
        self.sampled_data().len()
    }

    /// Data level at each clock rising edge
    pub fn sampled_data(&self) -> Vec<bool> {
        let mut data = false;
        let mut clock = false;
        let mut samples = Vec::new();

        for op in &self.operations {
            match op.pin {
                Pin::Data => data = op.level,
                Pin::Clock => {
                    if op.level && !clock {
                        samples.push(data);
                    }
                    clock = op.level;
                }
                _ => {}
            }
        }
        samples
    }

    fn record(&mut self, pin: Pin, level: bool) -> PinResult<()> {
        if self.fail_after.is_some_and(|limit| self.operations.len() >= limit) {
            return Err(PinError::Io(io::Error::new(
                io::ErrorKind::BrokenPipe,
                format!("recording closed before {pin} change"),
            )));
        }

        self.operations.push(PinMessage::new(pin, level));
        Ok(())
    }
}

impl PinSink for RecordingPins {
    fn set_data(&mut self, level: bool) -> PinResult<()> {
        self.record(Pin::Data, level)
    }

    fn set_clock(&mut self, level: bool) -> PinResult<()> {
        self.record(Pin::Clock, level)
    }

    fn set_latch(&mut self, level: bool) -> PinResult<()> {
        self.record(Pin::Latch, level)
    }

    fn set_control(&mut self, level: bool) -> PinResult<()> {
        self.record(Pin::Control, level)?;
        self.control = level;
        Ok(())
    }

    fn get_control(&mut self) -> PinResult<bool> {
        Ok(self.control)
    }
}
