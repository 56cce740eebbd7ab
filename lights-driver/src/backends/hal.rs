//! Hardware backend over `embedded-hal` output pins

use embedded_hal::digital::{OutputPin, PinState, StatefulOutputPin};
use lights_core::{Pin, PinError, PinResult, PinSink};

/// Four GPIO outputs wired to a chain.
///
/// Pin types may differ; the control pin must be able to report the level
/// it was last set to.
#[derive(Debug)]
pub struct HalPins<D, C, L, E> {
    data: D,
    clock: C,
    latch: L,
    control: E,
}

impl<D, C, L, E> HalPins<D, C, L, E> {
    pub fn new(data: D, clock: C, latch: L, control: E) -> Self {
        Self {
            data,
            clock,
            latch,
            control,
        }
    }

    /// Gives the pins back as `(data, clock, latch, control)`
    pub fn release(self) -> (D, C, L, E) {
        (self.data, self.clock, self.latch, self.control)
    }
}

fn hardware_error(pin: Pin, err: impl embedded_hal::digital::Error) -> PinError {
    PinError::Hardware {
        pin,
        kind: format!("{:?}", err.kind()),
    }
}

fn drive<P: OutputPin>(output: &mut P, pin: Pin, level: bool) -> PinResult<()> {
    output
        .set_state(PinState::from(level))
        .map_err(|err| hardware_error(pin, err))
}

impl<D, C, L, E> PinSink for HalPins<D, C, L, E>
where
    D: OutputPin,
    C: OutputPin,
    L: OutputPin,
    E: StatefulOutputPin,
{
    fn set_data(&mut self, level: bool) -> PinResult<()> {
        drive(&mut self.data, Pin::Data, level)
    }

    fn set_clock(&mut self, level: bool) -> PinResult<()> {
        drive(&mut self.clock, Pin::Clock, level)
    }

    fn set_latch(&mut self, level: bool) -> PinResult<()> {
        drive(&mut self.latch, Pin::Latch, level)
    }

    fn set_control(&mut self, level: bool) -> PinResult<()> {
        drive(&mut self.control, Pin::Control, level)
    }

    fn get_control(&mut self) -> PinResult<bool> {
        self.control
            .is_set_high()
            .map_err(|err| hardware_error(Pin::Control, err))
    }
}
