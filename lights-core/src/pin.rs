//! Control lines and the pin capability

use std::fmt;
use crate::error::PinResult;

/// One of the four control lines of a TPIC6C596 chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pin {
    /// Serial data input (SER IN)
    Data,
    /// Output enable (G), active high on the board
    Control,
    /// Shift register clock (SRCK)
    Clock,
    /// Storage register clock (RCK)
    Latch,
}

impl Pin {
    /// Every pin, in wire id order
    pub const ALL: [Pin; 4] = [Pin::Data, Pin::Control, Pin::Clock, Pin::Latch];

    /// Identifier used by the emulator wire protocol
    pub const fn id(self) -> u8 {
        match self {
            Pin::Data => 1,
            Pin::Control => 2,
            Pin::Clock => 3,
            Pin::Latch => 4,
        }
    }

    /// Inverse of [`Pin::id`]
    pub const fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Pin::Data),
            2 => Some(Pin::Control),
            3 => Some(Pin::Clock),
            4 => Some(Pin::Latch),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Pin::Data => "data",
            Pin::Control => "control",
            Pin::Clock => "clock",
            Pin::Latch => "latch",
        }
    }
}

impl fmt::Display for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One value per control line
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PinSet<T> {
    pub data: T,
    pub control: T,
    pub clock: T,
    pub latch: T,
}

impl<T> PinSet<T> {
    pub const fn get(&self, pin: Pin) -> &T {
        match pin {
            Pin::Data => &self.data,
            Pin::Control => &self.control,
            Pin::Clock => &self.clock,
            Pin::Latch => &self.latch,
        }
    }

    pub fn get_mut(&mut self, pin: Pin) -> &mut T {
        match pin {
            Pin::Data => &mut self.data,
            Pin::Control => &mut self.control,
            Pin::Clock => &mut self.clock,
            Pin::Latch => &mut self.latch,
        }
    }

    /// Replaces the value for `pin`, returning the previous one
    pub fn set(&mut self, pin: Pin, value: T) -> T {
        std::mem::replace(self.get_mut(pin), value)
    }
}

/// Capability to drive the four control lines of a chain.
///
/// Each call must return only after the level change has been issued.
/// The shift protocol relies on that latency as its pulse width, so
/// implementations must not queue, batch or reorder calls.
///
/// # Example
///
/// ```
/// use lights_core::{PinResult, PinSink};
///
/// #[derive(Default)]
/// struct Blind {
///     control: bool,
/// }
///
/// impl PinSink for Blind {
///     fn set_data(&mut self, _: bool) -> PinResult<()> { Ok(()) }
///     fn set_clock(&mut self, _: bool) -> PinResult<()> { Ok(()) }
///     fn set_latch(&mut self, _: bool) -> PinResult<()> { Ok(()) }
///     fn set_control(&mut self, level: bool) -> PinResult<()> {
///         self.control = level;
///         Ok(())
///     }
///     fn get_control(&mut self) -> PinResult<bool> { Ok(self.control) }
/// }
///
/// let mut pins = Blind::default();
/// pins.set_control(true).unwrap();
/// assert!(pins.get_control().unwrap());
/// ```
pub trait PinSink {
    fn set_data(&mut self, level: bool) -> PinResult<()>;

    fn set_clock(&mut self, level: bool) -> PinResult<()>;

    fn set_latch(&mut self, level: bool) -> PinResult<()>;

    fn set_control(&mut self, level: bool) -> PinResult<()>;

    /// Current level of the control (output enable) line
    fn get_control(&mut self) -> PinResult<bool>;

    /// Drives `pin` to `level`
    fn set(&mut self, pin: Pin, level: bool) -> PinResult<()> {
        match pin {
            Pin::Data => self.set_data(level),
            Pin::Control => self.set_control(level),
            Pin::Clock => self.set_clock(level),
            Pin::Latch => self.set_latch(level),
        }
    }
}

impl<S: PinSink + ?Sized> PinSink for &mut S {
    fn set_data(&mut self, level: bool) -> PinResult<()> {
        (**self).set_data(level)
    }

    fn set_clock(&mut self, level: bool) -> PinResult<()> {
        (**self).set_clock(level)
    }

    fn set_latch(&mut self, level: bool) -> PinResult<()> {
        (**self).set_latch(level)
    }

    fn set_control(&mut self, level: bool) -> PinResult<()> {
        (**self).set_control(level)
    }

    fn get_control(&mut self) -> PinResult<bool> {
        (**self).get_control()
    }
}

impl<S: PinSink + ?Sized> PinSink for Box<S> {
    fn set_data(&mut self, level: bool) -> PinResult<()> {
        (**self).set_data(level)
    }

    fn set_clock(&mut self, level: bool) -> PinResult<()> {
        (**self).set_clock(level)
    }

    fn set_latch(&mut self, level: bool) -> PinResult<()> {
        (**self).set_latch(level)
    }

    fn set_control(&mut self, level: bool) -> PinResult<()> {
        (**self).set_control(level)
    }

    fn get_control(&mut self) -> PinResult<bool> {
        (**self).get_control()
    }
}
