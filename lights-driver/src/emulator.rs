//! In-process model of a TPIC6C596 chain
//!
//! Each chip has a shift stage (fed by the clock) and a storage stage
//! (loaded by the latch). The storage stage is only visible while the
//! control line enables the outputs.
//!
//! ```text
//!  SER IN ─► [chip 0: shift 0→7] ─► [chip 1: shift 0→7] ─► ...
//!                 │ RCK↑                 │ RCK↑
//!             [storage]              [storage]
//!                 │ G                    │ G
//!              outputs                outputs
//! ```

use std::fmt;
use lights_core::{Pin, PinMessage, PinResult, PinSet, PinSink};
use crate::chain::BITS_PER_CHIP;

/// A single 8-bit register
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Register {
    shift: u8,
    storage: u8,
    enabled: bool,
}

impl Register {
    /// Shifts `bit` into output 0; returns the bit pushed out of output 7
    pub fn shift(&mut self, bit: bool) -> bool {
        let carry = self.shift & 0b1000_0000 != 0;
        self.shift = (self.shift << 1) | u8::from(bit);
        carry
    }

    /// Copies the shift stage into the storage stage
    pub fn latch(&mut self) {
        self.storage = self.shift;
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Visible outputs: the storage stage, or `0` when disabled
    pub const fn state(self) -> u8 {
        if self.enabled { self.storage } else { 0 }
    }

    /// Storage stage regardless of the output enable
    pub const fn storage(self) -> u8 {
        self.storage
    }

    /// Shift stage (not yet latched)
    pub const fn shifted(self) -> u8 {
        self.shift
    }

    pub const fn is_enabled(self) -> bool {
        self.enabled
    }
}

/// Emulated chain of registers reacting to pin level changes
#[derive(Debug, Clone)]
pub struct ChainEmulator {
    pins: PinSet<bool>,
    registers: Vec<Register>,
}

impl ChainEmulator {
    /// Creates a chain of `chips` registers, all pins low
    pub fn new(chips: usize) -> Self {
        Self {
            pins: PinSet::default(),
            registers: vec![Register::default(); chips],
        }
    }

    /// Applies a level to `pin`.
    ///
    /// Only changes matter: a clock rising edge shifts the data level in,
    /// a latch rising edge commits every register, any control change
    /// switches the outputs. Returns `true` when the visible outputs may
    /// have changed.
    pub fn set_pin(&mut self, pin: Pin, level: bool) -> bool {
        if self.pins.set(pin, level) == level {
            return false;
        }

        match (pin, level) {
            (Pin::Clock, true) => {
                let mut carry = self.pins.data;
                for register in &mut self.registers {
                    carry = register.shift(carry);
                }
                false
            }
            (Pin::Latch, true) => {
                self.registers.iter_mut().for_each(Register::latch);
                true
            }
            (Pin::Control, enabled) => {
                for register in &mut self.registers {
                    register.set_enabled(enabled);
                }
                true
            }
            _ => false,
        }
    }

    /// Applies a decoded wire message
    pub fn apply(&mut self, message: PinMessage) -> bool {
        self.set_pin(message.pin, message.level)
    }

    pub fn pin(&self, pin: Pin) -> bool {
        *self.pins.get(pin)
    }

    pub fn is_enabled(&self) -> bool {
        self.pins.control
    }

    pub fn registers(&self) -> &[Register] {
        &self.registers
    }

    pub fn register(&self, index: usize) -> Option<Register> {
        self.registers.get(index).copied()
    }

    /// Visible level of a chain output; position `0` is the first output
    /// of the first chip
    pub fn output(&self, position: usize) -> bool {
        self.register(position / BITS_PER_CHIP)
            .is_some_and(|register| register.state() & (1 << (position % BITS_PER_CHIP)) != 0)
    }
}

impl fmt::Display for ChainEmulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for register in &self.registers {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{:08b}", register.state())?;
            first = false;
        }
        Ok(())
    }
}

impl PinSink for ChainEmulator {
    fn set_data(&mut self, level: bool) -> PinResult<()> {
        self.set_pin(Pin::Data, level);
        Ok(())
    }

    fn set_clock(&mut self, level: bool) -> PinResult<()> {
        self.set_pin(Pin::Clock, level);
        Ok(())
    }

    fn set_latch(&mut self, level: bool) -> PinResult<()> {
        self.set_pin(Pin::Latch, level);
        Ok(())
    }

    fn set_control(&mut self, level: bool) -> PinResult<()> {
        self.set_pin(Pin::Control, level);
        Ok(())
    }

    fn get_control(&mut self) -> PinResult<bool> {
        Ok(self.pins.control)
    }
}
