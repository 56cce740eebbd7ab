//! Serial shift protocol for cascaded TPIC6C596 chips

use lights_core::PinSink;
use tracing::{debug, trace};
use crate::error::{DriverError, DriverResult};

/// Outputs per chip
pub const BITS_PER_CHIP: usize = 8;

/// Longest supported chain; a frame must fit one `u64`
pub const MAX_CHIPS: usize = u64::BITS as usize / BITS_PER_CHIP;

/// A chain of `chips` cascaded shift registers driven through `S`.
///
/// The chain owns its pins, so a single writer drives the four lines at
/// any time. Callers sharing a chain across threads wrap it in a `Mutex`.
///
/// # Bit order
///
/// Bits leave LSB first and every later bit pushes the earlier ones one
/// output further down the cascade. After [`write`](Self::write) bit `0`
/// sits on the last output of the last chip and bit `capacity_bits - 1`
/// on the first output of the first chip (the one wired to the board).
#[derive(Debug)]
pub struct ShiftRegisterChain<S> {
    pins: S,
    chips: usize,
}

impl<S: PinSink> ShiftRegisterChain<S> {
    /// Binds `pins` to a chain of `chips` registers.
    ///
    /// Issues no pin I/O. Fails when `chips` is outside `1..=MAX_CHIPS`.
    pub fn new(pins: S, chips: usize) -> DriverResult<Self> {
        if chips == 0 || chips > MAX_CHIPS {
            return Err(DriverError::InvalidChainLength { chips, max: MAX_CHIPS });
        }

        debug!(chips, capacity = chips * BITS_PER_CHIP, "shift register chain attached");
        Ok(Self { pins, chips })
    }

    pub fn chip_count(&self) -> usize {
        self.chips
    }

    /// Bits transmitted by every [`write`](Self::write)
    pub fn capacity_bits(&self) -> usize {
        self.chips * BITS_PER_CHIP
    }

    /// Drives the control line high, showing the latched frame
    pub fn enable(&mut self) -> DriverResult<()> {
        self.pins.set_control(true)?;
        debug!("outputs enabled");
        Ok(())
    }

    /// Drives the control line low, blanking every output
    pub fn disable(&mut self) -> DriverResult<()> {
        self.pins.set_control(false)?;
        debug!("outputs disabled");
        Ok(())
    }

    pub fn is_enabled(&mut self) -> DriverResult<bool> {
        Ok(self.pins.get_control()?)
    }

    /// Shifts the low `count` bits of `value`, LSB first, and latches them.
    ///
    /// The sequence is fixed: latch low, then per bit clock low, data,
    /// clock high (the sampling edge), then a latch high/low pulse. No
    /// delays are inserted; each pin call is the pulse width. The closing
    /// latch low returns the line to idle for the next frame.
    ///
    /// A backend error aborts the frame at the failing call. Nothing is
    /// retried and the chips hold an undefined frame until the next
    /// complete write.
    pub fn shift_bits(&mut self, mut value: u64, count: usize) -> DriverResult<()> {
        trace!(value, count, "shifting frame");
        self.pins.set_latch(false)?;

        for _ in 0..count {
            self.pins.set_clock(false)?;
            self.pins.set_data(value & 1 != 0)?;
            self.pins.set_clock(true)?;
            value >>= 1;
        }

        self.pins.set_latch(true)?;
        self.pins.set_latch(false)?;
        Ok(())
    }

    /// Transmits a full frame of [`capacity_bits`](Self::capacity_bits)
    pub fn write(&mut self, value: u64) -> DriverResult<()> {
        self.shift_bits(value, self.capacity_bits())
    }

    /// Pushes a single lit output into the chain
    pub fn shift_high(&mut self) -> DriverResult<()> {
        self.shift_bits(1, 1)
    }

    /// Pushes a single dark output into the chain
    pub fn shift_low(&mut self) -> DriverResult<()> {
        self.shift_bits(0, 1)
    }

    pub fn pins(&self) -> &S {
        &self.pins
    }

    pub fn pins_mut(&mut self) -> &mut S {
        &mut self.pins
    }

    pub fn into_pins(self) -> S {
        self.pins
    }
}
