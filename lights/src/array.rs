//! Lights bound to a shift register chain

use lights_core::PinSink;
use lights_driver::{ShiftRegisterChain, BITS_PER_CHIP, MAX_CHIPS};
use tracing::debug;
use crate::error::{LightsError, LightsResult};
use crate::pattern::Pattern;

/// `light_count` lights driven by a chain.
///
/// Pattern bit `i` lands on chain output `capacity_bits - 1 - i`, so a
/// short array occupies the last `light_count` outputs.
///
/// Every [`set`](Self::set) sends a complete frame; there are no partial
/// updates. The only state besides the chain is the output enable.
#[derive(Debug)]
pub struct LightArray<S> {
    chain: ShiftRegisterChain<S>,
    lights: usize,
}

impl<S: PinSink> LightArray<S> {
    /// Binds `lights` lights to `chain`.
    ///
    /// Fails before any pin I/O when `lights` is `0` or exceeds the chain
    /// capacity.
    pub fn new(chain: ShiftRegisterChain<S>, lights: usize) -> LightsResult<Self> {
        if lights == 0 {
            return Err(LightsError::InvalidConfig("light array needs at least one light".into()));
        }

        let capacity = chain.capacity_bits();
        if lights > capacity {
            return Err(LightsError::TooManyLights {
                lights,
                chips: chain.chip_count(),
                capacity,
            });
        }

        debug!(lights, chips = chain.chip_count(), "light array ready");
        Ok(Self { chain, lights })
    }

    /// Builds the chain too; `chips` defaults to just enough for `lights`,
    /// capped at [`MAX_CHIPS`] so an oversized array reports
    /// [`LightsError::TooManyLights`]
    pub fn with_chips(pins: S, lights: usize, chips: Option<usize>) -> LightsResult<Self> {
        let chips = chips.unwrap_or_else(|| chips_for(lights).min(MAX_CHIPS));
        let chain = ShiftRegisterChain::new(pins, chips)?;
        Self::new(chain, lights)
    }

    pub fn light_count(&self) -> usize {
        self.lights
    }

    /// A pattern sized for this array
    pub fn new_pattern(&self, state: bool) -> Pattern {
        Pattern::filled(self.lights, state)
    }

    /// Writes `pattern` to the chain.
    ///
    /// A backend failure leaves the displayed frame undefined; re-issue
    /// the whole `set` to recover.
    pub fn set(&mut self, pattern: &Pattern) -> LightsResult<()> {
        if pattern.width() != self.lights {
            return Err(LightsError::WidthMismatch {
                expected: self.lights,
                actual: pattern.width(),
            });
        }

        self.chain.write(pattern.raw())?;
        Ok(())
    }

    /// Enables the outputs
    pub fn on(&mut self) -> LightsResult<()> {
        Ok(self.chain.enable()?)
    }

    /// Blanks the outputs; the latched frame is kept
    pub fn off(&mut self) -> LightsResult<()> {
        Ok(self.chain.disable()?)
    }

    pub fn is_on(&mut self) -> LightsResult<bool> {
        Ok(self.chain.is_enabled()?)
    }

    pub fn chain(&self) -> &ShiftRegisterChain<S> {
        &self.chain
    }

    pub fn chain_mut(&mut self) -> &mut ShiftRegisterChain<S> {
        &mut self.chain
    }

    pub fn into_chain(self) -> ShiftRegisterChain<S> {
        self.chain
    }
}

/// Chips needed for `lights` outputs
pub fn chips_for(lights: usize) -> usize {
    lights.div_ceil(BITS_PER_CHIP).max(1)
}
