//! Fixed-width circular bit pattern

use std::fmt;
use serde::{Deserialize, Serialize};
use crate::error::{LightsError, LightsResult};

/// Widest pattern; one bit per light in a `u64`
pub const MAX_LIGHTS: usize = u64::BITS as usize;

/// On/off state of every light in an array.
///
/// Bit `i` of [`raw`](Self::raw) is light `i`. Bits at `width` and above
/// are always zero.
///
/// ```
/// use lights::Pattern;
///
/// let mut pattern = Pattern::new(8, false).unwrap();
/// pattern.set(0, true).unwrap();
/// pattern.rotate_left(3);
/// assert_eq!(pattern.to_string(), "00001000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPattern", into = "RawPattern")]
pub struct Pattern {
    width: usize,
    bits: u64,
}

/// Serialized form, validated on the way in.
///
/// `bits` is the [`Display`](fmt::Display) string, light `width - 1`
/// first. TOML integers stop at `i64::MAX`, which cannot hold light 63.
#[derive(Serialize, Deserialize)]
struct RawPattern {
    width: usize,
    bits: String,
}

impl TryFrom<RawPattern> for Pattern {
    type Error = LightsError;

    fn try_from(raw: RawPattern) -> LightsResult<Self> {
        let mut pattern = Pattern::new(raw.width, false)?;
        if raw.bits.len() != raw.width || !raw.bits.bytes().all(|b| b == b'0' || b == b'1') {
            return Err(LightsError::InvalidConfig(format!(
                "pattern bits {:?} are not {} binary digits",
                raw.bits, raw.width
            )));
        }

        pattern.bits = u64::from_str_radix(&raw.bits, 2)
            .map_err(|err| LightsError::InvalidConfig(format!("pattern bits {:?}: {err}", raw.bits)))?;
        Ok(pattern)
    }
}

impl From<Pattern> for RawPattern {
    fn from(pattern: Pattern) -> Self {
        Self {
            width: pattern.width,
            bits: pattern.to_string(),
        }
    }
}

fn mask_for(width: usize) -> u64 {
    u64::MAX >> (MAX_LIGHTS - width)
}

impl Pattern {
    /// Creates a pattern of `width` lights, all on or all off.
    ///
    /// Fails when `width` is `0` or above [`MAX_LIGHTS`].
    pub fn new(width: usize, state: bool) -> LightsResult<Self> {
        if width == 0 || width > MAX_LIGHTS {
            return Err(LightsError::InvalidConfig(format!(
                "pattern width must be 1-{MAX_LIGHTS}, got {width}"
            )));
        }

        Ok(Self::filled(width, state))
    }

    /// Width already validated by the caller
    pub(crate) fn filled(width: usize, state: bool) -> Self {
        debug_assert!(width > 0 && width <= MAX_LIGHTS);
        Self {
            width,
            bits: if state { mask_for(width) } else { 0 },
        }
    }

    /// Creates a pattern from raw bits; bits past `width` are dropped
    pub fn from_raw(width: usize, bits: u64) -> LightsResult<Self> {
        let mut pattern = Self::new(width, false)?;
        pattern.bits = bits & pattern.mask();
        Ok(pattern)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// `(1 << width) - 1`
    pub fn mask(&self) -> u64 {
        mask_for(self.width)
    }

    pub fn raw(&self) -> u64 {
        self.bits
    }

    fn check(&self, index: usize) -> LightsResult<()> {
        if index >= self.width {
            return Err(LightsError::IndexOutOfRange {
                index,
                width: self.width,
            });
        }
        Ok(())
    }

    /// Whether light `index` is on
    pub fn get(&self, index: usize) -> LightsResult<bool> {
        self.check(index)?;
        Ok(self.bits & (1 << index) != 0)
    }

    /// Switches light `index` on or off
    pub fn set(&mut self, index: usize, value: bool) -> LightsResult<()> {
        self.check(index)?;
        if value {
            self.bits |= 1 << index;
        } else {
            self.bits &= !(1 << index);
        }
        Ok(())
    }

    /// Flips light `index`, returning its new state
    pub fn toggle(&mut self, index: usize) -> LightsResult<bool> {
        self.check(index)?;
        self.bits ^= 1 << index;
        Ok(self.bits & (1 << index) != 0)
    }

    /// Switches every light on or off
    pub fn fill(&mut self, state: bool) {
        self.bits = if state { self.mask() } else { 0 };
    }

    pub fn count_on(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Circular rotation towards higher indices; bits leaving the top wrap
    /// to index 0. `count` is taken modulo the width.
    pub fn rotate_left(&mut self, count: usize) {
        let count = count % self.width;
        if count == 0 {
            return;
        }

        let overflow = self.bits >> (self.width - count);
        self.bits = ((self.bits << count) | overflow) & self.mask();
    }

    /// Circular rotation towards index 0, inverse of
    /// [`rotate_left`](Self::rotate_left)
    pub fn rotate_right(&mut self, count: usize) {
        let count = count % self.width;
        if count == 0 {
            return;
        }

        let underflow = (self.bits & ((1 << count) - 1)) << (self.width - count);
        self.bits = (self.bits >> count) | underflow;
    }

    /// Light states from index 0 upwards
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.width).map(move |index| self.bits & (1 << index) != 0)
    }
}

/// Binary, most significant light first, always `width` digits
impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$b}", self.bits, width = self.width)
    }
}
