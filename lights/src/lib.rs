//! # ✨ lights — Light Patterns on Shift Register Chains
//!
//! Describe which lights are on with a [`Pattern`], then show it with a
//! [`LightArray`] bound to a TPIC6C596 chain.
//!
//! ## Architecture
//!
//! ```text
//!   Pattern (u64, width ≤ 64)
//!     set / get / rotate_left / rotate_right
//!          │
//!          ▼
//!   LightArray::set(&pattern)      width == light_count
//!          │
//!          ▼
//!   ShiftRegisterChain::write(pattern.raw())
//!          │
//!          ▼
//!   PinSink (emulator socket · embedded-hal GPIO · recorder)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use lights::{LightArray, Pattern};
//! use lights_driver::{ChainEmulator, ShiftRegisterChain};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let chain = ShiftRegisterChain::new(ChainEmulator::new(2), 2)?;
//! let mut lights = LightArray::new(chain, 12)?;
//!
//! let mut pattern = lights.new_pattern(false);
//! pattern.set(0, true)?;
//!
//! lights.on()?;
//! for _ in 0..12 {
//!     lights.set(&pattern)?;
//!     pattern.rotate_left(1);
//! }
//! assert!(lights.is_on()?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Light positions
//!
//! Pattern bit `i` lands on chain output `capacity - 1 - i`, counting from
//! the first output of the chip wired to the board. With a partly used
//! chain the lights therefore sit on the last outputs.
//!
//! ## Errors
//!
//! - configuration (light count vs. chain capacity) fails before pin I/O
//! - index out of range leaves the pattern untouched
//! - width mismatch on [`LightArray::set`]
//! - backend errors propagate unchanged, never retried

pub mod array;
pub mod config;
pub mod error;
pub mod pattern;

pub use array::{chips_for, LightArray};
#[cfg(unix)]
pub use config::connect_emulator;
pub use config::{EmulatorConfig, LightsConfig};
pub use error::{LightsError, LightsResult};
pub use pattern::{Pattern, MAX_LIGHTS};
