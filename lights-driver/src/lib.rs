//! # 🔌 lights-driver — TPIC6C596 Shift Protocol
//!
//! Bit-bangs frames into a chain of cascaded 8-bit TPIC6C596 power shift
//! registers through any [`PinSink`](lights_core::PinSink), and models the
//! chain in process for tests and for the emulator daemon.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │           ShiftRegisterChain<S>             │
//! │  write(u64) → shift_bits(value, chips × 8)  │
//! │  enable() / disable() / is_enabled()        │
//! └─────────────────────────────────────────────┘
//!                      ↓ PinSink
//! ┌──────────────┬──────────────┬───────────────┐
//! │  SocketPins  │   HalPins    │ RecordingPins │
//! │  (emulator)  │ (embedded-hal│  (tests)      │
//! │              │  GPIO)       │               │
//! └──────────────┴──────────────┴───────────────┘
//!        ↓
//!  lights-emulator → ChainEmulator
//! ```
//!
//! ## Frame protocol
//!
//! 1. latch low
//! 2. per bit, LSB first: clock low → data → clock high
//! 3. latch high → latch low (commit to the outputs)
//!
//! No delays are inserted; each pin call is slower than the chip's minimum
//! pulse width.
//!
//! ## Example
//!
//! ```rust
//! use lights_driver::{ChainEmulator, ShiftRegisterChain};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut chain = ShiftRegisterChain::new(ChainEmulator::new(1), 1)?;
//! chain.enable()?;
//! chain.write(0b0000_0001)?;
//!
//! // Bit 0 travels to the last output
//! assert_eq!(chain.pins().register(0).unwrap().state(), 0b1000_0000);
//! # Ok(())
//! # }
//! ```
//!
//! ## Capacity
//!
//! Frames are `u64` words, so chains hold at most [`MAX_CHIPS`] chips
//! (64 outputs).

pub mod backends;
pub mod chain;
pub mod emulator;
pub mod error;

pub use backends::RecordingPins;
#[cfg(feature = "hal")]
pub use backends::HalPins;
#[cfg(unix)]
pub use backends::SocketPins;
pub use chain::{ShiftRegisterChain, BITS_PER_CHIP, MAX_CHIPS};
pub use emulator::{ChainEmulator, Register};
pub use error::{DriverError, DriverResult};
