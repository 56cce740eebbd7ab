//! # 💡 lights-core — Pins & Wire Protocol
//!
//! Shared vocabulary for driving TPIC6C596 power shift register chains:
//! the four control lines ([`Pin`]), the capability every pin backend
//! implements ([`PinSink`]) and the one-byte datagram protocol spoken by
//! the chain emulator ([`PinMessage`]).
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  lights  (Pattern, LightArray)           │
//! └──────────────────────────────────────────┘
//!                   ↓
//! ┌──────────────────────────────────────────┐
//! │  lights-driver  (ShiftRegisterChain)     │
//! └──────────────────────────────────────────┘
//!                   ↓
//! ┌──────────────────────────────────────────┐
//! │  lights-core  (PinSink)                  │
//! │   set_data / set_clock / set_latch /     │
//! │   set_control / get_control              │
//! └──────────────────────────────────────────┘
//!          ↓                     ↓
//!   embedded-hal pins     emulator socket (PinMessage)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use lights_core::{Pin, PinMessage};
//!
//! let byte = PinMessage::new(Pin::Clock, true).encode();
//! assert_eq!(byte, 0b1000_0011);
//!
//! let message = PinMessage::decode(byte).unwrap();
//! assert_eq!(message.pin, Pin::Clock);
//! assert!(message.level);
//! ```

pub mod error;
pub mod pin;
pub mod wire;

pub use error::{PinError, PinResult};
pub use pin::{Pin, PinSet, PinSink};
pub use wire::{PinMessage, DEFAULT_SOCKET};
