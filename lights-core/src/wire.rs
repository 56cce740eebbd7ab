//! Emulator wire protocol
//!
//! Every pin level change travels as a single datagram byte:
//!
//! ```text
//!   bit  7    6 5 4 3 2 1 0
//!      ┌─────┬─────────────┐
//!      │level│   pin id    │   1 data · 2 control · 3 clock · 4 latch
//!      └─────┴─────────────┘
//! ```
//!
//! No acknowledgement, no batching, no framing beyond the byte itself.

use crate::error::{PinError, PinResult};
use crate::pin::Pin;

/// Socket path the emulator daemon binds unless configured otherwise
pub const DEFAULT_SOCKET: &str = "/tmp/tpic6c596-emulator.sock";

/// Level flag (most significant bit)
pub const LEVEL_BIT: u8 = 0b1000_0000;

/// Pin identifier bits
pub const PIN_MASK: u8 = 0b0111_1111;

/// A single pin level change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PinMessage {
    pub pin: Pin,
    pub level: bool,
}

impl PinMessage {
    pub const fn new(pin: Pin, level: bool) -> Self {
        Self { pin, level }
    }

    /// Encodes the message as its wire byte
    pub const fn encode(self) -> u8 {
        let level = if self.level { LEVEL_BIT } else { 0 };
        level | self.pin.id()
    }

    /// Decodes a wire byte.
    ///
    /// Fails with [`PinError::UnknownPin`] when the id bits name no pin.
    pub fn decode(byte: u8) -> PinResult<Self> {
        let id = byte & PIN_MASK;
        let pin = Pin::from_id(id).ok_or(PinError::UnknownPin(id))?;

        Ok(Self {
            pin,
            level: byte & LEVEL_BIT != 0,
        })
    }
}

impl From<PinMessage> for u8 {
    fn from(message: PinMessage) -> Self {
        message.encode()
    }
}

impl TryFrom<u8> for PinMessage {
    type Error = PinError;

    fn try_from(byte: u8) -> PinResult<Self> {
        Self::decode(byte)
    }
}
