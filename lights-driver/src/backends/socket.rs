//! Emulator client over a Unix datagram socket

use std::os::unix::net::UnixDatagram;
use std::path::{Path, PathBuf};
use lights_core::{Pin, PinMessage, PinResult, PinSink, DEFAULT_SOCKET};
use tracing::debug;

/// Sends one [`PinMessage`] datagram per level change.
///
/// The control level is not readable over the socket, so the last level
/// successfully sent is cached and reported back.
#[derive(Debug)]
pub struct SocketPins {
    socket: UnixDatagram,
    address: PathBuf,
    control: bool,
}

impl SocketPins {
    /// Creates an unbound socket that will send to `address`.
    ///
    /// The emulator does not need to be running yet; sends fail until it is.
    pub fn connect(address: impl AsRef<Path>) -> PinResult<Self> {
        let address = address.as_ref().to_path_buf();
        let socket = UnixDatagram::unbound()?;

        debug!(socket = %address.display(), "emulator pins ready");
        Ok(Self {
            socket,
            address,
            control: false,
        })
    }

    /// Connects to [`DEFAULT_SOCKET`]
    pub fn connect_default() -> PinResult<Self> {
        Self::connect(DEFAULT_SOCKET)
    }

    pub fn address(&self) -> &Path {
        &self.address
    }

    fn send(&self, pin: Pin, level: bool) -> PinResult<()> {
        let byte = PinMessage::new(pin, level).encode();
        self.socket.send_to(&[byte], &self.address)?;
        Ok(())
    }
}

impl PinSink for SocketPins {
    fn set_data(&mut self, level: bool) -> PinResult<()> {
        self.send(Pin::Data, level)
    }

    fn set_clock(&mut self, level: bool) -> PinResult<()> {
        self.send(Pin::Clock, level)
    }

    fn set_latch(&mut self, level: bool) -> PinResult<()> {
        self.send(Pin::Latch, level)
    }

    fn set_control(&mut self, level: bool) -> PinResult<()> {
        self.send(Pin::Control, level)?;
        self.control = level;
        Ok(())
    }

    fn get_control(&mut self) -> PinResult<bool> {
        Ok(self.control)
    }
}
