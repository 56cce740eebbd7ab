//! Unix datagram listener

use std::io;
use std::path::{Path, PathBuf};
use lights_core::PinMessage;
use lights_driver::ChainEmulator;
use tokio::net::UnixDatagram;
use tracing::{debug, info, warn};

/// Bound emulator socket; the socket file is removed on drop
#[derive(Debug)]
pub struct Listener {
    socket: UnixDatagram,
    path: PathBuf,
}

/// Binds `path`, replacing a stale socket file left by a previous run
pub fn bind(path: impl AsRef<Path>) -> io::Result<Listener> {
    let path = path.as_ref();
    match std::fs::remove_file(path) {
        Ok(()) => debug!(socket = %path.display(), "removed stale socket"),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }

    let socket = UnixDatagram::bind(path)?;
    Ok(Listener {
        socket,
        path: path.to_path_buf(),
    })
}

impl Listener {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Receives one datagram and applies it; returns the number of
    /// visible output refreshes
    pub async fn next(&self, emulator: &mut ChainEmulator, buffer: &mut [u8]) -> io::Result<usize> {
        let received = self.socket.recv(buffer).await?;
        Ok(handle_datagram(emulator, &buffer[..received]))
    }

    /// Feeds every datagram into `emulator` until the socket fails
    pub async fn listen(&self, emulator: &mut ChainEmulator) -> io::Result<()> {
        let mut buffer = vec![0; 1024];
        loop {
            self.next(emulator, &mut buffer).await?;
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

/// Applies every byte of a datagram, skipping bytes naming no pin
pub fn handle_datagram(emulator: &mut ChainEmulator, datagram: &[u8]) -> usize {
    let mut refreshed = 0;

    for &byte in datagram {
        match PinMessage::decode(byte) {
            Ok(message) => {
                if emulator.apply(message) {
                    refreshed += 1;
                    info!(enabled = emulator.is_enabled(), "state: {}", emulator);
                }
            }
            Err(err) => warn!(byte, %err, "ignoring byte"),
        }
    }

    refreshed
}
