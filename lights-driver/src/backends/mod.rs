//! Pin backends
//!
//! | Backend          | Lines driven                               |
//! |:-----------------|:-------------------------------------------|
//! | [`SocketPins`]   | emulator daemon over a Unix datagram socket |
//! | [`HalPins`]      | four `embedded-hal` output pins            |
//! | [`RecordingPins`]| in-memory log, for tests                   |

#[cfg(feature = "hal")]
mod hal;
mod recording;
#[cfg(unix)]
mod socket;

#[cfg(feature = "hal")]
pub use hal::HalPins;
pub use recording::RecordingPins;
#[cfg(unix)]
pub use socket::SocketPins;
