//! TPIC6C596 chain emulator
//!
//! Listens on a Unix datagram socket for one-byte pin messages (see
//! [`lights_core::wire`]) and drives an in-process chain model, logging
//! the visible register states whenever they change.
//!
//! ## Environment Variables
//! - `LIGHTS_EMULATOR_SOCKET`: socket path (default: /tmp/tpic6c596-emulator.sock)
//! - `LIGHTS_EMULATOR_CHIPS`: chain length (default: 3)
//! - `RUST_LOG`: log filter (default: lights_emulator=info)

mod ipc;

use std::path::PathBuf;
use anyhow::{ensure, Context};
use clap::Parser;
use lights_core::DEFAULT_SOCKET;
use lights_driver::ChainEmulator;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "lights-emulator")]
#[command(version)]
#[command(about = "Emulates a TPIC6C596 shift register chain", long_about = None)]
struct Args {
    /// Unix datagram socket to bind
    #[arg(short, long, default_value = DEFAULT_SOCKET, env = "LIGHTS_EMULATOR_SOCKET")]
    socket: PathBuf,

    /// Number of chained registers
    #[arg(short, long, default_value_t = 3, env = "LIGHTS_EMULATOR_CHIPS")]
    chips: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lights_emulator=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    ensure!(args.chips > 0, "chain needs at least one chip");

    let listener = ipc::bind(&args.socket)
        .with_context(|| format!("Failed to bind {}", args.socket.display()))?;
    let mut emulator = ChainEmulator::new(args.chips);

    tracing::info!("Emulator listening on {}", listener.path().display());
    tracing::info!("  Chips:  {}", args.chips);
    tracing::info!("  State:  {}", emulator);

    tokio::select! {
        result = listener.listen(&mut emulator) => result.context("Emulator socket failed")?,
        _ = tokio::signal::ctrl_c() => tracing::info!("Shutting down emulator..."),
    }

    Ok(())
}
