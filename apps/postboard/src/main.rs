//! # Postboard
//!
//! Terminal front end for the post board: loads configuration, sets up
//! tracing, opens the configured store and runs the interactive session.

use std::io;

use postboard_core::PostController;

mod commands;
mod config;
mod error;
mod session;
mod state;
mod telemetry;

use config::AppConfig;
use session::Session;
use telemetry::TelemetryConfig;

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();
    tracing::info!(storage = ?config.storage, slot = %config.slot, "Starting Postboard");

    let controller = PostController::open(state::build_store(&config));

    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(controller, stdin.lock(), stdout.lock()).run()?;

    Ok(())
}
