#![forbid(unsafe_code)]
#![cfg_attr(not(debug_assertions), deny(warnings))] // Forbid warnings in release builds
#![warn(clippy::all, rust_2018_idioms)]

use eframe::egui;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use floating_clock::clock::RemoteTimes;
use floating_clock::config::Config;
use floating_clock::fetch::{fetch_remote_times, TimezoneDbClient};
use floating_clock::geometry::WINDOW_SIZE;
use floating_clock::ClockApp;

// When compiling natively:
#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load();

    // Both zones are fetched to completion before the window exists; a slow
    // or unreachable service delays startup, nothing else.
    let remote = match TimezoneDbClient::new(&config) {
        Ok(client) => fetch_remote_times(&client).await,
        Err(err) => {
            tracing::warn!(error = %err, "could not build the HTTP client");
            RemoteTimes::default()
        }
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_decorations(false)
            .with_resizable(false)
            .with_always_on_top()
            .with_transparent(true),
        ..Default::default()
    };
    eframe::run_native(
        "Floating Clock",
        native_options,
        Box::new(move |cc| Box::new(ClockApp::new(cc, remote))),
    )
}
