#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use log::{info, warn};
use ministack_business::BusinessConfig;
use ministack_ui::MinistackApp;
use ministack_ui::state::State;

mod alloc {
    #[global_allocator]
    static MALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;
}

fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();

    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .filter_module("egui_winit::clipboard", log::LevelFilter::Off)
        .init();

    match dotenv {
        Ok(path) => info!("Loaded environment from {}", path.display()),
        Err(err) if err.not_found() => info!("No .env file found, using process environment"),
        Err(err) => warn!("Failed to load .env: {err}"),
    }

    let config = BusinessConfig::init()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let _guard = runtime.enter();

    let state = State::new(&config)?;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("User Management")
            .with_inner_size([480.0, 640.0])
            .with_min_inner_size([360.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        "User Management",
        native_options,
        Box::new(move |_cc| Ok(Box::new(MinistackApp::new(state)))),
    )
    .map_err(|err| anyhow::anyhow!("Failed to run the window: {err}"))
}
