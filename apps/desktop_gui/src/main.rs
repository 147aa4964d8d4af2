use std::path::PathBuf;

use anyhow::anyhow;
use catalog::{config::load_settings, open_window};
use clap::Parser;
use client_core::windows::WindowKind;
use eframe::egui;
use tracing_subscriber::EnvFilter;

mod ui;

use ui::CommandWindowApp;

#[derive(Parser, Debug)]
struct Args {
    /// Which window to open: `media` or `demo`.
    #[arg(long, default_value = "media")]
    window: WindowKind,
    /// Settings file; defaults to `media.toml` when present.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();

    let settings = load_settings(args.config.as_deref())?;
    let window = open_window(args.window, &settings)?;
    let title = window.layout().title;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title)
            .with_inner_size([760.0, 560.0])
            .with_min_inner_size([480.0, 320.0]),
        ..Default::default()
    };
    eframe::run_native(
        title,
        options,
        Box::new(|_cc| Ok(Box::new(CommandWindowApp::new(window)))),
    )
    .map_err(|err| anyhow!("window closed with error: {err}"))
}
