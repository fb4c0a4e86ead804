#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Global export directory, set from command line
static EXPORT_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Get the export directory (set from command line or the downloads folder)
pub fn get_export_dir() -> PathBuf {
    EXPORT_DIR.get().cloned().unwrap_or_else(|| {
        dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
    })
}

/// Tarjeta - digital business card editor
#[derive(Parser, Debug)]
#[command(name = "tarjeta-desktop")]
#[command(about = "Tarjeta - Design a business card and save it as PNG")]
struct Args {
    /// Directory for exported PNG files (defaults to the downloads folder)
    #[arg(short, long)]
    export_dir: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    if let Some(dir) = args.export_dir {
        let _ = EXPORT_DIR.set(dir);
    }

    tracing::info!("Starting editor, exporting to {:?}", get_export_dir());

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Tarjeta Digital")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1180.0, 780.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
