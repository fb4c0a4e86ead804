//! Fire-and-forget PNG export.

use dioxus::prelude::spawn;
use tarjeta_core::{export, render, CardData, CardError};

/// Snapshot the card and rasterize it off the UI thread.
///
/// The SVG and filename are captured at call time, so edits made while the
/// export is in flight do not leak into the saved file. Failures are
/// logged; the editing session is never interrupted.
pub fn spawn_export(card: &CardData) {
    let svg = render::render_card(card);
    let filename = export::export_filename(&card.full_name);
    let dir = crate::context::get_export_dir();

    spawn(async move {
        let result = tokio::task::spawn_blocking(move || {
            let png = export::render_png(&svg, export::EXPORT_SCALE)?;
            let path = dir.join(filename);
            std::fs::write(&path, png)?;
            Ok::<_, CardError>(path)
        })
        .await;

        match result {
            Ok(Ok(path)) => tracing::info!("Card saved to {}", path.display()),
            Ok(Err(e)) => tracing::error!("Export failed: {e}"),
            Err(e) => tracing::error!("Export task failed: {e}"),
        }
    });
}
