use crate::assembler::{assemble_earthquakes, assemble_plates};
use crate::config::Config;
use crate::legend::build_legend;
use crate::traits::FeedReader;
use crate::view::{MapView, OverlayKind};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing::{info, warn};

/// Fetch both feeds once, concurrently. Neither load waits on the other and
/// a failed feed only leaves its own overlay empty.
pub async fn load_overlays(view: &MapView, reader: &dyn FeedReader, config: &Config) {
    tokio::join!(
        load_overlay(view, reader, OverlayKind::Earthquakes, &config.earthquake_url),
        load_overlay(view, reader, OverlayKind::Plates, &config.plates_url),
    );
}

/// Returns whether the overlay was attached.
pub async fn load_overlay(
    view: &MapView,
    reader: &dyn FeedReader,
    kind: OverlayKind,
    url: &str,
) -> bool {
    let name = view.slot(kind).name().to_string();
    let pb = spinner(format!("Fetching {}", name));

    match reader.fetch(url).await {
        Ok(collection) => {
            let count = match kind {
                OverlayKind::Earthquakes => {
                    let overlay = assemble_earthquakes(&name, &collection);
                    let count = overlay.len();
                    view.attach_earthquakes(overlay, build_legend());
                    count
                }
                OverlayKind::Plates => {
                    let overlay = assemble_plates(&name, &collection);
                    let count = overlay.len();
                    view.attach_plates(overlay);
                    count
                }
            };
            info!(overlay = %name, shapes = count, "overlay attached");
            pb.finish_with_message(format!("✅ {}: {} shapes", name, count));
            true
        }
        Err(e) => {
            warn!(overlay = %name, url, error = %e, "feed unavailable, overlay left empty");
            pb.finish_with_message(format!("⚠️ {}: {}", name, e));
            view.mark_failed(kind, e.to_string());
            false
        }
    }
}

fn spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
