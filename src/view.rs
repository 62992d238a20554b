use crate::config::{Config, EARTHQUAKE_OVERLAY, PLATES_OVERLAY};
use crate::legend::Legend;
use crate::models::geometry::LatLng;
use crate::models::layer::{BaseLayer, Overlay};
use serde::Serialize;
use tokio::sync::{OnceCell, watch};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    Earthquakes,
    Plates,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadStatus {
    Pending,
    Loaded,
    Failed,
}

/// A toggleable overlay group that is filled at most once.
#[derive(Debug)]
pub struct OverlaySlot {
    name: String,
    overlay: OnceCell<Overlay>,
    failure: OnceCell<String>,
    settled: watch::Sender<LoadStatus>,
}

impl OverlaySlot {
    fn new(name: &str) -> Self {
        OverlaySlot {
            name: name.to_string(),
            overlay: OnceCell::new(),
            failure: OnceCell::new(),
            settled: watch::Sender::new(LoadStatus::Pending),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn overlay(&self) -> Option<&Overlay> {
        self.overlay.get()
    }

    pub fn failure(&self) -> Option<&str> {
        self.failure.get().map(String::as_str)
    }

    pub fn status(&self) -> LoadStatus {
        if self.overlay.initialized() {
            LoadStatus::Loaded
        } else if self.failure.initialized() {
            LoadStatus::Failed
        } else {
            LoadStatus::Pending
        }
    }

    /// Wait until the load for this slot has either attached or failed.
    pub async fn settled(&self) -> LoadStatus {
        let mut rx = self.settled.subscribe();
        match rx.wait_for(|status| *status != LoadStatus::Pending).await {
            Ok(status) => *status,
            // the sender lives as long as the slot
            Err(_) => self.status(),
        }
    }

    pub fn summary(&self) -> OverlaySummary {
        OverlaySummary {
            name: self.name.clone(),
            status: self.status(),
            shapes: self.overlay().map_or(0, Overlay::len),
            error: self.failure.get().cloned(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OverlaySummary {
    pub name: String,
    pub status: LoadStatus,
    pub shapes: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// The one owner of map state. Loaders only ever append into their own
/// slot, so the two feeds can finish in any order.
#[derive(Debug)]
pub struct MapView {
    center: LatLng,
    zoom: u8,
    base_layers: Vec<BaseLayer>,
    earthquakes: OverlaySlot,
    plates: OverlaySlot,
    legend: OnceCell<Legend>,
}

impl MapView {
    pub fn new(config: &Config) -> Self {
        MapView {
            center: config.center,
            zoom: config.zoom,
            base_layers: config.base_layers.clone(),
            earthquakes: OverlaySlot::new(EARTHQUAKE_OVERLAY),
            plates: OverlaySlot::new(PLATES_OVERLAY),
            legend: OnceCell::new(),
        }
    }

    pub fn center(&self) -> LatLng {
        self.center
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn base_layers(&self) -> &[BaseLayer] {
        &self.base_layers
    }

    pub fn slot(&self, kind: OverlayKind) -> &OverlaySlot {
        match kind {
            OverlayKind::Earthquakes => &self.earthquakes,
            OverlayKind::Plates => &self.plates,
        }
    }

    /// Slots in layer-control order.
    pub fn slots(&self) -> [&OverlaySlot; 2] {
        [&self.earthquakes, &self.plates]
    }

    pub fn find_slot(&self, name: &str) -> Option<&OverlaySlot> {
        self.slots().into_iter().find(|slot| slot.name == name)
    }

    pub fn legend(&self) -> Option<&Legend> {
        self.legend.get()
    }

    /// The legend arrives together with the earthquake overlay. It is set
    /// first so anyone woken by the slot settling already sees it.
    pub fn attach_earthquakes(&self, overlay: Overlay, legend: Legend) {
        if self.legend.set(legend).is_err() {
            warn!("legend already attached");
        }
        self.attach(OverlayKind::Earthquakes, overlay);
    }

    pub fn attach_plates(&self, overlay: Overlay) {
        self.attach(OverlayKind::Plates, overlay);
    }

    fn attach(&self, kind: OverlayKind, overlay: Overlay) {
        let slot = self.slot(kind);
        if slot.overlay.set(overlay).is_err() {
            warn!(overlay = %slot.name, "overlay already attached, keeping the first one");
            return;
        }
        slot.settled.send_replace(LoadStatus::Loaded);
    }

    pub fn mark_failed(&self, kind: OverlayKind, reason: String) {
        let slot = self.slot(kind);
        if slot.failure.set(reason).is_err() {
            warn!(overlay = %slot.name, "overlay already marked as failed");
            return;
        }
        if !slot.overlay.initialized() {
            slot.settled.send_replace(LoadStatus::Failed);
        }
    }

    pub fn summaries(&self) -> Vec<OverlaySummary> {
        self.slots().iter().map(|slot| slot.summary()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::legend::build_legend;
    use std::sync::Arc;
    use std::time::Duration;

    #[test]
    fn test_new_view_has_empty_named_slots() {
        let view = MapView::new(&Config::default());
        let names: Vec<&str> = view.slots().iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["Earthquakes", "Tectonic Plates"]);
        assert!(view.slots().iter().all(|s| s.status() == LoadStatus::Pending));
        assert!(view.legend().is_none());
        assert_eq!(view.zoom(), 5);
        assert_eq!(view.center(), LatLng(37.7749, -122.4194));
    }

    #[test]
    fn test_attach_order_does_not_matter() {
        let view = MapView::new(&Config::default());
        view.attach_plates(Overlay::new(PLATES_OVERLAY));
        view.attach_earthquakes(Overlay::new(EARTHQUAKE_OVERLAY), build_legend());

        assert_eq!(view.slot(OverlayKind::Plates).status(), LoadStatus::Loaded);
        assert_eq!(view.slot(OverlayKind::Earthquakes).status(), LoadStatus::Loaded);
        assert_eq!(view.legend().map(|l| l.entries.len()), Some(4));
    }

    #[test]
    fn test_second_attach_keeps_first_overlay() {
        let view = MapView::new(&Config::default());
        view.attach_plates(Overlay::new(PLATES_OVERLAY));
        view.attach_plates(Overlay::new("replacement"));

        assert_eq!(
            view.slot(OverlayKind::Plates).overlay().map(|o| o.name.as_str()),
            Some(PLATES_OVERLAY)
        );
    }

    #[test]
    fn test_failed_slot_reports_reason() {
        let view = MapView::new(&Config::default());
        view.mark_failed(OverlayKind::Earthquakes, "status 503".to_string());

        let summary = view.slot(OverlayKind::Earthquakes).summary();
        assert_eq!(summary.status, LoadStatus::Failed);
        assert_eq!(summary.shapes, 0);
        assert_eq!(summary.error.as_deref(), Some("status 503"));
        assert!(view.find_slot("Tectonic Plates").is_some());
        assert!(view.find_slot("Volcanoes").is_none());
    }

    #[tokio::test]
    async fn test_settled_waits_for_attach() {
        let view = Arc::new(MapView::new(&Config::default()));
        let waiter = {
            let view = Arc::clone(&view);
            tokio::spawn(async move { view.slot(OverlayKind::Plates).settled().await })
        };

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!waiter.is_finished());
        view.attach_plates(Overlay::new(PLATES_OVERLAY));

        assert_eq!(waiter.await.unwrap(), LoadStatus::Loaded);
    }

    #[tokio::test]
    async fn test_settled_returns_at_once_when_already_failed() {
        let view = MapView::new(&Config::default());
        view.mark_failed(OverlayKind::Earthquakes, "timeout".to_string());
        assert_eq!(
            view.slot(OverlayKind::Earthquakes).settled().await,
            LoadStatus::Failed
        );
    }

    #[tokio::test]
    async fn test_failure_after_attach_keeps_loaded() {
        let view = MapView::new(&Config::default());
        view.attach_plates(Overlay::new(PLATES_OVERLAY));
        view.mark_failed(OverlayKind::Plates, "late".to_string());

        let slot = view.slot(OverlayKind::Plates);
        assert_eq!(slot.status(), LoadStatus::Loaded);
        assert_eq!(slot.settled().await, LoadStatus::Loaded);
    }
}
