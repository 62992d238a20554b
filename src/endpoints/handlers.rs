use crate::map::render_page;
use crate::models::layer::BaseLayer;
use crate::view::{LoadStatus, MapView, OverlayKind, OverlaySummary};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
struct LayersResponse {
    base_layers: Vec<BaseLayer>,
    overlays: Vec<OverlaySummary>,
}

pub async fn webmap_handler(State(view): State<Arc<MapView>>) -> Response {
    match render_page(&view) {
        Ok(html) => Html(html).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    }
}

pub async fn get_all_layers(State(view): State<Arc<MapView>>) -> impl IntoResponse {
    let response = LayersResponse {
        base_layers: view.base_layers().to_vec(),
        overlays: view.summaries(),
    };

    (StatusCode::OK, Json(response))
}

/// A page rendered before the feeds finish asks for its overlays here, so a
/// pending slot is waited on rather than reported missing.
pub async fn get_overlay(
    Path(name): Path<String>,
    State(view): State<Arc<MapView>>,
) -> Response {
    let Some(slot) = view.find_slot(&name) else {
        return (
            StatusCode::NOT_FOUND,
            format!("Overlay not found: '{}'", name),
        )
            .into_response();
    };

    slot.settled().await;
    match slot.overlay() {
        Some(overlay) => Json(overlay.clone()).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            format!("Overlay '{}' has not been loaded", name),
        )
            .into_response(),
    }
}

pub async fn get_legend(State(view): State<Arc<MapView>>) -> Response {
    if view.slot(OverlayKind::Earthquakes).settled().await == LoadStatus::Failed {
        return (StatusCode::NOT_FOUND, "No legend: earthquake feed failed").into_response();
    }
    match view.legend() {
        Some(legend) => Json(legend.control()).into_response(),
        None => (StatusCode::NOT_FOUND, "No legend attached").into_response(),
    }
}
