use super::feature::Feature;
use super::geometry::{Geometry, LatLng, Position};
use serde_json::Value;

/// Shown in popups when a feed omits a value.
pub const UNKNOWN: &str = "unknown";

/// Read-only view of one earthquake feature with a Point geometry.
#[derive(Debug, Clone, Copy)]
pub struct Quake<'a> {
    feature: &'a Feature,
    position: &'a Position,
    lat_lng: LatLng,
}

impl<'a> Quake<'a> {
    pub fn from_feature(feature: &'a Feature) -> Option<Self> {
        let position = match feature.geometry.as_ref()? {
            Geometry::Point { coordinates } => coordinates,
            _ => return None,
        };
        let lat_lng = LatLng::from_position(position)?;
        Some(Quake {
            feature,
            position,
            lat_lng,
        })
    }

    pub fn lat_lng(&self) -> LatLng {
        self.lat_lng
    }

    pub fn magnitude(&self) -> Option<f64> {
        self.feature.property("mag").and_then(Value::as_f64)
    }

    /// Kilometres, taken from the third coordinate. A non-numeric depth
    /// reads the same as a missing one.
    pub fn depth(&self) -> Option<f64> {
        self.position.get(2)
    }

    pub fn place(&self) -> Option<&'a str> {
        self.feature.property("place").and_then(Value::as_str)
    }

    pub fn magnitude_text(&self) -> String {
        display_value(self.feature.property("mag"))
    }

    pub fn place_text(&self) -> String {
        display_value(self.feature.property("place"))
    }

    pub fn depth_text(&self) -> String {
        self.depth()
            .map(|d| d.to_string())
            .unwrap_or_else(|| UNKNOWN.to_string())
    }
}

// Numbers keep the spelling serde_json parsed them with, strings lose their quotes.
fn display_value(value: Option<&Value>) -> String {
    match value {
        None => UNKNOWN.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
