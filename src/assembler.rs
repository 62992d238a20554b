use crate::models::feature::FeatureCollection;
use crate::models::geometry::{Geometry, to_lat_lngs};
use crate::models::layer::{Overlay, Popup, Shape};
use crate::models::quake::Quake;
use crate::utils::style::{PLATE_STYLE, style_for};
use tracing::debug;

/// One circle marker per Point feature, styled by depth and magnitude.
pub fn assemble_earthquakes(name: &str, collection: &FeatureCollection) -> Overlay {
    let mut overlay = Overlay::new(name);
    for feature in &collection.features {
        let Some(quake) = Quake::from_feature(feature) else {
            debug!(id = ?feature.id, "skipping earthquake feature without a usable point position");
            continue;
        };
        overlay.shapes.push(Shape::CircleMarker {
            lat_lng: quake.lat_lng(),
            style: style_for(&quake),
            popup: quake_popup(&quake),
        });
    }
    overlay
}

pub fn quake_popup(quake: &Quake) -> Popup {
    Popup {
        heading: format!("Magnitude: {}", quake.magnitude_text()),
        lines: vec![
            format!("Location: {}", quake.place_text()),
            format!("Depth: {} km", quake.depth_text()),
        ],
    }
}

/// Plate boundaries share one style and carry no popup.
pub fn assemble_plates(name: &str, collection: &FeatureCollection) -> Overlay {
    let mut overlay = Overlay::new(name);
    for feature in &collection.features {
        let shape = match &feature.geometry {
            Some(Geometry::LineString { coordinates }) => Shape::Polyline {
                lines: vec![to_lat_lngs(coordinates)],
                style: PLATE_STYLE,
            },
            Some(Geometry::MultiLineString { coordinates }) => Shape::Polyline {
                lines: coordinates.iter().map(|line| to_lat_lngs(line)).collect(),
                style: PLATE_STYLE,
            },
            Some(Geometry::Polygon { coordinates }) => Shape::Polygon {
                polygons: vec![coordinates.iter().map(|ring| to_lat_lngs(ring)).collect()],
                style: PLATE_STYLE,
            },
            Some(Geometry::MultiPolygon { coordinates }) => Shape::Polygon {
                polygons: coordinates
                    .iter()
                    .map(|polygon| polygon.iter().map(|ring| to_lat_lngs(ring)).collect())
                    .collect(),
                style: PLATE_STYLE,
            },
            _ => {
                debug!(id = ?feature.id, "skipping plate feature without a line or polygon geometry");
                continue;
            }
        };
        overlay.shapes.push(shape);
    }
    overlay
}
