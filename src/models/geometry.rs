use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A position in the order Leaflet expects it, serialized as `[lat, lng]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLng(pub f64, pub f64);

impl LatLng {
    /// GeoJSON positions are `[lon, lat]` with an optional third element.
    pub fn from_position(position: &Position) -> Option<Self> {
        Some(LatLng(position.get(1)?, position.get(0)?))
    }

    pub fn lat(&self) -> f64 {
        self.0
    }

    pub fn lng(&self) -> f64 {
        self.1
    }
}

/// A GeoJSON position read element by element. Anything that is not a
/// number becomes `None`, so a bad coordinate stays local to its feature.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Position(pub Vec<Option<f64>>);

impl Position {
    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied().flatten()
    }
}

impl From<Vec<f64>> for Position {
    fn from(values: Vec<f64>) -> Self {
        Position(values.into_iter().map(Some).collect())
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = match Value::deserialize(deserializer)? {
            Value::Array(values) => values.iter().map(Value::as_f64).collect(),
            _ => Vec::new(),
        };
        Ok(Position(values))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point {
        #[serde(default)]
        coordinates: Position,
    },
    MultiPoint {
        coordinates: Vec<Position>,
    },
    LineString {
        coordinates: Vec<Position>,
    },
    MultiLineString {
        coordinates: Vec<Vec<Position>>,
    },
    Polygon {
        coordinates: Vec<Vec<Position>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<Position>>>,
    },
    // GeometryCollection and anything else we do not draw
    #[serde(other)]
    Unsupported,
}

/// Geometry that cannot be read at all is treated as absent, leaving the
/// rest of the document intact.
pub fn lenient_geometry<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Geometry>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

/// Convert a GeoJSON ring or line string, dropping malformed positions.
pub fn to_lat_lngs(positions: &[Position]) -> Vec<LatLng> {
    positions.iter().filter_map(LatLng::from_position).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_position_is_swapped_to_lat_lng() {
        let ll = LatLng::from_position(&vec![-122.4, 37.7, 8.2].into()).unwrap();
        assert_eq!(ll.lat(), 37.7);
        assert_eq!(ll.lng(), -122.4);
        assert!(LatLng::from_position(&vec![1.0].into()).is_none());
    }

    #[test]
    fn test_position_tolerates_non_numbers() {
        let position: Position = serde_json::from_value(json!([1.5, 2, null])).unwrap();
        assert_eq!(position.get(0), Some(1.5));
        assert_eq!(position.get(1), Some(2.0));
        assert_eq!(position.get(2), None);

        let position: Position = serde_json::from_value(json!(["east", 2.0])).unwrap();
        assert!(LatLng::from_position(&position).is_none());

        let position: Position = serde_json::from_value(json!(null)).unwrap();
        assert_eq!(position, Position::default());
    }

    #[test]
    fn test_lat_lng_serializes_as_pair() {
        let value = serde_json::to_value(LatLng(10.0, 20.5)).unwrap();
        assert_eq!(value, json!([10.0, 20.5]));
    }

    #[test]
    fn test_unknown_geometry_type_is_unsupported() {
        let geometry: Geometry = serde_json::from_value(json!({
            "type": "GeometryCollection",
            "geometries": []
        }))
        .unwrap();
        assert!(matches!(geometry, Geometry::Unsupported));
    }

    #[test]
    fn test_line_string_keeps_well_formed_positions() {
        let line = to_lat_lngs(&[
            vec![0.0, 1.0].into(),
            vec![2.0].into(),
            vec![3.0, 4.0].into(),
        ]);
        assert_eq!(line, vec![LatLng(1.0, 0.0), LatLng(4.0, 3.0)]);
    }
}
