use super::geometry::{Geometry, lenient_geometry};
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default, deserialize_with = "lenient_geometry")]
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub properties: Option<Map<String, Value>>,
}

impl Feature {
    /// Property lookup that treats JSON `null` the same as an absent key.
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties
            .as_ref()?
            .get(key)
            .filter(|value| !value.is_null())
    }
}
