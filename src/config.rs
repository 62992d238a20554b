use crate::models::geometry::LatLng;
use crate::models::layer::BaseLayer;

pub const EARTHQUAKE_FEED_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_week.geojson";
pub const PLATES_FEED_URL: &str =
    "https://raw.githubusercontent.com/fraxen/tectonicplates/master/GeoJSON/PB2002_boundaries.json";

pub const EARTHQUAKE_OVERLAY: &str = "Earthquakes";
pub const PLATES_OVERLAY: &str = "Tectonic Plates";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub center: LatLng,
    pub zoom: u8,
    pub earthquake_url: String,
    pub plates_url: String,
    pub base_layers: Vec<BaseLayer>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8000,
            // San Francisco
            center: LatLng(37.7749, -122.4194),
            zoom: 5,
            earthquake_url: EARTHQUAKE_FEED_URL.to_string(),
            plates_url: PLATES_FEED_URL.to_string(),
            base_layers: vec![
                BaseLayer::new(
                    "Street",
                    "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
                    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors",
                    true,
                ),
                BaseLayer::new(
                    "Satellite",
                    "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}",
                    "Tiles &copy; Esri",
                    false,
                ),
            ],
        }
    }
}
