use serde::Serialize;

/// One contiguous depth range and the fill colour used for it.
/// `upper` is inclusive; `None` means the bin is unbounded above.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthBin {
    pub lower: f64,
    pub upper: Option<f64>,
    pub colour: &'static str,
}

impl DepthBin {
    /// Human readable range, e.g. `10–30` or `50+`.
    pub fn label(&self) -> String {
        match self.upper {
            Some(upper) => format!("{}\u{2013}{}", self.lower, upper),
            None => format!("{}+", self.lower),
        }
    }
}

/// Circle marker options, named the way Leaflet reads them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerStyle {
    pub radius: f64,
    pub fill_color: &'static str,
    #[serde(rename = "color")]
    pub stroke_color: &'static str,
    #[serde(rename = "weight")]
    pub stroke_weight: f64,
    pub opacity: f64,
    pub fill_opacity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathStyle {
    pub color: &'static str,
    pub weight: f64,
    pub opacity: f64,
}
