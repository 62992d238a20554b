use crate::models::layer::escape_html;
use crate::utils::style::DEPTH_BINS;
use serde::Serialize;

/// Map corner the legend is anchored to.
pub const LEGEND_POSITION: &str = "bottomright";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub colour: &'static str,
    pub label: String,
}

/// Static key from depth bin colours to depth ranges.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub position: &'static str,
    pub entries: Vec<LegendEntry>,
}

/// What the page script needs to place the legend on the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendControl {
    pub position: &'static str,
    pub html: String,
}

/// The bins are configuration, so the legend never depends on the data.
pub fn build_legend() -> Legend {
    Legend {
        position: LEGEND_POSITION,
        entries: DEPTH_BINS
            .iter()
            .map(|bin| LegendEntry {
                colour: bin.colour,
                label: bin.label(),
            })
            .collect(),
    }
}

impl Legend {
    /// Inner HTML of the `info legend` control.
    pub fn to_html(&self) -> String {
        let mut html = String::from("<h4>Depth (km)</h4>");
        for entry in &self.entries {
            html.push_str(&format!(
                r#"<i style="background: {}"></i> {}<br>"#,
                entry.colour,
                escape_html(&entry.label)
            ));
        }
        html
    }

    pub fn control(&self) -> LegendControl {
        LegendControl {
            position: self.position,
            html: self.to_html(),
        }
    }
}
