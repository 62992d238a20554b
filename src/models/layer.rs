use super::geometry::LatLng;
use super::style::{MarkerStyle, PathStyle};
use serde::{Serialize, Serializer};

/// Background tile imagery. Exactly one base layer is shown at a time.
#[derive(Debug, Clone, Serialize)]
pub struct BaseLayer {
    pub name: String,
    pub url: String,
    pub attribution: String,
    pub default: bool,
}

impl BaseLayer {
    pub fn new(name: &str, url: &str, attribution: &str, default: bool) -> Self {
        BaseLayer {
            name: name.to_string(),
            url: url.to_string(),
            attribution: attribution.to_string(),
            default,
        }
    }
}

/// Informational popup bound to a marker. Serialized as ready-to-use HTML.
#[derive(Debug, Clone, PartialEq)]
pub struct Popup {
    pub heading: String,
    pub lines: Vec<String>,
}

impl Popup {
    pub fn to_html(&self) -> String {
        let mut html = format!("<h3>{}</h3>", escape_html(&self.heading));
        for line in &self.lines {
            html.push_str(&format!("<p>{}</p>", escape_html(line)));
        }
        html
    }

    /// Plain text, one entry per line.
    pub fn text(&self) -> String {
        std::iter::once(self.heading.as_str())
            .chain(self.lines.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Serialize for Popup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_html())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Shape {
    CircleMarker {
        #[serde(rename = "latLng")]
        lat_lng: LatLng,
        style: MarkerStyle,
        popup: Popup,
    },
    Polyline {
        lines: Vec<Vec<LatLng>>,
        style: PathStyle,
    },
    Polygon {
        polygons: Vec<Vec<Vec<LatLng>>>,
        style: PathStyle,
    },
}

/// A named, independently toggleable group of shapes.
#[derive(Debug, Clone, Serialize)]
pub struct Overlay {
    pub name: String,
    pub shapes: Vec<Shape>,
}

impl Overlay {
    pub fn new(name: &str) -> Self {
        Overlay {
            name: name.to_string(),
            shapes: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn popups(&self) -> impl Iterator<Item = &Popup> {
        self.shapes.iter().filter_map(|shape| match shape {
            Shape::CircleMarker { popup, .. } => Some(popup),
            _ => None,
        })
    }
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn popup() -> Popup {
        Popup {
            heading: "Magnitude: 4.5".to_string(),
            lines: vec![
                "Location: 5 km N of <Town> & Co".to_string(),
                "Depth: 12 km".to_string(),
            ],
        }
    }

    #[test]
    fn test_popup_html_escapes_feed_text() {
        assert_eq!(
            popup().to_html(),
            "<h3>Magnitude: 4.5</h3><p>Location: 5 km N of &lt;Town&gt; &amp; Co</p><p>Depth: 12 km</p>"
        );
    }

    #[test]
    fn test_popup_text_keeps_values_verbatim() {
        assert_eq!(
            popup().text(),
            "Magnitude: 4.5\nLocation: 5 km N of <Town> & Co\nDepth: 12 km"
        );
    }

    #[test]
    fn test_shapes_are_tagged_by_kind() {
        let line = Shape::Polyline {
            lines: vec![vec![LatLng(1.0, 2.0), LatLng(3.0, 4.0)]],
            style: PathStyle {
                color: "#FF5733",
                weight: 2.0,
                opacity: 0.5,
            },
        };
        assert_eq!(
            serde_json::to_value(&line).unwrap(),
            json!({
                "kind": "polyline",
                "lines": [[[1.0, 2.0], [3.0, 4.0]]],
                "style": { "color": "#FF5733", "weight": 2.0, "opacity": 0.5 }
            })
        );
    }
}
