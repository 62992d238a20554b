use crate::models::quake::Quake;
use crate::models::style::{DepthBin, MarkerStyle, PathStyle};
use colorgrad::Color;

/// Depth bins in ascending order. Upper bounds are inclusive and the last
/// bin is open, so every depth lands in exactly one bin.
pub const DEPTH_BINS: [DepthBin; 4] = [
    DepthBin {
        lower: 0.0,
        upper: Some(10.0),
        colour: "#00FF00",
    },
    DepthBin {
        lower: 10.0,
        upper: Some(30.0),
        colour: "#FFFF00",
    },
    DepthBin {
        lower: 30.0,
        upper: Some(50.0),
        colour: "#FFA500",
    },
    DepthBin {
        lower: 50.0,
        upper: None,
        colour: "#FF0000",
    },
];

pub const MIN_RADIUS: f64 = 1.0;
pub const RADIUS_SCALE: f64 = 4.0;

pub const MARKER_STROKE_COLOUR: &str = "#000000";
pub const MARKER_STROKE_WEIGHT: f64 = 0.5;
pub const MARKER_OPACITY: f64 = 1.0;
pub const MARKER_FILL_OPACITY: f64 = 0.7;

pub const PLATE_STYLE: PathStyle = PathStyle {
    color: "#FF5733",
    weight: 2.0,
    opacity: 0.5,
};

/// Index into `DEPTH_BINS`. Negative depths share bin 0 with shallow ones;
/// NaN fails every comparison and falls through to the last bin.
pub fn depth_bin(depth: f64) -> usize {
    DEPTH_BINS
        .iter()
        .position(|bin| bin.upper.is_some_and(|upper| depth <= upper))
        .unwrap_or(DEPTH_BINS.len() - 1)
}

pub fn depth_colour(depth: f64) -> &'static str {
    DEPTH_BINS[depth_bin(depth)].colour
}

/// Zero keeps a visible minimum, everything else scales linearly.
/// Negative and non-finite magnitudes are clamped to the minimum.
pub fn magnitude_radius(magnitude: f64) -> f64 {
    if magnitude == 0.0 || !magnitude.is_finite() || magnitude < 0.0 {
        return MIN_RADIUS;
    }
    magnitude * RADIUS_SCALE
}

pub fn style_for(quake: &Quake) -> MarkerStyle {
    MarkerStyle {
        radius: quake.magnitude().map_or(MIN_RADIUS, magnitude_radius),
        fill_color: depth_colour(quake.depth().unwrap_or(f64::NAN)),
        stroke_color: MARKER_STROKE_COLOUR,
        stroke_weight: MARKER_STROKE_WEIGHT,
        opacity: MARKER_OPACITY,
        fill_opacity: MARKER_FILL_OPACITY,
    }
}

/// RGBA for a bin colour, used to draw terminal swatches.
pub fn colour_rgba8(colour: &str) -> Option<[u8; 4]> {
    Color::from_html(colour).ok().map(|c| c.to_rgba8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::feature::Feature;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use serde_json::json;

    fn feature(mag: serde_json::Value, depth: f64) -> Feature {
        serde_json::from_value(json!({
            "type": "Feature",
            "properties": { "mag": mag, "place": "Test" },
            "geometry": { "type": "Point", "coordinates": [-120.0, 36.0, depth] }
        }))
        .unwrap()
    }

    #[test]
    fn test_bin_boundaries_are_inclusive() {
        assert_eq!(depth_colour(10.0), "#00FF00");
        assert_eq!(depth_colour(10.0001), "#FFFF00");
        assert_eq!(depth_colour(30.0), "#FFFF00");
        assert_eq!(depth_colour(30.5), "#FFA500");
        assert_eq!(depth_colour(50.0), "#FFA500");
        assert_eq!(depth_colour(50.0001), "#FF0000");
        assert_eq!(depth_colour(700.0), "#FF0000");
    }

    #[test]
    fn test_negative_depth_is_shallowest_bin() {
        assert_eq!(depth_bin(-3.2), 0);
        assert_eq!(depth_bin(f64::NEG_INFINITY), 0);
    }

    #[test]
    fn test_nan_depth_is_deepest_bin() {
        assert_eq!(depth_bin(f64::NAN), 3);
    }

    // Random depths across a wide range, sorted, must never step down a bin.
    #[test]
    fn test_random_depths_are_monotonic() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut depths: Vec<f64> = (0..1_000).map(|_| rng.random_range(-20.0..700.0)).collect();
        depths.sort_by(|a, b| a.partial_cmp(b).unwrap());

        let bins: Vec<usize> = depths.iter().map(|&d| depth_bin(d)).collect();
        assert!(bins.windows(2).all(|w| w[0] <= w[1]));
        assert!(bins.iter().all(|&b| b < DEPTH_BINS.len()));
    }

    #[test]
    fn test_bins_are_contiguous() {
        for pair in DEPTH_BINS.windows(2) {
            assert_eq!(pair[0].upper, Some(pair[1].lower));
        }
        assert!(DEPTH_BINS.last().unwrap().upper.is_none());
    }

    #[test]
    fn test_radius() {
        assert_eq!(magnitude_radius(0.0), 1.0);
        assert_eq!(magnitude_radius(5.0), 20.0);
        assert_eq!(magnitude_radius(6.2), 24.8);
        assert_eq!(magnitude_radius(0.1), 0.4);
    }

    #[test]
    fn test_negative_magnitude_is_clamped() {
        assert_eq!(magnitude_radius(-0.8), MIN_RADIUS);
        assert_eq!(magnitude_radius(f64::NAN), MIN_RADIUS);
    }

    #[test]
    fn test_zero_magnitude_shallow_quake() {
        let f = feature(json!(0), 5.0);
        let style = style_for(&Quake::from_feature(&f).unwrap());
        assert_eq!(style.radius, 1.0);
        assert_eq!(style.fill_color, "#00FF00");
        assert_eq!(style.stroke_color, "#000000");
        assert_eq!(style.stroke_weight, 0.5);
        assert_eq!(style.opacity, 1.0);
        assert_eq!(style.fill_opacity, 0.7);
    }

    #[test]
    fn test_offshore_quake() {
        let f = feature(json!(6.2), 45.0);
        let style = style_for(&Quake::from_feature(&f).unwrap());
        assert_eq!(style.radius, 24.8);
        assert_eq!(style.fill_color, "#FFA500");
    }

    #[test]
    fn test_missing_values_style() {
        let f: Feature = serde_json::from_value(json!({
            "properties": {},
            "geometry": { "type": "Point", "coordinates": [0.0, 0.0] }
        }))
        .unwrap();
        let style = style_for(&Quake::from_feature(&f).unwrap());
        assert_eq!(style.radius, MIN_RADIUS);
        assert_eq!(style.fill_color, "#FF0000");
    }

    #[test]
    fn test_bin_colours_parse() {
        assert_eq!(colour_rgba8("#FFA500"), Some([255, 165, 0, 255]));
        assert!(DEPTH_BINS.iter().all(|b| colour_rgba8(b.colour).is_some()));
    }
}
