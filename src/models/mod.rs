pub mod feature;
pub mod geometry;
pub mod layer;
pub mod quake;
pub mod style;
