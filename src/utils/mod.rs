pub mod status;
pub mod style;
