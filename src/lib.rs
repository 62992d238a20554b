pub mod assembler;
pub mod config;
pub mod endpoints;
pub mod legend;
pub mod loader;
mod map;
pub mod models;
pub mod reader;
pub mod server;
pub mod traits;
pub mod utils;
pub mod view;

pub use config::Config;
pub use map::render_page;
pub use server::MapServer;
pub use view::MapView;
