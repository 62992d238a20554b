use clap::Parser;
use quakemap::{Config, MapServer};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Map recent earthquakes and tectonic plate boundaries.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Port to serve the map on
    #[arg(long, default_value_t = Config::default().port)]
    port: u16,

    /// GeoJSON feed of earthquake points
    #[arg(long)]
    earthquake_url: Option<String>,

    /// GeoJSON feed of plate boundary lines
    #[arg(long)]
    plates_url: Option<String>,

    /// Write the map to this HTML file and exit instead of serving it
    #[arg(long, short)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let defaults = Config::default();
    let config = Config {
        port: args.port,
        earthquake_url: args.earthquake_url.unwrap_or(defaults.earthquake_url),
        plates_url: args.plates_url.unwrap_or(defaults.plates_url),
        ..defaults
    };

    let server = MapServer::new(config)?;
    match args.output {
        Some(path) => server.export(&path).await,
        None => server.start().await,
    }
}
