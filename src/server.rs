use crate::config::Config;
use crate::endpoints::handlers::{get_all_layers, get_legend, get_overlay, webmap_handler};
use crate::loader::load_overlays;
use crate::map::render_page;
use crate::reader::http::HttpFeedReader;
use crate::traits::FeedReader;
use crate::utils::status::print_overlay_summary;
use crate::view::MapView;
use anyhow::Context;
use axum::{Router, routing::get};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

pub struct MapServer {
    config: Config,
    view: Arc<MapView>,
    reader: Arc<dyn FeedReader>,
}

impl MapServer {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let reader = HttpFeedReader::new().context("Failed to build the HTTP client")?;
        Ok(Self::with_reader(config, Arc::new(reader)))
    }

    pub fn with_reader(config: Config, reader: Arc<dyn FeedReader>) -> Self {
        let view = Arc::new(MapView::new(&config));
        Self {
            config,
            view,
            reader,
        }
    }

    pub fn view(&self) -> Arc<MapView> {
        self.view.clone()
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/", get(webmap_handler))
            .route("/map", get(webmap_handler))
            .route("/layers", get(get_all_layers))
            .route("/overlays/{name}", get(get_overlay))
            .route("/legend", get(get_legend))
            .layer(TraceLayer::new_for_http())
            .with_state(self.view.clone())
    }

    /// Serve the map straight away; overlays appear as their feeds arrive.
    pub async fn start(self) -> anyhow::Result<()> {
        let app = self.router();
        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.port));
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;

        let view = self.view.clone();
        let reader = self.reader.clone();
        let config = self.config.clone();
        tokio::spawn(async move {
            load_overlays(&view, reader.as_ref(), &config).await;
            print_overlay_summary(&view);
        });

        println!(
            r#"
    🚀 quakemap serving on {}

    🌍 Earthquakes and tectonic plates
       → http://{}/map

    📚 Overlay status (JSON)
       → http://{}/layers
            "#,
            addr, addr, addr
        );

        axum::serve(listener, app).await?;

        Ok(())
    }

    /// Load both feeds, then write the page as a static file.
    pub async fn export(self, path: &Path) -> anyhow::Result<()> {
        load_overlays(&self.view, self.reader.as_ref(), &self.config).await;
        let html = render_page(&self.view)?;
        tokio::fs::write(path, html)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;

        print_overlay_summary(&self.view);
        info!(path = %path.display(), "map written");
        Ok(())
    }
}
