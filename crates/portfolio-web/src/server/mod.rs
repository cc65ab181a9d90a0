//! Static host — serves the built frontend bundle.

use std::path::Path;

use axum::http::StatusCode;
use axum::Router;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::warn;

/// Router over `dist`: files as-is, everything else falls back to
/// `index.html` so client-side paths still load the page.
pub fn router(dist: &Path) -> Router {
    let app = if dist.is_dir() {
        let index_html = dist.join("index.html");
        Router::new().fallback_service(
            ServeDir::new(dist).not_found_service(ServeFile::new(index_html)),
        )
    } else {
        warn!(
            "Frontend bundle not found at {}; run `dx build --release` in crates/portfolio-web/frontend",
            dist.display()
        );
        Router::new().fallback(|| async { (StatusCode::SERVICE_UNAVAILABLE, "frontend not built") })
    };

    app.layer(TraceLayer::new_for_http())
}
