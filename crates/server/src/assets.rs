//! Embedded dashboard assets.
//!
//! The static dashboard is embedded into the binary at compile time so the
//! daemon serves its own UI without external file dependencies, the same
//! way the init templates are embedded in dk-core.

use axum::http::{header, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use rust_embed::RustEmbed;

/// Embedded files from the crate's `dashboard/` directory.
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/dashboard"]
struct DashboardAssets;

/// Serve an embedded asset for any non-API path.
///
/// `/` resolves to `index.html`; unknown paths fall back to it as well so
/// the dashboard owns its own routing.
pub(crate) async fn serve_asset(uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');
    let path = if path.is_empty() { "index.html" } else { path };

    let (resolved, file) = match DashboardAssets::get(path) {
        Some(file) => (path, file),
        None => match DashboardAssets::get("index.html") {
            Some(file) => ("index.html", file),
            None => return (StatusCode::NOT_FOUND, "not found").into_response(),
        },
    };

    let mime = mime_guess::from_path(resolved).first_or_octet_stream();
    (
        [(header::CONTENT_TYPE, mime.as_ref().to_string())],
        file.data.into_owned(),
    )
        .into_response()
}
