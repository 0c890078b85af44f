//! # dk-server
//!
//! Dashboard HTTP server for devkit.
//!
//! A thin axum layer over [`dk_core::supervisor::ProjectSupervisor`]: it
//! translates HTTP requests into supervisor calls and supervisor state into
//! the JSON shape the web client expects. All lifecycle logic lives in the
//! core; this crate only maps errors to status codes and serves the
//! embedded dashboard assets.

mod assets;
mod handlers;

use dk_core::supervisor::ProjectSupervisor;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;

/// Build the dashboard router over a shared supervisor.
pub fn router(supervisor: Arc<ProjectSupervisor>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/projects", get(handlers::list_projects))
        .route("/api/projects/start", post(handlers::start_project))
        .route("/api/projects/stop", post(handlers::stop_project))
        .route("/api/projects/{name}/output", get(handlers::project_output))
        .fallback(assets::serve_asset)
        .with_state(supervisor)
}

/// Serve the dashboard until ctrl-c, then stop all supervised children.
///
/// # Errors
///
/// Returns the underlying I/O error if the server fails while running.
pub async fn serve(
    listener: TcpListener,
    supervisor: Arc<ProjectSupervisor>,
) -> std::io::Result<()> {
    let app = router(Arc::clone(&supervisor));

    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "dashboard listening");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;

    tracing::info!("shutting down, stopping supervised projects");
    supervisor.shutdown().await;
    Ok(())
}
