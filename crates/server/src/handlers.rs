//! HTTP handlers mapping the API contract onto the supervisor.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use dk_core::supervisor::{ProjectSupervisor, SupervisorError};
use dk_protocol::api_models::{
    ErrorResponse, MessageResponse, OutputResponse, ProjectActionRequest, ProjectView,
    ProjectsResponse,
};
use serde::Serialize;
use std::sync::Arc;

type ApiError = (StatusCode, Json<ErrorResponse>);

fn error_response(error: SupervisorError) -> ApiError {
    let status = match &error {
        SupervisorError::UnknownProject { .. } => StatusCode::NOT_FOUND,
        SupervisorError::StopPending { .. } => StatusCode::CONFLICT,
        SupervisorError::SpawnFailed { .. } | SupervisorError::StopTimeout { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
}

fn require_name(request: &ProjectActionRequest) -> Result<&str, ApiError> {
    if request.name.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Name is required".to_string(),
            }),
        ));
    }
    Ok(&request.name)
}

#[derive(Serialize)]
pub(crate) struct HealthResponse {
    status: &'static str,
    version: &'static str,
    projects: usize,
}

pub(crate) async fn health(
    State(supervisor): State<Arc<ProjectSupervisor>>,
) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        projects: supervisor.list().await.len(),
    })
}

/// `GET /api/projects` — the dashboard table, in registry order.
pub(crate) async fn list_projects(
    State(supervisor): State<Arc<ProjectSupervisor>>,
) -> Json<ProjectsResponse> {
    let projects = supervisor
        .list()
        .await
        .iter()
        .map(ProjectView::from)
        .collect();

    Json(ProjectsResponse { projects })
}

/// `POST /api/projects/start`.
pub(crate) async fn start_project(
    State(supervisor): State<Arc<ProjectSupervisor>>,
    Json(request): Json<ProjectActionRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let name = require_name(&request)?;

    supervisor.start(name).await.map_err(error_response)?;

    Ok(Json(MessageResponse {
        message: "Project started".to_string(),
    }))
}

/// `POST /api/projects/stop`.
pub(crate) async fn stop_project(
    State(supervisor): State<Arc<ProjectSupervisor>>,
    Json(request): Json<ProjectActionRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let name = require_name(&request)?;

    supervisor.stop(name).await.map_err(error_response)?;

    Ok(Json(MessageResponse {
        message: "Project stopped".to_string(),
    }))
}

/// `GET /api/projects/{name}/output` — retained output tail.
pub(crate) async fn project_output(
    State(supervisor): State<Arc<ProjectSupervisor>>,
    Path(name): Path<String>,
) -> Result<Json<OutputResponse>, ApiError> {
    let lines = supervisor.output(&name).await.map_err(error_response)?;
    Ok(Json(OutputResponse { lines }))
}
