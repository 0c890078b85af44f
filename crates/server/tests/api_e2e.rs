//! E2E tests for the dashboard API against a real bound listener.
#![cfg(unix)]

use dk_core::registry::ProjectRegistry;
use dk_core::supervisor::{ProjectSupervisor, SupervisorSettings};
use dk_protocol::api_models::{ErrorResponse, ProjectsResponse};
use dk_protocol::project_models::Project;
use std::sync::Arc;
use std::time::Duration;

fn project(name: &str, cmd: &str) -> Project {
    Project {
        name: name.to_string(),
        cmd: cmd.to_string(),
        path: ".".to_string(),
    }
}

/// Bind an ephemeral port, serve the dashboard on it, and return its base
/// URL plus the shared supervisor.
async fn spawn_server(projects: Vec<Project>) -> (String, Arc<ProjectSupervisor>) {
    let registry = ProjectRegistry::from_projects(projects).expect("valid test catalog");
    let supervisor = Arc::new(ProjectSupervisor::new(
        registry,
        SupervisorSettings {
            grace_period: Duration::from_secs(2),
            kill_ceiling: Duration::from_secs(2),
            log_buffer_lines: 100,
        },
    ));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    let serve_supervisor = Arc::clone(&supervisor);
    tokio::spawn(async move {
        let _ = dk_server::serve(listener, serve_supervisor).await;
    });

    (format!("http://{addr}"), supervisor)
}

#[tokio::test]
async fn test_list_projects_shape_and_order() {
    let (base, _supervisor) = spawn_server(vec![
        project("web", "sleep 100"),
        project("api", "sleep 100"),
    ])
    .await;

    let response: ProjectsResponse = reqwest::get(format!("{base}/api/projects"))
        .await
        .expect("request")
        .json()
        .await
        .expect("json body");

    let names: Vec<&str> = response.projects.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["web", "api"], "registry order is preserved");
    assert!(response.projects.iter().all(|p| !p.running));
}

#[tokio::test]
async fn test_list_empty_registry() {
    let (base, _supervisor) = spawn_server(Vec::new()).await;

    let response: ProjectsResponse = reqwest::get(format!("{base}/api/projects"))
        .await
        .expect("request")
        .json()
        .await
        .expect("json body");

    assert!(response.projects.is_empty());
}

#[tokio::test]
async fn test_start_stop_round_trip_via_api() {
    let (base, _supervisor) = spawn_server(vec![project("web", "sleep 100")]).await;
    let client = reqwest::Client::new();

    let started = client
        .post(format!("{base}/api/projects/start"))
        .json(&serde_json::json!({"name": "web"}))
        .send()
        .await
        .expect("start request");
    assert!(started.status().is_success());

    let listed: ProjectsResponse = reqwest::get(format!("{base}/api/projects"))
        .await
        .expect("request")
        .json()
        .await
        .expect("json body");
    assert!(listed.projects[0].running);

    let stopped = client
        .post(format!("{base}/api/projects/stop"))
        .json(&serde_json::json!({"name": "web"}))
        .send()
        .await
        .expect("stop request");
    assert!(stopped.status().is_success());

    let listed: ProjectsResponse = reqwest::get(format!("{base}/api/projects"))
        .await
        .expect("request")
        .json()
        .await
        .expect("json body");
    assert!(!listed.projects[0].running);
}

#[tokio::test]
async fn test_start_unknown_project_is_404() {
    let (base, _supervisor) = spawn_server(Vec::new()).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/api/projects/start"))
        .json(&serde_json::json!({"name": "missing"}))
        .send()
        .await
        .expect("request");

    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);

    let body: ErrorResponse = response.json().await.expect("error body");
    assert!(body.error.contains("missing"));
}

#[tokio::test]
async fn test_start_without_name_is_400() {
    let (base, _supervisor) = spawn_server(Vec::new()).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/api/projects/start"))
        .json(&serde_json::json!({"name": ""}))
        .send()
        .await
        .expect("request");

    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_idempotent_start_via_api() {
    let (base, supervisor) = spawn_server(vec![project("web", "sleep 100")]).await;
    let client = reqwest::Client::new();

    for _ in 0..2 {
        let response = client
            .post(format!("{base}/api/projects/start"))
            .json(&serde_json::json!({"name": "web"}))
            .send()
            .await
            .expect("request");
        assert!(response.status().is_success(), "restart of a running project is a 200 no-op");
    }

    supervisor.stop("web").await.expect("cleanup");
}

#[tokio::test]
async fn test_crash_is_visible_through_list() {
    let (base, _supervisor) = spawn_server(vec![project("crashy", "false")]).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/api/projects/start"))
        .json(&serde_json::json!({"name": "crashy"}))
        .send()
        .await
        .expect("request");
    assert!(response.status().is_success());

    // The child exits immediately; the next list (after a bounded delay)
    // must reflect the reconciliation without any stop call.
    let mut running = true;
    for _ in 0..40 {
        let listed: ProjectsResponse = reqwest::get(format!("{base}/api/projects"))
            .await
            .expect("request")
            .json()
            .await
            .expect("json body");
        running = listed.projects[0].running;
        if !running {
            break;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    assert!(!running, "self-exit should be reflected by list()");
}

#[tokio::test]
async fn test_health_endpoint() {
    let (base, _supervisor) = spawn_server(vec![project("web", "sleep 100")]).await;

    let response = reqwest::get(format!("{base}/health")).await.expect("request");
    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("json body");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["projects"], 1);
}

#[tokio::test]
async fn test_dashboard_is_served_at_root() {
    let (base, _supervisor) = spawn_server(Vec::new()).await;

    let response = reqwest::get(format!("{base}/")).await.expect("request");
    assert!(response.status().is_success());

    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"));

    let body = response.text().await.expect("body");
    assert!(body.contains("devkit"));
}

#[tokio::test]
async fn test_output_endpoint_unknown_project_is_404() {
    let (base, _supervisor) = spawn_server(Vec::new()).await;

    let response = reqwest::get(format!("{base}/api/projects/missing/output"))
        .await
        .expect("request");
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
}
