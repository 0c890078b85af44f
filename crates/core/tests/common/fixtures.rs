//! Test fixtures for supervisor integration tests.

use dk_core::registry::ProjectRegistry;
use dk_core::supervisor::{ProjectSupervisor, SupervisorSettings};
use dk_protocol::project_models::Project;
use dk_protocol::state_models::Lifecycle;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Build a project entry running in the current directory.
pub fn project(name: &str, cmd: &str) -> Project {
    Project {
        name: name.to_string(),
        cmd: cmd.to_string(),
        path: ".".to_string(),
    }
}

/// Build a supervisor with stop timings tightened for tests.
pub fn test_supervisor(projects: Vec<Project>) -> ProjectSupervisor {
    let registry = ProjectRegistry::from_projects(projects).expect("valid test catalog");
    ProjectSupervisor::new(
        registry,
        SupervisorSettings {
            grace_period: Duration::from_secs(2),
            kill_ceiling: Duration::from_secs(2),
            log_buffer_lines: 100,
        },
    )
}

/// Write an executable shell script into `dir` and return its path.
#[cfg(unix)]
pub fn write_script(dir: &Path, name: &str, content: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, content).expect("Failed to write test script");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
        .expect("Failed to chmod test script");
    path
}

/// Poll `status()` until the project reaches `expected` or the timeout
/// elapses. Returns whether the state was reached.
pub async fn wait_for_lifecycle(
    supervisor: &ProjectSupervisor,
    name: &str,
    expected: Lifecycle,
    timeout: Duration,
) -> bool {
    let start = tokio::time::Instant::now();

    while start.elapsed() < timeout {
        let status = supervisor.status(name).await.expect("project should exist");
        if status.lifecycle == expected {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(25)).await;
    }

    false
}
