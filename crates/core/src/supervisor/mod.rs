//! The project process supervisor.
//!
//! The [`ProjectSupervisor`] is the stateful core of devkit: it maps each
//! registered project name to a lifecycle state machine plus, when alive,
//! the handle of its child process. All mutation happens under a per-project
//! lock, so same-name operations are totally ordered while different
//! projects proceed independently.
//!
//! Exit reconciliation runs as one background watcher task per spawned
//! child: when the child terminates for any reason the watcher posts the
//! `Stopped` transition under the same per-project lock, which is what keeps
//! `list()` truthful without polling. A stop request that confirms the exit
//! first wins the lock; the watcher then observes a stale generation and
//! does nothing.

pub mod error;
pub mod handle;
mod state;

pub use error::{SupervisorError, SupervisorResult};
pub use handle::ProcessHandle;

use crate::registry::ProjectRegistry;
use crate::supervisor::state::ProjectState;
use chrono::Utc;
use dk_protocol::config_models::GlobalConfig;
use dk_protocol::project_models::Project;
use dk_protocol::state_models::{ExitInfo, Lifecycle, ProjectStatus};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::process::Child;
use tokio::sync::{watch, Mutex};

/// Tunable supervisor behavior, derived from `config.toml`.
#[derive(Debug, Clone)]
pub struct SupervisorSettings {
    /// How long a stop waits after the graceful signal before escalating.
    pub grace_period: Duration,

    /// How long a stop waits after the forceful kill before giving up and
    /// reporting a timeout.
    pub kill_ceiling: Duration,

    /// Captured output lines retained per project (0 discards output).
    pub log_buffer_lines: usize,
}

impl SupervisorSettings {
    pub fn from_config(config: &GlobalConfig) -> Self {
        Self {
            grace_period: Duration::from_secs(config.grace_period_secs),
            kill_ceiling: Duration::from_secs(config.kill_ceiling_secs),
            log_buffer_lines: config.log_buffer_lines,
        }
    }
}

impl Default for SupervisorSettings {
    fn default() -> Self {
        Self::from_config(&GlobalConfig::default())
    }
}

/// One registered project plus its exclusively-owned dynamic state.
struct ProjectEntry {
    project: Project,
    state: Mutex<ProjectState>,
}

/// Supervises the child processes of all registered projects.
///
/// Created once from a loaded [`ProjectRegistry`]; the project set is fixed
/// for the supervisor's lifetime. Cheap to share behind an `Arc`.
pub struct ProjectSupervisor {
    /// Entries in registry declaration order.
    entries: Vec<Arc<ProjectEntry>>,
    index: HashMap<String, usize>,
    settings: SupervisorSettings,
}

impl ProjectSupervisor {
    /// Build a supervisor over the given registry. Every project starts
    /// `Stopped`.
    pub fn new(registry: ProjectRegistry, settings: SupervisorSettings) -> Self {
        let entries: Vec<Arc<ProjectEntry>> = registry
            .projects()
            .iter()
            .cloned()
            .map(|project| {
                Arc::new(ProjectEntry {
                    project,
                    state: Mutex::new(ProjectState::new()),
                })
            })
            .collect();

        let index = entries
            .iter()
            .enumerate()
            .map(|(position, entry)| (entry.project.name.clone(), position))
            .collect();

        Self {
            entries,
            index,
            settings,
        }
    }

    fn entry(&self, name: &str) -> SupervisorResult<&Arc<ProjectEntry>> {
        self.index
            .get(name)
            .map(|&position| &self.entries[position])
            .ok_or_else(|| SupervisorError::UnknownProject {
                name: name.to_string(),
            })
    }

    /// Start a project's process.
    ///
    /// Idempotent: starting a project that is already `Running` or
    /// `Starting` is a no-op success and never spawns a second child.
    ///
    /// # Errors
    ///
    /// - `UnknownProject` if the name is not registered
    /// - `StopPending` if an earlier stop is still unconfirmed
    /// - `SpawnFailed` if the OS rejects the launch; the project returns to
    ///   `Stopped`
    pub async fn start(&self, name: &str) -> SupervisorResult<()> {
        let entry = self.entry(name)?;
        let mut state = entry.state.lock().await;

        match state.lifecycle() {
            Lifecycle::Running | Lifecycle::Starting => return Ok(()),
            Lifecycle::Stopping => {
                return Err(SupervisorError::StopPending {
                    name: name.to_string(),
                })
            }
            Lifecycle::Stopped => {}
        }

        // Starting is recorded before the spawn call and the per-project
        // lock is held across it, so a racing start can never observe
        // Stopped and double-spawn.
        let generation = state.begin_start();

        let spawned = match handle::spawn_project(&entry.project, self.settings.log_buffer_lines) {
            Ok(spawned) => spawned,
            Err(source) => {
                state.abort_start();
                tracing::warn!(project = %name, error = %source, "spawn failed");
                return Err(SupervisorError::SpawnFailed {
                    name: name.to_string(),
                    source,
                });
            }
        };

        let pid = spawned.handle.pid();
        state.confirm_running(spawned.handle);
        tokio::spawn(watch_child(
            Arc::clone(entry),
            generation,
            spawned.child,
            spawned.exit_tx,
        ));

        tracing::info!(project = %name, pid, "project started");
        Ok(())
    }

    /// Stop a project's process.
    ///
    /// Idempotent: stopping a `Stopped` project is a no-op success. Sends
    /// the graceful signal, waits up to the grace period, escalates to a
    /// forceful kill, and waits up to the kill ceiling for confirmation.
    ///
    /// # Errors
    ///
    /// - `UnknownProject` if the name is not registered
    /// - `StopTimeout` if the exit is never confirmed; the project stays
    ///   `Stopping` and is resolved by a later reconciliation or retry
    pub async fn stop(&self, name: &str) -> SupervisorResult<()> {
        let entry = self.entry(name)?;
        let mut state = entry.state.lock().await;

        if state.lifecycle() == Lifecycle::Stopped {
            return Ok(());
        }

        let handle_info = state
            .handle()
            .map(|handle| (handle.pid(), handle.subscribe_exit()));
        let Some((pid, mut exit_rx)) = handle_info else {
            // No child to signal (reconciliation already cleared it).
            state.confirm_stopped(None);
            return Ok(());
        };

        state.begin_stop();
        tracing::info!(project = %name, pid, "stopping project");
        handle::signal_group(pid, true);

        let mut exit = wait_for_exit(&mut exit_rx, self.settings.grace_period).await;
        if exit.is_none() {
            tracing::warn!(project = %name, pid, "grace period elapsed, sending forceful kill");
            handle::signal_group(pid, false);
            exit = wait_for_exit(&mut exit_rx, self.settings.kill_ceiling).await;
        }

        match exit {
            Some(info) => {
                state.confirm_stopped(Some(info));
                tracing::info!(project = %name, pid, "project stopped");
                Ok(())
            }
            None => {
                // Never report Stopped on a guess. The watcher will post the
                // transition once the exit is actually observed.
                tracing::error!(project = %name, pid, "exit not confirmed within stop ceiling");
                Err(SupervisorError::StopTimeout {
                    name: name.to_string(),
                })
            }
        }
    }

    /// Read-only snapshot of one project.
    ///
    /// Never blocks on the child process; reflects reconciliations already
    /// processed.
    pub async fn status(&self, name: &str) -> SupervisorResult<ProjectStatus> {
        let entry = self.entry(name)?;
        let state = entry.state.lock().await;
        Ok(snapshot(&entry.project, &state))
    }

    /// Read-only snapshot of all projects, in registry declaration order.
    ///
    /// An empty registry yields an empty vec, never an error.
    pub async fn list(&self) -> Vec<ProjectStatus> {
        let mut statuses = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            let state = entry.state.lock().await;
            statuses.push(snapshot(&entry.project, &state));
        }
        statuses
    }

    /// Retained output tail of a project's current or most recent child.
    pub async fn output(&self, name: &str) -> SupervisorResult<Vec<String>> {
        let entry = self.entry(name)?;
        let state = entry.state.lock().await;
        Ok(state.output_snapshot())
    }

    /// Stop every project that is not already `Stopped`.
    ///
    /// Called on daemon shutdown; failures are logged, not propagated, so
    /// one stuck child cannot block the rest.
    pub async fn shutdown(&self) {
        for entry in &self.entries {
            let name = entry.project.name.as_str();
            if let Err(error) = self.stop(name).await {
                tracing::warn!(project = %name, %error, "failed to stop project during shutdown");
            }
        }
    }
}

fn snapshot(project: &Project, state: &ProjectState) -> ProjectStatus {
    ProjectStatus {
        name: project.name.clone(),
        cmd: project.cmd.clone(),
        path: project.path.clone(),
        lifecycle: state.lifecycle(),
        pid: state.handle().map(ProcessHandle::pid),
        last_exit: state.last_exit(),
    }
}

async fn wait_for_exit(
    exit_rx: &mut watch::Receiver<Option<ExitInfo>>,
    limit: Duration,
) -> Option<ExitInfo> {
    match tokio::time::timeout(limit, exit_rx.wait_for(|exit| exit.is_some())).await {
        Ok(Ok(exit)) => *exit,
        // Sender dropped without publishing, or the limit elapsed.
        Ok(Err(_)) | Err(_) => None,
    }
}

/// Background watcher for one spawned child.
///
/// Publishes the exit on the single-fire channel first (so an in-flight
/// stop holding the project lock can confirm), then reconciles the state if
/// nothing else already has.
async fn watch_child(
    entry: Arc<ProjectEntry>,
    generation: u64,
    mut child: Child,
    exit_tx: watch::Sender<Option<ExitInfo>>,
) {
    let info = match child.wait().await {
        Ok(status) => handle::exit_info(&status),
        Err(error) => {
            tracing::warn!(project = %entry.project.name, %error, "failed to await child exit");
            ExitInfo {
                code: None,
                signal: None,
                at: Utc::now(),
            }
        }
    };

    let _ = exit_tx.send(Some(info));

    let mut state = entry.state.lock().await;
    if state.generation() != generation || state.handle().is_none() {
        // A stop already confirmed this exit, or a newer child exists.
        return;
    }

    match state.lifecycle() {
        Lifecycle::Stopping => {
            tracing::info!(project = %entry.project.name, "late stop confirmed by reconciliation")
        }
        _ => tracing::info!(
            project = %entry.project.name,
            code = ?info.code,
            signal = ?info.signal,
            "child exited on its own"
        ),
    }
    state.confirm_stopped(Some(info));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn supervisor(projects: Vec<Project>) -> ProjectSupervisor {
        let registry = ProjectRegistry::from_projects(projects).expect("valid catalog");
        ProjectSupervisor::new(registry, SupervisorSettings::default())
    }

    fn project(name: &str, cmd: &str) -> Project {
        Project {
            name: name.to_string(),
            cmd: cmd.to_string(),
            path: ".".to_string(),
        }
    }

    #[tokio::test]
    async fn test_list_empty_registry() {
        let supervisor = supervisor(Vec::new());
        assert!(supervisor.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_project() {
        let supervisor = supervisor(Vec::new());

        let start = supervisor.start("missing").await;
        assert!(matches!(
            start,
            Err(SupervisorError::UnknownProject { ref name }) if name == "missing"
        ));

        let stop = supervisor.stop("missing").await;
        assert!(matches!(stop, Err(SupervisorError::UnknownProject { .. })));

        let status = supervisor.status("missing").await;
        assert!(matches!(status, Err(SupervisorError::UnknownProject { .. })));
    }

    #[tokio::test]
    async fn test_stop_stopped_project_is_noop() {
        let supervisor = supervisor(vec![project("web", "sleep 100")]);

        supervisor.stop("web").await.expect("stop on Stopped is a no-op success");

        let status = supervisor.status("web").await.expect("status");
        assert_eq!(status.lifecycle, Lifecycle::Stopped);
        assert!(status.pid.is_none());
    }

    #[tokio::test]
    async fn test_list_preserves_registry_order() {
        let supervisor = supervisor(vec![
            project("web", "sleep 100"),
            project("api", "sleep 100"),
            project("db", "sleep 100"),
        ]);

        let names: Vec<String> = supervisor
            .list()
            .await
            .into_iter()
            .map(|status| status.name)
            .collect();
        assert_eq!(names, vec!["web", "api", "db"]);
    }

    #[tokio::test]
    async fn test_spawn_failure_returns_to_stopped() {
        let supervisor = supervisor(vec![project("bad", "no-such-binary-devkit-test")]);

        let result = supervisor.start("bad").await;
        assert!(matches!(result, Err(SupervisorError::SpawnFailed { .. })));

        let status = supervisor.status("bad").await.expect("status");
        assert_eq!(status.lifecycle, Lifecycle::Stopped);
        assert!(status.pid.is_none());
    }

    #[tokio::test]
    async fn test_empty_command_is_spawn_failure() {
        let supervisor = supervisor(vec![project("empty", "")]);

        let result = supervisor.start("empty").await;
        assert!(matches!(result, Err(SupervisorError::SpawnFailed { .. })));

        let status = supervisor.status("empty").await.expect("status");
        assert_eq!(status.lifecycle, Lifecycle::Stopped);
    }
}
