//! Child process spawning and the per-child handle.
//!
//! A [`ProcessHandle`] wraps one live operating-system process: its pid, a
//! single-fire exit signal, and the captured output buffer. The OS child
//! object itself is owned by the exit watcher task, so termination signals
//! go through the process group rather than the child handle.

use chrono::Utc;
use dk_protocol::project_models::Project;
use dk_protocol::state_models::ExitInfo;
use std::collections::VecDeque;
use std::process::Stdio;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::{Child, Command};
use tokio::sync::watch;

/// Errors that can occur while launching a child process.
#[derive(Error, Debug)]
pub enum SpawnError {
    /// The configured command line contains no tokens.
    #[error("project command is empty")]
    EmptyCommand,

    /// The OS rejected the launch (missing executable, bad working
    /// directory, permission denied).
    #[error("failed to launch '{program}': {source}")]
    Launch {
        program: String,
        source: std::io::Error,
    },

    /// The child spawned but reported no pid. The child is killed before
    /// this is returned.
    #[error("spawned process reported no pid")]
    NoPid,
}

/// Bounded ring buffer of captured child output lines.
///
/// Capacity zero discards everything.
#[derive(Debug)]
pub(crate) struct LogBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl LogBuffer {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity.min(64)),
            capacity,
        }
    }

    pub(crate) fn push(&mut self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub(crate) fn snapshot(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }
}

/// Handle to one spawned child process.
///
/// Owned exclusively by the project state that created it; other components
/// only ever receive clones of the exit receiver or output snapshots.
#[derive(Debug)]
pub struct ProcessHandle {
    pid: u32,
    exit_rx: watch::Receiver<Option<ExitInfo>>,
    logs: Arc<Mutex<LogBuffer>>,
}

impl ProcessHandle {
    /// OS process id of the child (its process group id on Unix).
    pub fn pid(&self) -> u32 {
        self.pid
    }

    /// Subscribe to the single-fire exit signal.
    ///
    /// The receiver observes `Some(ExitInfo)` exactly once, when the watcher
    /// task reaps the child.
    pub fn subscribe_exit(&self) -> watch::Receiver<Option<ExitInfo>> {
        self.exit_rx.clone()
    }

    /// Shared captured-output buffer for this child.
    pub(crate) fn logs(&self) -> Arc<Mutex<LogBuffer>> {
        Arc::clone(&self.logs)
    }

    /// Send a termination signal to the child's process tree.
    ///
    /// Graceful means SIGTERM on Unix and a non-forced `taskkill` on
    /// Windows; forceful means SIGKILL / `taskkill /F`.
    pub fn terminate(&self, graceful: bool) {
        signal_group(self.pid, graceful);
    }
}

/// A freshly spawned child plus the pieces the supervisor wires together:
/// the handle goes into the project state, the child and exit sender go to
/// the watcher task.
pub(crate) struct SpawnedChild {
    pub(crate) handle: ProcessHandle,
    pub(crate) child: Child,
    pub(crate) exit_tx: watch::Sender<Option<ExitInfo>>,
}

/// Spawn the project's command in its working directory.
///
/// The command line is split on whitespace: the first token is the program,
/// the rest are arguments. On Unix the child becomes its own process group
/// leader so termination signals reach the whole tree.
///
/// When `log_buffer_lines` is non-zero, stdout and stderr are read
/// line-by-line by background tasks into the handle's ring buffer;
/// otherwise both streams are discarded.
pub(crate) fn spawn_project(
    project: &Project,
    log_buffer_lines: usize,
) -> Result<SpawnedChild, SpawnError> {
    let mut parts = project.cmd.split_whitespace();
    let Some(program) = parts.next() else {
        return Err(SpawnError::EmptyCommand);
    };

    let capture = log_buffer_lines > 0;

    let mut command = Command::new(program);
    command
        .args(parts)
        .current_dir(&project.path)
        .stdin(Stdio::null());

    if capture {
        command.stdout(Stdio::piped()).stderr(Stdio::piped());
    } else {
        command.stdout(Stdio::null()).stderr(Stdio::null());
    }

    #[cfg(unix)]
    command.process_group(0);

    let mut child = command.spawn().map_err(|source| SpawnError::Launch {
        program: program.to_string(),
        source,
    })?;

    let Some(pid) = child.id() else {
        // Cannot supervise a child we cannot address.
        let _ = child.start_kill();
        return Err(SpawnError::NoPid);
    };

    let logs = Arc::new(Mutex::new(LogBuffer::new(log_buffer_lines)));
    if capture {
        if let Some(stdout) = child.stdout.take() {
            capture_stream(stdout, Arc::clone(&logs));
        }
        if let Some(stderr) = child.stderr.take() {
            capture_stream(stderr, Arc::clone(&logs));
        }
    }

    let (exit_tx, exit_rx) = watch::channel(None);

    Ok(SpawnedChild {
        handle: ProcessHandle {
            pid,
            exit_rx,
            logs,
        },
        child,
        exit_tx,
    })
}

/// Read one output stream line-by-line into the shared buffer until EOF.
fn capture_stream<R>(reader: R, logs: Arc<Mutex<LogBuffer>>)
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut lines = BufReader::new(reader).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            if let Ok(mut buffer) = logs.lock() {
                buffer.push(line);
            }
        }
    });
}

/// Translate an OS exit status into the record served to clients.
pub(crate) fn exit_info(status: &std::process::ExitStatus) -> ExitInfo {
    #[cfg(unix)]
    let signal = std::os::unix::process::ExitStatusExt::signal(status);
    #[cfg(not(unix))]
    let signal = None;

    ExitInfo {
        code: status.code(),
        signal,
        at: Utc::now(),
    }
}

/// Signal the child's process tree.
#[cfg(unix)]
pub(crate) fn signal_group(pid: u32, graceful: bool) {
    let signal = if graceful {
        libc::SIGTERM
    } else {
        libc::SIGKILL
    };

    // Negative pid addresses the whole process group; the child was made
    // its own group leader at spawn. ESRCH just means it is already gone.
    let rc = unsafe { libc::kill(-(pid as i32), signal) };
    if rc != 0 {
        tracing::debug!(pid, signal, "kill returned an error (process likely already exited)");
    }
}

/// Signal the child's process tree.
#[cfg(windows)]
pub(crate) fn signal_group(pid: u32, graceful: bool) {
    let mut command = std::process::Command::new("taskkill");
    command.args(["/T", "/PID", &pid.to_string()]);
    if !graceful {
        command.arg("/F");
    }
    if let Err(error) = command.output() {
        tracing::debug!(pid, %error, "taskkill failed");
    }
}

#[cfg(test)]
pub(crate) fn test_handle(pid: u32) -> (ProcessHandle, watch::Sender<Option<ExitInfo>>) {
    let (exit_tx, exit_rx) = watch::channel(None);
    let handle = ProcessHandle {
        pid,
        exit_rx,
        logs: Arc::new(Mutex::new(LogBuffer::new(16))),
    };
    (handle, exit_tx)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(cmd: &str, path: &str) -> Project {
        Project {
            name: "test".to_string(),
            cmd: cmd.to_string(),
            path: path.to_string(),
        }
    }

    #[test]
    fn test_log_buffer_bounded() {
        let mut buffer = LogBuffer::new(3);
        for i in 0..5 {
            buffer.push(format!("line {i}"));
        }

        let lines = buffer.snapshot();
        assert_eq!(lines, vec!["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn test_log_buffer_zero_capacity_discards() {
        let mut buffer = LogBuffer::new(0);
        buffer.push("line".to_string());
        assert!(buffer.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_spawn_empty_command() {
        let result = spawn_project(&project("   ", "."), 0);
        assert!(matches!(result, Err(SpawnError::EmptyCommand)));
    }

    #[tokio::test]
    async fn test_spawn_missing_executable() {
        let result = spawn_project(&project("definitely-not-a-real-binary-xyz", "."), 0);
        assert!(matches!(result, Err(SpawnError::Launch { .. })));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_spawn_and_reap() {
        let spawned = spawn_project(&project("true", "."), 0).expect("true should spawn");
        assert!(spawned.handle.pid() > 0);

        let mut child = spawned.child;
        let status = child.wait().await.expect("Should reap child");
        let info = exit_info(&status);
        assert_eq!(info.code, Some(0));
        assert_eq!(info.signal, None);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_terminate_kills_child() {
        let spawned = spawn_project(&project("sleep 100", "."), 0).expect("sleep should spawn");

        spawned.handle.terminate(false);

        let mut child = spawned.child;
        let status = tokio::time::timeout(std::time::Duration::from_secs(5), child.wait())
            .await
            .expect("child should die promptly")
            .expect("Should reap child");

        let info = exit_info(&status);
        assert_eq!(info.signal, Some(libc::SIGKILL));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_spawn_captures_output() {
        let spawned = spawn_project(&project("echo hello world", "."), 16)
            .expect("echo should spawn");

        let mut child = spawned.child;
        child.wait().await.expect("Should reap child");

        // The reader task drains the pipe after exit; give it a moment.
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;

        let logs = spawned.handle.logs();
        let lines = logs.lock().expect("lock").snapshot();
        assert_eq!(lines, vec!["hello world"]);
    }
}
