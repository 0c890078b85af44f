//! `devkit start` / `devkit stop` — drive the dashboard daemon.
//!
//! The supervisor lives inside the daemon process; a one-shot CLI process
//! cannot own supervised children, so these commands go over the HTTP API.

use color_eyre::eyre::{bail, eyre};
use color_eyre::Result;
use colored::Colorize;
use dk_core::config::{devkit_home, load_global_config};
use dk_protocol::api_models::{ErrorResponse, ProjectActionRequest};
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
pub enum Action {
    Start,
    Stop,
}

impl Action {
    fn endpoint(self) -> &'static str {
        match self {
            Action::Start => "start",
            Action::Stop => "stop",
        }
    }

    fn past_tense(self) -> &'static str {
        match self {
            Action::Start => "started",
            Action::Stop => "stopped",
        }
    }
}

pub async fn run(action: Action, name: &str) -> Result<()> {
    let home = devkit_home()?;
    if !home.exists() {
        bail!("devkit not initialized, run 'devkit init' to initialize");
    }
    let config = load_global_config(&home)?;

    let url = format!(
        "http://127.0.0.1:{}/api/projects/{}",
        config.port,
        action.endpoint()
    );

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()?;

    let response = client
        .post(url)
        .json(&ProjectActionRequest {
            name: name.to_string(),
        })
        .send()
        .await
        .map_err(|_| {
            eyre!("dashboard daemon is not reachable; start it with 'devkit dashboard'")
        })?;

    if response.status().is_success() {
        println!("{} '{}'", format!("Successfully {}", action.past_tense()).green(), name);
        return Ok(());
    }

    let status = response.status();
    let error = response
        .json::<ErrorResponse>()
        .await
        .map(|body| body.error)
        .unwrap_or_else(|_| format!("request failed with status {status}"));
    bail!(error);
}
