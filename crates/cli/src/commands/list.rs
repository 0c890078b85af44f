//! `devkit list` — show projects and their running state.
//!
//! The catalog comes from `projects.json`; the running state comes from the
//! dashboard daemon when it is reachable. With no daemon, nothing is
//! supervised, so every project reports stopped.

use color_eyre::eyre::bail;
use color_eyre::Result;
use colored::Colorize;
use dk_core::config::{devkit_home, load_global_config, projects_path};
use dk_core::registry::load_projects;
use dk_protocol::api_models::ProjectsResponse;
use std::collections::HashMap;
use std::time::Duration;

pub async fn run(name_filter: Option<&str>) -> Result<()> {
    let home = devkit_home()?;
    if !home.exists() {
        bail!("devkit not initialized, run 'devkit init' to initialize");
    }

    let projects = load_projects(&projects_path(&home))?;
    let config = load_global_config(&home)?;
    let running = fetch_running_state(config.port).await;

    if let Some(name) = name_filter {
        for project in &projects {
            if project.name == name {
                println!(
                    "{} - {} - {}",
                    state_label(running.get(name).copied().unwrap_or(false)),
                    project.name,
                    project.path
                );
                return Ok(());
            }
        }
        bail!("Project not found: {name}");
    }

    for project in &projects {
        println!(
            "{} - {}",
            state_label(running.get(&project.name).copied().unwrap_or(false)),
            project.name
        );
    }
    Ok(())
}

fn state_label(running: bool) -> String {
    if running {
        "[RUNNING]".green().to_string()
    } else {
        "[STOPPED]".yellow().to_string()
    }
}

/// Ask the daemon which projects are running. An unreachable daemon means
/// nothing is supervised, not an error.
async fn fetch_running_state(port: u16) -> HashMap<String, bool> {
    let url = format!("http://127.0.0.1:{port}/api/projects");

    let client = match reqwest::Client::builder()
        .timeout(Duration::from_secs(2))
        .build()
    {
        Ok(client) => client,
        Err(_) => return HashMap::new(),
    };

    let response = match client.get(url).send().await {
        Ok(response) if response.status().is_success() => response,
        _ => return HashMap::new(),
    };

    match response.json::<ProjectsResponse>().await {
        Ok(body) => body
            .projects
            .into_iter()
            .map(|project| (project.name, project.running))
            .collect(),
        Err(_) => HashMap::new(),
    }
}
