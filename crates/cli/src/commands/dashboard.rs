//! `devkit dashboard` — run the dashboard server and supervisor daemon.

use color_eyre::eyre::bail;
use color_eyre::Result;
use dk_core::config::{devkit_home, load_global_config, projects_path};
use dk_core::registry::ProjectRegistry;
use dk_core::supervisor::{ProjectSupervisor, SupervisorSettings};
use std::sync::Arc;

pub async fn run(port_override: Option<u16>, no_open: bool) -> Result<()> {
    let home = devkit_home()?;
    if !home.exists() {
        bail!("devkit not initialized, run 'devkit init' to initialize");
    }

    let config = load_global_config(&home)?;
    let port = port_override.unwrap_or(config.port);
    let url = format!("http://localhost:{port}");

    let listener = match tokio::net::TcpListener::bind(("127.0.0.1", port)).await {
        Ok(listener) => listener,
        Err(_) => {
            // Another instance owns the port; just surface its UI.
            println!("Dashboard is already running at {url}");
            if !no_open {
                let _ = open_browser(&url);
            }
            return Ok(());
        }
    };

    let registry = ProjectRegistry::load(&projects_path(&home))?;
    tracing::info!(projects = registry.len(), port, "starting dashboard");

    let supervisor = Arc::new(ProjectSupervisor::new(
        registry,
        SupervisorSettings::from_config(&config),
    ));

    println!("Dashboard started on port {port}");
    if !no_open {
        let _ = open_browser(&url);
    }

    dk_server::serve(listener, supervisor).await?;
    Ok(())
}

fn open_browser(url: &str) -> std::io::Result<()> {
    let (program, args): (&str, Vec<&str>) = if cfg!(target_os = "windows") {
        ("rundll32", vec!["url.dll,FileProtocolHandler", url])
    } else if cfg!(target_os = "macos") {
        ("open", vec![url])
    } else {
        ("xdg-open", vec![url])
    };

    std::process::Command::new(program).args(args).spawn().map(|_| ())
}
