//! HTTP surface for CodeGalaxy.
//!
//! # Responsibility
//! - Translate JSON/HTTP requests into `Workspace` use cases.
//! - Map core errors onto HTTP statuses.
//!
//! # Invariants
//! - Handlers hold no state besides the injected `AppState`.
//! - Every request is scoped to the configured owner.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use config::ServerConfig;
pub use error::ApiError;
pub use routes::router;
pub use state::AppState;

use codegalaxy_core::db::open_db;
use codegalaxy_core::repo::user_repo::DEFAULT_USERNAME;
use codegalaxy_core::{init_logging, Workspace};
use log::{info, warn};
use std::error::Error;

/// Boots logging and storage, then serves until Ctrl-C.
pub async fn run(config: ServerConfig) -> Result<(), Box<dyn Error>> {
    let log_dir = config.effective_log_dir();
    init_logging(&config.effective_log_level(), &log_dir.to_string_lossy())?;

    let conn = open_db(&config.db_path)?;
    let mut workspace = Workspace::from_entropy(conn);
    if workspace.ensure_owner(config.user_id, DEFAULT_USERNAME)? {
        info!(
            "event=owner_created module=server status=ok user_id={}",
            config.user_id
        );
    }
    if config.seed_demo {
        let summary = workspace.seed_demo_data(config.user_id)?;
        info!(
            "event=demo_seed module=server status=ok tasks={} events={} objects={}",
            summary.tasks, summary.events, summary.objects
        );
    }

    let app = router(AppState::new(workspace, config.user_id));
    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!(
        "event=server_listen module=server status=ok addr={}",
        listener.local_addr()?
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("event=server_stop module=server status=ok");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("event=shutdown_signal module=server status=error error={err}");
    }
}
