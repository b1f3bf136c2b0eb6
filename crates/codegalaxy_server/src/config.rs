//! Server configuration.
//!
//! Every flag falls back to a `CODEGALAXY_*` environment variable, then to
//! a built-in default.

use clap::Parser;
use codegalaxy_core::{default_log_dir, default_log_level, UserId, DEMO_USER_ID};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Runtime configuration for the HTTP server.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "codegalaxy",
    version,
    about = "Task, calendar and galaxy server for CodeGalaxy"
)]
pub struct ServerConfig {
    /// SQLite database file; created and migrated on first start.
    #[arg(long, env = "CODEGALAXY_DB_PATH", default_value = "codegalaxy.sqlite3")]
    pub db_path: PathBuf,

    /// Socket address to listen on.
    #[arg(long, env = "CODEGALAXY_BIND", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// One of trace|debug|info|warn|error. Defaults per build mode.
    #[arg(long, env = "CODEGALAXY_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files. Defaults to `./logs`.
    #[arg(long, env = "CODEGALAXY_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Owner id every request is scoped to.
    #[arg(
        long,
        env = "CODEGALAXY_USER_ID",
        default_value_t = DEMO_USER_ID,
        value_parser = clap::value_parser!(i64).range(1..)
    )]
    pub user_id: UserId,

    /// Insert sample tasks, events and galaxy objects when the owner has no tasks.
    #[arg(long, env = "CODEGALAXY_SEED_DEMO")]
    pub seed_demo: bool,
}

impl ServerConfig {
    pub fn effective_log_level(&self) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| default_log_level().to_string())
    }

    pub fn effective_log_dir(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(default_log_dir)
    }
}
