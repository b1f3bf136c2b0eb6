//! Maintenance CLI.
//!
//! # Responsibility
//! - Verify `codegalaxy_core` linkage without starting the server.
//! - Run one-off database chores: init, demo seed, clearing tasks.

use clap::{Args, Parser, Subcommand};
use codegalaxy_core::db::open_db;
use codegalaxy_core::repo::user_repo::DEFAULT_USERNAME;
use codegalaxy_core::{core_version, ping, UserId, Workspace, DEMO_USER_ID};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "codegalaxy-cli", version, about = "CodeGalaxy maintenance tool")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print core ping and version.
    Ping,
    /// Create the database file and apply migrations.
    InitDb(DbArgs),
    /// Insert sample data when the owner has no tasks.
    SeedDemo(DbArgs),
    /// Delete every task of the owner. Galaxy objects are kept.
    ClearTasks(DbArgs),
}

#[derive(Debug, Args)]
struct DbArgs {
    #[arg(long, env = "CODEGALAXY_DB_PATH", default_value = "codegalaxy.sqlite3")]
    db_path: PathBuf,
    #[arg(long, env = "CODEGALAXY_USER_ID", default_value_t = DEMO_USER_ID)]
    user_id: UserId,
}

impl DbArgs {
    fn open(&self) -> Result<Workspace, Box<dyn Error>> {
        let workspace = Workspace::from_entropy(open_db(&self.db_path)?);
        workspace.ensure_owner(self.user_id, DEFAULT_USERNAME)?;
        Ok(workspace)
    }
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("codegalaxy-cli: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Command::Ping => {
            println!("codegalaxy_core ping={}", ping());
            println!("codegalaxy_core version={}", core_version());
        }
        Command::InitDb(args) => {
            args.open()?;
            println!("database ready at {}", args.db_path.display());
        }
        Command::SeedDemo(args) => {
            let summary = args.open()?.seed_demo_data(args.user_id)?;
            if summary.is_empty() {
                println!("tasks already present; nothing seeded");
            } else {
                println!(
                    "seeded {} tasks, {} events, {} galaxy objects",
                    summary.tasks, summary.events, summary.objects
                );
            }
        }
        Command::ClearTasks(args) => {
            let removed = args.open()?.clear_tasks(args.user_id)?;
            println!("deleted {removed} tasks");
        }
    }
    Ok(())
}
