//! CodeGalaxy HTTP server entry point.

use clap::Parser;
use codegalaxy_server::{run, ServerConfig};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let config = ServerConfig::parse();
    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("codegalaxy: {err}");
            ExitCode::FAILURE
        }
    }
}
