//! Liveness probe.

use axum::Json;
use codegalaxy_core::{core_version, ping};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub ping: &'static str,
    pub version: &'static str,
}

pub async fn status() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok",
        ping: ping(),
        version: core_version(),
    })
}
