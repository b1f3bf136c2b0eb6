//! Route table.
//!
//! Every route is served both at the root and under `/api`, so older
//! frontends that call `/api/tasks` and newer ones calling `/tasks` both work.

pub mod calendar;
pub mod galaxy;
pub mod music;
pub mod status;
pub mod tasks;

use crate::state::AppState;
use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{delete, get, patch, put};
use axum::Router;
use log::info;
use serde::Serialize;
use std::time::Instant;

/// Plain acknowledgement body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Body returned by create endpoints.
#[derive(Debug, Serialize)]
pub struct CreatedResponse<T> {
    pub id: String,
    pub message: &'static str,
    pub item: T,
}

/// Builds the full application router.
pub fn router(state: AppState) -> Router {
    let api = api_routes();
    Router::new()
        .merge(api.clone())
        .nest("/api", api)
        .layer(middleware::from_fn(log_requests))
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/tasks", get(tasks::list_tasks).post(tasks::create_task))
        .route(
            "/tasks/:id",
            put(tasks::update_task).delete(tasks::delete_task),
        )
        .route("/tasks/:id/complete", patch(tasks::complete_task))
        .route(
            "/calendar",
            get(calendar::list_events).post(calendar::create_event),
        )
        .route("/calendar/:id", delete(calendar::delete_event))
        .route("/galaxy", get(galaxy::list_objects))
        .route("/music", get(music::list_tracks))
        .route("/status", get(status::status))
}

async fn log_requests(request: Request, next: Next) -> Response {
    let started_at = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    info!(
        "event=http_request module=server status={} method={} path={} duration_ms={}",
        response.status().as_u16(),
        method,
        path,
        started_at.elapsed().as_millis()
    );
    response
}
