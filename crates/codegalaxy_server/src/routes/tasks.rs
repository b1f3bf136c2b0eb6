//! Task endpoints.

use super::{CreatedResponse, MessageResponse};
use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use codegalaxy_core::{
    CelestialObject, NewTask, Task, TaskListQuery, TaskPatch, TaskUpdateOutcome,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// `GET /tasks` query string.
#[derive(Debug, Default, Deserialize)]
pub struct TaskQueryParams {
    pub category: Option<String>,
    pub completed: Option<bool>,
}

/// Body returned by task updates.
#[derive(Debug, Serialize)]
pub struct TaskUpdateResponse {
    pub message: &'static str,
    pub task: Task,
    /// Object spawned by this update, `null` when nothing was created.
    pub spawned: Option<CelestialObject>,
}

impl TaskUpdateResponse {
    fn from_outcome(message: &'static str, outcome: TaskUpdateOutcome) -> Self {
        Self {
            message,
            task: outcome.task,
            spawned: outcome.spawned,
        }
    }
}

pub async fn list_tasks(
    State(state): State<AppState>,
    params: Result<Query<TaskQueryParams>, QueryRejection>,
) -> Result<Json<Vec<Task>>, ApiError> {
    let Query(params) = params?;
    let query = TaskListQuery {
        category: params.category,
        completed: params.completed,
    };
    let user_id = state.user_id();
    let tasks = state.with_workspace(|workspace| workspace.list_tasks(user_id, &query))?;
    Ok(Json(tasks))
}

pub async fn create_task(
    State(state): State<AppState>,
    payload: Result<Json<NewTask>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse<Task>>), ApiError> {
    let Json(input) = payload?;
    let user_id = state.user_id();
    let task = state.with_workspace(|workspace| workspace.create_task(user_id, &input))?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id: task.id.to_string(),
            message: "Task created successfully",
            item: task,
        }),
    ))
}

pub async fn update_task(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<TaskPatch>, JsonRejection>,
) -> Result<Json<TaskUpdateResponse>, ApiError> {
    let Path(id) = path?;
    let Json(patch) = payload?;
    let user_id = state.user_id();
    let outcome = state.with_workspace(|workspace| workspace.update_task(user_id, id, &patch))?;
    Ok(Json(TaskUpdateResponse::from_outcome(
        "Task updated successfully",
        outcome,
    )))
}

pub async fn complete_task(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<TaskUpdateResponse>, ApiError> {
    let Path(id) = path?;
    let user_id = state.user_id();
    let outcome = state.with_workspace(|workspace| workspace.complete_task(user_id, id))?;
    Ok(Json(TaskUpdateResponse::from_outcome(
        "Task marked as completed",
        outcome,
    )))
}

pub async fn delete_task(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(id) = path?;
    let user_id = state.user_id();
    state.with_workspace(|workspace| workspace.delete_task(user_id, id))?;
    Ok(Json(MessageResponse {
        message: "Task deleted successfully",
    }))
}
