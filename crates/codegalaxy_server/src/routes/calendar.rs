//! Calendar endpoints.

use super::{CreatedResponse, MessageResponse};
use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use codegalaxy_core::{CalendarEvent, EventListQuery, NewEvent};
use serde::Deserialize;
use uuid::Uuid;

/// `GET /calendar` query string.
#[derive(Debug, Default, Deserialize)]
pub struct EventQueryParams {
    pub month: Option<u32>,
    pub year: Option<u32>,
}

pub async fn list_events(
    State(state): State<AppState>,
    params: Result<Query<EventQueryParams>, QueryRejection>,
) -> Result<Json<Vec<CalendarEvent>>, ApiError> {
    let Query(params) = params?;
    let query = EventListQuery {
        month: params.month,
        year: params.year,
    };
    let user_id = state.user_id();
    let events = state.with_workspace(|workspace| workspace.list_events(user_id, &query))?;
    Ok(Json(events))
}

pub async fn create_event(
    State(state): State<AppState>,
    payload: Result<Json<NewEvent>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse<CalendarEvent>>), ApiError> {
    let Json(input) = payload?;
    let user_id = state.user_id();
    let event = state.with_workspace(|workspace| workspace.create_event(user_id, &input))?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id: event.id.to_string(),
            message: "Event created successfully",
            item: event,
        }),
    ))
}

pub async fn delete_event(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(id) = path?;
    let user_id = state.user_id();
    state.with_workspace(|workspace| workspace.delete_event(user_id, id))?;
    Ok(Json(MessageResponse {
        message: "Event deleted successfully",
    }))
}
