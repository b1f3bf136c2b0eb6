//! Galaxy endpoint.

use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::State;
use axum::Json;
use codegalaxy_core::CelestialObject;

/// Lists every celestial object, oldest first, for client-side rendering.
pub async fn list_objects(
    State(state): State<AppState>,
) -> Result<Json<Vec<CelestialObject>>, ApiError> {
    let user_id = state.user_id();
    let objects = state.with_workspace(|workspace| workspace.list_galaxy(user_id))?;
    Ok(Json(objects))
}
