//! Router state.

use crate::error::ApiError;
use codegalaxy_core::{RepoResult, UserId, Workspace};
use std::sync::{Arc, Mutex};

/// Shared handle injected into every handler.
///
/// The workspace is locked for the duration of one synchronous use case.
#[derive(Clone)]
pub struct AppState {
    workspace: Arc<Mutex<Workspace>>,
    user_id: UserId,
}

impl AppState {
    pub fn new(workspace: Workspace, user_id: UserId) -> Self {
        Self {
            workspace: Arc::new(Mutex::new(workspace)),
            user_id,
        }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Runs `op` against the locked workspace.
    pub fn with_workspace<T>(
        &self,
        op: impl FnOnce(&mut Workspace) -> RepoResult<T>,
    ) -> Result<T, ApiError> {
        let mut workspace = self
            .workspace
            .lock()
            .map_err(|_| ApiError::Internal("workspace lock poisoned".to_string()))?;
        Ok(op(&mut *workspace)?)
    }
}
