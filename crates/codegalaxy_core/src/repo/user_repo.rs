//! Owner bootstrap for the single-user deployment.
//!
//! Every scoped table references `users(id)`, so the configured owner row
//! must exist before the first write.

use crate::model::validation::validate_owner;
use crate::model::UserId;
use crate::repo::RepoResult;
use rusqlite::{params, Connection};

/// Display name given to owners created on demand.
pub const DEFAULT_USERNAME: &str = "CodeGalaxy User";

/// Inserts the owner row when missing. Returns `true` if a row was created.
pub fn ensure_user(conn: &Connection, user_id: UserId, username: &str) -> RepoResult<bool> {
    validate_owner(user_id)?;
    let inserted = conn.execute(
        "INSERT OR IGNORE INTO users (id, username) VALUES (?1, ?2);",
        params![user_id, username],
    )?;
    Ok(inserted > 0)
}
