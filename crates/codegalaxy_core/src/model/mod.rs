//! Domain model for tasks, calendar events and galaxy objects.
//!
//! # Responsibility
//! - Define canonical records used by repositories, services and the HTTP
//!   surface.
//! - Own field-level validation so every write path shares one rule set.
//!
//! # Invariants
//! - Every record is scoped to exactly one `UserId`.
//! - Record identifiers are UUID v4 values assigned at construction.
//! - Timestamps are Unix epoch milliseconds.

pub mod event;
pub mod galaxy;
pub mod task;
pub mod validation;

use std::time::{SystemTime, UNIX_EPOCH};

/// Owner reference carried by every record.
pub type UserId = i64;

/// The single demo account created by the initial schema migration.
pub const DEMO_USER_ID: UserId = 1;

/// Current wall clock as Unix epoch milliseconds.
///
/// Clamps to `0` if the system clock reports a time before the epoch.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}
