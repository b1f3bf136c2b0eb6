//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Own the task completion -> galaxy generation policy.
//!
//! # Invariants
//! - Services never bypass repository validation.
//! - Services stay storage-agnostic; transactions are opened by callers
//!   (see `crate::workspace`).

pub mod calendar_service;
pub mod demo_seed;
pub mod galaxy_service;
pub mod task_service;
