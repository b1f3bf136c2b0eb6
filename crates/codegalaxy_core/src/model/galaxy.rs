//! Celestial object model.
//!
//! # Responsibility
//! - Define the decorative star/planet record spawned by task completion.
//! - Own the fixed palettes, size ranges and galaxy bounds per kind.
//!
//! # Invariants
//! - Each coordinate lies in `[-GALAXY_RADIUS, GALAXY_RADIUS]`.
//! - `color` belongs to the palette of `kind`.
//! - `size` lies in the size range of `kind`.
//! - Records are immutable once persisted.

use super::task::TaskId;
use super::validation::{validate_owner, ValidationError};
use super::UserId;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use uuid::Uuid;

pub type CelestialId = Uuid;

/// Half-width of the cube every coordinate is drawn from.
pub const GALAXY_RADIUS: f64 = 500.0;

pub const STAR_PALETTE: [&str; 5] = ["#FFD700", "#FFA500", "#FF6347", "#87CEEB", "#FFFFFF"];
pub const PLANET_PALETTE: [&str; 5] = ["#4169E1", "#32CD32", "#FF69B4", "#9370DB", "#FF8C00"];

pub const STAR_SIZE_MIN: f64 = 1.0;
pub const STAR_SIZE_MAX: f64 = 3.0;
pub const PLANET_SIZE_MIN: f64 = 3.0;
pub const PLANET_SIZE_MAX: f64 = 8.0;

/// Kind of celestial object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CelestialKind {
    Star,
    Planet,
}

impl CelestialKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Star => "star",
            Self::Planet => "planet",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "star" => Some(Self::Star),
            "planet" => Some(Self::Planet),
            _ => None,
        }
    }

    /// Fixed color palette for this kind.
    pub fn palette(self) -> &'static [&'static str; 5] {
        match self {
            Self::Star => &STAR_PALETTE,
            Self::Planet => &PLANET_PALETTE,
        }
    }

    /// Closed size interval for this kind. Planets render larger.
    pub fn size_range(self) -> RangeInclusive<f64> {
        match self {
            Self::Star => STAR_SIZE_MIN..=STAR_SIZE_MAX,
            Self::Planet => PLANET_SIZE_MIN..=PLANET_SIZE_MAX,
        }
    }
}

/// Point in galaxy space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    #[serde(rename = "position_x")]
    pub x: f64,
    #[serde(rename = "position_y")]
    pub y: f64,
    #[serde(rename = "position_z")]
    pub z: f64,
}

/// Decorative star or planet owned by one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CelestialObject {
    pub id: CelestialId,
    pub user_id: UserId,
    #[serde(rename = "type")]
    pub kind: CelestialKind,
    #[serde(flatten)]
    pub position: Position,
    pub color: String,
    pub size: f64,
    /// Task whose completion spawned this object. Kept after the task is deleted.
    pub task_id: Option<TaskId>,
    pub created_at: i64,
}

impl CelestialObject {
    /// Checks bounds, palette and size invariants.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_owner(self.user_id)?;

        let bounds = -GALAXY_RADIUS..=GALAXY_RADIUS;
        for (axis, value) in [
            ('x', self.position.x),
            ('y', self.position.y),
            ('z', self.position.z),
        ] {
            if !bounds.contains(&value) {
                return Err(ValidationError::PositionOutOfRange { axis, value });
            }
        }

        if !self.kind.size_range().contains(&self.size) {
            return Err(ValidationError::SizeOutOfRange {
                kind: self.kind,
                value: self.size,
            });
        }

        if !self.kind.palette().contains(&self.color.as_str()) {
            return Err(ValidationError::ColorNotInPalette {
                kind: self.kind,
                color: self.color.clone(),
            });
        }

        Ok(())
    }
}
