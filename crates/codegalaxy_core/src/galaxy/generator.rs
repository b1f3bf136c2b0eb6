//! Random celestial object synthesis.
//!
//! Stars dominate the field (3 in 4 draws) but planets render larger.
//! Objects may overlap; there is no clustering or collision avoidance.

use crate::model::galaxy::{CelestialKind, CelestialObject, Position, GALAXY_RADIUS};
use crate::model::task::TaskId;
use crate::model::{now_epoch_ms, UserId};
use rand::Rng;
use uuid::Uuid;

/// Probability that a generated object is a star.
pub const STAR_PROBABILITY: f64 = 0.75;

/// Draws one celestial object for `user_id`, optionally linked to `task_id`.
///
/// `task_id` is passed through unchecked; callers only hand in tasks they
/// already loaded under the same owner.
pub fn generate_celestial_object<R: Rng + ?Sized>(
    rng: &mut R,
    user_id: UserId,
    task_id: Option<TaskId>,
) -> CelestialObject {
    let kind = pick_kind(rng);
    let position = pick_position(rng);
    let palette = kind.palette();
    let color = palette[rng.gen_range(0..palette.len())].to_string();
    let size = rng.gen_range(kind.size_range());

    CelestialObject {
        id: Uuid::new_v4(),
        user_id,
        kind,
        position,
        color,
        size,
        task_id,
        created_at: now_epoch_ms(),
    }
}

fn pick_kind<R: Rng + ?Sized>(rng: &mut R) -> CelestialKind {
    if rng.gen_bool(STAR_PROBABILITY) {
        CelestialKind::Star
    } else {
        CelestialKind::Planet
    }
}

fn pick_position<R: Rng + ?Sized>(rng: &mut R) -> Position {
    let bounds = -GALAXY_RADIUS..=GALAXY_RADIUS;
    Position {
        x: rng.gen_range(bounds.clone()),
        y: rng.gen_range(bounds.clone()),
        z: rng.gen_range(bounds),
    }
}
