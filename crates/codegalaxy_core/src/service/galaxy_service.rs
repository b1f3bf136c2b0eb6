//! Galaxy use-case service.
//!
//! # Invariants
//! - Objects are only created through `spawn`, which draws from the
//!   generator and persists the result unchanged.

use crate::galaxy::generator::generate_celestial_object;
use crate::model::galaxy::CelestialObject;
use crate::model::task::TaskId;
use crate::model::UserId;
use crate::repo::galaxy_repo::GalaxyRepository;
use crate::repo::RepoResult;
use log::info;
use rand::Rng;

pub struct GalaxyService<G: GalaxyRepository> {
    repo: G,
}

impl<G: GalaxyRepository> GalaxyService<G> {
    pub fn new(repo: G) -> Self {
        Self { repo }
    }

    /// Generates one celestial object and persists it.
    ///
    /// Store failures propagate; the generator itself cannot fail.
    pub fn spawn<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        user_id: UserId,
        task_id: Option<TaskId>,
    ) -> RepoResult<CelestialObject> {
        let object = generate_celestial_object(rng, user_id, task_id);
        self.repo.insert_object(&object)?;
        info!(
            "event=galaxy_spawn module=service status=ok kind={} linked_task={}",
            object.kind.as_str(),
            object.task_id.is_some()
        );
        Ok(object)
    }

    /// Lists objects oldest first.
    pub fn list_objects(&self, user_id: UserId) -> RepoResult<Vec<CelestialObject>> {
        self.repo.list_objects(user_id)
    }
}
