//! Galaxy generation.
//!
//! # Responsibility
//! - Turn a task completion into one randomized celestial object.
//!
//! # Invariants
//! - Generation is pure apart from the injected random source.
//! - Every generated object passes `CelestialObject::validate()`.

pub mod generator;
