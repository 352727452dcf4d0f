//! Rigid-body simulation backing the result board.
//!
//! The rest of the crate treats this module as a solver with standard
//! rigid-body semantics: mass, friction, gravity, collision filtering and
//! sleep state. Bodies live in a single arena and are grouped into named
//! composites (boundaries, results, loose ephemerals).

pub mod body;
pub mod composite;
pub mod physics;

// Re-export main types for convenience
pub use body::{Body, BodyId, BodyKind, Category, CollisionFilter, Shape};
pub use composite::{Group, World};
pub use physics::Physics;
