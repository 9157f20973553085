//! `st-spatial`: the enemy's view of the world: where it can walk and what it
//! can see.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                      |
//! |------------|---------------------------------------------------------------|
//! | [`nav`]    | `NavAgent` trait, `PathStatus`, `KinematicNav`                |
//! | [`probe`]  | `VisibilityProbe` trait, `RayHit`, `LayerMask`, `ColliderTag` |
//! | [`scene`]  | `ColliderScene` (spheres + boxes), `Collider`, `Shape`        |
//! | [`error`]  | `SpatialError`, `SpatialResult<T>`                            |
//!
//! # Pluggability
//!
//! The behavior core only talks to the two traits.  A game host implements
//! them over its navigation mesh and physics engine; `KinematicNav` and
//! `ColliderScene` are small self-contained implementations used by the demo
//! and the test suites.

pub mod error;
pub mod nav;
pub mod probe;
pub mod scene;

#[cfg(test)]
mod tests;

pub use error::{SpatialError, SpatialResult};
pub use nav::{KinematicNav, NavAgent, PathStatus};
pub use probe::{ColliderTag, LayerMask, RayHit, TriggerPolicy, VisibilityProbe};
pub use scene::{Collider, ColliderId, ColliderScene, Shape};
