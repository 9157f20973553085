//! `st-perception`: how much of the player the enemy can see.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`player`]   | `PlayerView`: the per-tick snapshot of the player        |
//! | [`sampler`]  | `PerceptionSampler`, `Sighting`, `Perception`            |
//! | [`sight`]    | `SightRange`: smoothed raycast distance                  |
//!
//! # Two cadences
//!
//! ```text
//! physics tick:  PerceptionSampler::sample   → Sighting  (raycasts)
//! logic tick:    SightRange::update          → new ray length
//!                PerceptionSampler::evaluate → Perception (threshold + close override)
//! ```
//!
//! The physics step writes one `Sighting`; the logic step only reads it.

pub mod player;
pub mod sampler;
pub mod sight;


pub use player::PlayerView;
pub use sampler::{Perception, PerceptionSampler, Sighting};
pub use sight::SightRange;
