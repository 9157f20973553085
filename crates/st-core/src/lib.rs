//! `st-core`: foundational types for the stalker enemy AI core.
//!
//! This crate is a dependency of every other `st-*` crate.  It has no `st-*`
//! dependencies and a small external footprint (`glam`, `rand`, `serde`,
//! `thiserror`).
//!
//! # What lives here
//!
//! | Module          | Contents                                                 |
//! |-----------------|----------------------------------------------------------|
//! | [`ids`]         | `WaypointId`, `HidingSpotId`                             |
//! | [`geo`]         | Flat-plane yaw helpers on top of `glam`                  |
//! | [`time`]        | `Frame`, `FrameClock`                                    |
//! | [`rng`]         | `EnemyRng` (seeded, deterministic)                       |
//! | [`config`]      | `EnemyConfig`, `Waypoint`, `PatrolRoute`, JSON loading   |
//! | [`error`]       | `CoreError`, `CoreResult`                                |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{load_config_json, EnemyConfig, PatrolRoute, Waypoint};
pub use error::{CoreError, CoreResult};
pub use ids::{HidingSpotId, WaypointId};
pub use rng::EnemyRng;
pub use time::{Frame, FrameClock};
