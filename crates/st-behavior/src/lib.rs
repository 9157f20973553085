//! `st-behavior`: what the enemy does with what it perceives.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                    |
//! |-----------------|-------------------------------------------------------------|
//! | [`awareness`]   | `Awareness`: bounded suspicion meter                        |
//! | [`event`]       | `BehaviorEvent`: side effects requested by a state          |
//! | [`context`]     | `StateContext<'a>`: per-tick borrow of the agent's parts    |
//! | [`locomotion`]  | `Locomotion`: shared destination/dwell/look cycle           |
//! | [`state`]       | `BehaviorState` trait, `StateId`                            |
//! | [`patrol`]      | `PatrolState`                                               |
//! | [`aggro`]       | `AggroState`, `AggroPhase`                                  |
//!
//! # Tick contract
//!
//! The owning agent builds a [`StateContext`] each logic tick and calls
//! [`BehaviorState::update`] on the active state.  A returned [`StateId`] is a
//! transition request: the agent swaps the active state and calls `init` on
//! it before its first `update`.  States never touch audio or observers
//! directly; they push [`BehaviorEvent`]s into the context and the agent
//! dispatches them after the update, in push order.

pub mod aggro;
pub mod awareness;
pub mod context;
pub mod event;
pub mod locomotion;
pub mod patrol;
pub mod state;

#[cfg(test)]
mod tests;

pub use aggro::{AggroPhase, AggroState};
pub use awareness::Awareness;
pub use context::StateContext;
pub use event::BehaviorEvent;
pub use locomotion::{Locomotion, WaypointRef};
pub use patrol::PatrolState;
pub use state::{BehaviorState, StateId};
