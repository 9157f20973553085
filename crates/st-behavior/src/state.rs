//! The `BehaviorState` trait: one implementation per top-level mode.

use std::fmt;

use glam::Vec3;

use st_core::HidingSpotId;

use crate::{StateContext, WaypointRef};

/// Identifies a top-level behavior state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StateId {
    Patrol,
    Aggro,
}

impl StateId {
    pub fn as_str(self) -> &'static str {
        match self {
            StateId::Patrol => "patrol",
            StateId::Aggro  => "aggro",
        }
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A behavior mode of the enemy.
///
/// # Required methods
///
/// [`init`][Self::init] and [`update`][Self::update].  The world hooks have
/// no-op defaults.
///
/// # Transitions
///
/// `update` returns `Some(next)` to request a transition.  The agent applies
/// it after `update` returns and calls `next.init` before `next.update` ever
/// runs.  Returning the current state's own id is ignored.
pub trait BehaviorState {
    fn id(&self) -> StateId;

    /// Called on entry.  Resets the state's private timers.
    fn init(&mut self, ctx: &mut StateContext<'_>);

    /// Called once per logic tick while this state is active.
    fn update(&mut self, ctx: &mut StateContext<'_>) -> Option<StateId>;

    /// The dwell at a standing waypoint finished.  Called from `update`.
    fn on_waypoint_complete(&mut self, _waypoint: WaypointRef, _ctx: &mut StateContext<'_>) {}

    /// A prop made noise at `position`.
    fn on_distract(&mut self, _position: Vec3, _ctx: &mut StateContext<'_>) {}

    /// The player got into a hiding spot.
    fn on_entered_hiding_spot(
        &mut self,
        _spot:     HidingSpotId,
        _position: Vec3,
        _ctx:      &mut StateContext<'_>,
    ) {
    }
}
