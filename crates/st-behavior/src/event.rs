//! Side effects a behavior state asks its agent to perform.

use st_core::WaypointId;
use st_voice::VoiceLine;

/// Pushed into [`StateContext`][crate::StateContext] during a state callback
/// and dispatched by the agent after the callback returns.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BehaviorEvent {
    /// Play a random line from this category.
    Voice(VoiceLine),
    /// The enemy finished dwelling at a patrol waypoint.
    WaypointCompleted(WaypointId),
    /// The enemy picked up its gun.
    GunGrabbed,
    /// The enemy fired.
    Shot,
}
