//! Enemy observer trait for UI, audio-visual feedback, and test recording.

use st_behavior::StateId;
use st_core::WaypointId;
use st_voice::VoiceClip;

use crate::EnemyStatus;

/// Callbacks invoked by [`Enemy::tick`][crate::Enemy::tick].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: awareness meter
///
/// ```rust,ignore
/// struct Meter;
///
/// impl EnemyObserver for Meter {
///     fn on_tick_end(&mut self, status: &EnemyStatus) {
///         if let Some(fill) = status.awareness_fraction() {
///             draw_meter(fill);
///         }
///     }
/// }
/// ```
pub trait EnemyObserver {
    /// Called at the end of every logic tick with a snapshot of the enemy.
    fn on_tick_end(&mut self, _status: &EnemyStatus) {}

    /// The active behavior state changed.
    fn on_state_changed(&mut self, _from: StateId, _to: StateId) {}

    /// The enemy finished dwelling at a patrol waypoint.
    fn on_waypoint_complete(&mut self, _waypoint: WaypointId) {}

    /// The enemy fired.
    fn on_shot(&mut self) {}

    /// The enemy picked up its gun.
    fn on_gun_grabbed(&mut self) {}

    /// A voice clip started playing.
    fn on_voice_line(&mut self, _clip: &VoiceClip) {}
}

/// An [`EnemyObserver`] that does nothing.
pub struct NoopObserver;

impl EnemyObserver for NoopObserver {}
