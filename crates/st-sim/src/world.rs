use glam::Vec3;

use st_core::HidingSpotId;

/// Something that happened in the world between logic ticks.
///
/// Queued by the host through [`Enemy::distract`][crate::Enemy::distract] and
/// [`Enemy::notify_entered_hiding_spot`][crate::Enemy::notify_entered_hiding_spot]
/// and delivered to the active state, in arrival order, at the start of the
/// next logic tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum WorldEvent {
    /// A prop made noise.
    Distract(Vec3),
    /// The player got into a hiding spot.
    EnteredHidingSpot {
        spot:     HidingSpotId,
        position: Vec3,
    },
}
