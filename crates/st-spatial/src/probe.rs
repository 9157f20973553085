//! Raycast contract used by the perception sampler.

use glam::Vec3;

// ── LayerMask ─────────────────────────────────────────────────────────────────

/// Bit set over the 32 collision layers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct LayerMask(pub u32);

impl LayerMask {
    pub const ALL: LayerMask = LayerMask(u32::MAX);
    pub const NONE: LayerMask = LayerMask(0);

    /// Mask containing only `layer`.  Layers `>= 32` produce an empty mask.
    #[inline]
    pub fn single(layer: u8) -> Self {
        LayerMask(1u32.checked_shl(layer as u32).unwrap_or(0))
    }

    /// This mask with `layer` removed.
    #[inline]
    pub fn without(self, layer: u8) -> Self {
        LayerMask(self.0 & !Self::single(layer).0)
    }

    #[inline]
    pub fn contains(self, layer: u8) -> bool {
        self.0 & Self::single(layer).0 != 0
    }
}

impl Default for LayerMask {
    fn default() -> Self {
        Self::ALL
    }
}

// ── Hits ──────────────────────────────────────────────────────────────────────

/// Whether trigger volumes stop a ray.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum TriggerPolicy {
    /// Trigger colliders are hit like solid ones.
    #[default]
    Collide,
    /// Trigger colliders are transparent.
    Ignore,
}

/// Gameplay tag carried by a collider.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColliderTag {
    #[default]
    Untagged,
    Player,
    Enemy,
    Prop,
}

/// First obstruction along a ray.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RayHit {
    pub point:    Vec3,
    /// Distance from the ray origin to `point`.
    pub distance: f32,
    pub tag:      ColliderTag,
}

// ── VisibilityProbe trait ─────────────────────────────────────────────────────

/// Pluggable raycast service.
///
/// Implemented by the host over its physics engine, or by
/// [`ColliderScene`][crate::ColliderScene] for headless runs.
pub trait VisibilityProbe {
    /// Cast a ray from `origin` along `direction` (need not be normalized)
    /// and return the nearest collider within `max_distance` whose layer is
    /// in `mask`.
    fn raycast(
        &self,
        origin:       Vec3,
        direction:    Vec3,
        max_distance: f32,
        mask:         LayerMask,
        triggers:     TriggerPolicy,
    ) -> Option<RayHit>;

    /// `true` if nothing in `mask` lies between `from` and `to`.
    fn line_of_sight(&self, from: Vec3, to: Vec3, mask: LayerMask) -> bool {
        let delta = to - from;
        self.raycast(from, delta, delta.length(), mask, TriggerPolicy::Ignore)
            .is_none()
    }
}
