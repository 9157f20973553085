//! Flat-plane orientation helpers on top of `glam`.
//!
//! Conventions: `+Y` is up and an unrotated agent faces `+Z`, so an agent's
//! forward vector is `rotation * Vec3::Z` and its yaw is `atan2(x, z)`.

use glam::{Quat, Vec3};

/// Forward vector of an orientation.
#[inline]
pub fn forward(rotation: Quat) -> Vec3 {
    rotation * Vec3::Z
}

/// Drop the vertical component.
#[inline]
pub fn flat(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z)
}

/// Yaw-only rotation that faces from `from` towards `to` on the ground plane.
///
/// Returns `None` when the two points coincide in XZ (no defined heading).
pub fn look_rotation_flat(from: Vec3, to: Vec3) -> Option<Quat> {
    let dir = flat(to - from);
    if dir.length_squared() <= f32::EPSILON {
        return None;
    }
    Some(Quat::from_rotation_y(dir.x.atan2(dir.z)))
}

/// Spherical interpolation towards `target` by `t`, clamped to `[0, 1]`.
#[inline]
pub fn turn_towards(current: Quat, target: Quat, t: f32) -> Quat {
    current.slerp(target, t.clamp(0.0, 1.0)).normalize()
}

/// Linear interpolation with `t` clamped to `[0, 1]`.
#[inline]
pub fn lerp_clamped(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t.clamp(0.0, 1.0)
}

/// Cosine between `forward` and the direction from `origin` to `point`.
///
/// A zero-length direction yields `0.0`.
#[inline]
pub fn facing_dot(forward: Vec3, origin: Vec3, point: Vec3) -> f32 {
    forward.dot((point - origin).normalize_or_zero())
}
