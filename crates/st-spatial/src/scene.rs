//! `ColliderScene`: a flat list of spheres and boxes answering raycasts.
//!
//! Linear scan per ray; scenes in tests and the demo hold a handful of
//! colliders, so no acceleration structure is needed.
//!
//! Rays that start inside a collider do not report it, matching the behavior
//! of common game physics engines.

use glam::Vec3;

use crate::{ColliderTag, LayerMask, RayHit, SpatialError, SpatialResult, TriggerPolicy, VisibilityProbe};

// ── Collider ──────────────────────────────────────────────────────────────────

/// Index of a collider inside its [`ColliderScene`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ColliderId(pub u32);

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Shape {
    Sphere { center: Vec3, radius: f32 },
    /// Axis-aligned box.
    Aabb { min: Vec3, max: Vec3 },
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Collider {
    pub shape:      Shape,
    pub layer:      u8,
    pub tag:        ColliderTag,
    pub is_trigger: bool,
}

impl Collider {
    pub fn sphere(center: Vec3, radius: f32) -> Self {
        Self::from_shape(Shape::Sphere { center, radius })
    }

    /// Box spanning the two corners (in any order).
    pub fn aabb(a: Vec3, b: Vec3) -> Self {
        Self::from_shape(Shape::Aabb { min: a.min(b), max: a.max(b) })
    }

    fn from_shape(shape: Shape) -> Self {
        Self { shape, layer: 0, tag: ColliderTag::Untagged, is_trigger: false }
    }

    pub fn with_tag(mut self, tag: ColliderTag) -> Self {
        self.tag = tag;
        self
    }

    pub fn on_layer(mut self, layer: u8) -> Self {
        self.layer = layer;
        self
    }

    pub fn as_trigger(mut self) -> Self {
        self.is_trigger = true;
        self
    }

    /// Move the collider by `offset`.
    pub fn translate(&mut self, offset: Vec3) {
        match &mut self.shape {
            Shape::Sphere { center, .. } => *center += offset,
            Shape::Aabb { min, max } => {
                *min += offset;
                *max += offset;
            }
        }
    }

    /// Distance along the normalized ray `dir` to the entry point, or `None`.
    fn intersect(&self, origin: Vec3, dir: Vec3) -> Option<f32> {
        match self.shape {
            Shape::Sphere { center, radius } => {
                let oc = origin - center;
                let c = oc.length_squared() - radius * radius;
                if c <= 0.0 {
                    return None; // origin inside
                }
                let b = oc.dot(dir);
                let disc = b * b - c;
                if disc < 0.0 {
                    return None;
                }
                let t = -b - disc.sqrt();
                (t >= 0.0).then_some(t)
            }
            Shape::Aabb { min, max } => {
                let mut t_near = f32::NEG_INFINITY;
                let mut t_far = f32::INFINITY;
                for axis in 0..3 {
                    let (o, d, lo, hi) = (origin[axis], dir[axis], min[axis], max[axis]);
                    if d.abs() < f32::EPSILON {
                        if o < lo || o > hi {
                            return None;
                        }
                        continue;
                    }
                    let (t0, t1) = {
                        let a = (lo - o) / d;
                        let b = (hi - o) / d;
                        if a <= b { (a, b) } else { (b, a) }
                    };
                    t_near = t_near.max(t0);
                    t_far = t_far.min(t1);
                    if t_near > t_far {
                        return None;
                    }
                }
                (t_near >= 0.0).then_some(t_near)
            }
        }
    }

    fn validate(&self) -> SpatialResult<()> {
        if self.layer >= 32 {
            return Err(SpatialError::InvalidLayer(self.layer));
        }
        match self.shape {
            Shape::Sphere { center, radius } => {
                if !(radius > 0.0) || !center.is_finite() {
                    return Err(SpatialError::InvalidShape(format!(
                        "sphere at {center} with radius {radius}"
                    )));
                }
            }
            Shape::Aabb { min, max } => {
                if !min.is_finite() || !max.is_finite() {
                    return Err(SpatialError::InvalidShape(format!("box {min}..{max}")));
                }
            }
        }
        Ok(())
    }
}

// ── ColliderScene ─────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default)]
pub struct ColliderScene {
    colliders: Vec<Collider>,
}

impl ColliderScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a collider after validating its shape and layer.
    pub fn add(&mut self, collider: Collider) -> SpatialResult<ColliderId> {
        collider.validate()?;
        self.colliders.push(collider);
        Ok(ColliderId(self.colliders.len() as u32 - 1))
    }

    pub fn get(&self, id: ColliderId) -> Option<&Collider> {
        self.colliders.get(id.0 as usize)
    }

    pub fn get_mut(&mut self, id: ColliderId) -> Option<&mut Collider> {
        self.colliders.get_mut(id.0 as usize)
    }

    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }
}

impl VisibilityProbe for ColliderScene {
    fn raycast(
        &self,
        origin:       Vec3,
        direction:    Vec3,
        max_distance: f32,
        mask:         LayerMask,
        triggers:     TriggerPolicy,
    ) -> Option<RayHit> {
        let dir = direction.normalize_or_zero();
        if dir == Vec3::ZERO || max_distance <= 0.0 {
            return None;
        }

        self.colliders
            .iter()
            .filter(|c| mask.contains(c.layer))
            .filter(|c| !(c.is_trigger && triggers == TriggerPolicy::Ignore))
            .filter_map(|c| c.intersect(origin, dir).map(|t| (t, c.tag)))
            .filter(|&(t, _)| t <= max_distance)
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(t, tag)| RayHit { point: origin + dir * t, distance: t, tag })
    }
}
