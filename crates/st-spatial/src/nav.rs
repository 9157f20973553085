//! Navigation query contract and a straight-line reference navigator.
//!
//! # Contract
//!
//! The behavior core never computes paths.  It hands a destination to a
//! [`NavAgent`] and then polls it: is there a path, how far is left, how fast
//! are we going, is the path complete.  The host's navigation mesh answers.
//!
//! # `KinematicNav`
//!
//! Moves in a straight line at constant speed, turning to face its motion.
//! An optional walkable box stands in for the navigation mesh: destinations
//! outside it are clamped to its border and reported as
//! [`PathStatus::Partial`].

use glam::{Quat, Vec3};

use st_core::geo;

// ── PathStatus ────────────────────────────────────────────────────────────────

/// Quality of the most recently computed path.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PathStatus {
    /// The path reaches the requested destination.
    #[default]
    Complete,
    /// The path ends short of the destination.
    Partial,
    /// No path could be computed.
    Invalid,
}

// ── NavAgent trait ────────────────────────────────────────────────────────────

/// Pluggable navigation query interface.
///
/// Pose accessors live here because the navigator owns the agent's transform:
/// it moves the agent along its path and the behavior core only rotates it
/// while stopped.
pub trait NavAgent {
    fn position(&self) -> Vec3;

    fn rotation(&self) -> Quat;

    fn set_rotation(&mut self, rotation: Quat);

    /// Request a path to `point`.  Replaces any previous destination.
    fn set_destination(&mut self, point: Vec3);

    fn has_path(&self) -> bool;

    /// Distance left along the current path.
    fn remaining_distance(&self) -> f32;

    fn path_status(&self) -> PathStatus;

    fn velocity(&self) -> Vec3;

    /// `true` while movement along the path is halted.
    fn is_stopped(&self) -> bool;

    fn set_stopped(&mut self, stopped: bool);

    /// Step the navigator's own simulation by `dt` seconds.
    ///
    /// Hosts whose engine moves the agent on its own leave this as the
    /// default no-op.
    fn advance(&mut self, _dt: f32) {}

    /// Forward (facing) vector derived from [`rotation`][Self::rotation].
    fn forward(&self) -> Vec3 {
        geo::forward(self.rotation())
    }
}

// ── KinematicNav ──────────────────────────────────────────────────────────────

/// Straight-line navigator at constant `speed` (units per second).
#[derive(Clone, Debug)]
pub struct KinematicNav {
    position:    Vec3,
    rotation:    Quat,
    speed:       f32,
    destination: Option<Vec3>,
    velocity:    Vec3,
    stopped:     bool,
    status:      PathStatus,
    walkable:    Option<(Vec3, Vec3)>,
}

impl KinematicNav {
    /// Paths shorter than this are treated as "already there".
    const MIN_PATH: f32 = 1e-4;

    pub fn new(position: Vec3, speed: f32) -> Self {
        Self {
            position,
            rotation:    Quat::IDENTITY,
            speed:       speed.max(0.0),
            destination: None,
            velocity:    Vec3::ZERO,
            stopped:     false,
            status:      PathStatus::Complete,
            walkable:    None,
        }
    }

    /// Face `rotation` initially.
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Restrict destinations to the box `[min, max]` (XZ only; height is
    /// taken from the request).
    pub fn with_walkable_area(mut self, min: Vec3, max: Vec3) -> Self {
        self.walkable = Some((min.min(max), min.max(max)));
        self
    }

    /// Teleport without touching the current path.
    pub fn warp(&mut self, position: Vec3) {
        self.position = position;
    }

    /// The destination currently being walked to, if any.
    pub fn destination(&self) -> Option<Vec3> {
        self.destination
    }

    fn clamp_to_walkable(&self, point: Vec3) -> (Vec3, PathStatus) {
        match self.walkable {
            None => (point, PathStatus::Complete),
            Some((min, max)) => {
                let clamped = Vec3::new(
                    point.x.clamp(min.x, max.x),
                    point.y,
                    point.z.clamp(min.z, max.z),
                );
                let status = if clamped == point { PathStatus::Complete } else { PathStatus::Partial };
                (clamped, status)
            }
        }
    }
}

impl NavAgent for KinematicNav {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn rotation(&self) -> Quat {
        self.rotation
    }

    fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation;
    }

    fn set_destination(&mut self, point: Vec3) {
        let (point, status) = self.clamp_to_walkable(point);
        if status != PathStatus::Complete {
            tracing::debug!(%point, ?status, "destination clamped to walkable area");
        }
        self.destination = (self.position.distance(point) > Self::MIN_PATH).then_some(point);
        // Already as close as the walkable area allows: nothing left to walk.
        self.status = if self.destination.is_some() { status } else { PathStatus::Complete };
    }

    fn has_path(&self) -> bool {
        self.destination.is_some()
    }

    fn remaining_distance(&self) -> f32 {
        self.destination.map_or(0.0, |d| self.position.distance(d))
    }

    fn path_status(&self) -> PathStatus {
        self.status
    }

    fn velocity(&self) -> Vec3 {
        self.velocity
    }

    fn is_stopped(&self) -> bool {
        self.stopped
    }

    fn set_stopped(&mut self, stopped: bool) {
        self.stopped = stopped;
    }

    fn advance(&mut self, dt: f32) {
        let Some(dest) = self.destination else {
            self.velocity = Vec3::ZERO;
            return;
        };
        if self.stopped || dt <= 0.0 {
            self.velocity = Vec3::ZERO;
            return;
        }

        let to_dest = dest - self.position;
        let distance = to_dest.length();
        let step = self.speed * dt;
        let before = self.position;

        if distance <= step {
            self.position = dest;
            self.destination = None;
            self.status = PathStatus::Complete;
        } else {
            self.position += to_dest / distance * step;
        }
        self.velocity = (self.position - before) / dt;

        if let Some(facing) = geo::look_rotation_flat(before, self.position) {
            self.rotation = facing;
        }
    }
}
