//! The movement cycle every behavior state runs first on each tick.
//!
//! # Order
//!
//! 1. Destination: the one-shot target wins over the standing waypoint.
//! 2. At destination with a standing waypoint and no target: dwell.  Once the
//!    dwell reaches the waypoint's `stop_time` the waypoint is released and
//!    the rest of the cycle is skipped for this tick.
//! 3. At destination: the one-shot target is consumed.
//!    Not at destination: the dwell restarts.
//! 4. Stop-and-look: while the navigator is halted, turn towards the held
//!    look-at point and resume after `stop_and_look_time`.
//! 5. A path that is not `Complete` drops the target.

use glam::Vec3;
use tracing::warn;

use st_core::geo::{look_rotation_flat, turn_towards};
use st_core::{Waypoint, WaypointId};
use st_spatial::PathStatus;

use crate::{BehaviorEvent, StateContext};

/// Which waypoint the agent is standing on or walking to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WaypointRef {
    Route(WaypointId),
    /// The spot where the gun is kept.
    Gun,
}

#[derive(Clone, Debug, Default)]
pub struct Locomotion {
    target:     Option<Vec3>,
    waypoint:   Option<(WaypointRef, Waypoint)>,
    dwell:      f32,
    look_at:    Vec3,
    look_timer: f32,
}

impl Locomotion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget target, waypoint and dwell.  The look-at state is kept.
    pub fn reset(&mut self) {
        self.target = None;
        self.waypoint = None;
        self.dwell = 0.0;
    }

    #[inline]
    pub fn target(&self) -> Option<Vec3> {
        self.target
    }

    pub fn set_target(&mut self, position: Vec3) {
        self.target = Some(position);
    }

    pub fn clear_target(&mut self) {
        self.target = None;
    }

    #[inline]
    pub fn waypoint(&self) -> Option<(WaypointRef, Waypoint)> {
        self.waypoint
    }

    pub fn set_waypoint(&mut self, id: WaypointRef, waypoint: Waypoint) {
        self.waypoint = Some((id, waypoint));
    }

    /// Seconds spent at the current waypoint.
    #[inline]
    pub fn dwell(&self) -> f32 {
        self.dwell
    }

    #[inline]
    pub fn look_at(&self) -> Vec3 {
        self.look_at
    }

    /// Halt the navigator and face `position` for `stop_and_look_time`.
    /// Calling again restarts the timer.
    pub fn stop_and_look(&mut self, position: Vec3, ctx: &mut StateContext<'_>) {
        self.look_timer = 0.0;
        self.look_at = position;
        ctx.nav.set_stopped(true);
    }

    /// Run the shared cycle.  Returns the waypoint whose dwell just finished.
    pub fn update(&mut self, ctx: &mut StateContext<'_>) -> Option<WaypointRef> {
        let destination = self.target.or(self.waypoint.map(|(_, w)| w.position));
        if let Some(destination) = destination {
            ctx.nav.set_destination(destination);
        }

        if ctx.at_destination() {
            if self.target.is_none() {
                if let Some((id, waypoint)) = self.waypoint {
                    self.dwell += ctx.dt;
                    if self.dwell >= waypoint.stop_time {
                        self.dwell = 0.0;
                        self.waypoint = None;
                        if let WaypointRef::Route(route_id) = id {
                            ctx.emit(BehaviorEvent::WaypointCompleted(route_id));
                        }
                        return Some(id);
                    }
                }
            }
            self.target = None;
        } else {
            self.dwell = 0.0;
        }

        if ctx.nav.is_stopped() {
            self.turn_towards_look_at(ctx);
            self.look_timer += ctx.dt;
            if self.look_timer > ctx.config.stop_and_look_time {
                ctx.nav.set_stopped(false);
            }
        }

        let status = ctx.nav.path_status();
        if status != PathStatus::Complete {
            warn!(?status, target = ?self.target, "path incomplete; dropping target");
            self.target = None;
        }
        None
    }

    fn turn_towards_look_at(&self, ctx: &mut StateContext<'_>) {
        let Some(facing) = look_rotation_flat(ctx.nav.position(), self.look_at) else {
            return;
        };
        let turned = turn_towards(ctx.nav.rotation(), facing, ctx.dt * ctx.config.turn_rate);
        ctx.nav.set_rotation(turned);
    }
}
