//! `AggroState`: the enemy knows the player is here.
//!
//! # Phases
//!
//! | Phase         | Entry                                  | Exit                                  |
//! |---------------|----------------------------------------|---------------------------------------|
//! | `Alerted`     | state init (stares at the player)      | `stop_and_look_time` elapsed          |
//! | `FetchingGun` | Alerted, when a gun waypoint exists    | dwell at the gun waypoint completes   |
//! | `Armed`       | gun grabbed, or Alerted without a gun  | none                                  |
//!
//! While armed the enemy chases the player's last seen position.  The aim
//! timer runs while the player is seen and resets when they are not; a full
//! aim with a loaded gun fires one `Shot` and starts a reload.
//!
//! Aggro has no exit transition.

use glam::Vec3;
use tracing::{debug, info};

use st_core::HidingSpotId;
use st_voice::VoiceLine;

use crate::{BehaviorEvent, BehaviorState, Locomotion, StateContext, StateId, WaypointRef};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum AggroPhase {
    #[default]
    Alerted,
    FetchingGun,
    Armed,
}

#[derive(Clone, Debug, Default)]
pub struct AggroState {
    loco:         Locomotion,
    phase:        AggroPhase,
    alert_timer:  f32,
    aim_timer:    f32,
    /// Seconds since the last shot; `None` when loaded.
    reloading:    Option<f32>,
    chase_timer:  f32,
    last_known:   Option<Vec3>,
    saw_player:   bool,
    shots:        u32,
}

impl AggroState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn phase(&self) -> AggroPhase {
        self.phase
    }

    #[inline]
    pub fn locomotion(&self) -> &Locomotion {
        &self.loco
    }

    /// Where the player was last seen.
    #[inline]
    pub fn last_known_position(&self) -> Option<Vec3> {
        self.last_known
    }

    /// Shots fired since entering Aggro.
    #[inline]
    pub fn shots(&self) -> u32 {
        self.shots
    }

    /// Progress bar for the current phase: gun pickup while fetching, reload
    /// while armed.
    pub fn aggro_percent(&self, reload_time: f32) -> f32 {
        match self.phase {
            AggroPhase::Alerted => 0.0,
            AggroPhase::FetchingGun => match self.loco.waypoint() {
                Some((_, gun)) if gun.stop_time > 0.0 => (self.loco.dwell() / gun.stop_time).min(1.0),
                _ => 0.0,
            },
            AggroPhase::Armed => match self.reloading {
                None => 1.0,
                Some(_) if reload_time <= 0.0 => 1.0,
                Some(elapsed) => (elapsed / reload_time).min(1.0),
            },
        }
    }

    /// Aim progress towards the next shot.
    pub fn shoot_percent(&self, time_until_shoot: f32) -> f32 {
        if self.phase != AggroPhase::Armed {
            return 0.0;
        }
        if time_until_shoot <= 0.0 {
            return 1.0;
        }
        (self.aim_timer / time_until_shoot).min(1.0)
    }

    fn arm(&mut self) {
        self.phase = AggroPhase::Armed;
        self.aim_timer = 0.0;
        self.chase_timer = 0.0;
        self.reloading = None;
    }

    fn update_alerted(&mut self, ctx: &mut StateContext<'_>) {
        self.alert_timer += ctx.dt;
        if self.alert_timer < ctx.config.stop_and_look_time {
            return;
        }
        match ctx.config.route.gun_waypoint {
            Some(gun) => {
                debug!(position = %gun.position, "fetching gun");
                self.loco.set_waypoint(WaypointRef::Gun, gun);
                self.phase = AggroPhase::FetchingGun;
            }
            None => self.arm(),
        }
    }

    fn update_armed(&mut self, ctx: &mut StateContext<'_>, sees: bool) {
        if sees {
            self.loco.set_target(ctx.player_position);
            self.aim_timer += ctx.dt;
            self.chase_timer += ctx.dt;
            if self.chase_timer >= ctx.config.chase_line_interval {
                self.chase_timer = 0.0;
                ctx.say(VoiceLine::Chasing);
            }
        } else {
            self.aim_timer = 0.0;
        }

        if let Some(elapsed) = self.reloading.as_mut() {
            *elapsed += ctx.dt;
            if *elapsed >= ctx.config.reload_time {
                self.reloading = None;
            }
        }

        if self.reloading.is_none() && self.aim_timer >= ctx.config.time_until_shoot {
            self.shots += 1;
            info!(shots = self.shots, "enemy fired");
            ctx.emit(BehaviorEvent::Shot);
            self.aim_timer = 0.0;
            self.reloading = Some(0.0);
        }
    }
}

impl BehaviorState for AggroState {
    fn id(&self) -> StateId {
        StateId::Aggro
    }

    fn init(&mut self, ctx: &mut StateContext<'_>) {
        self.loco.reset();
        self.phase = AggroPhase::Alerted;
        self.alert_timer = 0.0;
        self.aim_timer = 0.0;
        self.reloading = None;
        self.chase_timer = 0.0;
        self.shots = 0;
        self.last_known = Some(ctx.player_position);
        self.saw_player = ctx.sees_player();
        let player = ctx.player_position;
        self.loco.stop_and_look(player, ctx);
        ctx.say(VoiceLine::Alerted);
    }

    fn update(&mut self, ctx: &mut StateContext<'_>) -> Option<StateId> {
        if let Some(done) = self.loco.update(ctx) {
            self.on_waypoint_complete(done, ctx);
        }

        let sees = ctx.sees_player();
        if sees {
            self.last_known = Some(ctx.player_position);
        }

        match self.phase {
            AggroPhase::Alerted => self.update_alerted(ctx),
            AggroPhase::FetchingGun => {}
            AggroPhase::Armed => self.update_armed(ctx, sees),
        }
        self.saw_player = sees;
        None
    }

    fn on_waypoint_complete(&mut self, waypoint: WaypointRef, ctx: &mut StateContext<'_>) {
        if waypoint == WaypointRef::Gun && self.phase == AggroPhase::FetchingGun {
            ctx.say(VoiceLine::GrabbingGun);
            ctx.emit(BehaviorEvent::GunGrabbed);
            self.arm();
        }
    }

    fn on_distract(&mut self, position: Vec3, _ctx: &mut StateContext<'_>) {
        if self.phase == AggroPhase::Armed && !self.saw_player {
            self.loco.set_target(position);
        }
    }

    fn on_entered_hiding_spot(
        &mut self,
        spot:     HidingSpotId,
        position: Vec3,
        ctx:      &mut StateContext<'_>,
    ) {
        if ctx.sees_player() {
            debug!(%spot, %position, "saw the player hide");
            self.last_known = Some(position);
            self.loco.set_target(position);
        }
    }
}
