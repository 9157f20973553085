//! `PatrolState`: sit, wander to a random waypoint, come back, repeat.
//!
//! # Timeline
//!
//! ```text
//! sit (random duration) ─▶ walk to random waypoint ─▶ dwell ─▶ walk home ─┐
//!   ▲                                                                     │
//!   └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Running alongside: the awareness meter fills while the player is seen and
//! the enemy stops to stare at them.  A full meter hands over to Aggro.

use glam::Vec3;
use tracing::{debug, warn};

use st_core::WaypointId;
use st_voice::VoiceLine;

use crate::{Awareness, BehaviorState, Locomotion, StateContext, StateId, WaypointRef};

#[derive(Clone, Debug)]
pub struct PatrolState {
    loco:              Locomotion,
    awareness:         Awareness,
    going_to_waypoint: bool,
    sitting_timer:     f32,
    sitting_duration:  f32,
    /// Set when a waypoint completes; cleared on the first sit back home.
    returning_home:    bool,
    saw_player:        bool,
}

impl PatrolState {
    pub fn new(awareness: Awareness) -> Self {
        Self {
            loco:              Locomotion::new(),
            awareness,
            going_to_waypoint: false,
            sitting_timer:     0.0,
            sitting_duration:  0.0,
            returning_home:    false,
            saw_player:        false,
        }
    }

    #[inline]
    pub fn awareness(&self) -> &Awareness {
        &self.awareness
    }

    #[inline]
    pub fn locomotion(&self) -> &Locomotion {
        &self.loco
    }

    #[inline]
    pub fn going_to_waypoint(&self) -> bool {
        self.going_to_waypoint
    }

    /// Seconds sat so far and the length of the current sit.
    #[inline]
    pub fn sitting(&self) -> (f32, f32) {
        (self.sitting_timer, self.sitting_duration)
    }

    fn draw_sit_duration(ctx: &mut StateContext<'_>) -> f32 {
        ctx.rng.between(ctx.config.sit_duration_min, ctx.config.sit_duration_max)
    }

    fn sit(&mut self, ctx: &mut StateContext<'_>) {
        if self.returning_home && self.loco.target().is_none() {
            self.returning_home = false;
            ctx.say(VoiceLine::WatchingTv);
        }

        self.sitting_timer += ctx.dt;
        if self.sitting_timer < self.sitting_duration {
            return;
        }
        self.sitting_timer = 0.0;
        self.sitting_duration = Self::draw_sit_duration(ctx);

        let route = &ctx.config.route;
        let Some(index) = ctx.rng.index(route.len()) else {
            warn!("patrol route has no waypoints; sitting again");
            return;
        };
        let Ok(id) = WaypointId::try_from(index) else {
            return;
        };
        let Some(&waypoint) = route.get(id) else {
            return;
        };
        debug!(%id, position = %waypoint.position, "patrol heading to waypoint");
        self.loco.set_waypoint(WaypointRef::Route(id), waypoint);
        self.going_to_waypoint = true;
    }
}

impl BehaviorState for PatrolState {
    fn id(&self) -> StateId {
        StateId::Patrol
    }

    fn init(&mut self, ctx: &mut StateContext<'_>) {
        self.loco.reset();
        self.awareness.reset();
        self.going_to_waypoint = false;
        self.sitting_timer = 0.0;
        self.sitting_duration = Self::draw_sit_duration(ctx);
        self.returning_home = false;
        self.saw_player = false;
    }

    fn update(&mut self, ctx: &mut StateContext<'_>) -> Option<StateId> {
        if let Some(done) = self.loco.update(ctx) {
            self.on_waypoint_complete(done, ctx);
        }

        let sees = ctx.sees_player();
        self.awareness.integrate(sees, ctx.perception.enemy_on_screen, ctx.dt);

        if !self.going_to_waypoint && ctx.at_destination() {
            self.sit(ctx);
        }

        if sees {
            if !self.saw_player {
                ctx.say(VoiceLine::SpotPlayer);
            }
            let player = ctx.player_position;
            self.loco.stop_and_look(player, ctx);
        }
        self.saw_player = sees;

        self.awareness.at_ceiling().then_some(StateId::Aggro)
    }

    fn on_waypoint_complete(&mut self, _waypoint: WaypointRef, ctx: &mut StateContext<'_>) {
        self.going_to_waypoint = false;
        self.returning_home = true;
        self.loco.set_target(ctx.start_position);
    }

    fn on_distract(&mut self, position: Vec3, ctx: &mut StateContext<'_>) {
        debug!(%position, "patrol distracted");
        self.loco.set_target(position);
        ctx.say(VoiceLine::Alerted);
    }
}
