//! The `Enemy` struct and its physics and logic ticks.

use std::collections::VecDeque;

use glam::Vec3;
use tracing::{debug, info};

use st_behavior::{
    AggroState, Awareness, BehaviorEvent, BehaviorState, PatrolState, StateContext, StateId,
};
use st_core::{EnemyConfig, EnemyRng, FrameClock, HidingSpotId};
use st_perception::{Perception, PerceptionSampler, PlayerView, SightRange, Sighting};
use st_spatial::{NavAgent, VisibilityProbe};
use st_voice::{AudioSink, VoiceCatalog, VoiceDirector};

use crate::{EnemyObserver, EnemyStatus, InstanceClaim, WorldEvent};

/// The enemy agent.
///
/// Owns its navigator, raycast probe, audio sink, both behavior states, and
/// the voice scheduler.  Create via [`EnemyBuilder`][crate::EnemyBuilder].
pub struct Enemy<N: NavAgent, P: VisibilityProbe, A: AudioSink> {
    config:         EnemyConfig,
    nav:            N,
    probe:          P,
    audio:          A,
    rng:            EnemyRng,
    clock:          FrameClock,

    sampler:        PerceptionSampler,
    sight:          SightRange,
    perception:     Perception,
    moving:         bool,

    patrol:         PatrolState,
    aggro:          AggroState,
    active:         StateId,
    start_position: Vec3,

    voice:          VoiceDirector,
    world:          VecDeque<WorldEvent>,
    effects:        Vec<BehaviorEvent>,
    stun_remaining: f32,

    _claim:         InstanceClaim,
}

impl<N: NavAgent, P: VisibilityProbe, A: AudioSink> Enemy<N, P, A> {
    pub(crate) fn new(
        config:  EnemyConfig,
        nav:     N,
        probe:   P,
        audio:   A,
        catalog: VoiceCatalog,
        claim:   InstanceClaim,
    ) -> Self {
        let start_position = nav.position();
        let mut enemy = Self {
            rng:            EnemyRng::new(config.seed),
            clock:          FrameClock::new(),
            sampler:        PerceptionSampler::from_config(&config),
            sight:          SightRange::new(config.sight_distance, config.alert_sight_multiplier),
            perception:     Perception::default(),
            moving:         false,
            patrol:         PatrolState::new(Awareness::from_config(&config)),
            aggro:          AggroState::new(),
            active:         StateId::Patrol,
            start_position,
            voice:          VoiceDirector::new(catalog),
            world:          VecDeque::new(),
            effects:        Vec::new(),
            stun_remaining: 0.0,
            _claim:         claim,
            config,
            nav,
            probe,
            audio,
        };

        let mut ctx = StateContext::new(
            0.0,
            &mut enemy.nav,
            &enemy.config,
            &mut enemy.rng,
            Perception::default(),
            Vec3::ZERO,
            start_position,
            &mut enemy.effects,
        );
        enemy.patrol.init(&mut ctx);
        info!(position = %start_position, "enemy spawned in patrol");
        enemy
    }

    // ── Ticks ─────────────────────────────────────────────────────────────

    /// Physics-rate visibility sweep.
    pub fn physics_tick(&mut self, player: &PlayerView) -> Sighting {
        let position = self.nav.position();
        let forward = self.nav.forward();
        let eye = self.eye_position();
        self.sampler
            .sample(&self.probe, position, forward, eye, self.sight.current(), player)
    }

    /// Logic-rate update.  See the crate docs for the phase order.
    pub fn tick<O: EnemyObserver>(&mut self, dt: f32, player: &PlayerView, observer: &mut O) {
        self.clock.advance(dt);
        let dt = self.clock.last_dt;
        let now = self.clock.elapsed;

        // ① Perceive
        let eye = self.eye_position();
        self.perception = self.sampler.evaluate(eye, player);
        self.moving = !self.nav.is_stopped()
            && self.nav.velocity().length_squared() > self.config.moving_speed_sq;
        self.sight.update(self.sampler.last().confirmed, dt);

        // ② Stun
        if self.stun_remaining > 0.0 {
            self.stun_remaining -= dt;
            if self.stun_remaining <= 0.0 {
                self.stun_remaining = 0.0;
                self.nav.set_stopped(false);
                info!("stun wore off");
            } else {
                self.nav.set_stopped(true);
            }
            if !self.world.is_empty() {
                debug!(dropped = self.world.len(), "stunned; ignoring world events");
                self.world.clear();
            }
        } else {
            let mut ctx = StateContext::new(
                dt,
                &mut self.nav,
                &self.config,
                &mut self.rng,
                self.perception,
                player.position,
                self.start_position,
                &mut self.effects,
            );
            let state: &mut dyn BehaviorState = match self.active {
                StateId::Patrol => &mut self.patrol,
                StateId::Aggro => &mut self.aggro,
            };

            // ③ World
            while let Some(event) = self.world.pop_front() {
                match event {
                    WorldEvent::Distract(position) => state.on_distract(position, &mut ctx),
                    WorldEvent::EnteredHidingSpot { spot, position } => {
                        state.on_entered_hiding_spot(spot, position, &mut ctx)
                    }
                }
            }

            // ④ Behavior
            let requested = state.update(&mut ctx);
            if let Some(next) = requested.filter(|&next| next != self.active) {
                let from = self.active;
                self.active = next;
                info!(%from, to = %next, at = %self.clock, "behavior state changed");
                match next {
                    StateId::Patrol => self.patrol.init(&mut ctx),
                    StateId::Aggro => self.aggro.init(&mut ctx),
                }
                observer.on_state_changed(from, next);
            }
        }

        // ⑤ Effects
        for effect in self.effects.drain(..) {
            match effect {
                BehaviorEvent::Voice(line) => {
                    self.voice.request_line(line, now, &mut self.rng, &mut self.audio);
                }
                BehaviorEvent::WaypointCompleted(id) => observer.on_waypoint_complete(id),
                BehaviorEvent::GunGrabbed => observer.on_gun_grabbed(),
                BehaviorEvent::Shot => observer.on_shot(),
            }
        }

        // ⑥ Voice
        self.voice.drain(now, &mut self.audio);
        for clip in self.voice.take_started() {
            observer.on_voice_line(&clip);
        }

        // ⑦ Navigate
        self.nav.advance(dt);

        observer.on_tick_end(&self.status());
    }

    /// One physics sweep followed by one logic tick.
    pub fn step<O: EnemyObserver>(&mut self, dt: f32, player: &PlayerView, observer: &mut O) {
        self.physics_tick(player);
        self.tick(dt, player, observer);
    }

    // ── World entry points ────────────────────────────────────────────────

    /// A prop made noise at `position`.  Delivered on the next logic tick.
    pub fn distract(&mut self, position: Vec3) {
        self.world.push_back(WorldEvent::Distract(position));
    }

    /// The player entered hiding spot `spot` at `position`.  Delivered on the
    /// next logic tick.
    pub fn notify_entered_hiding_spot(&mut self, spot: HidingSpotId, position: Vec3) {
        self.world.push_back(WorldEvent::EnteredHidingSpot { spot, position });
    }

    /// Halt the enemy for `duration` seconds.  A longer running stun is not
    /// shortened.
    pub fn stun(&mut self, duration: f32) {
        if duration <= 0.0 {
            return;
        }
        self.stun_remaining = self.stun_remaining.max(duration);
        self.nav.set_stopped(true);
        info!(duration, "enemy stunned");
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn state_id(&self) -> StateId {
        self.active
    }

    pub fn percent_visible(&self) -> f32 {
        self.perception.percent_visible
    }

    pub fn sees_player(&self) -> bool {
        self.perception.sees_player
    }

    pub fn moving(&self) -> bool {
        self.moving
    }

    pub fn stunned(&self) -> bool {
        self.stun_remaining > 0.0
    }

    /// Current raycast range.
    pub fn sight_distance(&self) -> f32 {
        self.sight.current()
    }

    /// Patrol's awareness meter, while patrolling.
    pub fn awareness(&self) -> Option<&Awareness> {
        (self.active == StateId::Patrol).then(|| self.patrol.awareness())
    }

    pub fn aggro_percent(&self) -> f32 {
        match self.active {
            StateId::Aggro => self.aggro.aggro_percent(self.config.reload_time),
            StateId::Patrol => 0.0,
        }
    }

    pub fn shoot_percent(&self) -> f32 {
        match self.active {
            StateId::Aggro => self.aggro.shoot_percent(self.config.time_until_shoot),
            StateId::Patrol => 0.0,
        }
    }

    pub fn patrol(&self) -> &PatrolState {
        &self.patrol
    }

    pub fn aggro(&self) -> &AggroState {
        &self.aggro
    }

    pub fn start_position(&self) -> Vec3 {
        self.start_position
    }

    pub fn eye_position(&self) -> Vec3 {
        self.nav.position() + Vec3::Y * self.config.eye_height
    }

    pub fn config(&self) -> &EnemyConfig {
        &self.config
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    pub fn nav(&self) -> &N {
        &self.nav
    }

    /// The probe, e.g. to move dynamic colliders between ticks.
    pub fn probe_mut(&mut self) -> &mut P {
        &mut self.probe
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn voice(&self) -> &VoiceDirector {
        &self.voice
    }

    pub fn status(&self) -> EnemyStatus {
        EnemyStatus {
            frame:             self.clock.frame,
            elapsed:           self.clock.elapsed,
            state:             self.active,
            position:          self.nav.position(),
            percent_visible:   self.perception.percent_visible,
            sees_player:       self.perception.sees_player,
            enemy_on_screen:   self.perception.enemy_on_screen,
            moving:            self.moving,
            awareness:         self.awareness().map(Awareness::value),
            awareness_ceiling: self.config.awareness_ceiling(),
            aggro_percent:     self.aggro_percent(),
            shoot_percent:     self.shoot_percent(),
            stunned:           self.stunned(),
        }
    }
}
