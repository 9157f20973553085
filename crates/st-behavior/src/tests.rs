//! Unit tests for st-behavior.

use glam::Vec3;

use st_core::{EnemyConfig, EnemyRng, PatrolRoute, Waypoint, WaypointId};
use st_perception::Perception;
use st_spatial::{KinematicNav, NavAgent};
use st_voice::VoiceLine;

use crate::{
    AggroPhase, AggroState, Awareness, BehaviorEvent, BehaviorState, Locomotion, PatrolState,
    StateContext, StateId, WaypointRef,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

const PLAYER: Vec3 = Vec3::new(0.0, 0.0, 5.0);

fn perception(sees: bool, on_screen: bool) -> Perception {
    Perception {
        percent_visible: if sees { 1.0 } else { 0.0 },
        sees_player:     sees,
        enemy_on_screen: on_screen,
        close:           false,
    }
}

/// Owns everything a `StateContext` borrows.
struct Rig {
    nav:    KinematicNav,
    config: EnemyConfig,
    rng:    EnemyRng,
    events: Vec<BehaviorEvent>,
    start:  Vec3,
}

impl Rig {
    fn new(config: EnemyConfig) -> Self {
        Self {
            nav:    KinematicNav::new(Vec3::ZERO, 2.0),
            rng:    EnemyRng::new(config.seed),
            config,
            events: Vec::new(),
            start:  Vec3::ZERO,
        }
    }

    fn ctx(&mut self, dt: f32, sees: bool) -> StateContext<'_> {
        StateContext::new(
            dt,
            &mut self.nav,
            &self.config,
            &mut self.rng,
            perception(sees, true),
            PLAYER,
            self.start,
            &mut self.events,
        )
    }

    fn init<S: BehaviorState>(&mut self, state: &mut S, sees: bool) {
        let mut ctx = self.ctx(0.0, sees);
        state.init(&mut ctx);
    }

    /// One logic tick followed by one navigator step.
    fn step<S: BehaviorState>(&mut self, state: &mut S, dt: f32, sees: bool) -> Option<StateId> {
        let next = {
            let mut ctx = self.ctx(dt, sees);
            state.update(&mut ctx)
        };
        self.nav.advance(dt);
        next
    }

    fn take_events(&mut self) -> Vec<BehaviorEvent> {
        std::mem::take(&mut self.events)
    }
}

fn quiet_config() -> EnemyConfig {
    EnemyConfig { sit_duration_min: 1.0, sit_duration_max: 1.0, ..EnemyConfig::default() }
}

fn patrol(config: &EnemyConfig) -> PatrolState {
    PatrolState::new(Awareness::from_config(config))
}

// ── Awareness ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod awareness {
    use super::*;

    fn meter() -> Awareness {
        Awareness::from_config(&EnemyConfig::default())
    }

    #[test]
    fn fills_to_ceiling_and_stays_clamped() {
        let mut a = meter();
        for _ in 0..100 {
            let v = a.integrate(true, true, 0.1);
            assert!((0.0..=a.ceiling()).contains(&v));
        }
        assert_eq!(a.value(), a.ceiling());
        assert!(a.at_ceiling());
        assert_eq!(a.fraction(), 1.0);
    }

    #[test]
    fn never_negative() {
        let mut a = meter();
        for _ in 0..50 {
            assert_eq!(a.integrate(false, true, 0.1), 0.0);
        }
    }

    #[test]
    fn short_gap_does_not_decay() {
        let mut a = meter();
        for _ in 0..4 {
            a.integrate(true, true, 0.25);
        }
        let before = a.value();
        assert_eq!(before, 1.0);
        // 0.5 s unseen, shorter than the 0.8 s grace delay.
        for _ in 0..2 {
            a.integrate(false, true, 0.25);
        }
        assert_eq!(a.value(), before);
        assert_eq!(a.since_seen(), 0.5);
        a.integrate(true, true, 0.25);
        assert_eq!(a.since_seen(), 0.0);
    }

    #[test]
    fn decays_after_grace_delay() {
        let mut a = meter();
        for _ in 0..4 {
            a.integrate(true, true, 0.25);
        }
        for _ in 0..8 {
            a.integrate(false, true, 0.25);
        }
        assert!(a.value() < 1.0);
        for _ in 0..20 {
            a.integrate(false, true, 0.25);
        }
        assert_eq!(a.value(), 0.0);
    }

    #[test]
    fn back_turned_fills_slower() {
        let mut a = meter();
        for _ in 0..4 {
            a.integrate(true, false, 0.25);
        }
        assert!((a.value() - 0.6).abs() < 1e-5);
    }

    #[test]
    fn rate_multipliers_are_applied() {
        let config = EnemyConfig {
            awareness_increase_rate: 2.0,
            awareness_decrease_rate: 4.0,
            awareness_decrease_delay: 0.0,
            ..EnemyConfig::default()
        };
        let mut a = Awareness::from_config(&config);
        for _ in 0..4 {
            a.integrate(true, true, 0.25);
        }
        assert_eq!(a.value(), 2.0);
        a.integrate(false, true, 0.25);
        assert_eq!(a.value(), 1.0);
    }

    #[test]
    fn warning_band() {
        let mut a = meter();
        a.integrate(true, true, 0.25);
        assert!(!a.warning());
        a.integrate(true, true, 0.25);
        assert!(a.warning());
        a.reset();
        assert_eq!(a.value(), 0.0);
        assert!(!a.warning());
    }
}

// ── Locomotion ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod locomotion {
    use super::*;

    #[test]
    fn dwell_completes_exactly_once_at_stop_time() {
        let mut rig = Rig::new(EnemyConfig::default());
        let mut loco = Locomotion::new();
        loco.set_waypoint(WaypointRef::Route(WaypointId(2)), Waypoint::new(Vec3::ZERO, 1.0));

        let mut completed_at = Vec::new();
        for tick in 1..=20 {
            let mut ctx = rig.ctx(0.25, false);
            if loco.update(&mut ctx).is_some() {
                completed_at.push(tick);
            }
        }
        assert_eq!(completed_at, vec![4]);
        assert_eq!(rig.take_events(), vec![BehaviorEvent::WaypointCompleted(WaypointId(2))]);
        assert!(loco.waypoint().is_none());
        assert_eq!(loco.dwell(), 0.0);
    }

    #[test]
    fn gun_waypoint_completion_emits_no_route_event() {
        let mut rig = Rig::new(EnemyConfig::default());
        let mut loco = Locomotion::new();
        loco.set_waypoint(WaypointRef::Gun, Waypoint::new(Vec3::ZERO, 0.0));
        let mut ctx = rig.ctx(0.25, false);
        assert_eq!(loco.update(&mut ctx), Some(WaypointRef::Gun));
        assert!(rig.take_events().is_empty());
    }

    #[test]
    fn target_beats_waypoint() {
        let mut rig = Rig::new(EnemyConfig::default());
        let mut loco = Locomotion::new();
        loco.set_waypoint(WaypointRef::Route(WaypointId(0)), Waypoint::new(Vec3::X * 5.0, 1.0));
        loco.set_target(Vec3::Z * 3.0);
        let mut ctx = rig.ctx(0.1, false);
        loco.update(&mut ctx);
        assert_eq!(rig.nav.destination(), Some(Vec3::Z * 3.0));
    }

    #[test]
    fn arrival_consumes_target() {
        let mut rig = Rig::new(EnemyConfig::default());
        let mut loco = Locomotion::new();
        loco.set_target(Vec3::ZERO);
        let mut ctx = rig.ctx(0.1, false);
        loco.update(&mut ctx);
        assert!(loco.target().is_none());
    }

    #[test]
    fn leaving_the_waypoint_resets_dwell() {
        let mut rig = Rig::new(EnemyConfig::default());
        let mut loco = Locomotion::new();
        loco.set_waypoint(WaypointRef::Route(WaypointId(0)), Waypoint::new(Vec3::ZERO, 5.0));
        for _ in 0..2 {
            let mut ctx = rig.ctx(0.25, false);
            loco.update(&mut ctx);
        }
        assert_eq!(loco.dwell(), 0.5);
        rig.nav.warp(Vec3::X * 3.0);
        let mut ctx = rig.ctx(0.25, false);
        loco.update(&mut ctx);
        assert_eq!(loco.dwell(), 0.0);
    }

    #[test]
    fn stop_and_look_turns_then_resumes() {
        let mut rig = Rig::new(EnemyConfig::default());
        let mut loco = Locomotion::new();
        {
            let mut ctx = rig.ctx(0.0, false);
            loco.stop_and_look(Vec3::X * 5.0, &mut ctx);
        }
        assert!(rig.nav.is_stopped());
        for _ in 0..10 {
            let mut ctx = rig.ctx(0.1, false);
            loco.update(&mut ctx);
        }
        assert!(rig.nav.is_stopped());
        assert!(rig.nav.forward().x > 0.99);
        for _ in 0..20 {
            let mut ctx = rig.ctx(0.1, false);
            loco.update(&mut ctx);
        }
        assert!(!rig.nav.is_stopped());
    }

    #[test]
    fn incomplete_path_drops_target() {
        let mut rig = Rig::new(EnemyConfig::default());
        rig.nav = KinematicNav::new(Vec3::ZERO, 2.0)
            .with_walkable_area(Vec3::splat(-1.0), Vec3::splat(1.0));
        let mut loco = Locomotion::new();
        loco.set_target(Vec3::X * 5.0);
        let mut ctx = rig.ctx(0.1, false);
        assert!(loco.update(&mut ctx).is_none());
        assert!(loco.target().is_none());
    }
}

// ── PatrolState ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod patrol {
    use super::*;

    fn route_config() -> EnemyConfig {
        EnemyConfig {
            route: PatrolRoute::new(vec![Waypoint::new(Vec3::X * 4.0, 0.5)]),
            ..quiet_config()
        }
    }

    #[test]
    fn init_draws_sit_duration_within_bounds() {
        let config = EnemyConfig::default();
        let mut rig = Rig::new(config.clone());
        let mut state = patrol(&config);
        for _ in 0..20 {
            rig.init(&mut state, false);
            let (timer, duration) = state.sitting();
            assert_eq!(timer, 0.0);
            assert!((13.0..=20.0).contains(&duration));
        }
    }

    #[test]
    fn sits_then_visits_waypoint_then_returns_home() {
        let config = route_config();
        let mut rig = Rig::new(config.clone());
        let mut state = patrol(&config);
        rig.init(&mut state, false);

        for _ in 0..3 {
            rig.step(&mut state, 0.25, false);
        }
        assert!(!state.going_to_waypoint());
        rig.step(&mut state, 0.25, false);
        assert!(state.going_to_waypoint());

        let mut events = Vec::new();
        for _ in 0..40 {
            assert_eq!(rig.step(&mut state, 0.25, false), None);
            events.extend(rig.take_events());
            if events.contains(&BehaviorEvent::Voice(VoiceLine::WatchingTv)) {
                break;
            }
        }
        assert_eq!(
            events,
            vec![
                BehaviorEvent::WaypointCompleted(WaypointId(0)),
                BehaviorEvent::Voice(VoiceLine::WatchingTv),
            ]
        );
        assert_eq!(rig.nav.position(), Vec3::ZERO);
        assert!(!state.going_to_waypoint());
    }

    #[test]
    fn empty_route_keeps_sitting() {
        let config = EnemyConfig { sit_duration_min: 0.5, sit_duration_max: 0.5, ..EnemyConfig::default() };
        let mut rig = Rig::new(config.clone());
        let mut state = patrol(&config);
        rig.init(&mut state, false);
        for _ in 0..30 {
            assert_eq!(rig.step(&mut state, 0.1, false), None);
        }
        assert!(!state.going_to_waypoint());
        assert!(rig.take_events().is_empty());
    }

    #[test]
    fn spotting_the_player_speaks_once_and_stares() {
        let config = quiet_config();
        let mut rig = Rig::new(config.clone());
        let mut state = patrol(&config);
        rig.init(&mut state, false);
        for _ in 0..5 {
            rig.step(&mut state, 0.1, true);
        }
        assert_eq!(rig.take_events(), vec![BehaviorEvent::Voice(VoiceLine::SpotPlayer)]);
        assert!(rig.nav.is_stopped());
        assert_eq!(state.locomotion().look_at(), PLAYER);

        // Losing and regaining sight is a new sighting.
        rig.step(&mut state, 0.1, false);
        rig.step(&mut state, 0.1, true);
        assert_eq!(rig.take_events(), vec![BehaviorEvent::Voice(VoiceLine::SpotPlayer)]);
    }

    #[test]
    fn full_awareness_requests_aggro_at_ceiling() {
        let config = quiet_config();
        let mut rig = Rig::new(config.clone());
        let mut state = patrol(&config);
        rig.init(&mut state, false);

        let dt = 0.02;
        let mut first = None;
        for tick in 1..=200 {
            if rig.step(&mut state, dt, true) == Some(StateId::Aggro) {
                first = Some(tick);
                break;
            }
        }
        let t = first.expect("never escalated") as f32 * dt;
        assert!((2.18..=2.26).contains(&t), "escalated at {t}");
        assert!(state.awareness().at_ceiling());
    }

    #[test]
    fn distraction_sets_target_and_alerts() {
        let config = quiet_config();
        let mut rig = Rig::new(config.clone());
        let mut state = patrol(&config);
        rig.init(&mut state, false);
        {
            let mut ctx = rig.ctx(0.0, false);
            state.on_distract(Vec3::X * 3.0, &mut ctx);
        }
        assert_eq!(state.locomotion().target(), Some(Vec3::X * 3.0));
        assert_eq!(rig.take_events(), vec![BehaviorEvent::Voice(VoiceLine::Alerted)]);
        rig.step(&mut state, 0.1, false);
        assert_eq!(rig.nav.destination(), Some(Vec3::X * 3.0));
    }
}

// ── AggroState ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod aggro {
    use super::*;

    fn armed_after_alert(rig: &mut Rig, state: &mut AggroState) {
        rig.init(state, true);
        for _ in 0..10 {
            rig.step(state, 0.25, true);
        }
    }

    #[test]
    fn init_stares_and_alerts() {
        let mut rig = Rig::new(EnemyConfig::default());
        let mut state = AggroState::new();
        rig.init(&mut state, true);
        assert_eq!(state.phase(), AggroPhase::Alerted);
        assert!(rig.nav.is_stopped());
        assert_eq!(state.last_known_position(), Some(PLAYER));
        assert_eq!(rig.take_events(), vec![BehaviorEvent::Voice(VoiceLine::Alerted)]);
    }

    #[test]
    fn never_leaves_aggro() {
        let mut rig = Rig::new(EnemyConfig::default());
        let mut state = AggroState::new();
        rig.init(&mut state, true);
        for i in 0..200 {
            assert_eq!(rig.step(&mut state, 0.1, i % 3 == 0), None);
        }
    }

    #[test]
    fn without_gun_arms_after_stare() {
        let mut rig = Rig::new(EnemyConfig::default());
        let mut state = AggroState::new();
        rig.init(&mut state, true);
        for _ in 0..9 {
            rig.step(&mut state, 0.25, true);
        }
        assert_eq!(state.phase(), AggroPhase::Alerted);
        rig.step(&mut state, 0.25, true);
        assert_eq!(state.phase(), AggroPhase::Armed);
        assert_eq!(state.aggro_percent(rig.config.reload_time), 1.0);
    }

    #[test]
    fn shoots_then_reloads() {
        let mut rig = Rig::new(EnemyConfig::default());
        let mut state = AggroState::new();
        armed_after_alert(&mut rig, &mut state);
        rig.take_events();

        let mut shot_ticks = Vec::new();
        for tick in 1..=20 {
            rig.step(&mut state, 0.25, true);
            if rig.take_events().contains(&BehaviorEvent::Shot) {
                shot_ticks.push(tick);
            }
        }
        assert_eq!(shot_ticks, vec![5, 11, 17]);
        assert_eq!(state.shots(), 3);
    }

    #[test]
    fn aim_and_reload_progress() {
        let config = EnemyConfig::default();
        let mut rig = Rig::new(config.clone());
        let mut state = AggroState::new();
        armed_after_alert(&mut rig, &mut state);

        rig.step(&mut state, 0.25, true);
        assert!((state.shoot_percent(config.time_until_shoot) - 0.25 / 1.2).abs() < 1e-5);
        rig.step(&mut state, 0.25, false);
        assert_eq!(state.shoot_percent(config.time_until_shoot), 0.0);

        for _ in 0..5 {
            rig.step(&mut state, 0.25, true);
        }
        assert_eq!(state.shots(), 1);
        assert_eq!(state.aggro_percent(config.reload_time), 0.0);
        rig.step(&mut state, 0.25, true);
        assert!((state.aggro_percent(config.reload_time) - 0.25 / 1.5).abs() < 1e-5);
    }

    #[test]
    fn fetches_gun_before_arming() {
        let config = EnemyConfig {
            route: PatrolRoute::default().with_gun_waypoint(Waypoint::new(Vec3::ZERO, 1.0)),
            ..EnemyConfig::default()
        };
        let mut rig = Rig::new(config.clone());
        let mut state = AggroState::new();
        armed_after_alert(&mut rig, &mut state);
        assert_eq!(state.phase(), AggroPhase::FetchingGun);
        rig.take_events();

        rig.step(&mut state, 0.25, true);
        assert_eq!(state.aggro_percent(config.reload_time), 0.25);
        rig.step(&mut state, 0.25, true);
        rig.step(&mut state, 0.25, true);
        assert_eq!(state.phase(), AggroPhase::FetchingGun);
        rig.step(&mut state, 0.25, true);
        assert_eq!(state.phase(), AggroPhase::Armed);
        assert_eq!(
            rig.take_events(),
            vec![BehaviorEvent::Voice(VoiceLine::GrabbingGun), BehaviorEvent::GunGrabbed]
        );
    }

    #[test]
    fn chasing_lines_repeat_on_interval() {
        let config = EnemyConfig { chase_line_interval: 1.0, ..EnemyConfig::default() };
        let mut rig = Rig::new(config);
        let mut state = AggroState::new();
        armed_after_alert(&mut rig, &mut state);
        rig.take_events();
        for _ in 0..10 {
            rig.step(&mut state, 0.25, true);
        }
        let chasing = rig
            .take_events()
            .into_iter()
            .filter(|e| *e == BehaviorEvent::Voice(VoiceLine::Chasing))
            .count();
        assert_eq!(chasing, 2);
    }

    #[test]
    fn armed_enemy_chases_player() {
        let mut rig = Rig::new(EnemyConfig::default());
        let mut state = AggroState::new();
        armed_after_alert(&mut rig, &mut state);
        rig.step(&mut state, 0.25, true);
        assert_eq!(state.locomotion().target(), Some(PLAYER));
        rig.step(&mut state, 0.25, true);
        assert_eq!(rig.nav.destination(), Some(PLAYER));
    }

    #[test]
    fn seen_hiding_becomes_target() {
        let mut rig = Rig::new(EnemyConfig::default());
        let mut state = AggroState::new();
        rig.init(&mut state, true);
        let spot = Vec3::new(2.0, 0.0, 6.0);
        {
            let mut ctx = rig.ctx(0.0, false);
            state.on_entered_hiding_spot(st_core::HidingSpotId(1), spot, &mut ctx);
        }
        assert!(state.locomotion().target().is_none());
        {
            let mut ctx = rig.ctx(0.0, true);
            state.on_entered_hiding_spot(st_core::HidingSpotId(1), spot, &mut ctx);
        }
        assert_eq!(state.locomotion().target(), Some(spot));
        assert_eq!(state.last_known_position(), Some(spot));
    }
}
