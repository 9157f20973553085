//! Per-tick view of the agent passed to every state callback.

use glam::Vec3;

use st_core::EnemyConfig;
use st_core::EnemyRng;
use st_perception::Perception;
use st_spatial::NavAgent;
use st_voice::VoiceLine;

use crate::BehaviorEvent;

/// Everything a state may read or drive during one logic tick.
///
/// Built by the agent from disjoint borrows of its own fields, so the state
/// can steer the navigator and draw random numbers while the agent still owns
/// them.
pub struct StateContext<'a> {
    /// Seconds since the previous logic tick.
    pub dt:              f32,
    pub nav:             &'a mut dyn NavAgent,
    pub config:          &'a EnemyConfig,
    pub rng:             &'a mut EnemyRng,
    /// Threshold-and-override result for this tick.
    pub perception:      Perception,
    pub player_position: Vec3,
    /// Where the agent stood when it was built.
    pub start_position:  Vec3,
    events:              &'a mut Vec<BehaviorEvent>,
}

impl<'a> StateContext<'a> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        dt:              f32,
        nav:             &'a mut dyn NavAgent,
        config:          &'a EnemyConfig,
        rng:             &'a mut EnemyRng,
        perception:      Perception,
        player_position: Vec3,
        start_position:  Vec3,
        events:          &'a mut Vec<BehaviorEvent>,
    ) -> Self {
        Self { dt, nav, config, rng, perception, player_position, start_position, events }
    }

    #[inline]
    pub fn sees_player(&self) -> bool {
        self.perception.sees_player
    }

    /// No path, or within `arrival_epsilon` of the end of it.
    pub fn at_destination(&self) -> bool {
        !self.nav.has_path() || self.nav.remaining_distance() <= self.config.arrival_epsilon
    }

    pub fn emit(&mut self, event: BehaviorEvent) {
        self.events.push(event);
    }

    /// Request a voice line from `line`'s pool.
    pub fn say(&mut self, line: VoiceLine) {
        self.emit(BehaviorEvent::Voice(line));
    }
}
