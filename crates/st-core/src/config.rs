//! Enemy tuning configuration.
//!
//! All tuning values are read once when the agent is built.  The host usually
//! ships them as a JSON file next to the scene; every field has a default, so
//! a file only needs to name the values it overrides:
//!
//! ```json
//! {
//!   "sight_distance": 14.0,
//!   "sit_duration_min": 5.0,
//!   "sit_duration_max": 8.0,
//!   "route": {
//!     "waypoints": [ { "position": [4.0, 0.0, 2.0], "stop_time": 3.0 } ],
//!     "gun_waypoint": { "position": [0.0, 0.0, -6.0], "stop_time": 1.0 }
//!   }
//! }
//! ```

use std::io::Read;
use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult, WaypointId};

// ── Waypoints ─────────────────────────────────────────────────────────────────

/// A point of interest the enemy walks to and lingers at for `stop_time`
/// seconds.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub position:  Vec3,
    pub stop_time: f32,
}

impl Waypoint {
    pub fn new(position: Vec3, stop_time: f32) -> Self {
        Self { position, stop_time }
    }
}

/// The ordered waypoint set the patrol picks from, plus the optional spot
/// where the enemy keeps its gun.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatrolRoute {
    pub waypoints:    Vec<Waypoint>,
    pub gun_waypoint: Option<Waypoint>,
}

impl PatrolRoute {
    pub fn new(waypoints: Vec<Waypoint>) -> Self {
        Self { waypoints, gun_waypoint: None }
    }

    pub fn with_gun_waypoint(mut self, waypoint: Waypoint) -> Self {
        self.gun_waypoint = Some(waypoint);
        self
    }

    #[inline]
    pub fn get(&self, id: WaypointId) -> Option<&Waypoint> {
        self.waypoints.get(id.index())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }
}

// ── EnemyConfig ───────────────────────────────────────────────────────────────

/// Every tuning value of the enemy, in seconds and world units.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    /// Base raycast range of the eyes.
    pub sight_distance: f32,
    /// Sight range multiplier once the player has been raycast-confirmed.
    pub alert_sight_multiplier: f32,
    /// Height of the eyes above the agent's position.
    pub eye_height: f32,
    /// Cosine threshold of the field-of-view cone.
    pub fov_dot: f32,
    /// Fraction of silhouette samples that must be visible to count as seen.
    pub visibility_threshold: f32,
    /// Within this distance of the eyes the player is seen regardless of
    /// line of sight (unless hiding).
    pub close_distance: f32,
    /// Cosine threshold for "the player is looking at the enemy".
    pub on_screen_dot: f32,
    /// Consecutive hidden physics ticks tolerated before detection stops.
    pub hide_grace_ticks: u32,
    /// Collision layer of the enemy's own colliders (excluded from raycasts).
    pub enemy_layer: u8,

    /// Multiplier on the awareness gain per second of sighting.
    pub awareness_increase_rate: f32,
    /// Multiplier on the awareness loss per second once decay starts.
    pub awareness_decrease_rate: f32,
    /// Gain multiplier while the player is not looking at the enemy.
    pub back_turned_multiplier: f32,
    /// Seconds without a sighting before awareness starts to drain.
    pub awareness_decrease_delay: f32,
    /// Width of the idle band of the awareness meter.
    pub idle_duration: f32,
    /// Width of the warning band of the awareness meter.
    pub warning_duration: f32,

    pub sit_duration_min: f32,
    pub sit_duration_max: f32,
    pub stop_and_look_time: f32,
    /// Angular interpolation rate used while stopped and looking.
    pub turn_rate: f32,
    /// Remaining path distance that counts as arrived.
    pub arrival_epsilon: f32,
    /// Squared speed above which the agent reports itself as moving.
    pub moving_speed_sq: f32,

    pub time_until_shoot: f32,
    pub reload_time: f32,
    /// Seconds between chasing voice lines while armed.
    pub chase_line_interval: f32,

    pub seed: u64,
    pub route: PatrolRoute,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            sight_distance:           12.0,
            alert_sight_multiplier:   2.0,
            eye_height:               1.6,
            fov_dot:                  0.15,
            visibility_threshold:     0.5,
            close_distance:           1.5,
            on_screen_dot:            0.65,
            hide_grace_ticks:         3,
            enemy_layer:              8,
            awareness_increase_rate:  1.0,
            awareness_decrease_rate:  1.0,
            back_turned_multiplier:   0.6,
            awareness_decrease_delay: 0.8,
            idle_duration:            0.4,
            warning_duration:         1.8,
            sit_duration_min:         13.0,
            sit_duration_max:         20.0,
            stop_and_look_time:       2.5,
            turn_rate:                4.5,
            arrival_epsilon:          0.1,
            moving_speed_sq:          0.1,
            time_until_shoot:         1.2,
            reload_time:              1.5,
            chase_line_interval:      6.0,
            seed:                     0,
            route:                    PatrolRoute::default(),
        }
    }
}

impl EnemyConfig {
    /// Top of the awareness meter: `idle_duration + warning_duration`.
    #[inline]
    pub fn awareness_ceiling(&self) -> f32 {
        self.idle_duration + self.warning_duration
    }

    #[inline]
    pub fn close_distance_sq(&self) -> f32 {
        self.close_distance * self.close_distance
    }

    /// Parse a config from any JSON source and validate it.
    pub fn from_json_reader<R: Read>(reader: R) -> CoreResult<Self> {
        let config: EnemyConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the state machine cannot run with.
    pub fn validate(&self) -> CoreResult<()> {
        if self.sit_duration_min < 0.0 || self.sit_duration_max < self.sit_duration_min {
            return Err(CoreError::Config(format!(
                "sit duration range [{}, {}] is invalid",
                self.sit_duration_min, self.sit_duration_max
            )));
        }
        if !(0.0..=1.0).contains(&self.visibility_threshold) {
            return Err(CoreError::Config(format!(
                "visibility_threshold {} must be within [0, 1]",
                self.visibility_threshold
            )));
        }
        if !(-1.0..=1.0).contains(&self.fov_dot) || !(-1.0..=1.0).contains(&self.on_screen_dot) {
            return Err(CoreError::Config("dot-product thresholds must be within [-1, 1]".into()));
        }
        if self.enemy_layer >= 32 {
            return Err(CoreError::Config(format!("enemy_layer {} is not a valid layer", self.enemy_layer)));
        }

        let non_negative = [
            ("sit_duration_min",         self.sit_duration_min),
            ("sit_duration_max",         self.sit_duration_max),
            ("sight_distance",           self.sight_distance),
            ("alert_sight_multiplier",   self.alert_sight_multiplier),
            ("close_distance",           self.close_distance),
            ("awareness_increase_rate",  self.awareness_increase_rate),
            ("awareness_decrease_rate",  self.awareness_decrease_rate),
            ("back_turned_multiplier",   self.back_turned_multiplier),
            ("awareness_decrease_delay", self.awareness_decrease_delay),
            ("idle_duration",            self.idle_duration),
            ("warning_duration",         self.warning_duration),
            ("stop_and_look_time",       self.stop_and_look_time),
            ("turn_rate",                self.turn_rate),
            ("arrival_epsilon",          self.arrival_epsilon),
            ("time_until_shoot",         self.time_until_shoot),
            ("reload_time",              self.reload_time),
            ("chase_line_interval",      self.chase_line_interval),
        ];
        if let Some((name, value)) = non_negative.iter().find(|(_, v)| !(v.is_finite() && *v >= 0.0)) {
            return Err(CoreError::Config(format!("{name} must be finite and non-negative, got {value}")));
        }

        let mut waypoints = self.route.waypoints.iter().chain(self.route.gun_waypoint.iter());
        if waypoints.any(|w| !(w.stop_time.is_finite() && w.stop_time >= 0.0) || !w.position.is_finite()) {
            return Err(CoreError::Config("waypoints need a finite position and stop_time".into()));
        }
        if self.route.waypoints.len() > u16::MAX as usize {
            return Err(CoreError::Config("too many waypoints".into()));
        }
        Ok(())
    }
}

/// Load and validate an [`EnemyConfig`] from a JSON file.
pub fn load_config_json(path: &Path) -> CoreResult<EnemyConfig> {
    let file = std::fs::File::open(path)?;
    EnemyConfig::from_json_reader(std::io::BufReader::new(file))
}
