//! Visibility sampling.
//!
//! # Physics tick ([`PerceptionSampler::sample`])
//!
//! 1. Field of view: if `dot(agent_forward, dir(agent → player)) < fov_dot`
//!    the player is not visible at all.
//! 2. Hiding: consecutive hidden ticks are counted; once the count exceeds
//!    `hide_grace_ticks` nothing is seen.  The count resets as soon as the
//!    player leaves the hiding spot.  The first few hidden ticks still
//!    sample, so the enemy can notice the player slipping into a wardrobe.
//! 3. One ray per silhouette point, from the eyes, limited to the current
//!    sight range, ignoring the enemy's own layer and hitting triggers.  A
//!    point counts only if the first collider hit is tagged `Player`.
//! 4. `percent_visible = hits / points`.
//!
//! # Logic tick ([`PerceptionSampler::evaluate`])
//!
//! `sees_player = percent_visible >= visibility_threshold`, then the close
//! range override: a non-hidden player whose camera is within
//! `close_distance` of the eyes is fully seen regardless of line of sight.

use glam::Vec3;
use tracing::trace;

use st_core::EnemyConfig;
use st_core::geo::facing_dot;
use st_spatial::{ColliderTag, LayerMask, TriggerPolicy, VisibilityProbe};

use crate::PlayerView;

/// Result of one physics-tick sweep.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Sighting {
    /// `hits / samples`, exactly.
    pub percent_visible: f32,
    /// At least one ray reached the player.
    pub confirmed:       bool,
    /// The player is looking towards the enemy.
    pub enemy_on_screen: bool,
}

/// Logic-tick view of a [`Sighting`] after the threshold and the close-range
/// override are applied.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Perception {
    pub percent_visible: f32,
    pub sees_player:     bool,
    pub enemy_on_screen: bool,
    /// The close-range override fired.
    pub close:           bool,
}

#[derive(Clone, Debug)]
pub struct PerceptionSampler {
    fov_dot:              f32,
    on_screen_dot:        f32,
    visibility_threshold: f32,
    close_distance_sq:    f32,
    hide_grace_ticks:     u32,
    mask:                 LayerMask,
    hidden_ticks:         u32,
    last:                 Sighting,
}

impl PerceptionSampler {
    pub fn from_config(config: &EnemyConfig) -> Self {
        Self {
            fov_dot:              config.fov_dot,
            on_screen_dot:        config.on_screen_dot,
            visibility_threshold: config.visibility_threshold,
            close_distance_sq:    config.close_distance_sq(),
            hide_grace_ticks:     config.hide_grace_ticks,
            mask:                 LayerMask::ALL.without(config.enemy_layer),
            hidden_ticks:         0,
            last:                 Sighting::default(),
        }
    }

    /// The most recent physics-tick result.
    #[inline]
    pub fn last(&self) -> Sighting {
        self.last
    }

    /// Consecutive hidden ticks counted so far.
    #[inline]
    pub fn hidden_ticks(&self) -> u32 {
        self.hidden_ticks
    }

    /// Layers the sight rays can hit.
    #[inline]
    pub fn mask(&self) -> LayerMask {
        self.mask
    }

    /// `dot(agent_forward, dir(agent → point)) >= fov_dot`.
    pub fn in_field_of_view(&self, agent_pos: Vec3, agent_forward: Vec3, point: Vec3) -> bool {
        facing_dot(agent_forward, agent_pos, point) >= self.fov_dot
    }

    /// Run one physics-tick sweep and remember the result.
    pub fn sample<P: VisibilityProbe + ?Sized>(
        &mut self,
        probe:         &P,
        agent_pos:     Vec3,
        agent_forward: Vec3,
        eye:           Vec3,
        sight_range:   f32,
        player:        &PlayerView,
    ) -> Sighting {
        let enemy_on_screen =
            facing_dot(player.camera_forward, player.camera_position, agent_pos) >= self.on_screen_dot;
        let mut sighting = Sighting { enemy_on_screen, ..Sighting::default() };

        if !self.in_field_of_view(agent_pos, agent_forward, player.position) {
            self.last = sighting;
            return sighting;
        }

        if player.hidden {
            self.hidden_ticks = self.hidden_ticks.saturating_add(1);
            if self.hidden_ticks > self.hide_grace_ticks {
                self.last = sighting;
                return sighting;
            }
        } else {
            self.hidden_ticks = 0;
        }

        let total = player.sample_points.len();
        let hits = player
            .sample_points
            .iter()
            .filter(|&&point| self.ray_reaches_player(probe, eye, point, sight_range))
            .count();

        if total > 0 {
            sighting.percent_visible = hits as f32 / total as f32;
        }
        sighting.confirmed = hits > 0;
        trace!(hits, total, range = sight_range, "sight sweep");

        self.last = sighting;
        sighting
    }

    /// Apply the visibility threshold and the close-range override to the
    /// last sweep.
    pub fn evaluate(&self, eye: Vec3, player: &PlayerView) -> Perception {
        let sighting = self.last;
        let mut perception = Perception {
            percent_visible: sighting.percent_visible,
            sees_player:     sighting.percent_visible >= self.visibility_threshold,
            enemy_on_screen: sighting.enemy_on_screen,
            close:           false,
        };
        if !player.hidden && (player.camera_position - eye).length_squared() <= self.close_distance_sq {
            perception.percent_visible = 1.0;
            perception.sees_player = true;
            perception.close = true;
        }
        perception
    }

    fn ray_reaches_player<P: VisibilityProbe + ?Sized>(
        &self,
        probe: &P,
        eye:   Vec3,
        point: Vec3,
        range: f32,
    ) -> bool {
        probe
            .raycast(eye, point - eye, range, self.mask, TriggerPolicy::Collide)
            .is_some_and(|hit| hit.tag == ColliderTag::Player)
    }
}
