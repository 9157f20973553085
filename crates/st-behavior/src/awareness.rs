//! The awareness meter.
//!
//! ```text
//! 0 ──── idle ────┬──────── warning ────────┐ ceiling
//!                 idle_duration             idle_duration + warning_duration
//! ```
//!
//! Sighting the player fills the meter at `increase_rate` per second (times
//! `back_turned_multiplier` while the player is not looking at the enemy).
//! Losing sight starts a grace period of `decrease_delay` seconds, after which
//! the meter drains at `decrease_rate` per second.  The value is clamped to
//! `[0, ceiling]` after every adjustment.

use st_core::EnemyConfig;

#[derive(Clone, Debug, PartialEq)]
pub struct Awareness {
    value:            f32,
    since_seen:       f32,
    idle_band:        f32,
    ceiling:          f32,
    increase_rate:    f32,
    decrease_rate:    f32,
    back_turned:      f32,
    decrease_delay:   f32,
}

impl Awareness {
    pub fn from_config(config: &EnemyConfig) -> Self {
        Self {
            value:          0.0,
            since_seen:     0.0,
            idle_band:      config.idle_duration,
            ceiling:        config.awareness_ceiling(),
            increase_rate:  config.awareness_increase_rate,
            decrease_rate:  config.awareness_decrease_rate,
            back_turned:    config.back_turned_multiplier,
            decrease_delay: config.awareness_decrease_delay,
        }
    }

    pub fn reset(&mut self) {
        self.value = 0.0;
        self.since_seen = 0.0;
    }

    /// Advance the meter by one tick and return the new value.
    pub fn integrate(&mut self, seen: bool, enemy_on_screen: bool, dt: f32) -> f32 {
        if seen {
            let facing = if enemy_on_screen { 1.0 } else { self.back_turned };
            self.value += dt * self.increase_rate * facing;
            self.since_seen = 0.0;
        } else {
            self.since_seen += dt;
            if self.since_seen >= self.decrease_delay {
                self.value -= dt * self.decrease_rate;
            }
        }
        self.value = self.value.clamp(0.0, self.ceiling);
        self.value
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[inline]
    pub fn ceiling(&self) -> f32 {
        self.ceiling
    }

    /// Seconds since the player was last seen.
    #[inline]
    pub fn since_seen(&self) -> f32 {
        self.since_seen
    }

    #[inline]
    pub fn at_ceiling(&self) -> bool {
        self.value >= self.ceiling
    }

    /// Past the idle band.
    #[inline]
    pub fn warning(&self) -> bool {
        self.value > self.idle_band
    }

    /// `value / ceiling`, or 0 for a zero-width meter.
    pub fn fraction(&self) -> f32 {
        if self.ceiling > 0.0 { self.value / self.ceiling } else { 0.0 }
    }
}
