use glam::Vec3;

use st_behavior::StateId;
use st_core::Frame;

/// Read-only snapshot of the enemy, taken at the end of a logic tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EnemyStatus {
    pub frame:             Frame,
    /// Scene seconds at the end of the tick.
    pub elapsed:           f32,
    pub state:             StateId,
    pub position:          Vec3,
    pub percent_visible:   f32,
    pub sees_player:       bool,
    /// The player is looking at the enemy.
    pub enemy_on_screen:   bool,
    pub moving:            bool,
    /// Awareness meter; `None` outside Patrol.
    pub awareness:         Option<f32>,
    pub awareness_ceiling: f32,
    /// Gun pickup or reload progress; `0` outside Aggro.
    pub aggro_percent:     f32,
    /// Aim progress; `0` outside Aggro.
    pub shoot_percent:     f32,
    pub stunned:           bool,
}

impl EnemyStatus {
    /// Awareness as a `[0, 1]` fill fraction.
    pub fn awareness_fraction(&self) -> Option<f32> {
        let value = self.awareness?;
        Some(if self.awareness_ceiling > 0.0 { value / self.awareness_ceiling } else { 0.0 })
    }
}
