use glam::Vec3;

/// What the enemy may know about the player on a given tick.
///
/// Filled in by the host from its player controller.  `sample_points` are the
/// world positions of the silhouette points (head, shoulders, hips, feet...)
/// that the sampler casts rays towards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlayerView {
    /// Body position, used for the field-of-view test.
    pub position:        Vec3,
    pub camera_position: Vec3,
    pub camera_forward:  Vec3,
    /// Inside a hiding spot (wardrobe, under a bed).
    pub hidden:          bool,
    pub sample_points:   Vec<Vec3>,
}

impl PlayerView {
    /// A player standing at `position` with the camera at `eye_height`,
    /// looking along `forward`, sampled at `sample_points`.
    pub fn standing(position: Vec3, eye_height: f32, forward: Vec3, sample_points: Vec<Vec3>) -> Self {
        Self {
            position,
            camera_position: position + Vec3::Y * eye_height,
            camera_forward:  forward.normalize_or_zero(),
            hidden:          false,
            sample_points,
        }
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }
}
