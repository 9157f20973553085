use st_core::geo::lerp_clamped;

/// Raycast range that widens once the player has been spotted.
///
/// Each logic tick the range eases towards `base * multiplier` while the
/// latest physics tick confirmed the player, and back towards `base`
/// otherwise, with interpolation factor `clamp(dt, 0, 1)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SightRange {
    base:       f32,
    multiplier: f32,
    current:    f32,
}

impl SightRange {
    pub fn new(base: f32, multiplier: f32) -> Self {
        Self { base, multiplier, current: base }
    }

    #[inline]
    pub fn current(&self) -> f32 {
        self.current
    }

    #[inline]
    pub fn target(&self, confirmed: bool) -> f32 {
        if confirmed { self.base * self.multiplier } else { self.base }
    }

    pub fn update(&mut self, confirmed: bool, dt: f32) -> f32 {
        self.current = lerp_clamped(self.current, self.target(confirmed), dt);
        self.current
    }
}
