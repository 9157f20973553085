//! `NonRepeatingPool`: random clip picker that never plays the same entry
//! twice in a row.

use st_core::EnemyRng;

use crate::VoiceClip;

/// A pool of interchangeable clips for one voice-line category.
///
/// With two or more entries, each draw picks uniformly among the entries other
/// than the previous pick: one bounded draw over `n - 1` slots, shifted past
/// the previous index.  A single-entry pool always returns that entry.
#[derive(Clone, Debug, Default)]
pub struct NonRepeatingPool {
    clips: Vec<VoiceClip>,
    last:  Option<usize>,
}

impl NonRepeatingPool {
    pub fn new(clips: Vec<VoiceClip>) -> Self {
        Self { clips, last: None }
    }

    pub fn push(&mut self, clip: VoiceClip) {
        self.clips.push(clip);
    }

    pub fn clips(&self) -> &[VoiceClip] {
        &self.clips
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }

    /// Index of the previous draw, if any.
    pub fn last_index(&self) -> Option<usize> {
        self.last
    }

    /// Pick the next clip.  `None` only for an empty pool.
    pub fn draw(&mut self, rng: &mut EnemyRng) -> Option<VoiceClip> {
        let n = self.clips.len();
        let idx = match (n, self.last) {
            (0, _) => return None,
            (1, _) => 0,
            (_, Some(prev)) if prev < n => {
                let i = rng.gen_range(0..n - 1);
                if i >= prev { i + 1 } else { i }
            }
            _ => rng.gen_range(0..n),
        };
        self.last = Some(idx);
        self.clips.get(idx).cloned()
    }
}
