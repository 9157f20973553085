//! Audio collaborator contract.

use std::collections::HashMap;

use crate::VoiceClip;

/// Plays clips and reports their length.  Implemented by the host's audio
/// engine.
pub trait AudioSink {
    fn play(&mut self, clip: &VoiceClip);

    /// Length of `clip` in seconds.
    fn clip_length(&self, clip: &VoiceClip) -> f32;
}

/// An [`AudioSink`] that plays nothing and records what it was asked to play.
///
/// Clip lengths come from a lookup table with a fallback for unknown clips.
/// Used by headless runs and tests.
#[derive(Clone, Debug, Default)]
pub struct SilentAudio {
    lengths:        HashMap<VoiceClip, f32>,
    default_length: f32,
    /// Every clip played so far, in order.
    pub played:     Vec<VoiceClip>,
}

impl SilentAudio {
    pub fn new(default_length: f32) -> Self {
        Self { default_length, ..Self::default() }
    }

    pub fn with_length(mut self, clip: &VoiceClip, seconds: f32) -> Self {
        self.lengths.insert(clip.clone(), seconds);
        self
    }
}

impl AudioSink for SilentAudio {
    fn play(&mut self, clip: &VoiceClip) {
        self.played.push(clip.clone());
    }

    fn clip_length(&self, clip: &VoiceClip) -> f32 {
        self.lengths.get(clip).copied().unwrap_or(self.default_length)
    }
}
