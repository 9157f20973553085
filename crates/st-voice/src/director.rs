//! `VoiceDirector`: the enemy's single entry point for speech.
//!
//! Combines a [`VoiceCatalog`] (what can be said) with a [`VoiceScheduler`]
//! (when it is said) and keeps a log of clips that actually started playing so
//! the owner can forward them to observers once per tick.

use tracing::warn;

use st_core::EnemyRng;

use crate::{AudioSink, RequestOutcome, VoiceCatalog, VoiceClip, VoiceLine, VoiceScheduler};

#[derive(Debug, Default)]
pub struct VoiceDirector {
    catalog:   VoiceCatalog,
    scheduler: VoiceScheduler,
    started:   Vec<VoiceClip>,
}

impl VoiceDirector {
    pub fn new(catalog: VoiceCatalog) -> Self {
        Self { catalog, scheduler: VoiceScheduler::new(), started: Vec::new() }
    }

    pub fn catalog(&self) -> &VoiceCatalog {
        &self.catalog
    }

    pub fn scheduler(&self) -> &VoiceScheduler {
        &self.scheduler
    }

    /// Request a specific clip.
    pub fn request_clip(
        &mut self,
        clip: VoiceClip,
        now: f32,
        audio: &mut dyn AudioSink,
    ) -> RequestOutcome {
        let outcome = self.scheduler.request(clip.clone(), now, audio);
        if outcome == RequestOutcome::Played {
            self.started.push(clip);
        }
        outcome
    }

    /// Request a random clip from `line`'s pool.
    ///
    /// Returns `None` (and logs a warning) when the category has no clips.
    pub fn request_line(
        &mut self,
        line: VoiceLine,
        now: f32,
        rng: &mut EnemyRng,
        audio: &mut dyn AudioSink,
    ) -> Option<RequestOutcome> {
        let Some(clip) = self.catalog.draw(line, rng) else {
            warn!(%line, "no voice clips for category; request dropped");
            return None;
        };
        Some(self.request_clip(clip, now, audio))
    }

    /// Per-tick drain of the scheduler queue.
    pub fn drain(&mut self, now: f32, audio: &mut dyn AudioSink) -> Option<VoiceClip> {
        let clip = self.scheduler.drain(now, audio)?;
        self.started.push(clip.clone());
        Some(clip)
    }

    /// Clips that started playing since the last call, in start order.
    pub fn take_started(&mut self) -> Vec<VoiceClip> {
        std::mem::take(&mut self.started)
    }
}
