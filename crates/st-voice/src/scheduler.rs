//! `VoiceScheduler`: one voice line at a time, in request order.
//!
//! A line is *in flight* while `now - last_played_at < length(last clip)`.
//! Requests arriving while a line is in flight, or while earlier requests are
//! still waiting, join the back of a FIFO queue.  [`VoiceScheduler::drain`]
//! runs once per logic tick and plays the queue head as soon as the in-flight
//! window has expired, so lines never overlap and never reorder.

use std::collections::VecDeque;

use tracing::debug;

use crate::{AudioSink, VoiceClip};

/// What [`VoiceScheduler::request`] did with a clip.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum RequestOutcome {
    /// Played immediately.
    Played,
    /// Deferred behind the in-flight line or earlier requests.
    Queued,
    /// The same clip was already waiting; the request was dropped.
    AlreadyQueued,
}

#[derive(Debug, Default)]
pub struct VoiceScheduler {
    queue:          VecDeque<VoiceClip>,
    /// `None` until the first clip plays.
    last_played_at: Option<f32>,
    last_length:    f32,
}

impl VoiceScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` while the last played clip is still within its length.
    pub fn in_flight(&self, now: f32) -> bool {
        match self.last_played_at {
            Some(at) => now - at < self.last_length,
            None => false,
        }
    }

    /// Play `clip` now if the channel is free and nothing is waiting;
    /// otherwise enqueue it (once).
    pub fn request(
        &mut self,
        clip: VoiceClip,
        now: f32,
        audio: &mut dyn AudioSink,
    ) -> RequestOutcome {
        if self.queue.is_empty() && !self.in_flight(now) {
            self.play(clip, now, audio);
            return RequestOutcome::Played;
        }
        if self.queue.contains(&clip) {
            debug!(%clip, "voice line already queued");
            return RequestOutcome::AlreadyQueued;
        }
        debug!(%clip, queued = self.queue.len() + 1, "voice line queued");
        self.queue.push_back(clip);
        RequestOutcome::Queued
    }

    /// Play the queue head if the in-flight window has expired.
    ///
    /// Returns the clip that started playing, if any.  At most one clip starts
    /// per call.
    pub fn drain(&mut self, now: f32, audio: &mut dyn AudioSink) -> Option<VoiceClip> {
        if self.in_flight(now) {
            return None;
        }
        let clip = self.queue.pop_front()?;
        self.play(clip.clone(), now, audio);
        Some(clip)
    }

    /// Clips waiting to play, head first.
    pub fn pending(&self) -> impl Iterator<Item = &VoiceClip> {
        self.queue.iter()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    fn play(&mut self, clip: VoiceClip, now: f32, audio: &mut dyn AudioSink) {
        let length = audio.clip_length(&clip).max(0.0);
        debug!(%clip, length, at = now, "voice line playing");
        audio.play(&clip);
        self.last_played_at = Some(now);
        self.last_length = length;
    }
}
