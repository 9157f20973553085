//! Clip handles and voice-line categories.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::VoiceError;

/// A reference to a sound clip by name.  Cheap to clone.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VoiceClip(Arc<str>);

impl VoiceClip {
    pub fn new(name: &str) -> Self {
        VoiceClip(Arc::from(name))
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VoiceClip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Category of reactive line the behavior states ask for.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum VoiceLine {
    /// The enemy just noticed the player.
    SpotPlayer,
    /// The enemy picks up its gun.
    GrabbingGun,
    /// Taunts while hunting the player.
    Chasing,
    /// Something caught the enemy's attention.
    Alerted,
    /// Idle chatter while sitting.
    WatchingTv,
}

impl VoiceLine {
    pub const ALL: [VoiceLine; 5] = [
        VoiceLine::SpotPlayer,
        VoiceLine::GrabbingGun,
        VoiceLine::Chasing,
        VoiceLine::Alerted,
        VoiceLine::WatchingTv,
    ];

    /// Label used in catalog files and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            VoiceLine::SpotPlayer  => "spot_player",
            VoiceLine::GrabbingGun => "grabbing_gun",
            VoiceLine::Chasing     => "chasing",
            VoiceLine::Alerted     => "alerted",
            VoiceLine::WatchingTv  => "watching_tv",
        }
    }
}

impl fmt::Display for VoiceLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VoiceLine {
    type Err = VoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        VoiceLine::ALL
            .into_iter()
            .find(|line| line.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| VoiceError::UnknownCategory(s.to_string()))
    }
}
