//! `st-voice`: the enemy's voice: what it says and when.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`clip`]        | `VoiceClip`, `VoiceLine` (category enum)                  |
//! | [`audio`]       | `AudioSink` trait, `SilentAudio`                          |
//! | [`pool`]        | `NonRepeatingPool`                                        |
//! | [`catalog`]     | `VoiceCatalog`, `load_catalog_csv`, `load_catalog_reader` |
//! | [`scheduler`]   | `VoiceScheduler` (FIFO, one line in flight)               |
//! | [`director`]    | `VoiceDirector`: catalog + scheduler behind one API       |
//! | [`error`]       | `VoiceError`, `VoiceResult<T>`                            |
//!
//! # Scheduling model (summary)
//!
//! ```text
//! request(clip):  nothing in flight and queue empty → play now
//!                 otherwise                          → enqueue (once)
//! drain() / tick: in-flight window expired           → play queue head
//! in flight  ⇔  now - last_played_at < length(last clip)
//! ```

pub mod audio;
pub mod catalog;
pub mod clip;
pub mod director;
pub mod error;
pub mod pool;
pub mod scheduler;


pub use audio::{AudioSink, SilentAudio};
pub use catalog::{load_catalog_csv, load_catalog_reader, VoiceCatalog};
pub use clip::{VoiceClip, VoiceLine};
pub use director::VoiceDirector;
pub use error::{VoiceError, VoiceResult};
pub use pool::NonRepeatingPool;
pub use scheduler::{RequestOutcome, VoiceScheduler};
