//! Voice catalog: clip pools per [`VoiceLine`] category, plus a CSV loader.
//!
//! # CSV format
//!
//! One row per clip.  A category may appear on any number of rows; row order
//! within a category is the pool order.
//!
//! ```csv
//! category,clip
//! spot_player,granny_there_you_are
//! spot_player,granny_i_see_you
//! grabbing_gun,granny_get_my_gun
//! chasing,granny_come_here
//! alerted,granny_what_was_that
//! watching_tv,granny_oh_this_show
//! ```
//!
//! Categories are matched case-insensitively against [`VoiceLine::as_str`].
//! Categories absent from the file get an empty pool; requests for them are
//! dropped at runtime with a warning.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use st_core::EnemyRng;

use crate::{NonRepeatingPool, VoiceClip, VoiceError, VoiceLine, VoiceResult};

/// Clip pools keyed by category.
#[derive(Clone, Debug, Default)]
pub struct VoiceCatalog {
    pools: HashMap<VoiceLine, NonRepeatingPool>,
}

impl VoiceCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`insert`](Self::insert) for a batch of clip names.
    pub fn with_clips(mut self, line: VoiceLine, names: &[&str]) -> Self {
        for name in names {
            self.insert(line, VoiceClip::new(name));
        }
        self
    }

    pub fn insert(&mut self, line: VoiceLine, clip: VoiceClip) {
        self.pools.entry(line).or_default().push(clip);
    }

    pub fn pool(&self, line: VoiceLine) -> Option<&NonRepeatingPool> {
        self.pools.get(&line)
    }

    /// Draw the next clip for `line`.  `None` if the category has no clips.
    pub fn draw(&mut self, line: VoiceLine, rng: &mut EnemyRng) -> Option<VoiceClip> {
        self.pools.get_mut(&line)?.draw(rng)
    }

    /// Total clip count across all categories.
    pub fn len(&self) -> usize {
        self.pools.values().map(NonRepeatingPool::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct CatalogRecord {
    category: String,
    clip:     String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`VoiceCatalog`] from a CSV file.
pub fn load_catalog_csv(path: &Path) -> VoiceResult<VoiceCatalog> {
    let file = std::fs::File::open(path).map_err(VoiceError::Io)?;
    load_catalog_reader(file)
}

/// Like [`load_catalog_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for catalogs bundled into
/// the host's asset archive.
pub fn load_catalog_reader<R: Read>(reader: R) -> VoiceResult<VoiceCatalog> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut catalog = VoiceCatalog::new();

    for (row, result) in csv_reader.deserialize::<CatalogRecord>().enumerate() {
        let record = result.map_err(|e| VoiceError::Parse(e.to_string()))?;
        let line: VoiceLine = record.category.parse()?;
        if record.clip.is_empty() {
            return Err(VoiceError::Parse(format!(
                "row {}: empty clip name for category {line}",
                row + 1
            )));
        }
        catalog.insert(line, VoiceClip::new(&record.clip));
    }

    Ok(catalog)
}
