//! Fluent builder for constructing an [`Enemy`].

use tracing::debug;

use st_core::EnemyConfig;
use st_spatial::{NavAgent, VisibilityProbe};
use st_voice::{AudioSink, VoiceCatalog};

use crate::{Enemy, InstanceSlot, SimResult};

/// Fluent builder for [`Enemy<N, P, A>`].
///
/// # Required inputs
///
/// - [`EnemyConfig`]: tuning values and patrol route
/// - `N: NavAgent`: the navigator, positioned at the enemy's start
/// - `P: VisibilityProbe`: raycasts against the scene
/// - `A: AudioSink`: plays voice clips
///
/// # Optional inputs (have defaults)
///
/// | Method                | Default                                  |
/// |-----------------------|------------------------------------------|
/// | `.catalog(c)`         | Empty catalog (every line is dropped)    |
/// | `.instance_slot(s)`   | A private slot (no duplicate detection)  |
///
/// # Example
///
/// ```rust,ignore
/// let slot = InstanceSlot::new();
/// let enemy = EnemyBuilder::new(config, nav, scene, audio)
///     .catalog(catalog)
///     .instance_slot(slot.clone())
///     .build()?;
/// ```
pub struct EnemyBuilder<N: NavAgent, P: VisibilityProbe, A: AudioSink> {
    config:  EnemyConfig,
    nav:     N,
    probe:   P,
    audio:   A,
    catalog: Option<VoiceCatalog>,
    slot:    Option<InstanceSlot>,
}

impl<N: NavAgent, P: VisibilityProbe, A: AudioSink> EnemyBuilder<N, P, A> {
    /// Create a builder with all required inputs.
    pub fn new(config: EnemyConfig, nav: N, probe: P, audio: A) -> Self {
        Self { config, nav, probe, audio, catalog: None, slot: None }
    }

    /// Supply the voice clip pools.
    pub fn catalog(mut self, catalog: VoiceCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Share the scene's single-instance slot.
    pub fn instance_slot(mut self, slot: InstanceSlot) -> Self {
        self.slot = Some(slot);
        self
    }

    /// Validate the config, claim the instance slot, and return a ready
    /// [`Enemy`] in Patrol.
    ///
    /// Returns `Ok(None)` when another enemy already holds the slot.
    pub fn build(self) -> SimResult<Option<Enemy<N, P, A>>> {
        self.config.validate()?;

        let slot = self.slot.unwrap_or_default();
        let Some(claim) = slot.claim() else {
            debug!("an enemy already exists in this scene; not building another");
            return Ok(None);
        };

        let catalog = self.catalog.unwrap_or_default();
        Ok(Some(Enemy::new(self.config, self.nav, self.probe, self.audio, catalog, claim)))
    }
}
