//! Single-instance guard.
//!
//! Only one enemy may exist per scene.  The host creates one
//! [`InstanceSlot`] per scene and hands clones of it to every
//! [`EnemyBuilder`][crate::EnemyBuilder]; the first build claims it and later
//! builds are refused until the claiming enemy is dropped.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug, Default)]
pub struct InstanceSlot(Arc<AtomicBool>);

impl InstanceSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the slot.  `None` if another claim is still alive.
    pub fn claim(&self) -> Option<InstanceClaim> {
        self.0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InstanceClaim(Arc::clone(&self.0)))
    }

    pub fn is_claimed(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Proof of ownership of an [`InstanceSlot`].  Releases the slot on drop.
#[derive(Debug)]
pub struct InstanceClaim(Arc<AtomicBool>);

impl Drop for InstanceClaim {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
