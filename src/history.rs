//! Append-only review history.

use std::sync::RwLock;

use crate::models::AdvisoryResult;

// ---

/// Newest-first log of advisory results, constructed once at startup and
/// shared by handle.
///
/// Entries are never mutated or removed once recorded, and growth is
/// unbounded. Truncation for display belongs to the presentation boundary;
/// the stored text is always complete.
pub struct ReviewHistory {
    entries: RwLock<Vec<AdvisoryResult>>,
}

impl ReviewHistory {
    // ---
    pub fn new() -> ReviewHistory {
        // ---
        ReviewHistory {
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Prepend a result. Results arrive in generation-completion order,
    /// not submission order.
    pub fn record(&self, result: AdvisoryResult) {
        // ---
        tracing::debug!("Recording review {} for {}", result.id, result.neighborhood);
        self.entries
            .write()
            .expect("review history lock poisoned")
            .insert(0, result);
    }

    /// Up to `n` newest entries, full text.
    pub fn recent(&self, n: usize) -> Vec<AdvisoryResult> {
        // ---
        self.entries
            .read()
            .expect("review history lock poisoned")
            .iter()
            .take(n)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        // ---
        self.entries.read().expect("review history lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        // ---
        self.len() == 0
    }
}

impl Default for ReviewHistory {
    fn default() -> Self {
        Self::new()
    }
}
