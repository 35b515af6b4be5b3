//! Signal-backed modal registry

use leptos::prelude::*;
use pizza_admin::Overlay;
use std::collections::HashSet;

/// Tracks which modals are open, keyed by element id
///
/// Views read [`OverlayRegistry::is_open`] reactively; the dashboard
/// controller opens and closes through the [`Overlay`] trait.
#[derive(Debug, Clone, Copy)]
pub struct OverlayRegistry {
    open: RwSignal<HashSet<String>>,
}

impl Default for OverlayRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl OverlayRegistry {
    /// Create a registry with every modal closed
    pub fn new() -> Self {
        Self {
            open: RwSignal::new(HashSet::new()),
        }
    }

    /// Whether modal `id` is open; tracks the signal
    pub fn is_open(&self, id: &str) -> bool {
        self.open.with(|open| open.contains(id))
    }
}

impl Overlay for OverlayRegistry {
    fn open(&self, id: &str) {
        self.open.update(|open| {
            open.insert(id.to_string());
        });
    }

    fn close(&self, id: &str) {
        self.open.update(|open| {
            open.remove(id);
        });
    }
}
