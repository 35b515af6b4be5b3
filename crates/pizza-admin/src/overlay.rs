//! Modal overlay capability

/// Opens and closes overlays by element id
pub trait Overlay: Send + Sync {
    /// Show the overlay `id`
    fn open(&self, id: &str);

    /// Hide the overlay `id`; closing a hidden overlay is a no-op
    fn close(&self, id: &str);
}
