//! Navigation capability

use pizza_protocol::NavTarget;

/// Hands control to another screen
pub trait Navigator: Send + Sync {
    /// Go to `target`, carrying its payload as navigation state
    fn navigate(&self, target: NavTarget);
}
