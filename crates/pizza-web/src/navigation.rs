//! Router-backed navigation

use leptos_router::{NavigateOptions, hooks::use_navigate, location::State};
use pizza_admin::Navigator;
use pizza_protocol::NavTarget;
use send_wrapper::SendWrapper;
use std::fmt;
use tracing::warn;

type NavigateFn = Box<dyn Fn(&str, NavigateOptions)>;

/// Navigates with the Leptos router, carrying the target payload as history state
///
/// Must be created inside a `<Router>` and used on the browser thread.
pub struct RouterNavigator {
    navigate: SendWrapper<NavigateFn>,
}

impl fmt::Debug for RouterNavigator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouterNavigator").finish_non_exhaustive()
    }
}

impl RouterNavigator {
    /// Capture the navigate function of the enclosing router
    pub fn from_router() -> Self {
        let navigate: NavigateFn = Box::new(use_navigate());
        Self {
            navigate: SendWrapper::new(navigate),
        }
    }
}

impl Navigator for RouterNavigator {
    fn navigate(&self, target: NavTarget) {
        let state = target.payload().and_then(|payload| {
            serde_wasm_bindgen::to_value(&payload)
                .map_err(|e| warn!(path = target.path(), "Failed to encode navigation state: {e}"))
                .ok()
        });
        let options = NavigateOptions {
            state: State::new(state),
            ..NavigateOptions::default()
        };
        (self.navigate)(target.path(), options);
    }
}
