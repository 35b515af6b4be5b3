//! Signed-in session shared through context

use crate::api_client::BrowserPizzaService;
use leptos::prelude::*;
use pizza_types::User;
use std::sync::Arc;

/// The service client and the signed-in user
#[derive(Debug, Clone)]
pub struct Session {
    /// Platform service carrying the session token
    pub service: Arc<BrowserPizzaService>,
    /// Signed-in user, `None` when signed out
    pub user: RwSignal<Option<User>>,
}

impl Session {
    /// Create a signed-out session and provide it to descendants
    pub fn provide(service: BrowserPizzaService) -> Self {
        let session = Self {
            service: Arc::new(service),
            user: RwSignal::new(None),
        };
        provide_context(session.clone());
        session
    }

    /// Session provided by [`Session::provide`] higher up the tree
    pub fn current() -> Self {
        expect_context::<Self>()
    }

    /// Whether the signed-in user holds the admin role; tracks the signal
    pub fn is_admin(&self) -> bool {
        self.user.with(|user| user.as_ref().is_some_and(User::is_admin))
    }
}
