//! Main Leptos application component with routing

use crate::{
    api_client::BrowserPizzaService,
    pages::{admin_dashboard::AdminDashboard, login::LoginPage, not_found::NotFound},
    session::Session,
};
use leptos::{ev::MouseEvent, prelude::*, task::spawn_local};
use leptos_router::{
    components::{A, Route, Router, Routes},
    path,
};
use pizza_admin::AuthService;
use pizza_protocol::ADMIN_DASHBOARD_PATH;
use tracing::warn;

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    Session::provide(BrowserPizzaService::default());

    view! {
        <Router>
            <main class="app">
                <Header />
                <div class="content">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=LoginPage />
                        <Route path=path!("/login") view=LoginPage />
                        <Route path=path!("/admin-dashboard") view=AdminDashboard />
                    </Routes>
                </div>
            </main>
        </Router>
    }
}

/// Application header with navigation
#[component]
fn Header() -> impl IntoView {
    let session = Session::current();
    let signed_in = {
        let session = session.clone();
        move || session.user.with(Option::is_some)
    };
    let is_admin = {
        let session = session.clone();
        move || session.is_admin()
    };

    let logout = move |_: MouseEvent| {
        let session = session.clone();
        spawn_local(async move {
            if let Err(err) = session.service.logout().await {
                warn!(error = %err, "sign out failed");
            }
            session.user.set(None);
        });
    };

    view! {
        <header class="header">
            <div class="header-content">
                <h1 class="logo">
                    <A href="/">"JWT Pizza"</A>
                </h1>
                <nav class="nav">
                    <Show when=is_admin>
                        <A href=ADMIN_DASHBOARD_PATH attr:class="nav-link">"Admin"</A>
                    </Show>
                    <Show
                        when=signed_in
                        fallback=|| view! { <A href="/login" attr:class="nav-link">"Login"</A> }
                    >
                        <button class="nav-link" on:click=logout.clone()>"Logout"</button>
                    </Show>
                </nav>
            </div>
        </header>
    }
}
