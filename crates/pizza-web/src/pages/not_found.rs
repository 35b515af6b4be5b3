//! 404 Not Found page

use leptos::prelude::*;
use leptos_router::components::A;

/// 404 Not Found page component, also shown to non-admins on the dashboard
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h2>"Oops"</h2>
            <p>"It looks like we have dropped a pizza on the floor. Please try another page."</p>
            <A href="/" attr:class="btn btn-primary">"Return to Login"</A>
        </div>
    }
}
