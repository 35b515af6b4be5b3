//! « » pager for the dashboard tables

use leptos::prelude::*;
use pizza_protocol::PageControls;

/// Pagination component
#[component]
pub fn Pagination(
    /// Enablement of the previous and next buttons
    #[prop(into)]
    controls: Signal<PageControls>,
    /// Callback for «
    on_previous: Callback<()>,
    /// Callback for »
    on_next: Callback<()>,
) -> impl IntoView {
    let can_previous = move || controls.get().can_previous;
    let can_next = move || controls.get().can_next;

    view! {
        <div class="pagination">
            <button
                class="pagination-btn"
                disabled=move || !can_previous()
                on:click=move |_| {
                    if can_previous() {
                        on_previous.run(());
                    }
                }
            >
                "«"
            </button>
            <button
                class="pagination-btn"
                disabled=move || !can_next()
                on:click=move |_| {
                    if can_next() {
                        on_next.run(());
                    }
                }
            >
                "»"
            </button>
        </div>
    }
}
