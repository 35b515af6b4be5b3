//! Name filter input with a Submit button

use leptos::{ev::SubmitEvent, prelude::*};

/// Filter form; submits the raw text, blank meaning "all"
#[component]
pub fn FilterForm(
    /// Input placeholder
    #[prop(into)]
    placeholder: String,
    /// Called with the entered text on Submit
    on_filter: Callback<String>,
) -> impl IntoView {
    let (text, set_text) = signal(String::new());

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_filter.run(text.get_untracked());
    };

    view! {
        <form class="filter-form" on:submit=submit>
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || text.get()
                on:input=move |ev| set_text.set(event_target_value(&ev))
            />
            <button type="submit">"Submit"</button>
        </form>
    }
}
