//! Delete-user confirmation modal

use leptos::prelude::*;
use pizza_protocol::DELETE_USER_MODAL;
use pizza_types::User;

/// Confirmation modal for deleting the pending user
///
/// Hidden unless `open`; Confirm is disabled while the delete is in flight.
#[component]
pub fn ConfirmDeleteModal(
    /// Whether the modal is shown
    #[prop(into)]
    open: Signal<bool>,
    /// User awaiting confirmation
    #[prop(into)]
    user: Signal<Option<User>>,
    /// A delete call is in flight
    #[prop(into)]
    deleting: Signal<bool>,
    /// Cancel clicked
    on_cancel: Callback<()>,
    /// Confirm clicked
    on_confirm: Callback<()>,
) -> impl IntoView {
    let name = move || user.with(|user| user.as_ref().map(|user| user.name.clone()).unwrap_or_default());
    let email = move || user.with(|user| user.as_ref().map(|user| user.email.clone()).unwrap_or_default());

    view! {
        <div
            id=DELETE_USER_MODAL
            class="modal"
            class:hidden=move || !open.get()
            role="dialog"
        >
            <div class="modal-content">
                <h3 class="modal-title">"Confirm Delete"</h3>
                <p>
                    "Are you sure you want to delete "
                    <strong>{name}</strong>
                    " (" {email} ")?"
                </p>
                <div class="modal-actions">
                    <button class="cancel-btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="confirm-btn"
                        disabled=move || deleting.get()
                        on:click=move |_| on_confirm.run(())
                    >
                        "Confirm"
                    </button>
                </div>
            </div>
        </div>
    }
}
