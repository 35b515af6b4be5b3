//! User table

use crate::components::{FilterForm, Pagination};
use leptos::prelude::*;
use pizza_protocol::PageControls;
use pizza_types::User;

/// Users with their roles and a Delete button
#[component]
pub fn UserTable(
    /// Current user page
    #[prop(into)]
    users: Signal<Vec<User>>,
    /// « » enablement
    #[prop(into)]
    controls: Signal<PageControls>,
    /// Delete clicked on a row
    on_delete: Callback<User>,
    /// Filter submitted
    on_filter: Callback<String>,
    /// « clicked
    on_previous: Callback<()>,
    /// » clicked
    on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <section class="user-table">
            <table>
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Role"</th>
                        <th>"Action"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || users.get()
                        key=|user| (user.id, user.email.clone())
                        children=move |user| {
                            let name = user.name.clone();
                            let email = user.email.clone();
                            let roles = user.role_names();
                            view! {
                                <tr>
                                    <td>{name}</td>
                                    <td>{email}</td>
                                    <td>{roles}</td>
                                    <td>
                                        <button
                                            class="delete-btn"
                                            on:click=move |_| on_delete.run(user.clone())
                                        >
                                            "Delete"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
            <div class="table-footer">
                <FilterForm placeholder="Filter users" on_filter=on_filter />
                <Pagination controls=controls on_previous=on_previous on_next=on_next />
            </div>
        </section>
    }
}
