//! Franchise table with per-store rows

use crate::components::{FilterForm, Pagination};
use leptos::prelude::*;
use pizza_protocol::{PageControls, revenue_label};
use pizza_types::{Franchise, Store};

/// Franchises, their franchisees and stores
///
/// One row per franchise with a Close button, followed by one row per store
/// with its revenue and its own Close button.
#[component]
pub fn FranchiseTable(
    /// Current franchise page
    #[prop(into)]
    franchises: Signal<Vec<Franchise>>,
    /// « » enablement
    #[prop(into)]
    controls: Signal<PageControls>,
    /// Close clicked on a franchise row
    on_close_franchise: Callback<Franchise>,
    /// Close clicked on a store row
    on_close_store: Callback<(Franchise, Store)>,
    /// Filter submitted
    on_filter: Callback<String>,
    /// « clicked
    on_previous: Callback<()>,
    /// » clicked
    on_next: Callback<()>,
) -> impl IntoView {
    let rows = move || {
        franchises
            .get()
            .into_iter()
            .map(|franchise| {
                let stores = franchise
                    .stores
                    .iter()
                    .cloned()
                    .map(|store| {
                        let owner = franchise.clone();
                        let label = revenue_label(store.total_revenue);
                        let name = store.name.clone();
                        view! {
                            <tr class="store-row">
                                <td colspan="2"></td>
                                <td>{name}</td>
                                <td class="revenue">{label}</td>
                                <td>
                                    <button
                                        class="close-btn"
                                        on:click=move |_| on_close_store.run((owner.clone(), store.clone()))
                                    >
                                        "Close"
                                    </button>
                                </td>
                            </tr>
                        }
                    })
                    .collect_view();
                let admins = franchise.admin_names();
                let name = franchise.name.clone();
                view! {
                    <tbody>
                        <tr class="franchise-row">
                            <td>{name}</td>
                            <td colspan="3">{admins}</td>
                            <td>
                                <button
                                    class="close-btn"
                                    on:click=move |_| on_close_franchise.run(franchise.clone())
                                >
                                    "Close"
                                </button>
                            </td>
                        </tr>
                        {stores}
                    </tbody>
                }
            })
            .collect_view()
    };

    view! {
        <section class="franchise-table">
            <table>
                <thead>
                    <tr>
                        <th>"Franchise"</th>
                        <th>"Franchisee"</th>
                        <th>"Store"</th>
                        <th>"Revenue"</th>
                        <th>"Action"</th>
                    </tr>
                </thead>
                {rows}
            </table>
            <div class="table-footer">
                <FilterForm placeholder="Filter franchises" on_filter=on_filter />
                <Pagination controls=controls on_previous=on_previous on_next=on_next />
            </div>
        </section>
    }
}
