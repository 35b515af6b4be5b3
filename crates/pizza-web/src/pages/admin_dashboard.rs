//! Admin dashboard page

use crate::{
    api_client::BrowserPizzaService,
    components::{ConfirmDeleteModal, FranchiseTable, UserTable},
    navigation::RouterNavigator,
    overlay::OverlayRegistry,
    pages::not_found::NotFound,
    session::Session,
};
use leptos::{ev::MouseEvent, prelude::*, task::spawn_local};
use pizza_admin::{
    AdminListController, AdminResult, DashboardSnapshot, Navigator, Overlay, PizzaService,
};
use pizza_protocol::DELETE_USER_MODAL;
use pizza_types::{Franchise, Store, User};
use std::{future::Future, pin::pin, sync::Arc, task::Poll};
use tracing::warn;

type Controller = AdminListController<BrowserPizzaService, OverlayRegistry, RouterNavigator>;

/// Asynchronous dashboard interactions, run against the controller
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardAction {
    /// Viewer changed or the page mounted
    Mount(Option<User>),
    /// Franchise filter submitted
    FilterFranchises(String),
    /// User filter submitted
    FilterUsers(String),
    /// Franchise «
    PreviousFranchises,
    /// Franchise »
    NextFranchises,
    /// User «
    PreviousUsers,
    /// User »
    NextUsers,
    /// Confirm clicked in the delete modal
    ConfirmDelete,
}

impl DashboardAction {
    /// Run the interaction; failures are also surfaced in the snapshot banner
    pub async fn perform<S, O, N>(self, controller: &AdminListController<S, O, N>) -> AdminResult<()>
    where
        S: PizzaService + ?Sized,
        O: Overlay + ?Sized,
        N: Navigator + ?Sized,
    {
        match self {
            Self::Mount(viewer) => controller.mount(viewer).await,
            Self::FilterFranchises(text) => controller.filter_franchises(&text).await.map(drop),
            Self::FilterUsers(text) => controller.filter_users(&text).await.map(drop),
            Self::PreviousFranchises => controller.previous_franchise_page().await.map(drop),
            Self::NextFranchises => controller.next_franchise_page().await.map(drop),
            Self::PreviousUsers => controller.previous_user_page().await.map(drop),
            Self::NextUsers => controller.next_user_page().await.map(drop),
            Self::ConfirmDelete => controller.confirm_delete_user().await.map(drop),
        }
    }
}

/// Drive `work` to completion, calling `suspended` if it first has to wait
///
/// Lets the page render in-flight state, such as a running delete, before
/// the operation finishes.
pub async fn with_progress<F: Future>(work: F, suspended: impl FnOnce()) -> F::Output {
    let mut work = pin!(work);
    match futures::poll!(work.as_mut()) {
        Poll::Ready(output) => output,
        Poll::Pending => {
            suspended();
            work.await
        }
    }
}

/// Franchise and user administration, admins only
#[component]
pub fn AdminDashboard() -> impl IntoView {
    let session = Session::current();
    let viewer = session.user;
    let overlays = OverlayRegistry::new();
    let controller: Controller = AdminListController::new(
        Arc::clone(&session.service),
        Arc::new(overlays),
        Arc::new(RouterNavigator::from_router()),
    );
    let snapshot = RwSignal::new(DashboardSnapshot::default());

    let sync = {
        let controller = controller.clone();
        Callback::new(move |()| snapshot.set(controller.snapshot()))
    };

    let dispatch = {
        let controller = controller.clone();
        Callback::new(move |action: DashboardAction| {
            let controller = controller.clone();
            spawn_local(async move {
                let work = action.perform(&controller);
                if let Err(err) = with_progress(work, || snapshot.set(controller.snapshot())).await {
                    warn!(error = %err, "dashboard action failed");
                }
                snapshot.set(controller.snapshot());
            });
        })
    };

    Effect::new(move |_| {
        dispatch.run(DashboardAction::Mount(viewer.get()));
    });

    let create_franchise = {
        let controller = controller.clone();
        move |_: MouseEvent| controller.create_franchise()
    };
    let close_franchise = {
        let controller = controller.clone();
        Callback::new(move |franchise: Franchise| controller.close_franchise(&franchise))
    };
    let close_store = {
        let controller = controller.clone();
        Callback::new(move |(franchise, store): (Franchise, Store)| {
            controller.close_store(&franchise, &store);
        })
    };
    let open_delete = {
        let controller = controller.clone();
        Callback::new(move |user: User| {
            controller.open_delete_user_dialog(user);
            sync.run(());
        })
    };
    let cancel_delete = {
        let controller = controller.clone();
        Callback::new(move |()| {
            controller.cancel_delete_user();
            sync.run(());
        })
    };
    let dismiss_banner = move |_: MouseEvent| {
        controller.dismiss_banner();
        sync.run(());
    };

    let franchises = Signal::derive(move || snapshot.with(|s| s.franchises.items.clone()));
    let franchise_controls = Signal::derive(move || snapshot.with(|s| s.franchise_controls));
    let users = Signal::derive(move || snapshot.with(|s| s.users.items.clone()));
    let user_controls = Signal::derive(move || snapshot.with(|s| s.user_controls));
    let pending = Signal::derive(move || snapshot.with(|s| s.pending_delete.clone()));
    let deleting = Signal::derive(move || snapshot.with(|s| s.deleting));
    let modal_open = Signal::derive(move || overlays.is_open(DELETE_USER_MODAL));
    let banner = move || snapshot.with(|s| s.banner.clone());

    view! {
        <Show when=move || session.is_admin() fallback=|| view! { <NotFound /> }>
            <div class="admin-dashboard">
                <h2>"Mama Ricci's kitchen"</h2>
                {
                    let banner = banner.clone();
                    let dismiss_banner = dismiss_banner.clone();
                    move || banner().map(|message| {
                        let dismiss_banner = dismiss_banner.clone();
                        view! {
                            <div class="banner error" role="alert">
                                <span>{message}</span>
                                <button class="dismiss-btn" on:click=dismiss_banner>"×"</button>
                            </div>
                        }
                    })
                }
                <h3>"Franchises"</h3>
                <FranchiseTable
                    franchises=franchises
                    controls=franchise_controls
                    on_close_franchise=close_franchise
                    on_close_store=close_store
                    on_filter=Callback::new(move |text| dispatch.run(DashboardAction::FilterFranchises(text)))
                    on_previous=Callback::new(move |()| dispatch.run(DashboardAction::PreviousFranchises))
                    on_next=Callback::new(move |()| dispatch.run(DashboardAction::NextFranchises))
                />
                <button class="add-franchise-btn" on:click=create_franchise.clone()>
                    "Add Franchise"
                </button>
                <h3>"Users"</h3>
                <UserTable
                    users=users
                    controls=user_controls
                    on_delete=open_delete
                    on_filter=Callback::new(move |text| dispatch.run(DashboardAction::FilterUsers(text)))
                    on_previous=Callback::new(move |()| dispatch.run(DashboardAction::PreviousUsers))
                    on_next=Callback::new(move |()| dispatch.run(DashboardAction::NextUsers))
                />
                <ConfirmDeleteModal
                    open=modal_open
                    user=pending
                    deleting=deleting
                    on_cancel=cancel_delete
                    on_confirm=Callback::new(move |()| dispatch.run(DashboardAction::ConfirmDelete))
                />
            </div>
        </Show>
    }
}
