//! Admin dashboard controller
//!
//! Owns the franchise and user lists shown on the admin dashboard, their page
//! cursors, and the delete-user confirmation. Views call the operations below
//! and render from [`AdminListController::snapshot`].

use crate::{
    error::{AdminError, AdminResult, ServiceError},
    navigation::Navigator,
    overlay::Overlay,
    service::PizzaService,
};
use parking_lot::Mutex;
use pizza_protocol::{
    DELETE_USER_MODAL, DashboardSettings, DeleteFlow, ListQuery, ListState, NavTarget,
    PageControls, PageCursor, RequestSequence, Ticket,
};
use pizza_types::{Franchise, Role, Store, User, is_role};
use std::{fmt, sync::Arc};
use tracing::{debug, info, instrument, warn};

/// What happened to a list response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The response replaced the list
    Applied,
    /// A newer request was issued meanwhile; the response was dropped
    Stale,
}

/// Read model of the dashboard for rendering
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardSnapshot {
    /// The viewer holds the admin role
    pub authorized: bool,
    /// Current franchise page
    pub franchises: ListState<Franchise>,
    /// Franchise page cursor
    pub franchise_page: PageCursor,
    /// Franchise « » enablement
    pub franchise_controls: PageControls,
    /// Current user page
    pub users: ListState<User>,
    /// User page cursor
    pub user_page: PageCursor,
    /// User « » enablement
    pub user_controls: PageControls,
    /// User shown in the delete confirmation
    pub pending_delete: Option<User>,
    /// A delete call is in flight
    pub deleting: bool,
    /// Outstanding load or delete failures, each cleared by its own next success
    pub banner: Option<String>,
}

#[derive(Debug)]
struct Collection<T> {
    list: ListState<T>,
    page: PageCursor,
    sequence: RequestSequence,
    failure: Option<String>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            list: ListState::default(),
            page: PageCursor::FIRST,
            sequence: RequestSequence::new(),
            failure: None,
        }
    }
}

impl<T> Collection<T> {
    const fn controls(&self) -> PageControls {
        PageControls::for_page(self.page, self.list.has_more)
    }
}

#[derive(Debug, Default)]
struct DashboardState {
    viewer: Option<User>,
    franchises: Collection<Franchise>,
    users: Collection<User>,
    delete: DeleteFlow,
    delete_failure: Option<String>,
}

impl DashboardState {
    fn is_admin(&self) -> bool {
        is_role(self.viewer.as_ref(), Role::Admin)
    }

    /// Outstanding failures, each kept until its own operation next succeeds
    fn banner(&self) -> Option<String> {
        let failures: Vec<&str> = [
            self.franchises.failure.as_deref(),
            self.users.failure.as_deref(),
            self.delete_failure.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect();
        (!failures.is_empty()).then(|| failures.join("; "))
    }
}

/// Controller behind the admin dashboard view
///
/// Cloning is cheap and every clone drives the same dashboard state.
pub struct AdminListController<S: ?Sized, O: ?Sized, N: ?Sized> {
    service: Arc<S>,
    overlay: Arc<O>,
    navigator: Arc<N>,
    settings: DashboardSettings,
    state: Arc<Mutex<DashboardState>>,
}

impl<S: ?Sized, O: ?Sized, N: ?Sized> Clone for AdminListController<S, O, N> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            overlay: Arc::clone(&self.overlay),
            navigator: Arc::clone(&self.navigator),
            settings: self.settings,
            state: Arc::clone(&self.state),
        }
    }
}

impl<S: ?Sized, O: ?Sized, N: ?Sized> fmt::Debug for AdminListController<S, O, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminListController")
            .field("settings", &self.settings)
            .field("state", &*self.state.lock())
            .finish_non_exhaustive()
    }
}

impl<S, O, N> AdminListController<S, O, N>
where
    S: PizzaService + ?Sized,
    O: Overlay + ?Sized,
    N: Navigator + ?Sized,
{
    /// Controller with default page sizes and no viewer
    pub fn new(service: Arc<S>, overlay: Arc<O>, navigator: Arc<N>) -> Self {
        Self {
            service,
            overlay,
            navigator,
            settings: DashboardSettings::default(),
            state: Arc::default(),
        }
    }

    /// Use `settings` for page sizes
    #[must_use]
    pub fn with_settings(mut self, settings: DashboardSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Page sizes in use
    pub const fn settings(&self) -> &DashboardSettings {
        &self.settings
    }

    /// Render model of the current state
    pub fn snapshot(&self) -> DashboardSnapshot {
        let state = self.state.lock();
        DashboardSnapshot {
            authorized: state.is_admin(),
            franchises: state.franchises.list.clone(),
            franchise_page: state.franchises.page,
            franchise_controls: state.franchises.controls(),
            users: state.users.list.clone(),
            user_page: state.users.page,
            user_controls: state.users.controls(),
            pending_delete: state.delete.pending().cloned(),
            deleting: state.delete.is_deleting(),
            banner: state.banner(),
        }
    }

    /// Whether the current viewer holds the admin role
    pub fn is_authorized(&self) -> bool {
        self.state.lock().is_admin()
    }

    /// Hide the error banner
    pub fn dismiss_banner(&self) {
        let mut state = self.state.lock();
        state.franchises.failure = None;
        state.users.failure = None;
        state.delete_failure = None;
    }

    /// Attach the dashboard to `viewer` and load both lists for admins
    ///
    /// Called on first render and whenever the signed-in user changes.
    /// Non-admin viewers get no fetch.
    #[instrument(skip_all, fields(viewer = viewer.as_ref().map(|u| u.email.as_str())))]
    pub async fn mount(&self, viewer: Option<User>) -> AdminResult<()> {
        let admin = is_role(viewer.as_ref(), Role::Admin);
        self.state.lock().viewer = viewer;

        if !admin {
            debug!("viewer is not an admin, skipping list fetches");
            return Ok(());
        }
        self.refresh().await
    }

    /// Load both lists at their current pages, concurrently
    ///
    /// Each list is updated independently; the first failure is returned
    /// after both requests have finished.
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> AdminResult<()> {
        let (franchise_query, user_query) = {
            let state = self.state.lock();
            (
                self.settings.franchise_query(state.franchises.page),
                self.settings.user_query(state.users.page),
            )
        };

        let (franchises, users) = futures::join!(
            self.load_franchises(franchise_query),
            self.load_users(user_query)
        );
        franchises.and(users).map(|_| ())
    }

    /// Fetch one franchise page and show it
    #[instrument(skip(self, query), fields(page = %query.page, limit = %query.page_size, filter = %query.filter))]
    pub async fn load_franchises(&self, query: ListQuery) -> AdminResult<LoadOutcome> {
        let ticket = {
            let mut state = self.state.lock();
            if !state.is_admin() {
                return Err(AdminError::NotAuthorized);
            }
            state.franchises.sequence.issue()
        };

        debug!("fetching franchises");
        let result = self.service.list_franchises(&query).await;
        self.apply(
            "franchises",
            ticket,
            result.map(ListState::from),
            |state| &mut state.franchises,
        )
    }

    /// Fetch one user page and show it
    #[instrument(skip(self, query), fields(page = %query.page, limit = %query.page_size, filter = %query.filter))]
    pub async fn load_users(&self, query: ListQuery) -> AdminResult<LoadOutcome> {
        let ticket = {
            let mut state = self.state.lock();
            if !state.is_admin() {
                return Err(AdminError::NotAuthorized);
            }
            state.users.sequence.issue()
        };

        debug!("fetching users");
        let result = self.service.list_users(&query).await;
        self.apply("users", ticket, result.map(ListState::from), |state| {
            &mut state.users
        })
    }

    fn apply<T>(
        &self,
        collection: &'static str,
        ticket: Ticket,
        result: Result<ListState<T>, ServiceError>,
        select: fn(&mut DashboardState) -> &mut Collection<T>,
    ) -> AdminResult<LoadOutcome> {
        let mut state = self.state.lock();
        if !select(&mut state).sequence.is_latest(ticket) {
            debug!(
                collection,
                ticket = ticket.ordinal(),
                ok = result.is_ok(),
                "dropping stale response"
            );
            return Ok(LoadOutcome::Stale);
        }

        match result {
            Ok(list) => {
                debug!(collection, rows = list.len(), more = list.has_more, "list updated");
                let target = select(&mut state);
                target.list = list;
                target.failure = None;
                Ok(LoadOutcome::Applied)
            }
            Err(err) => {
                warn!(collection, error = %err, "list fetch failed");
                select(&mut state).failure = Some(format!("Unable to load {collection}: {err}"));
                Err(err.into())
            }
        }
    }

    /// Reload franchises at the current page, filtered by `text`
    ///
    /// The page cursor is kept; the filtered view uses the larger page size.
    pub async fn filter_franchises(&self, text: &str) -> AdminResult<LoadOutcome> {
        let page = self.state.lock().franchises.page;
        self.load_franchises(self.settings.filtered_franchise_query(page, text))
            .await
    }

    /// Reload users at the current page, filtered by `text`
    pub async fn filter_users(&self, text: &str) -> AdminResult<LoadOutcome> {
        let page = self.state.lock().users.page;
        self.load_users(self.settings.filtered_user_query(page, text))
            .await
    }

    /// Advance the franchise table one page when » is enabled
    ///
    /// Returns whether the page moved.
    pub async fn next_franchise_page(&self) -> AdminResult<bool> {
        let moved = {
            let mut state = self.state.lock();
            let controls = state.franchises.controls();
            if controls.can_next {
                state.franchises.page = state.franchises.page.next();
            }
            controls.can_next
        };
        self.refresh_if(moved).await
    }

    /// Step the franchise table back one page when « is enabled
    pub async fn previous_franchise_page(&self) -> AdminResult<bool> {
        let moved = {
            let mut state = self.state.lock();
            match state.franchises.page.previous() {
                Some(page) => {
                    state.franchises.page = page;
                    true
                }
                None => false,
            }
        };
        self.refresh_if(moved).await
    }

    /// Advance the user table one page when » is enabled
    pub async fn next_user_page(&self) -> AdminResult<bool> {
        let moved = {
            let mut state = self.state.lock();
            let controls = state.users.controls();
            if controls.can_next {
                state.users.page = state.users.page.next();
            }
            controls.can_next
        };
        self.refresh_if(moved).await
    }

    /// Step the user table back one page when « is enabled
    pub async fn previous_user_page(&self) -> AdminResult<bool> {
        let moved = {
            let mut state = self.state.lock();
            match state.users.page.previous() {
                Some(page) => {
                    state.users.page = page;
                    true
                }
                None => false,
            }
        };
        self.refresh_if(moved).await
    }

    async fn refresh_if(&self, moved: bool) -> AdminResult<bool> {
        if moved {
            self.refresh().await?;
        }
        Ok(moved)
    }

    /// Go to the create-franchise screen
    pub fn create_franchise(&self) {
        self.navigator.navigate(NavTarget::CreateFranchise);
    }

    /// Go to the close-franchise screen for `franchise`
    ///
    /// The list is left as is until the next fetch.
    pub fn close_franchise(&self, franchise: &Franchise) {
        info!(franchise = %franchise.name, "closing franchise");
        self.navigator.navigate(NavTarget::CloseFranchise {
            franchise: franchise.clone(),
        });
    }

    /// Go to the close-store screen for `store` of `franchise`
    pub fn close_store(&self, franchise: &Franchise, store: &Store) {
        info!(franchise = %franchise.name, store = %store.name, "closing store");
        self.navigator.navigate(NavTarget::CloseStore {
            franchise: franchise.clone(),
            store: store.clone(),
        });
    }

    /// Stage `user` for deletion and open the confirmation modal
    ///
    /// Ignored while a delete is in flight; returns whether the modal opened.
    pub fn open_delete_user_dialog(&self, user: User) -> bool {
        let staged = self.state.lock().delete.stage(user);
        if staged {
            self.overlay.open(DELETE_USER_MODAL);
        } else {
            debug!("delete in flight, ignoring new delete request");
        }
        staged
    }

    /// Close the confirmation modal without deleting
    ///
    /// Returns the user that was staged. Ignored while a delete is in flight.
    pub fn cancel_delete_user(&self) -> Option<User> {
        let cancelled = {
            let mut state = self.state.lock();
            if state.delete.is_deleting() {
                return None;
            }
            state.delete.cancel()
        };
        self.overlay.close(DELETE_USER_MODAL);
        cancelled
    }

    /// Delete the staged user, then reload the user list
    ///
    /// Does nothing and returns `Ok(None)` when no user with an id is staged
    /// or a delete is already running. After a successful delete the users are
    /// reloaded at the current page without a filter, the modal is closed and
    /// the staged user cleared, even when the reload fails. A failed delete
    /// keeps the modal open with the user still staged.
    #[instrument(skip(self))]
    pub async fn confirm_delete_user(&self) -> AdminResult<Option<User>> {
        let id = {
            let mut state = self.state.lock();
            if !state.is_admin() {
                return Err(AdminError::NotAuthorized);
            }
            state.delete.begin()
        };
        let Some(id) = id else {
            debug!("nothing staged for deletion");
            return Ok(None);
        };

        if let Err(err) = self.service.delete_user(id).await {
            warn!(user_id = id, error = %err, "user delete failed");
            let mut state = self.state.lock();
            state.delete.fail();
            state.delete_failure = Some(format!("Unable to delete user: {err}"));
            return Err(err.into());
        }
        info!(user_id = id, "user deleted");

        let query = self.settings.user_query(self.state.lock().users.page);
        let reload = self.load_users(query).await;

        let deleted = {
            let mut state = self.state.lock();
            state.delete_failure = None;
            state.delete.complete()
        };
        self.overlay.close(DELETE_USER_MODAL);

        reload.map(|_| deleted)
    }
}
