//! Recording fakes for exercising the dashboard without a platform
//!
//! Every fake appends to a shared [`Journal`], so tests can assert the
//! relative order of service calls, overlay changes and navigation.

use crate::{
    error::{ServiceError, ServiceResult},
    navigation::Navigator,
    overlay::Overlay,
    service::PizzaService,
};
use async_trait::async_trait;
use parking_lot::Mutex;
use pizza_protocol::{ListQuery, NavTarget};
use pizza_types::{FranchiseList, UserId, UserList};
use std::{
    collections::HashSet,
    sync::{Arc, Once},
};

static INIT: Once = Once::new();

/// Initialize test logging once per process
pub fn init_test_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    });
}

/// One observable side effect
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// `list_franchises` was called
    ListFranchises(ListQuery),
    /// `list_users` was called
    ListUsers(ListQuery),
    /// `delete_user` was called
    DeleteUser(UserId),
    /// An overlay was opened
    OverlayOpened(String),
    /// An overlay was closed
    OverlayClosed(String),
    /// Navigation happened
    Navigated(NavTarget),
}

/// Ordered log of side effects shared by the fakes
#[derive(Debug, Clone, Default)]
pub struct Journal(Arc<Mutex<Vec<Event>>>);

impl Journal {
    /// Empty journal
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `event`
    pub fn record(&self, event: Event) {
        self.0.lock().push(event);
    }

    /// Every event so far, oldest first
    pub fn events(&self) -> Vec<Event> {
        self.0.lock().clone()
    }

    /// Forget recorded events
    pub fn clear(&self) {
        self.0.lock().clear();
    }

    /// Ids passed to `delete_user`, in call order
    pub fn deleted_ids(&self) -> Vec<UserId> {
        self.0
            .lock()
            .iter()
            .filter_map(|event| match event {
                Event::DeleteUser(id) => Some(*id),
                _ => None,
            })
            .collect()
    }

    /// Queries passed to `list_users`, in call order
    pub fn user_queries(&self) -> Vec<ListQuery> {
        self.0
            .lock()
            .iter()
            .filter_map(|event| match event {
                Event::ListUsers(query) => Some(query.clone()),
                _ => None,
            })
            .collect()
    }

    /// Queries passed to `list_franchises`, in call order
    pub fn franchise_queries(&self) -> Vec<ListQuery> {
        self.0
            .lock()
            .iter()
            .filter_map(|event| match event {
                Event::ListFranchises(query) => Some(query.clone()),
                _ => None,
            })
            .collect()
    }

    /// Navigation targets, in call order
    pub fn navigations(&self) -> Vec<NavTarget> {
        self.0
            .lock()
            .iter()
            .filter_map(|event| match event {
                Event::Navigated(target) => Some(target.clone()),
                _ => None,
            })
            .collect()
    }
}

/// Scripted platform service
#[derive(Debug)]
pub struct RecordingService {
    journal: Journal,
    franchises: Mutex<ServiceResult<FranchiseList>>,
    users: Mutex<ServiceResult<UserList>>,
    delete: Mutex<ServiceResult<()>>,
}

impl RecordingService {
    /// Service answering with empty pages and successful deletes
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
            franchises: Mutex::new(Ok(FranchiseList::default())),
            users: Mutex::new(Ok(UserList::default())),
            delete: Mutex::new(Ok(())),
        }
    }

    /// Answer franchise lists with `page`
    pub fn with_franchises(self, page: FranchiseList) -> Self {
        *self.franchises.lock() = Ok(page);
        self
    }

    /// Answer user lists with `page`
    pub fn with_users(self, page: UserList) -> Self {
        *self.users.lock() = Ok(page);
        self
    }

    /// Fail franchise lists with `error`
    pub fn failing_franchises(self, error: ServiceError) -> Self {
        *self.franchises.lock() = Err(error);
        self
    }

    /// Fail user lists with `error`
    pub fn failing_users(self, error: ServiceError) -> Self {
        *self.users.lock() = Err(error);
        self
    }

    /// Fail deletes with `error`
    pub fn failing_delete(self, error: ServiceError) -> Self {
        *self.delete.lock() = Err(error);
        self
    }

    /// Change the franchise answer mid-test
    pub fn set_franchises(&self, answer: ServiceResult<FranchiseList>) {
        *self.franchises.lock() = answer;
    }

    /// Change the user answer mid-test
    pub fn set_users(&self, answer: ServiceResult<UserList>) {
        *self.users.lock() = answer;
    }

    /// Change the delete answer mid-test
    pub fn set_delete(&self, answer: ServiceResult<()>) {
        *self.delete.lock() = answer;
    }
}

#[async_trait]
impl PizzaService for RecordingService {
    async fn list_franchises(&self, query: &ListQuery) -> ServiceResult<FranchiseList> {
        self.journal.record(Event::ListFranchises(query.clone()));
        self.franchises.lock().clone()
    }

    async fn list_users(&self, query: &ListQuery) -> ServiceResult<UserList> {
        self.journal.record(Event::ListUsers(query.clone()));
        self.users.lock().clone()
    }

    async fn delete_user(&self, id: UserId) -> ServiceResult<()> {
        self.journal.record(Event::DeleteUser(id));
        self.delete.lock().clone()
    }
}

/// Overlay that remembers which ids are open
#[derive(Debug, Default)]
pub struct RecordingOverlay {
    journal: Journal,
    open: Mutex<HashSet<String>>,
}

impl RecordingOverlay {
    /// Overlay writing to `journal`
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
            open: Mutex::default(),
        }
    }

    /// Whether overlay `id` is currently shown
    pub fn is_open(&self, id: &str) -> bool {
        self.open.lock().contains(id)
    }
}

impl Overlay for RecordingOverlay {
    fn open(&self, id: &str) {
        self.open.lock().insert(id.to_string());
        self.journal.record(Event::OverlayOpened(id.to_string()));
    }

    fn close(&self, id: &str) {
        self.open.lock().remove(id);
        self.journal.record(Event::OverlayClosed(id.to_string()));
    }
}

/// Navigator that only records
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    journal: Journal,
}

impl RecordingNavigator {
    /// Navigator writing to `journal`
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
        }
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, target: NavTarget) {
        self.journal.record(Event::Navigated(target));
    }
}
