//! Admin dashboard for the pizza platform
//!
//! [`AdminListController`] drives the dashboard: two paginated, filterable
//! lists (franchises and users) and the delete-user confirmation. It talks
//! to the platform through [`PizzaService`], shows modals through
//! [`Overlay`] and leaves the dashboard through [`Navigator`], so the same
//! orchestration runs natively and in the browser.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]
#![allow(clippy::significant_drop_tightening)]

pub mod controller;
pub mod error;
pub mod navigation;
pub mod overlay;
pub mod service;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use controller::{AdminListController, DashboardSnapshot, LoadOutcome};
pub use error::{AdminError, AdminResult, ServiceError, ServiceResult};
pub use navigation::Navigator;
pub use overlay::Overlay;
pub use service::{AuthService, PizzaService};
