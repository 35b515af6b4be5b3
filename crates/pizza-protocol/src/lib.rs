//! Dashboard view-state logic for the pizza admin console
//!
//! Everything the admin dashboard decides without touching the network:
//! page cursors and sizes, filter patterns, list snapshots and their
//! pagination controls, request sequencing for stale-response rejection,
//! the delete-confirmation state machine and navigation targets.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod deletion;
pub mod display;
pub mod filter;
pub mod list;
pub mod navigation;
pub mod page;
pub mod sequence;
pub mod settings;

pub use deletion::{DELETE_USER_MODAL, DeleteFlow};
pub use display::revenue_label;
pub use filter::FilterPattern;
pub use list::{ListQuery, ListState, PageControls};
pub use navigation::{ADMIN_DASHBOARD_PATH, NavPayload, NavTarget};
pub use page::{PageCursor, PageSize};
pub use sequence::{RequestSequence, Ticket};
pub use settings::DashboardSettings;
