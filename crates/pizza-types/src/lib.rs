//! Wire types for the pizza admin console
//!
//! Plain serde data shared by the dashboard logic, the HTTP clients and the
//! web front end. Nothing in this crate performs I/O.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod auth;
pub mod franchise;
mod id;
pub mod user;

pub use auth::{ApiMessage, AuthResponse, LoginRequest};
pub use franchise::{Franchise, FranchiseAdmin, FranchiseId, FranchiseList, Store, StoreId};
pub use user::{Role, RoleAssignment, User, UserId, UserList, is_role};
