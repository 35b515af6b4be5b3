//! Pizza Admin Web Interface
//!
//! Client-side rendered admin dashboard for the pizza platform: sign in,
//! browse and filter franchises and users, delete users behind a
//! confirmation modal.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod api_client;
pub mod app;
pub mod components;
pub mod navigation;
pub mod overlay;
pub mod pages;
pub mod session;

pub use api_client::BrowserPizzaService;
pub use app::App;
pub use navigation::RouterNavigator;
pub use overlay::OverlayRegistry;
pub use session::Session;
