//! HTTP client and console driver for the pizza admin dashboard
//!
//! [`HttpPizzaService`] implements the platform service traits over
//! `reqwest`; [`console`] renders the dashboard in a terminal for the
//! `pizza-admin` binary.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod console;
pub mod http;

pub use http::HttpPizzaService;
