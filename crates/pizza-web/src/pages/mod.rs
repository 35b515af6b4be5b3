//! Page components for the web interface

pub mod admin_dashboard;
pub mod login;
pub mod not_found;
