//! Terminal rendering for the console driver

use pizza_admin::{DashboardSnapshot, Navigator, Overlay};
use pizza_protocol::{NavTarget, revenue_label};
use std::fmt::Write as _;
use tracing::info;

/// Overlay stand-in: a terminal has no modals, so changes are logged
#[derive(Debug, Default)]
pub struct LoggingOverlay;

impl Overlay for LoggingOverlay {
    fn open(&self, id: &str) {
        info!(overlay = id, "overlay opened");
    }

    fn close(&self, id: &str) {
        info!(overlay = id, "overlay closed");
    }
}

/// Navigator stand-in that prints the target route and its payload
#[derive(Debug, Default)]
pub struct PrintingNavigator;

impl Navigator for PrintingNavigator {
    fn navigate(&self, target: NavTarget) {
        println!("{}", describe_navigation(&target));
    }
}

/// One-line description of a navigation, payload as JSON
pub fn describe_navigation(target: &NavTarget) -> String {
    let payload = target
        .payload()
        .and_then(|payload| serde_json::to_string(&payload).ok());
    match payload {
        Some(payload) => format!("-> {} {payload}", target.path()),
        None => format!("-> {}", target.path()),
    }
}

fn pager(page: u32, can_previous: bool, can_next: bool) -> String {
    let previous = if can_previous { "«" } else { " " };
    let next = if can_next { "»" } else { " " };
    format!("{previous} page {page} {next}")
}

/// Franchise table: one row per franchise, one indented row per store
pub fn render_franchises(snapshot: &DashboardSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<20} {:<30} {:>14}", "FRANCHISE", "FRANCHISEE / STORE", "REVENUE");
    for franchise in &snapshot.franchises.items {
        let _ = writeln!(out, "{:<20} {:<30}", franchise.name, franchise.admin_names());
        for store in &franchise.stores {
            let _ = writeln!(
                out,
                "{:<20} {:<30} {:>14}",
                "",
                store.name,
                revenue_label(store.total_revenue)
            );
        }
    }
    let controls = snapshot.franchise_controls;
    let _ = writeln!(
        out,
        "{}",
        pager(snapshot.franchise_page.index(), controls.can_previous, controls.can_next)
    );
    out
}

/// User table
pub fn render_users(snapshot: &DashboardSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<6} {:<20} {:<28} {}", "ID", "NAME", "EMAIL", "ROLES");
    for user in &snapshot.users.items {
        let id = user.id.map(|id| id.to_string()).unwrap_or_default();
        let _ = writeln!(
            out,
            "{id:<6} {:<20} {:<28} {}",
            user.name,
            user.email,
            user.role_names()
        );
    }
    let controls = snapshot.user_controls;
    let _ = writeln!(
        out,
        "{}",
        pager(snapshot.user_page.index(), controls.can_previous, controls.can_next)
    );
    out
}
