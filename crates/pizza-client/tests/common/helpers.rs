//! Test helper functions and utilities

use super::fixtures::ADMIN_TOKEN;
use pizza_admin::{
    AdminListController,
    testing::{Journal, RecordingNavigator, RecordingOverlay},
};
use pizza_client::HttpPizzaService;
use serde_json::Value;
use std::sync::Arc;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path, query_param},
};

pub use pizza_admin::testing::init_test_logging;

/// Dashboard controller wired to the HTTP client and recording fakes
pub type Dashboard = AdminListController<HttpPizzaService, RecordingOverlay, RecordingNavigator>;

/// A dashboard talking to a mock pizza service
pub struct TestDashboard {
    pub server: MockServer,
    pub controller: Dashboard,
    pub overlay: Arc<RecordingOverlay>,
    pub journal: Journal,
}

impl TestDashboard {
    /// Start a mock service and a dashboard signed in with [`ADMIN_TOKEN`]
    pub async fn start() -> Self {
        init_test_logging();
        let server = MockServer::start().await;
        let journal = Journal::new();
        let overlay = Arc::new(RecordingOverlay::new(&journal));
        let controller = AdminListController::new(
            Arc::new(signed_in_service(&server)),
            Arc::clone(&overlay),
            Arc::new(RecordingNavigator::new(&journal)),
        );

        Self {
            server,
            controller,
            overlay,
            journal,
        }
    }
}

/// HTTP client for `server` carrying the admin token
pub fn signed_in_service(server: &MockServer) -> HttpPizzaService {
    HttpPizzaService::new(server.uri()).with_token(ADMIN_TOKEN)
}

/// Serve `body` for `GET /api/franchise` with the given query
pub async fn mount_franchises(server: &MockServer, page: u32, limit: u32, name: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path("/api/franchise"))
        .and(query_param("page", page.to_string()))
        .and(query_param("limit", limit.to_string()))
        .and(query_param("name", name))
        .and(header("authorization", format!("Bearer {ADMIN_TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Serve `body` for `GET /api/user` with the given query
pub async fn mount_users(server: &MockServer, page: u32, limit: u32, name: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path("/api/user"))
        .and(query_param("page", page.to_string()))
        .and(query_param("limit", limit.to_string()))
        .and(query_param("name", name))
        .and(header("authorization", format!("Bearer {ADMIN_TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Requests the server received, oldest first, as `"METHOD /path k=v ..."`
pub async fn received(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|request| {
            let mut line = format!("{} {}", request.method, request.url.path());
            for (key, value) in request.url.query_pairs() {
                line.push_str(&format!(" {key}={value}"));
            }
            line
        })
        .collect()
}
