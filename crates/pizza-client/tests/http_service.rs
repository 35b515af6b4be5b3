//! Integration tests for the HTTP pizza service against a mock server

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

mod common;

use common::*;
use pizza_admin::{AuthService, PizzaService, ServiceError};
use pizza_client::HttpPizzaService;
use pizza_protocol::{DashboardSettings, PageCursor};
use pizza_types::LoginRequest;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

#[tokio::test]
async fn test_list_franchises_sends_page_limit_and_filter() {
    init_test_logging();
    let server = MockServer::start().await;
    mount_franchises(&server, 1, 10, "*Lota*", franchise_page()).await;

    let service = signed_in_service(&server);
    let query = DashboardSettings::default().filtered_franchise_query(PageCursor::new(1), "Lota");
    let page = service.list_franchises(&query).await.unwrap();

    assert_eq!(page.franchises.len(), 2);
    assert!(page.more);
    assert_eq!(page.franchises[0], lota_pizza());
    assert_eq!(page.franchises[0].stores[1].total_revenue, Some(0.05));
    assert_eq!(page.franchises[1].stores[0].total_revenue, None);
}

#[tokio::test]
async fn test_list_users() {
    init_test_logging();
    let server = MockServer::start().await;
    mount_users(&server, 0, 10, "*", user_page()).await;

    let service = signed_in_service(&server);
    let query = DashboardSettings::default().user_query(PageCursor::FIRST);
    let page = service.list_users(&query).await.unwrap();

    assert_eq!(page.users, vec![admin(), pizza_diner()]);
    assert!(!page.more);
}

#[tokio::test]
async fn test_delete_user() {
    init_test_logging();
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/user/2"))
        .and(header("authorization", "Bearer admin-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "user deleted" })))
        .expect(1)
        .mount(&server)
        .await;

    signed_in_service(&server).delete_user(2).await.unwrap();
}

#[rstest]
#[case(500, json!({ "message": "database offline" }), ServiceError::Status { status: 500, message: "database offline".to_string() })]
#[case(403, json!({ "message": "unable to delete user" }), ServiceError::Status { status: 403, message: "unable to delete user".to_string() })]
#[case(404, json!({}), ServiceError::Status { status: 404, message: "Not Found".to_string() })]
#[case(401, json!({ "message": "unauthorized" }), ServiceError::Unauthorized)]
#[tokio::test]
async fn test_error_statuses(
    #[case] status: u16,
    #[case] body: serde_json::Value,
    #[case] expected: ServiceError,
) {
    init_test_logging();
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/user/9"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(&server)
        .await;

    let error = signed_in_service(&server).delete_user(9).await.unwrap_err();
    assert_eq!(error, expected);
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    init_test_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/user"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let query = DashboardSettings::default().user_query(PageCursor::FIRST);
    let error = signed_in_service(&server).list_users(&query).await.unwrap_err();

    assert!(matches!(error, ServiceError::Decode { .. }), "{error:?}");
}

#[tokio::test]
async fn test_unreachable_service_is_transport_error() {
    init_test_logging();
    let service = HttpPizzaService::new("http://127.0.0.1:1");
    let query = DashboardSettings::default().franchise_query(PageCursor::FIRST);

    let error = service.list_franchises(&query).await.unwrap_err();
    assert!(matches!(error, ServiceError::Transport { .. }), "{error:?}");
}

#[tokio::test]
async fn test_login_stores_token_and_logout_clears_it() {
    init_test_logging();
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/auth"))
        .and(body_json(json!({ "email": "a@jwt.com", "password": "admin" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": { "id": 1, "name": "admin", "email": "a@jwt.com", "roles": [{ "role": "admin" }] },
            "token": ADMIN_TOKEN
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/user/me"))
        .and(header("authorization", "Bearer admin-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1, "name": "admin", "email": "a@jwt.com", "roles": [{ "role": "admin" }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/auth"))
        .and(header("authorization", "Bearer admin-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "logout successful" })))
        .expect(1)
        .mount(&server)
        .await;

    let service = HttpPizzaService::new(server.uri());
    assert_eq!(service.current_user().await.unwrap(), None);

    let auth = service
        .login(&LoginRequest::new("a@jwt.com", "admin"))
        .await
        .unwrap();
    assert_eq!(auth.user, admin());
    assert_eq!(service.token().as_deref(), Some(ADMIN_TOKEN));
    assert_eq!(service.current_user().await.unwrap(), Some(admin()));

    service.logout().await.unwrap();
    assert_eq!(service.token(), None);
    assert_eq!(service.current_user().await.unwrap(), None);
}

#[tokio::test]
async fn test_rejected_token_means_no_current_user() {
    init_test_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/user/me"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "message": "unauthorized" })))
        .mount(&server)
        .await;

    let service = HttpPizzaService::new(server.uri()).with_token("expired");

    assert_eq!(service.current_user().await.unwrap(), None);
    assert_eq!(service.token(), None);
}
