//! Browser HTTP client for the pizza platform service

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use parking_lot::RwLock;
use pizza_admin::{AuthService, PizzaService, ServiceError, ServiceResult};
use pizza_protocol::ListQuery;
use pizza_types::{ApiMessage, AuthResponse, FranchiseList, LoginRequest, User, UserId, UserList};
use send_wrapper::SendWrapper;
use serde::de::DeserializeOwned;
use std::fmt;
use tracing::{debug, warn};

/// Service URL baked in at build time, e.g. `PIZZA_SERVICE_URL=https://pizza-service.example.com`
pub const DEFAULT_SERVICE_URL: &str = match option_env!("PIZZA_SERVICE_URL") {
    Some(url) => url,
    None => "http://localhost:3000",
};

/// Platform service reached through the browser `fetch` API
///
/// Browser futures are not `Send`; each call runs inside a [`SendWrapper`]
/// and must be polled on the thread that created it, which in a wasm page is
/// the only thread.
pub struct BrowserPizzaService {
    base_url: String,
    token: RwLock<Option<String>>,
}

impl fmt::Debug for BrowserPizzaService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BrowserPizzaService")
            .field("base_url", &self.base_url)
            .field("signed_in", &self.token.read().is_some())
            .finish_non_exhaustive()
    }
}

impl Default for BrowserPizzaService {
    fn default() -> Self {
        Self::new(DEFAULT_SERVICE_URL)
    }
}

impl BrowserPizzaService {
    /// Create a client for the service at `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            token: RwLock::new(None),
        }
    }

    /// Whether a bearer token is held
    pub fn is_signed_in(&self) -> bool {
        self.token.read().is_some()
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn list_endpoint(&self, path: &str, query: &ListQuery) -> String {
        format!(
            "{}?page={}&limit={}&name={}",
            self.endpoint(path),
            query.page,
            query.page_size,
            urlencoding::encode(query.filter.as_str())
        )
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match self.token.read().as_deref() {
            Some(token) => request.header("Authorization", &format!("Bearer {token}")),
            None => request,
        }
    }

    async fn send(
        &self,
        request: Result<Request, gloo_net::Error>,
        action: &str,
    ) -> ServiceResult<Response> {
        let response = request
            .map_err(|e| ServiceError::transport(format!("Failed to build {action} request: {e}")))?
            .send()
            .await
            .map_err(|e| ServiceError::transport(format!("Failed to {action}: {e}")))?;

        if response.ok() {
            return Ok(response);
        }

        let status = response.status();
        let status_text = response.status_text();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiMessage>(&body)
            .ok()
            .map(|reply| reply.message)
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| {
                if status_text.is_empty() {
                    "request failed".to_string()
                } else {
                    status_text
                }
            });

        warn!(status, %message, action, "pizza service rejected request");
        Err(ServiceError::status(status, message))
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        request: Result<Request, gloo_net::Error>,
        action: &str,
    ) -> ServiceResult<T> {
        self.send(request, action)
            .await?
            .json::<T>()
            .await
            .map_err(|e| ServiceError::decode(format!("Failed to parse {action} response: {e}")))
    }
}

#[async_trait]
impl PizzaService for BrowserPizzaService {
    async fn list_franchises(&self, query: &ListQuery) -> ServiceResult<FranchiseList> {
        let url = self.list_endpoint("/api/franchise", query);
        debug!(%url, "listing franchises");
        SendWrapper::new(self.fetch(self.authorized(Request::get(&url)).build(), "list franchises"))
            .await
    }

    async fn list_users(&self, query: &ListQuery) -> ServiceResult<UserList> {
        let url = self.list_endpoint("/api/user", query);
        debug!(%url, "listing users");
        SendWrapper::new(self.fetch(self.authorized(Request::get(&url)).build(), "list users"))
            .await
    }

    async fn delete_user(&self, id: UserId) -> ServiceResult<()> {
        let url = self.endpoint(&format!("/api/user/{id}"));
        debug!(%url, "deleting user");
        SendWrapper::new(self.send(self.authorized(Request::delete(&url)).build(), "delete user"))
            .await?;
        Ok(())
    }
}

#[async_trait]
impl AuthService for BrowserPizzaService {
    async fn login(&self, request: &LoginRequest) -> ServiceResult<AuthResponse> {
        let url = self.endpoint("/api/auth");
        let auth: AuthResponse =
            SendWrapper::new(self.fetch(Request::put(&url).json(request), "log in")).await?;

        *self.token.write() = Some(auth.token.clone());
        debug!(email = %auth.user.email, "signed in");
        Ok(auth)
    }

    async fn logout(&self) -> ServiceResult<()> {
        if !self.is_signed_in() {
            return Ok(());
        }

        let url = self.endpoint("/api/auth");
        let result = SendWrapper::new(self.send(self.authorized(Request::delete(&url)).build(), "log out"))
            .await
            .map(|_| ());
        *self.token.write() = None;
        result
    }

    async fn current_user(&self) -> ServiceResult<Option<User>> {
        if !self.is_signed_in() {
            return Ok(None);
        }

        let url = self.endpoint("/api/user/me");
        let request = SendWrapper::new(
            self.fetch::<User>(self.authorized(Request::get(&url)).build(), "load current user"),
        );
        match request.await {
            Ok(user) => Ok(Some(user)),
            Err(ServiceError::Unauthorized) => {
                *self.token.write() = None;
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pizza_protocol::{DashboardSettings, PageCursor};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_list_endpoint() {
        let service = BrowserPizzaService::new("http://localhost:3000/");
        let query = DashboardSettings::default().filtered_user_query(PageCursor::new(1), "pizza");

        assert_eq!(
            service.list_endpoint("/api/user", &query),
            "http://localhost:3000/api/user?page=1&limit=10&name=%2Apizza%2A"
        );
    }

    #[test]
    fn test_unsigned_service_debug() {
        let service = BrowserPizzaService::default();
        assert!(!service.is_signed_in());
        assert!(format!("{service:?}").contains("signed_in: false"));
    }
}
