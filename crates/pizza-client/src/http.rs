//! HTTP client for the pizza platform service

use async_trait::async_trait;
use parking_lot::RwLock;
use pizza_admin::{AuthService, PizzaService, ServiceError, ServiceResult};
use pizza_core::ServiceConfig;
use pizza_protocol::ListQuery;
use pizza_types::{ApiMessage, AuthResponse, FranchiseList, LoginRequest, User, UserId, UserList};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::fmt;
use tracing::{debug, info, warn};

/// Platform service reached over HTTP
///
/// Keeps the bearer token from the last login and sends it with every call.
pub struct HttpPizzaService {
    client: Client,
    base_url: String,
    token: RwLock<Option<String>>,
}

impl fmt::Debug for HttpPizzaService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpPizzaService")
            .field("base_url", &self.base_url)
            .field("signed_in", &self.token.read().is_some())
            .finish_non_exhaustive()
    }
}

impl HttpPizzaService {
    /// Create a client for the service at `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Create a client reusing an existing `reqwest` client
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            token: RwLock::new(None),
        }
    }

    /// Create a client from configuration, applying the request timeout
    pub fn from_config(config: &ServiceConfig) -> ServiceResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| ServiceError::transport(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self::with_client(client, config.base_url.as_str()))
    }

    /// Set the bearer token, e.g. one saved from an earlier login
    #[must_use]
    pub fn with_token(self, token: impl Into<String>) -> Self {
        *self.token.write() = Some(token.into());
        self
    }

    /// Current bearer token
    pub fn token(&self) -> Option<String> {
        self.token.read().clone()
    }

    /// Service base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
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
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder, action: &str) -> ServiceResult<Response> {
        let response = self
            .authorized(request)
            .send()
            .await
            .map_err(|e| ServiceError::transport(format!("Failed to {action}: {e}")))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiMessage>(&body)
            .ok()
            .map(|reply| reply.message)
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });

        warn!(status = status.as_u16(), %message, action, "pizza service rejected request");
        Err(ServiceError::status(status.as_u16(), message))
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
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
impl PizzaService for HttpPizzaService {
    async fn list_franchises(&self, query: &ListQuery) -> ServiceResult<FranchiseList> {
        let url = self.list_endpoint("/api/franchise", query);
        debug!(%url, "listing franchises");
        self.fetch(self.client.get(&url), "list franchises").await
    }

    async fn list_users(&self, query: &ListQuery) -> ServiceResult<UserList> {
        let url = self.list_endpoint("/api/user", query);
        debug!(%url, "listing users");
        self.fetch(self.client.get(&url), "list users").await
    }

    async fn delete_user(&self, id: UserId) -> ServiceResult<()> {
        let url = self.endpoint(&format!("/api/user/{id}"));
        debug!(%url, "deleting user");
        self.send(self.client.delete(&url), "delete user").await?;
        Ok(())
    }
}

#[async_trait]
impl AuthService for HttpPizzaService {
    async fn login(&self, request: &LoginRequest) -> ServiceResult<AuthResponse> {
        let url = self.endpoint("/api/auth");
        let auth: AuthResponse = self
            .fetch(self.client.put(&url).json(request), "log in")
            .await?;

        *self.token.write() = Some(auth.token.clone());
        info!(email = %auth.user.email, "signed in");
        Ok(auth)
    }

    async fn logout(&self) -> ServiceResult<()> {
        let signed_in = self.token.read().is_some();
        if !signed_in {
            return Ok(());
        }

        let result = self
            .send(self.client.delete(self.endpoint("/api/auth")), "log out")
            .await
            .map(|_| ());
        *self.token.write() = None;
        info!("signed out");
        result
    }

    async fn current_user(&self) -> ServiceResult<Option<User>> {
        let signed_in = self.token.read().is_some();
        if !signed_in {
            return Ok(None);
        }

        match self
            .fetch::<User>(self.client.get(self.endpoint("/api/user/me")), "load current user")
            .await
        {
            Ok(user) => Ok(Some(user)),
            Err(ServiceError::Unauthorized) => {
                debug!("session token rejected");
                *self.token.write() = None;
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }
}
