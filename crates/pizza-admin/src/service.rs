//! Platform service traits consumed by the dashboard

use crate::error::ServiceResult;
use async_trait::async_trait;
use pizza_protocol::ListQuery;
use pizza_types::{AuthResponse, FranchiseList, LoginRequest, User, UserId, UserList};

/// List and mutation calls the admin dashboard makes against the platform
///
/// Implemented over HTTP natively and in the browser, and by recording fakes
/// in tests.
#[async_trait]
pub trait PizzaService: Send + Sync {
    /// Fetch one page of franchises whose name matches the query filter
    async fn list_franchises(&self, query: &ListQuery) -> ServiceResult<FranchiseList>;

    /// Fetch one page of users whose name matches the query filter
    async fn list_users(&self, query: &ListQuery) -> ServiceResult<UserList>;

    /// Delete a user
    async fn delete_user(&self, id: UserId) -> ServiceResult<()>;
}

/// Session calls
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Sign in; later calls carry the returned token
    async fn login(&self, request: &LoginRequest) -> ServiceResult<AuthResponse>;

    /// Sign out and forget the token
    async fn logout(&self) -> ServiceResult<()>;

    /// The signed-in user, or `None` without a valid session
    async fn current_user(&self) -> ServiceResult<Option<User>>;
}
