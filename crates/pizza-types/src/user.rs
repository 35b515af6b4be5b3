//! Users and their role assignments

use crate::id::deserialize_optional_id;
use serde::{Deserialize, Serialize};
use std::fmt;

/// User identifier type
pub type UserId = u64;

/// Access level attached to a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular customer
    Diner,
    /// Owner of one or more franchises
    Franchisee,
    /// Platform administrator
    Admin,
    /// Role string this client does not know about
    #[serde(other)]
    Unknown,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Diner => write!(f, "diner"),
            Self::Franchisee => write!(f, "franchisee"),
            Self::Admin => write!(f, "admin"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// A role held by a user, optionally scoped to an object such as a franchise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAssignment {
    /// The role
    pub role: Role,

    /// Scope of the role (franchise id for franchisees)
    #[serde(
        rename = "objectId",
        default,
        deserialize_with = "deserialize_optional_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub object_id: Option<u64>,
}

impl RoleAssignment {
    /// Unscoped role assignment
    pub const fn new(role: Role) -> Self {
        Self {
            role,
            object_id: None,
        }
    }

    /// Role assignment scoped to an object
    pub const fn scoped(role: Role, object_id: u64) -> Self {
        Self {
            role,
            object_id: Some(object_id),
        }
    }
}

/// A platform user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Identifier; absent for users the service has not persisted
    #[serde(
        default,
        deserialize_with = "deserialize_optional_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<UserId>,

    /// Display name
    #[serde(default)]
    pub name: String,

    /// Email address
    #[serde(default)]
    pub email: String,

    /// Roles held by the user
    #[serde(default)]
    pub roles: Vec<RoleAssignment>,
}

impl User {
    /// Whether the user holds `role` in any scope
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.iter().any(|assignment| assignment.role == role)
    }

    /// Whether the user is a platform administrator
    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin)
    }

    /// Role names joined for display, e.g. `"diner, franchisee"`
    pub fn role_names(&self) -> String {
        self.roles
            .iter()
            .map(|assignment| assignment.role.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Whether an optional viewer holds `role`; `None` never does
pub fn is_role(user: Option<&User>, role: Role) -> bool {
    user.is_some_and(|user| user.has_role(role))
}

/// One page of users
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserList {
    /// Users on this page
    #[serde(default)]
    pub users: Vec<User>,

    /// Whether another page exists after this one
    #[serde(default)]
    pub more: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn diner() -> User {
        User {
            id: Some(2),
            name: "pizza diner".to_string(),
            email: "d@jwt.com".to_string(),
            roles: vec![RoleAssignment::new(Role::Diner)],
        }
    }

    #[test]
    fn test_user_deserializes_service_payload() {
        let json = r#"{
            "id": 3,
            "name": "franchisee",
            "email": "f@jwt.com",
            "roles": [{"role": "diner"}, {"objectId": 5, "role": "franchisee"}]
        }"#;

        let user: User = serde_json::from_str(json).unwrap();

        assert_eq!(user.id, Some(3));
        assert_eq!(
            user.roles,
            vec![
                RoleAssignment::new(Role::Diner),
                RoleAssignment::scoped(Role::Franchisee, 5),
            ]
        );
        assert!(!user.is_admin());
        assert_eq!(user.role_names(), "diner, franchisee");
    }

    #[test]
    fn test_string_ids_are_accepted() {
        let user: User =
            serde_json::from_str(r#"{"id": "12", "name": "a", "email": "a@jwt.com"}"#).unwrap();
        assert_eq!(user.id, Some(12));
        assert!(user.roles.is_empty());
    }

    #[test]
    fn test_missing_id_is_none() {
        let user: User = serde_json::from_str(r#"{"name": "a", "email": "a@jwt.com"}"#).unwrap();
        assert_eq!(user.id, None);

        let user: User = serde_json::from_str(r#"{"id": null, "name": "a"}"#).unwrap();
        assert_eq!(user.id, None);
    }

    #[test]
    fn test_garbage_id_is_rejected() {
        let result = serde_json::from_str::<User>(r#"{"id": "abc", "name": "a"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_role_does_not_fail_the_page() {
        let user: User = serde_json::from_str(r#"{"id": 1, "roles": [{"role": "auditor"}]}"#).unwrap();
        assert_eq!(user.roles[0].role, Role::Unknown);
    }

    #[test]
    fn test_is_role() {
        let mut admin = diner();
        admin.roles.push(RoleAssignment::new(Role::Admin));

        assert!(is_role(Some(&admin), Role::Admin));
        assert!(!is_role(Some(&diner()), Role::Admin));
        assert!(!is_role(None, Role::Diner));
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_string(&RoleAssignment::scoped(Role::Franchisee, 5)).unwrap();
        assert_eq!(json, r#"{"role":"franchisee","objectId":5}"#);

        let json = serde_json::to_string(&RoleAssignment::new(Role::Admin)).unwrap();
        assert_eq!(json, r#"{"role":"admin"}"#);
    }

    #[test]
    fn test_user_list_defaults() {
        let list: UserList = serde_json::from_str("{}").unwrap();
        assert_eq!(list, UserList::default());
        assert!(!list.more);
    }
}
