//! Navigation targets reachable from the admin dashboard

use pizza_types::{Franchise, Store};
use serde::{Deserialize, Serialize};

/// Route of the admin dashboard itself
pub const ADMIN_DASHBOARD_PATH: &str = "/admin-dashboard";

const CREATE_FRANCHISE_PATH: &str = "/admin-dashboard/create-franchise";
const CLOSE_FRANCHISE_PATH: &str = "/admin-dashboard/close-franchise";
const CLOSE_STORE_PATH: &str = "/admin-dashboard/close-store";

/// A screen the dashboard hands control to
#[derive(Debug, Clone, PartialEq)]
pub enum NavTarget {
    /// Create a new franchise
    CreateFranchise,
    /// Close a whole franchise
    CloseFranchise {
        /// Franchise to close
        franchise: Franchise,
    },
    /// Close one store of a franchise
    CloseStore {
        /// Owning franchise
        franchise: Franchise,
        /// Store to close
        store: Store,
    },
}

impl NavTarget {
    /// Route of the target screen
    pub const fn path(&self) -> &'static str {
        match self {
            Self::CreateFranchise => CREATE_FRANCHISE_PATH,
            Self::CloseFranchise { .. } => CLOSE_FRANCHISE_PATH,
            Self::CloseStore { .. } => CLOSE_STORE_PATH,
        }
    }

    /// History state handed to the target screen
    pub fn payload(&self) -> Option<NavPayload> {
        match self {
            Self::CreateFranchise => None,
            Self::CloseFranchise { franchise } => Some(NavPayload {
                franchise: franchise.clone(),
                store: None,
            }),
            Self::CloseStore { franchise, store } => Some(NavPayload {
                franchise: franchise.clone(),
                store: Some(store.clone()),
            }),
        }
    }
}

/// `{ franchise, store? }` navigation state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavPayload {
    /// Franchise the target screen acts on
    pub franchise: Franchise,
    /// Store the target screen acts on, for store-level screens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store: Option<Store>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lota_pizza() -> Franchise {
        Franchise {
            id: 5,
            name: "LotaPizza".to_string(),
            admins: Vec::new(),
            stores: vec![Store {
                id: 6,
                name: "Lehi".to_string(),
                total_revenue: Some(0.1),
            }],
        }
    }

    #[test]
    fn test_create_franchise_has_no_payload() {
        assert_eq!(
            NavTarget::CreateFranchise.path(),
            "/admin-dashboard/create-franchise"
        );
        assert_eq!(NavTarget::CreateFranchise.payload(), None);
    }

    #[test]
    fn test_close_store_payload() {
        let franchise = lota_pizza();
        let store = franchise.stores[0].clone();
        let target = NavTarget::CloseStore {
            franchise: franchise.clone(),
            store: store.clone(),
        };

        assert_eq!(target.path(), "/admin-dashboard/close-store");
        let payload = target.payload().unwrap();
        assert_eq!(payload.franchise, franchise);
        assert_eq!(payload.store, Some(store));

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["franchise"]["name"], "LotaPizza");
        assert_eq!(json["store"]["name"], "Lehi");
    }

    #[test]
    fn test_close_franchise_payload_omits_store() {
        let target = NavTarget::CloseFranchise {
            franchise: lota_pizza(),
        };

        assert_eq!(target.path(), "/admin-dashboard/close-franchise");
        let json = serde_json::to_value(target.payload().unwrap()).unwrap();
        assert!(json.get("store").is_none());
    }
}
