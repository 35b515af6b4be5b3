//! Franchises and their stores

use crate::id::deserialize_id;
use serde::{Deserialize, Serialize};

/// Franchise identifier type
pub type FranchiseId = u64;

/// Store identifier type
pub type StoreId = u64;

/// A user administering a franchise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FranchiseAdmin {
    /// User id of the admin
    #[serde(deserialize_with = "deserialize_id")]
    pub id: u64,

    /// Display name
    #[serde(default)]
    pub name: String,

    /// Email address
    #[serde(default)]
    pub email: String,
}

/// A sales location belonging to a franchise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    /// Store id
    #[serde(deserialize_with = "deserialize_id")]
    pub id: StoreId,

    /// Store name
    pub name: String,

    /// Revenue accumulated by the store
    #[serde(
        rename = "totalRevenue",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub total_revenue: Option<f64>,
}

/// A named ownership unit with stores and admins
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Franchise {
    /// Franchise id
    #[serde(deserialize_with = "deserialize_id")]
    pub id: FranchiseId,

    /// Franchise name
    pub name: String,

    /// Users administering the franchise
    #[serde(default)]
    pub admins: Vec<FranchiseAdmin>,

    /// Stores of the franchise
    #[serde(default)]
    pub stores: Vec<Store>,
}

impl Franchise {
    /// Admin names joined for display, e.g. `"franchisee, pizza owner"`
    pub fn admin_names(&self) -> String {
        self.admins
            .iter()
            .map(|admin| admin.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Find a store by name
    pub fn store_named(&self, name: &str) -> Option<&Store> {
        self.stores.iter().find(|store| store.name == name)
    }
}

/// One page of franchises
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FranchiseList {
    /// Franchises on this page
    #[serde(default)]
    pub franchises: Vec<Franchise>,

    /// Whether another page exists after this one
    #[serde(default)]
    pub more: bool,
}
