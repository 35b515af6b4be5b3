//! Sample platform data

use pizza_types::{Franchise, Role, RoleAssignment, User};
use serde_json::{Value, json};

pub const ADMIN_TOKEN: &str = "admin-token";

/// The signed-in administrator
pub fn admin() -> User {
    User {
        id: Some(1),
        name: "admin".to_string(),
        email: "a@jwt.com".to_string(),
        roles: vec![RoleAssignment::new(Role::Admin)],
    }
}

/// A diner who can be deleted
pub fn pizza_diner() -> User {
    User {
        id: Some(2),
        name: "pizza diner".to_string(),
        email: "d@jwt.com".to_string(),
        roles: vec![RoleAssignment::new(Role::Diner)],
    }
}

/// One franchise page: LotaPizza with Lehi and Springville, more pages follow
pub fn franchise_page() -> Value {
    json!({
        "franchises": [
            {
                "id": 1,
                "name": "LotaPizza",
                "admins": [{ "id": 3, "name": "pizza franchisee", "email": "f@jwt.com" }],
                "stores": [
                    { "id": 4, "name": "Lehi", "totalRevenue": 0.1 },
                    { "id": 5, "name": "Springville", "totalRevenue": 0.05 }
                ]
            },
            { "id": 2, "name": "PizzaCorp", "stores": [{ "id": 7, "name": "Spanish Fork" }] }
        ],
        "more": true
    })
}

/// One user page with the admin and the diner, no further pages
pub fn user_page() -> Value {
    json!({
        "users": [
            { "id": 1, "name": "admin", "email": "a@jwt.com", "roles": [{ "role": "admin" }] },
            { "id": 2, "name": "pizza diner", "email": "d@jwt.com", "roles": [{ "role": "diner" }] }
        ],
        "more": false
    })
}

/// The user page after the diner was deleted
pub fn user_page_without_diner() -> Value {
    json!({
        "users": [
            { "id": 1, "name": "admin", "email": "a@jwt.com", "roles": [{ "role": "admin" }] }
        ],
        "more": false
    })
}

/// Parse the LotaPizza franchise from [`franchise_page`]
pub fn lota_pizza() -> Franchise {
    let page: pizza_types::FranchiseList = serde_json::from_value(franchise_page()).unwrap();
    page.franchises.into_iter().next().unwrap()
}
