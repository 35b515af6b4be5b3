//! List queries, list snapshots and pagination controls

use crate::{filter::FilterPattern, page::PageCursor, page::PageSize};
use pizza_types::{Franchise, FranchiseList, User, UserList};
use serde::{Deserialize, Serialize};

/// Parameters of one list request
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListQuery {
    /// Requested page
    pub page: PageCursor,
    /// Rows per page
    pub page_size: PageSize,
    /// Name filter
    pub filter: FilterPattern,
}

impl ListQuery {
    /// Build a query
    pub const fn new(page: PageCursor, page_size: PageSize, filter: FilterPattern) -> Self {
        Self {
            page,
            page_size,
            filter,
        }
    }

    /// Unfiltered query for `page`
    pub fn unfiltered(page: PageCursor, page_size: PageSize) -> Self {
        Self::new(page, page_size, FilterPattern::match_all())
    }
}

/// Result of one completed list fetch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListState<T> {
    /// Rows in service order
    pub items: Vec<T>,
    /// Whether the service reported another page
    pub has_more: bool,
}

impl<T> ListState<T> {
    /// Snapshot of a fetched page
    pub const fn new(items: Vec<T>, has_more: bool) -> Self {
        Self { items, has_more }
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the page has no rows
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self::new(Vec::new(), false)
    }
}

impl From<FranchiseList> for ListState<Franchise> {
    fn from(list: FranchiseList) -> Self {
        Self::new(list.franchises, list.more)
    }
}

impl From<UserList> for ListState<User> {
    fn from(list: UserList) -> Self {
        Self::new(list.users, list.more)
    }
}

/// Enablement of the « and » buttons under a table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageControls {
    /// « is clickable
    pub can_previous: bool,
    /// » is clickable
    pub can_next: bool,
}

impl PageControls {
    /// Controls for a table showing `page` whose last fetch reported `has_more`
    pub const fn for_page(page: PageCursor, has_more: bool) -> Self {
        Self {
            can_previous: !page.is_first(),
            can_next: has_more,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(0, false, false, false)]
    #[case(0, true, false, true)]
    #[case(1, false, true, false)]
    #[case(4, true, true, true)]
    fn test_page_controls(
        #[case] page: u32,
        #[case] has_more: bool,
        #[case] can_previous: bool,
        #[case] can_next: bool,
    ) {
        assert_eq!(
            PageControls::for_page(PageCursor::new(page), has_more),
            PageControls {
                can_previous,
                can_next
            }
        );
    }

    #[test]
    fn test_list_state_from_franchise_list() {
        let state: ListState<Franchise> = FranchiseList {
            franchises: Vec::new(),
            more: true,
        }
        .into();

        assert!(state.is_empty());
        assert!(state.has_more);
    }

    #[test]
    fn test_list_state_from_user_list() {
        let user = User {
            id: Some(1),
            name: "admin".to_string(),
            email: "a@jwt.com".to_string(),
            roles: Vec::new(),
        };
        let state: ListState<User> = UserList {
            users: vec![user.clone()],
            more: false,
        }
        .into();

        assert_eq!(state.len(), 1);
        assert_eq!(state.items, vec![user]);
        assert!(!state.has_more);
    }

    #[test]
    fn test_unfiltered_query() {
        let query = ListQuery::unfiltered(PageCursor::new(2), PageSize::at_least_one(3));
        assert!(query.filter.is_match_all());
        assert_eq!(query.page.index(), 2);
        assert_eq!(query.page_size.get(), 3);
    }
}
