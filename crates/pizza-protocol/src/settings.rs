//! Dashboard page sizes and the queries derived from them

use crate::{filter::FilterPattern, list::ListQuery, page::PageCursor, page::PageSize};
use serde::{Deserialize, Serialize};

/// Page sizes used by the admin dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSettings {
    /// Franchises per page in the default view
    #[serde(default = "default_franchise_page_size")]
    pub franchise_page_size: PageSize,

    /// Franchises per page while a name filter is applied
    #[serde(default = "default_filtered_franchise_page_size")]
    pub filtered_franchise_page_size: PageSize,

    /// Users per page
    #[serde(default = "default_user_page_size")]
    pub user_page_size: PageSize,
}

const fn default_franchise_page_size() -> PageSize {
    PageSize::at_least_one(3)
}

const fn default_filtered_franchise_page_size() -> PageSize {
    PageSize::at_least_one(10)
}

const fn default_user_page_size() -> PageSize {
    PageSize::at_least_one(10)
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            franchise_page_size: default_franchise_page_size(),
            filtered_franchise_page_size: default_filtered_franchise_page_size(),
            user_page_size: default_user_page_size(),
        }
    }
}

impl DashboardSettings {
    /// Unfiltered franchise query for `page`
    pub fn franchise_query(&self, page: PageCursor) -> ListQuery {
        ListQuery::unfiltered(page, self.franchise_page_size)
    }

    /// Franchise query for `page` filtered by the text typed in the filter box
    pub fn filtered_franchise_query(&self, page: PageCursor, text: &str) -> ListQuery {
        ListQuery::new(
            page,
            self.filtered_franchise_page_size,
            FilterPattern::containing(text),
        )
    }

    /// Unfiltered user query for `page`
    pub fn user_query(&self, page: PageCursor) -> ListQuery {
        ListQuery::unfiltered(page, self.user_page_size)
    }

    /// User query for `page` filtered by the text typed in the filter box
    pub fn filtered_user_query(&self, page: PageCursor, text: &str) -> ListQuery {
        ListQuery::new(page, self.user_page_size, FilterPattern::containing(text))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let settings = DashboardSettings::default();
        assert_eq!(settings.franchise_page_size.get(), 3);
        assert_eq!(settings.filtered_franchise_page_size.get(), 10);
        assert_eq!(settings.user_page_size.get(), 10);
    }

    #[test]
    fn test_partial_deserialization_uses_defaults() {
        let settings: DashboardSettings =
            serde_json::from_str(r#"{"user_page_size": 25}"#).unwrap();
        assert_eq!(settings.user_page_size.get(), 25);
        assert_eq!(settings.franchise_page_size.get(), 3);
    }

    #[test]
    fn test_filtered_franchise_query() {
        let query = DashboardSettings::default().filtered_franchise_query(PageCursor::new(1), "Lota");

        assert_eq!(query.filter.as_str(), "*Lota*");
        assert_eq!(query.page_size.get(), 10);
        assert_eq!(query.page, PageCursor::new(1));
    }

    #[test]
    fn test_default_queries_match_everything() {
        let settings = DashboardSettings::default();
        let franchises = settings.franchise_query(PageCursor::FIRST);
        let users = settings.user_query(PageCursor::new(3));

        assert!(franchises.filter.is_match_all());
        assert_eq!(franchises.page_size.get(), 3);
        assert!(users.filter.is_match_all());
        assert_eq!(users.page.index(), 3);
    }
}
