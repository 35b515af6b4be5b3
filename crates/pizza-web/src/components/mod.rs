//! Reusable UI components

pub mod confirm_modal;
pub mod filter_form;
pub mod franchise_table;
pub mod pagination;
pub mod user_table;

pub use confirm_modal::ConfirmDeleteModal;
pub use filter_form::FilterForm;
pub use franchise_table::FranchiseTable;
pub use pagination::Pagination;
pub use user_table::UserTable;
