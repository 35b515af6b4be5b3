//! Page cursors and page sizes

use serde::{Deserialize, Serialize};
use std::{fmt, num::NonZeroU32};

/// Zero-based page index of one collection
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PageCursor(u32);

impl PageCursor {
    /// The first page
    pub const FIRST: Self = Self(0);

    /// Cursor at `index`
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Zero-based page index
    pub const fn index(self) -> u32 {
        self.0
    }

    /// Whether this is page 0
    pub const fn is_first(self) -> bool {
        self.0 == 0
    }

    /// The page before this one, or `None` on the first page
    pub const fn previous(self) -> Option<Self> {
        match self.0.checked_sub(1) {
            Some(index) => Some(Self(index)),
            None => None,
        }
    }

    /// The page after this one
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for PageCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number of rows requested per page; never zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageSize(NonZeroU32);

impl PageSize {
    /// Page size of `rows`, or `None` for zero
    pub const fn new(rows: u32) -> Option<Self> {
        match NonZeroU32::new(rows) {
            Some(rows) => Some(Self(rows)),
            None => None,
        }
    }

    /// Page size of `rows`, raising zero to one
    pub const fn at_least_one(rows: u32) -> Self {
        match NonZeroU32::new(rows) {
            Some(rows) => Self(rows),
            None => Self(NonZeroU32::MIN),
        }
    }

    /// Rows per page
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
