//! Page size selection.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Requested page size is not one of the offered options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid page size {0}: expected one of 10, 50, 100")]
pub struct InvalidPageSize(pub usize);

/// Number of rows shown per page. Restricted to the options offered in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum PageSize {
    /// 10 rows.
    #[default]
    Ten,
    /// 50 rows.
    Fifty,
    /// 100 rows.
    Hundred,
}

impl PageSize {
    /// Offered page sizes in ascending order.
    pub const ALL: [PageSize; 3] = [PageSize::Ten, PageSize::Fifty, PageSize::Hundred];

    /// Rows per page. Always non-zero.
    pub fn get(self) -> usize {
        match self {
            PageSize::Ten => 10,
            PageSize::Fifty => 50,
            PageSize::Hundred => 100,
        }
    }

    /// Next option, wrapping from the largest back to the smallest.
    pub fn next(self) -> Self {
        match self {
            PageSize::Ten => PageSize::Fifty,
            PageSize::Fifty => PageSize::Hundred,
            PageSize::Hundred => PageSize::Ten,
        }
    }
}

impl TryFrom<usize> for PageSize {
    type Error = InvalidPageSize;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        PageSize::ALL
            .into_iter()
            .find(|size| size.get() == value)
            .ok_or(InvalidPageSize(value))
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> Self {
        size.get()
    }
}

impl std::str::FromStr for PageSize {
    type Err = InvalidPageSize;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: usize = s.trim().parse().map_err(|_| InvalidPageSize(0))?;
        PageSize::try_from(value)
    }
}
