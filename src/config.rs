//! Configuration for paging records.

use std::{fmt::Display, num::NonZeroU64, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// The page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: u64 = 25;

/// The number of records shown on each page.
///
/// A page size is always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct PageSize(NonZeroU64);

impl PageSize {
    /// Create a page size, returning [Error::InvalidPageSize] if `size` is zero.
    pub fn new(size: u64) -> Result<Self, Error> {
        NonZeroU64::new(size)
            .map(Self)
            .ok_or_else(|| Error::InvalidPageSize(size.to_string()))
    }

    /// The page size as an integer.
    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl Default for PageSize {
    fn default() -> Self {
        const SIZE: NonZeroU64 = NonZeroU64::new(DEFAULT_PAGE_SIZE).unwrap();

        Self(SIZE)
    }
}

impl TryFrom<u64> for PageSize {
    type Error = Error;

    fn try_from(size: u64) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<PageSize> for u64 {
    fn from(size: PageSize) -> Self {
        size.get()
    }
}

impl FromStr for PageSize {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let size = text
            .trim()
            .parse::<u64>()
            .map_err(|_| Error::InvalidPageSize(text.to_owned()))?;

        Self::new(size)
    }
}

impl Display for PageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The config for pagination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// The maximum number of records to display per page.
    pub page_size: PageSize,
}
