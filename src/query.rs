//! Reading the selected page from a request and working out which records
//! belong on it.

use serde::Deserialize;

use crate::{Error, config::PageSize};

/// The page query parameters of a list page, e.g. `?page=3`.
///
/// The page is kept as text so that invalid values can be reported instead of
/// failing the whole query.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
pub struct PageQuery {
    /// The page number to display. Starts from 1.
    pub page: Option<String>,
}

impl PageQuery {
    /// Parse the query string of a URL, without the leading `?`.
    ///
    /// Unknown parameters are ignored.
    pub fn from_query_str(query: &str) -> Result<Self, Error> {
        serde_urlencoded::from_str(query).map_err(|error| Error::InvalidQuery(error.to_string()))
    }

    /// The page the user asked for, defaulting to the first page.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidPageNumber] if the page is not a positive integer.
    pub fn selected_page_number(&self) -> Result<u64, Error> {
        let page = match self.page.as_deref().map(str::trim) {
            None | Some("") => return Ok(1),
            Some(page) => page,
        };

        match page.parse::<u64>() {
            Ok(number) if number > 0 => Ok(number),
            _ => {
                tracing::warn!("Rejected invalid page number \"{page}\"");
                Err(Error::InvalidPageNumber(page.to_owned()))
            }
        }
    }
}

/// The slice of records shown on one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// How many records come before the page.
    pub offset: u64,
    /// The maximum number of records on the page.
    pub limit: u64,
}

impl PageWindow {
    /// The window for `selected_page_number` (1-based).
    ///
    /// Page zero is treated as the first page.
    pub fn new(selected_page_number: u64, page_size: PageSize) -> Self {
        let limit = page_size.get();

        Self {
            offset: selected_page_number.saturating_sub(1).saturating_mul(limit),
            limit,
        }
    }

    /// Take the records for this window from `records`.
    pub fn slice<'a, T>(&self, records: &'a [T]) -> &'a [T] {
        let start = usize::try_from(self.offset)
            .unwrap_or(usize::MAX)
            .min(records.len());
        let len = usize::try_from(self.limit).unwrap_or(usize::MAX);
        let end = start.saturating_add(len).min(records.len());

        &records[start..end]
    }
}
