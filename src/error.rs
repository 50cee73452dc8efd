//! Defines the crate level error type.

/// The errors that may occur while building a pagination control.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// A page size of zero, or one that is not an integer, was configured.
    ///
    /// Every page must hold at least one record, otherwise the number of
    /// pages cannot be computed.
    #[error("\"{0}\" is not a valid page size, it must be a positive integer")]
    InvalidPageSize(String),

    /// The selected page does not exist for the given number of records.
    ///
    /// Callers should only request pages in `1..=number_of_pages`.
    #[error("page {page} is out of range, there are {number_of_pages} pages")]
    PageOutOfRange {
        /// The page that was requested.
        page: u64,
        /// The number of pages available.
        number_of_pages: u64,
    },

    /// The `page` query parameter was not a positive integer.
    #[error("\"{0}\" is not a valid page number")]
    InvalidPageNumber(String),

    /// The query string could not be parsed.
    #[error("could not parse query string: {0}")]
    InvalidQuery(String),
}
