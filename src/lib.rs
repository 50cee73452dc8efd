//! Builds the pagination control for the paged list views of the licensing
//! and notifications service.
//!
//! The control lists at most seven page links and ellipses, plus optional
//! previous and next links. It can be serialized for an external template or
//! rendered directly as GOV.UK pagination markup.
//!
//! ```rust
//! use licensing_paginator::{PaginationConfig, Paginator};
//!
//! let paginator = Paginator::from(&PaginationConfig::default());
//! let pagination = paginator.paginate(1050, 20, "/notices").unwrap();
//!
//! assert_eq!(pagination.number_of_pages, 42);
//! assert_eq!(pagination.component.unwrap().items.len(), 7);
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod pagination;
mod query;
mod view;

pub use config::{DEFAULT_PAGE_SIZE, PageSize, PaginationConfig};
pub use error::Error;
pub use pagination::{
    Layout, MAX_ITEMS, PAGE_QUERY_PARAM, PageItem, Pagination, PaginationComponent,
    PaginationItem, PaginationLink, Paginator, paginate,
};
pub use query::{PageQuery, PageWindow};
pub use view::render_pagination;
