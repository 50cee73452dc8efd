//! This module builds the pagination control shown under paged lists.
//!
//! The control never shows more than [MAX_ITEMS] slots. When there are more
//! pages than that, runs of pages are replaced with an ellipsis so the control
//! keeps a fixed width wherever the selected page is.

use serde::{Serialize, ser::SerializeMap};

use crate::{
    Error,
    config::{PageSize, PaginationConfig},
};

/// The maximum number of page links and ellipses in the control.
pub const MAX_ITEMS: u64 = 7;

/// The query parameter used for the page number in page links.
pub const PAGE_QUERY_PARAM: &str = "page";

/// How the page links are laid out in the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Every page fits, no ellipsis.
    Simple,
    /// The first five pages, an ellipsis and the last page.
    ComplexStart,
    /// The first page, an ellipsis and the last five pages.
    ComplexEnd,
    /// The first page, the selected page and its neighbours, and the last
    /// page, with an ellipsis either side of the selected page.
    ComplexMiddle,
}

impl Layout {
    /// Pick the layout for `number_of_pages` with `selected_page_number` selected.
    ///
    /// The start condition is checked before the end condition, so with eight
    /// pages and page four selected the start layout wins.
    pub fn classify(number_of_pages: u64, selected_page_number: u64) -> Self {
        if number_of_pages <= MAX_ITEMS {
            Layout::Simple
        } else if selected_page_number <= 4 {
            Layout::ComplexStart
        } else if selected_page_number >= number_of_pages - 3 {
            Layout::ComplexEnd
        } else {
            Layout::ComplexMiddle
        }
    }
}

/// A link to a single page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageItem {
    /// The 1-based page number.
    pub number: u64,
    /// Text for screen readers, e.g. "Page 3".
    pub visually_hidden_text: String,
    /// Where the link goes.
    pub href: String,
    /// Whether this is the page being viewed.
    pub current: bool,
}

/// An entry in the list of pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaginationItem {
    /// A link to a page.
    Page(PageItem),
    /// Stands in for a run of pages that are not listed.
    Ellipsis,
}

impl PaginationItem {
    /// The page number, or `None` for an ellipsis.
    pub fn number(&self) -> Option<u64> {
        match self {
            PaginationItem::Page(page) => Some(page.number),
            PaginationItem::Ellipsis => None,
        }
    }

    /// Whether this item is the page being viewed.
    pub fn is_current(&self) -> bool {
        matches!(self, PaginationItem::Page(PageItem { current: true, .. }))
    }
}

impl Serialize for PaginationItem {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            PaginationItem::Page(page) => page.serialize(serializer),
            PaginationItem::Ellipsis => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("ellipsis", &true)?;
                map.end()
            }
        }
    }
}

/// The previous or next page link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationLink {
    /// Where the link goes.
    pub href: String,
}

/// The data needed to render the pagination control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationComponent {
    /// The page links and ellipses, in display order.
    pub items: Vec<PaginationItem>,
    /// The link to the previous page, absent on the first page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<PaginationLink>,
    /// The link to the next page, absent on the last page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<PaginationLink>,
}

/// The result of paginating a set of records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// How many pages the records span.
    pub number_of_pages: u64,
    /// The page that was selected.
    #[serde(skip)]
    pub selected_page_number: u64,
    /// The control to render, only present when there are two or more pages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<PaginationComponent>,
}

impl Pagination {
    /// Append the page position to `title` when there is more than one page,
    /// e.g. "Notices (page 2 of 5)".
    pub fn page_title(&self, title: &str) -> String {
        if self.component.is_none() {
            return title.to_owned();
        }

        format!(
            "{title} (page {} of {})",
            self.selected_page_number, self.number_of_pages
        )
    }
}

/// Builds pagination controls for a configured page size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Paginator {
    page_size: PageSize,
}

impl Paginator {
    /// Create a paginator that puts `page_size` records on each page.
    pub fn new(page_size: PageSize) -> Self {
        Self { page_size }
    }

    /// The number of records on each page.
    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// The number of pages needed for `number_of_records`.
    pub fn number_of_pages(&self, number_of_records: u64) -> u64 {
        number_of_records.div_ceil(self.page_size.get())
    }

    /// Build the pagination control for `number_of_records` with
    /// `selected_page_number` selected.
    ///
    /// Page links point at `path`, with `?page=N` appended for every page
    /// except the first. The previous and next links always include
    /// `?page=N`.
    ///
    /// When the records fit on a single page (or there are none) no component
    /// is built and the selected page is not checked.
    ///
    /// # Errors
    ///
    /// Returns [Error::PageOutOfRange] if a component is needed and
    /// `selected_page_number` is not in `1..=number_of_pages`.
    pub fn paginate(
        &self,
        number_of_records: u64,
        selected_page_number: u64,
        path: &str,
    ) -> Result<Pagination, Error> {
        let number_of_pages = self.number_of_pages(number_of_records);

        if number_of_pages < 2 {
            return Ok(Pagination {
                number_of_pages,
                selected_page_number,
                component: None,
            });
        }

        if !(1..=number_of_pages).contains(&selected_page_number) {
            return Err(Error::PageOutOfRange {
                page: selected_page_number,
                number_of_pages,
            });
        }

        let layout = Layout::classify(number_of_pages, selected_page_number);
        tracing::debug!(
            "Paginating {number_of_records} records into {number_of_pages} pages \
            with page {selected_page_number} selected using layout {layout:?}"
        );

        let items = create_items(layout, number_of_pages, selected_page_number, path);

        let previous = (selected_page_number != 1).then(|| PaginationLink {
            href: format!("{path}?{PAGE_QUERY_PARAM}={}", selected_page_number - 1),
        });
        let next = (selected_page_number != number_of_pages).then(|| PaginationLink {
            href: format!("{path}?{PAGE_QUERY_PARAM}={}", selected_page_number + 1),
        });

        Ok(Pagination {
            number_of_pages,
            selected_page_number,
            component: Some(PaginationComponent {
                items,
                previous,
                next,
            }),
        })
    }
}

impl From<&PaginationConfig> for Paginator {
    fn from(config: &PaginationConfig) -> Self {
        Self::new(config.page_size)
    }
}

/// Build the pagination control with an explicit page size.
///
/// Shortcut for [Paginator::paginate].
pub fn paginate(
    number_of_records: u64,
    selected_page_number: u64,
    path: &str,
    page_size: PageSize,
) -> Result<Pagination, Error> {
    Paginator::new(page_size).paginate(number_of_records, selected_page_number, path)
}

fn create_items(
    layout: Layout,
    number_of_pages: u64,
    selected_page_number: u64,
    path: &str,
) -> Vec<PaginationItem> {
    let map_page = |number: u64| {
        PaginationItem::Page(PageItem {
            number,
            visually_hidden_text: format!("Page {number}"),
            href: page_href(path, number),
            current: number == selected_page_number,
        })
    };

    match layout {
        Layout::Simple => (1..=number_of_pages).map(map_page).collect(),
        Layout::ComplexStart => (1..=5)
            .map(map_page)
            .chain([PaginationItem::Ellipsis, map_page(number_of_pages)])
            .collect(),
        Layout::ComplexEnd => [map_page(1), PaginationItem::Ellipsis]
            .into_iter()
            .chain((number_of_pages - 4..=number_of_pages).map(map_page))
            .collect(),
        Layout::ComplexMiddle => [map_page(1), PaginationItem::Ellipsis]
            .into_iter()
            .chain((selected_page_number - 1..=selected_page_number + 1).map(map_page))
            .chain([PaginationItem::Ellipsis, map_page(number_of_pages)])
            .collect(),
    }
}

/// The link for `page_number`. The first page links to the bare `path`.
fn page_href(path: &str, page_number: u64) -> String {
    if page_number == 1 {
        path.to_owned()
    } else {
        format!("{path}?{PAGE_QUERY_PARAM}={page_number}")
    }
}
