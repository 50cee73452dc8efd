//! Renders the pagination control as GOV.UK Design System pagination markup.

use maud::{Markup, Render, html};

use crate::pagination::{PageItem, PaginationComponent, PaginationItem, PaginationLink};

const ITEM_STYLE: &str = "govuk-pagination__item";
const CURRENT_ITEM_STYLE: &str = "govuk-pagination__item govuk-pagination__item--current";
const ELLIPSIS_STYLE: &str = "govuk-pagination__item govuk-pagination__item--ellipses";
const LINK_STYLE: &str = "govuk-link govuk-pagination__link";

/// Render the pagination control.
pub fn render_pagination(component: &PaginationComponent) -> Markup {
    html! {
        nav class="govuk-pagination" aria-label="Pagination"
        {
            @if let Some(previous) = &component.previous {
                div class="govuk-pagination__prev"
                {
                    (direction_link(previous, "prev", "Previous"))
                }
            }

            ul class="govuk-pagination__list"
            {
                @for item in &component.items {
                    @match item
                    {
                        PaginationItem::Page(page) => { (page_item(page)) }
                        PaginationItem::Ellipsis => { li class=(ELLIPSIS_STYLE) { "⋯" } }
                    }
                }
            }

            @if let Some(next) = &component.next {
                div class="govuk-pagination__next"
                {
                    (direction_link(next, "next", "Next"))
                }
            }
        }
    }
}

fn page_item(page: &PageItem) -> Markup {
    let style = if page.current {
        CURRENT_ITEM_STYLE
    } else {
        ITEM_STYLE
    };

    html! {
        li class=(style)
        {
            a
                class=(LINK_STYLE)
                href=(page.href)
                aria-label=(page.visually_hidden_text)
                aria-current=[page.current.then_some("page")]
            { (page.number) }
        }
    }
}

fn direction_link(link: &PaginationLink, rel: &str, title: &str) -> Markup {
    html! {
        a class=(LINK_STYLE) href=(link.href) rel=(rel)
        {
            span class="govuk-pagination__link-title"
            {
                (title)
                span class="govuk-visually-hidden" { " page" }
            }
        }
    }
}

impl Render for PaginationComponent {
    fn render(&self) -> Markup {
        render_pagination(self)
    }
}

#[cfg(test)]
mod tests {
    use scraper::{ElementRef, Html, Selector};

    use crate::{config::PageSize, pagination::paginate};

    use super::render_pagination;

    fn render_fragment(number_of_records: u64, selected_page_number: u64) -> Html {
        let pagination = paginate(
            number_of_records,
            selected_page_number,
            "/notices",
            PageSize::new(25).unwrap(),
        )
        .unwrap();
        let component = pagination.component.expect("want pagination component");

        Html::parse_fragment(&render_pagination(&component).into_string())
    }

    #[track_caller]
    fn assert_valid_html(html: &Html) {
        assert!(
            html.errors.is_empty(),
            "Got HTML parsing errors: {:?}",
            html.errors
        );
    }

    #[track_caller]
    fn must_get_list_items(html: &Html) -> Vec<ElementRef<'_>> {
        let selector = Selector::parse("nav.govuk-pagination > ul.govuk-pagination__list > li")
            .unwrap();
        let items: Vec<ElementRef> = html.select(&selector).collect();
        assert!(!items.is_empty(), "No pagination list items found");

        items
    }

    #[test]
    fn renders_one_list_item_per_item() {
        let html = render_fragment(1050, 20);
        assert_valid_html(&html);

        let items = must_get_list_items(&html);
        let text: Vec<String> = items
            .iter()
            .map(|item| item.text().collect::<String>().trim().to_owned())
            .collect();

        assert_eq!(text, ["1", "⋯", "19", "20", "21", "⋯", "42"]);
    }

    #[test]
    fn marks_current_page() {
        let html = render_fragment(1050, 20);

        let current_selector = Selector::parse("[aria-current='page']").unwrap();
        let current: Vec<ElementRef> = html.select(&current_selector).collect();
        assert_eq!(current.len(), 1, "want one current page, got {}", current.len());

        let link = current[0];
        assert_eq!(link.text().collect::<String>(), "20");
        assert_eq!(link.attr("href"), Some("/notices?page=20"));
        assert_eq!(link.attr("aria-label"), Some("Page 20"));

        let current_item_selector =
            Selector::parse("li.govuk-pagination__item--current").unwrap();
        assert_eq!(html.select(&current_item_selector).count(), 1);
    }

    #[test]
    fn ellipses_have_no_links() {
        let html = render_fragment(1050, 20);

        let ellipsis_selector = Selector::parse("li.govuk-pagination__item--ellipses").unwrap();
        let link_selector = Selector::parse("a").unwrap();
        let ellipses: Vec<ElementRef> = html.select(&ellipsis_selector).collect();

        assert_eq!(ellipses.len(), 2);
        for ellipsis in ellipses {
            assert!(
                ellipsis.select(&link_selector).next().is_none(),
                "An ellipsis should not contain a link tag (<a>) in {}",
                ellipsis.html()
            );
        }
    }

    #[test]
    fn first_page_link_has_no_query() {
        let html = render_fragment(1050, 20);

        let items = must_get_list_items(&html);
        let link_selector = Selector::parse("a").unwrap();
        let first_link = items[0]
            .select(&link_selector)
            .next()
            .expect("Could not get link (<a> tag) for the first page");

        assert_eq!(first_link.attr("href"), Some("/notices"));
    }

    #[test]
    fn renders_previous_and_next_links() {
        let html = render_fragment(1050, 20);

        let previous_selector = Selector::parse("div.govuk-pagination__prev a[rel='prev']").unwrap();
        let previous = html
            .select(&previous_selector)
            .next()
            .expect("No previous link found");
        assert_eq!(previous.attr("href"), Some("/notices?page=19"));
        assert_eq!(
            previous.text().collect::<String>().trim(),
            "Previous page"
        );

        let next_selector = Selector::parse("div.govuk-pagination__next a[rel='next']").unwrap();
        let next = html.select(&next_selector).next().expect("No next link found");
        assert_eq!(next.attr("href"), Some("/notices?page=21"));
    }

    #[test]
    fn first_page_has_no_previous_link() {
        let html = render_fragment(200, 1);

        let previous_selector = Selector::parse("div.govuk-pagination__prev").unwrap();
        assert!(html.select(&previous_selector).next().is_none());

        let next_selector = Selector::parse("div.govuk-pagination__next").unwrap();
        assert!(html.select(&next_selector).next().is_some());
    }

    #[test]
    fn last_page_has_no_next_link() {
        let html = render_fragment(200, 8);

        let next_selector = Selector::parse("div.govuk-pagination__next").unwrap();
        assert!(html.select(&next_selector).next().is_none());
    }
}
