use maud::{html, Markup};

use super::href;
use crate::lfpe::{FilterState, PageMeta};

fn page_href(path: &str, filters: &FilterState, page: usize) -> String {
    let mut target = filters.clone();
    target.set_page(page);
    href(path, &target.to_pairs())
}

/// "Showing X to Y of Z" plus previous/next and the sliding page window.
pub fn pagination(path: &str, filters: &FilterState, meta: &PageMeta) -> Markup {
    html! {
        nav class="pagination" aria-label="Pagination" {
            p class="pagination-summary" {
                "Showing " strong { (meta.first_item()) }
                " to " strong { (meta.last_item()) }
                " of " strong { (meta.total_items) } " results"
            }
            @if meta.total_pages > 1 {
                ul {
                    li {
                        @if meta.has_previous() {
                            a href=(page_href(path, filters, meta.previous())) rel="prev" { "Previous" }
                        } @else {
                            span class="disabled" { "Previous" }
                        }
                    }
                    @for n in meta.window() {
                        li {
                            @if n == meta.page {
                                span class="current" aria-current="page" { (n) }
                            } @else {
                                a href=(page_href(path, filters, n)) { (n) }
                            }
                        }
                    }
                    li {
                        @if meta.has_next() {
                            a href=(page_href(path, filters, meta.next())) rel="next" { "Next" }
                        } @else {
                            span class="disabled" { "Next" }
                        }
                    }
                }
            }
        }
    }
}
