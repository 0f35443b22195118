use maud::{html, Markup};

use crate::domain::Zone;
use crate::lfpe::{Dimension, FilterState, StatusKind};

/// One categorical `<select>` in the filter bar.
pub struct SelectFilter {
    pub dimension: Dimension,
    pub all_label: &'static str,
    /// `(value, label)` pairs.
    pub options: Vec<(String, String)>,
}

pub fn status_options<S: StatusKind>() -> Vec<(String, String)> {
    S::ALL
        .iter()
        .map(|s| (s.as_str().to_string(), s.label().to_string()))
        .collect()
}

pub fn zone_options(zones: &[Zone]) -> Vec<(String, String)> {
    zones.iter().map(|z| (z.id.clone(), z.name.clone())).collect()
}

/// GET form that rebuilds the filter query; submitting it always lands on page 1.
pub fn filter_bar(
    path: &str,
    filters: &FilterState,
    placeholder: &str,
    selects: &[SelectFilter],
) -> Markup {
    html! {
        form class="filter-bar" method="get" action=(path) {
            input
                type="search"
                name="q"
                value=(filters.search())
                placeholder=(placeholder)
                aria-label="Search";

            @for filter in selects {
                @let current = filters.selection(filter.dimension).as_str();
                select name=(filter.dimension.key()) aria-label=(filter.all_label) {
                    option value="all" selected[current == "all"] { (filter.all_label) }
                    @for (value, label) in &filter.options {
                        option value=(value) selected[current == value] { (label) }
                    }
                }
            }

            button type="submit" class="btn" { "Filter" }
            a class="btn btn-link" href=(path) { "Clear" }
        }
    }
}
