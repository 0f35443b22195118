use maud::{html, Markup};

use crate::lfpe::FilterState;

pub mod error;
pub mod filters;
pub mod forms;
pub mod pagination;
pub mod status;

pub use error::error_page;
pub use filters::{filter_bar, status_options, zone_options, SelectFilter};
pub use forms::{form_dialog, select_field, text_field, textarea_field};
pub use pagination::pagination;
pub use status::status_badge;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// Non-blocking banner above a list, e.g. a failed delete.
pub fn notice(message: &str) -> Markup {
    html! {
        div class="notice notice-error" role="alert" { (message) }
    }
}

/// `path` with the pairs encoded as its query string.
pub fn href<K, V>(path: &str, pairs: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    if pairs.is_empty() {
        return path.to_string();
    }
    let query = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs.iter().map(|(k, v)| (k.as_ref(), v.as_ref())))
        .finish();
    format!("{path}?{query}")
}

/// List URL keeping the current filters, plus an optional dialog parameter.
pub fn view_href(path: &str, filters: &FilterState, extra: Option<(&str, &str)>) -> String {
    let mut pairs: Vec<(&str, String)> = filters.to_pairs();
    if let Some((key, value)) = extra {
        pairs.push((key, value.to_string()));
    }
    href(path, &pairs)
}
