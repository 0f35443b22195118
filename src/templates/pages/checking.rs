use crate::templates::plain_layout;
use maud::{html, Markup};

/// Shown while the identity lookup has not produced an answer.
pub fn checking_page(retry_url: &str) -> Markup {
    plain_layout(
        "Verifying authentication",
        html! {
            meta http-equiv="refresh" content={ "3;url=" (retry_url) };
            div class="spinner" aria-hidden="true" {}
            p { "Verifying authentication..." }
        },
    )
}
