use crate::templates::{card, plain_layout};
use maud::{html, Markup};

pub fn sign_in_page() -> Markup {
    plain_layout(
        "Sign in",
        card(
            "Sign in required",
            html! {
                p { "Your session is missing or has expired." }
                p {
                    "Ask an administrator for a new session token and open the dashboard again."
                }
                a class="btn btn-primary" href="/dashboard" { "Try again" }
            },
        ),
    )
}
