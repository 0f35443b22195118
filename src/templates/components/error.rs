use maud::{html, Markup, DOCTYPE};

/// Standalone error page; rendered outside the dashboard layout so it works
/// for anonymous requests too.
pub fn error_page(status: u16, message: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Error " (status) }
                link rel="stylesheet" href="/static/main.css";
            }
            body class="error-page" {
                h1 { "Error " (status) }
                p { (message) }
                p { a href="/dashboard" { "← Back to dashboard" } }
            }
        }
    }
}
