use maud::{html, Markup, DOCTYPE};

/// Chrome-less page for visitors that have not been let in yet.
pub fn plain_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href="/static/main.css";
            }
            body class="centered" {
                main class="container" {
                    (content)
                }
            }
        }
    }
}
