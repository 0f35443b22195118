use crate::navigation::Section;
use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(section: Section, user_email: Option<&str>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (section.title()) " · Catalog Admin" }
                link rel="stylesheet" href="/static/main.css";
            }
            body class="with-sidebar" {
                aside class="sidebar" {
                    h3 { "Catalog Admin" }
                    nav {
                        ul {
                            @for item in Section::ALL {
                                li {
                                    a href=(item.href())
                                      class=[(*item == section).then_some("active")]
                                      aria-current=[(*item == section).then_some("page")]
                                    { (item.title()) }
                                }
                            }
                        }
                    }
                }
                div class="main" {
                    header class="flex items-center justify-between px-6 py-3 shadow" {
                        nav class="breadcrumb" aria-label="Breadcrumb" {
                            a href="/dashboard" { "Home" }
                            " / "
                            span { (section.title()) }
                        }
                        @if let Some(email) = user_email {
                            span class="user" { (email) }
                        }
                    }
                    main class="container" {
                        (content)
                    }
                }
            }
        }
    }
}
