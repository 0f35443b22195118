use crate::domain::Zone;
use crate::lfpe::ViewController;
use crate::navigation::Section;
use crate::templates::components::{filter_bar, form_dialog, notice, pagination, text_field, view_href};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct ZonesVm<'a> {
    pub email: Option<&'a str>,
    pub view: &'a ViewController<Zone>,
    pub notice: Option<&'a str>,
    pub form_error: Option<&'a str>,
}

const PATH: &str = "/zones";

pub fn zones_page(vm: &ZonesVm) -> Markup {
    let filters = vm.view.filters();
    let listing = vm.view.listing();

    desktop_layout(
        Section::Zones,
        vm.email,
        html! {
            div class="page-header" {
                h1 { "Zones" }
                a class="btn btn-primary" href=(view_href(PATH, filters, Some(("new", "1")))) { "New zone" }
            }

            @if let Some(message) = vm.notice {
                (notice(message))
            }

            (filter_bar(PATH, filters, "Search zones", &[]))

            table class="table" {
                thead {
                    tr {
                        th { "Name" }
                        th { span class="sr-only" { "Actions" } }
                    }
                }
                tbody {
                    @if listing.rows.is_empty() {
                        tr { td colspan="2" class="empty" { "No zones found." } }
                    }
                    @for zone in &listing.rows {
                        tr {
                            td { (zone.name) }
                            td class="actions" {
                                a href=(view_href(PATH, filters, Some(("edit", zone.id.as_str())))) { "Edit" }
                                form method="post" action=(view_href(&format!("{PATH}/{}/delete", zone.id), filters, None)) class="inline" {
                                    button type="submit" class="btn-link danger" { "Delete" }
                                }
                            }
                        }
                    }
                }
            }

            (pagination(PATH, filters, &listing.meta))

            @if let Some(session) = vm.view.session() {
                @let action = match session.target() {
                    Some(id) => view_href(&format!("{PATH}/{id}"), filters, None),
                    None => view_href(PATH, filters, None),
                };
                (form_dialog(
                    if session.target().is_some() { "Edit zone" } else { "New zone" },
                    &action,
                    &view_href(PATH, filters, None),
                    vm.form_error.or(session.error()),
                    text_field("Name", "name", "text", &session.draft().name, true),
                ))
            }
        },
    )
}
