use crate::domain::format::format_date;
use crate::domain::{zone_name, Customer, CustomerStatus, Zone, NO_ZONE};
use crate::lfpe::{Dimension, StatusKind, ViewController};
use crate::navigation::Section;
use crate::templates::components::{
    filter_bar, form_dialog, notice, pagination, select_field, status_badge, status_options,
    text_field, view_href, zone_options, SelectFilter,
};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct CustomersVm<'a> {
    pub email: Option<&'a str>,
    pub view: &'a ViewController<Customer>,
    pub zones: &'a [Zone],
    /// Failure outside the dialog, e.g. a delete the store refused.
    pub notice: Option<&'a str>,
    /// Overrides the session's own message, e.g. an unparseable field.
    pub form_error: Option<&'a str>,
}

const PATH: &str = "/customers";

pub fn customers_page(vm: &CustomersVm) -> Markup {
    let filters = vm.view.filters();
    let listing = vm.view.listing();
    let selects = [
        SelectFilter {
            dimension: Dimension::Zone,
            all_label: "All zones",
            options: zone_options(vm.zones),
        },
        SelectFilter {
            dimension: Dimension::Status,
            all_label: "All statuses",
            options: status_options::<CustomerStatus>(),
        },
    ];

    desktop_layout(
        Section::Customers,
        vm.email,
        html! {
            div class="page-header" {
                h1 { "Customers" }
                a class="btn btn-primary" href=(view_href(PATH, filters, Some(("new", "1")))) { "New customer" }
            }

            ul class="status-totals" {
                li class="status-total" { strong { "Total" } " " (vm.view.snapshot().len()) }
                @for (status, count) in vm.view.status_totals() {
                    li { (status_badge(status)) " " (count) }
                }
            }

            @if let Some(message) = vm.notice {
                (notice(message))
            }

            (filter_bar(PATH, filters, "Search by name or email", &selects))

            table class="table" {
                thead {
                    tr {
                        th { "Name" }
                        th { "Email" }
                        th { "Zone" }
                        th { "Status" }
                        th { "Created" }
                        th { span class="sr-only" { "Actions" } }
                    }
                }
                tbody {
                    @if listing.rows.is_empty() {
                        tr { td colspan="6" class="empty" { "No customers found." } }
                    }
                    @for customer in &listing.rows {
                        tr {
                            td { (customer.name) }
                            td { (customer.email) }
                            td { (zone_name(vm.zones, customer.zone_id.as_deref())) }
                            td { (status_badge(customer.status)) }
                            td { (format_date(customer.created_at)) }
                            td class="actions" {
                                a href=(view_href(PATH, filters, Some(("edit", customer.id.as_str())))) { "Edit" }
                                form method="post" action=(view_href(&format!("{PATH}/{}/delete", customer.id), filters, None)) class="inline" {
                                    button type="submit" class="btn-link danger" { "Delete" }
                                }
                            }
                        }
                    }
                }
            }

            (pagination(PATH, filters, &listing.meta))

            (edit_dialog(vm))
        },
    )
}

fn edit_dialog(vm: &CustomersVm) -> Markup {
    let Some(session) = vm.view.session() else {
        return html! {};
    };
    let filters = vm.view.filters();
    let draft = session.draft();
    let (title, action) = match session.target() {
        Some(id) => ("Edit customer", view_href(&format!("{PATH}/{id}"), filters, None)),
        None => ("New customer", view_href(PATH, filters, None)),
    };

    form_dialog(
        title,
        &action,
        &view_href(PATH, filters, None),
        vm.form_error.or(session.error()),
        html! {
            (text_field("Name", "name", "text", &draft.name, true))
            (text_field("Email", "email", "email", &draft.email, true))
            (select_field("Zone", "zone_id", &zone_options(vm.zones), &draft.zone_id, Some(NO_ZONE)))
            (select_field("Status", "status", &status_options::<CustomerStatus>(), draft.status.as_str(), None))
        },
    )
}
