use crate::domain::format::{format_date, format_datetime};
use crate::domain::{WebLead, WebLeadStatus};
use crate::lfpe::{Dimension, StatusKind, ViewController};
use crate::navigation::Section;
use crate::templates::components::{
    filter_bar, form_dialog, notice, pagination, select_field, status_badge, status_options,
    text_field, textarea_field, view_href, SelectFilter,
};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct WebLeadsVm<'a> {
    pub email: Option<&'a str>,
    pub view: &'a ViewController<WebLead>,
    pub notice: Option<&'a str>,
    pub form_error: Option<&'a str>,
}

const PATH: &str = "/web-leads";

/// Total plus one card per status, over every lead regardless of filters.
fn stats_cards(vm: &WebLeadsVm) -> Markup {
    html! {
        div class="stats-grid" {
            div class="stat-card" {
                span class="stat-icon" { "📋" }
                span class="stat-label" { "Total" }
                span class="stat-value" { (vm.view.snapshot().len()) }
            }
            @for (status, count) in vm.view.status_totals() {
                div class={ "stat-card " (status.color()) } {
                    span class="stat-icon" { (status.icon()) }
                    span class="stat-label" { (status.label()) }
                    span class="stat-value" { (count) }
                }
            }
        }
    }
}

pub fn web_leads_page(vm: &WebLeadsVm) -> Markup {
    let filters = vm.view.filters();
    let listing = vm.view.listing();
    let selects = [SelectFilter {
        dimension: Dimension::Status,
        all_label: "All statuses",
        options: status_options::<WebLeadStatus>(),
    }];

    desktop_layout(
        Section::WebLeads,
        vm.email,
        html! {
            div class="page-header" {
                h1 { "Web Leads" }
                a class="btn btn-primary" href=(view_href(PATH, filters, Some(("new", "1")))) { "New lead" }
            }

            (stats_cards(vm))

            @if let Some(message) = vm.notice {
                (notice(message))
            }

            (filter_bar(PATH, filters, "Search by name", &selects))

            table class="table" {
                thead {
                    tr {
                        th { "Name" }
                        th { "Phone" }
                        th { "Email" }
                        th { "Status" }
                        th { "Received" }
                        th { span class="sr-only" { "Actions" } }
                    }
                }
                tbody {
                    @if listing.rows.is_empty() {
                        tr { td colspan="6" class="empty" { "No web leads found." } }
                    }
                    @for lead in &listing.rows {
                        tr {
                            td { (lead.full_name) }
                            td { (lead.phone.as_deref().unwrap_or("-")) }
                            td { (lead.email.as_deref().unwrap_or("-")) }
                            td { (status_badge(lead.status)) }
                            td { (format_date(lead.created_at)) }
                            td class="actions" {
                                a href=(view_href(PATH, filters, Some(("detail", lead.id.as_str())))) { "View" }
                                a href=(view_href(PATH, filters, Some(("edit", lead.id.as_str())))) { "Edit" }
                                form method="post" action=(view_href(&format!("{PATH}/{}/delete", lead.id), filters, None)) class="inline" {
                                    button type="submit" class="btn-link danger" { "Delete" }
                                }
                            }
                        }
                    }
                }
            }

            (pagination(PATH, filters, &listing.meta))

            (edit_dialog(vm))
            (detail_dialog(vm))
        },
    )
}

fn edit_dialog(vm: &WebLeadsVm) -> Markup {
    let Some(session) = vm.view.session() else {
        return html! {};
    };
    let filters = vm.view.filters();
    let draft = session.draft();
    let (title, action) = match session.target() {
        Some(id) => ("Edit lead", view_href(&format!("{PATH}/{id}"), filters, None)),
        None => ("New lead", view_href(PATH, filters, None)),
    };

    form_dialog(
        title,
        &action,
        &view_href(PATH, filters, None),
        vm.form_error.or(session.error()),
        html! {
            (text_field("Full name", "full_name", "text", &draft.full_name, true))
            (text_field("Phone", "phone", "tel", &draft.phone, false))
            (text_field("Email", "email", "email", &draft.email, false))
            (select_field("Status", "status", &status_options::<WebLeadStatus>(), draft.status.as_str(), None))
            (textarea_field("Requested products", "requested_products", &draft.requested_products))
        },
    )
}

fn detail_dialog(vm: &WebLeadsVm) -> Markup {
    let Some(lead) = vm.view.detail() else {
        return html! {};
    };
    let filters = vm.view.filters();

    html! {
        dialog class="modal" open {
            header {
                h2 { (lead.full_name) }
                (status_badge(lead.status))
            }
            dl class="detail" {
                dt { "Phone" }
                dd { (lead.phone.as_deref().unwrap_or("-")) }
                dt { "Email" }
                dd { (lead.email.as_deref().unwrap_or("-")) }
                dt { "Requested products" }
                dd {
                    @match lead.requested_products.as_deref() {
                        Some(products) => (products),
                        None => em { "No requested products recorded" },
                    }
                }
                dt { "Received" }
                dd { (format_datetime(lead.created_at)) }
                dt { "Last updated" }
                dd { (format_datetime(lead.updated_at)) }
            }
            footer class="modal-actions" {
                a class="btn btn-link" href=(view_href(PATH, filters, None)) { "Close" }
                a class="btn btn-primary" href=(view_href(PATH, filters, Some(("edit", lead.id.as_str())))) { "Edit" }
            }
        }
    }
}
