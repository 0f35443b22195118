use crate::domain::{CustomerStatus, WebLeadStatus};
use crate::lfpe::StatusKind;
use crate::navigation::Section;
use crate::templates::components::status_badge;
use crate::templates::{card, desktop_layout};
use maud::{html, Markup};

pub struct DashboardVm<'a> {
    pub email: Option<&'a str>,
    pub zone_count: usize,
    pub customer_totals: Vec<(CustomerStatus, usize)>,
    pub lead_totals: Vec<(WebLeadStatus, usize)>,
}

fn totals_list<S: StatusKind>(section: Section, totals: &[(S, usize)]) -> Markup {
    let all: usize = totals.iter().map(|(_, n)| n).sum();
    html! {
        p class="stat-total" {
            a href=(section.href()) { strong { (all) } " total" }
        }
        ul class="status-totals" {
            @for (status, count) in totals {
                li {
                    a href={ (section.href()) "?status=" (status.as_str()) } {
                        (status_badge(*status)) " " (count)
                    }
                }
            }
        }
    }
}

pub fn dashboard_page(vm: &DashboardVm) -> Markup {
    desktop_layout(
        Section::Dashboard,
        vm.email,
        html! {
            h1 { "Dashboard" }
            div class="grid" {
                (card("Customers", totals_list(Section::Customers, &vm.customer_totals)))
                (card("Web Leads", totals_list(Section::WebLeads, &vm.lead_totals)))
                (card("Zones", html! {
                    p class="stat-total" {
                        a href=(Section::Zones.href()) { strong { (vm.zone_count) } " zones" }
                    }
                }))
            }
        },
    )
}
