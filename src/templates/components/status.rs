use maud::{html, Markup};

use crate::lfpe::StatusKind;

pub fn status_badge<S: StatusKind>(status: S) -> Markup {
    html! {
        span class={ "badge " (status.color()) } { (status.label()) }
    }
}
