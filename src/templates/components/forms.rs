use maud::{html, Markup};

/// Modal form shared by every create/edit dialog.
pub fn form_dialog(
    title: &str,
    action: &str,
    cancel_href: &str,
    error: Option<&str>,
    fields: Markup,
) -> Markup {
    html! {
        dialog class="modal" open {
            form method="post" action=(action) class="modal-form" {
                header { h2 { (title) } }
                @if let Some(message) = error {
                    p class="form-error" role="alert" { (message) }
                }
                (fields)
                footer class="modal-actions" {
                    a class="btn btn-link" href=(cancel_href) { "Cancel" }
                    button type="submit" class="btn btn-primary" { "Save" }
                }
            }
        }
    }
}

pub fn text_field(label: &str, name: &str, kind: &str, value: &str, required: bool) -> Markup {
    html! {
        label class="field" {
            span { (label) @if required { " *" } }
            input type=(kind) name=(name) value=(value) required[required];
        }
    }
}

pub fn textarea_field(label: &str, name: &str, value: &str) -> Markup {
    html! {
        label class="field" {
            span { (label) }
            textarea name=(name) rows="3" { (value) }
        }
    }
}

/// `empty_label` adds a blank first option, e.g. "No zone".
pub fn select_field(
    label: &str,
    name: &str,
    options: &[(String, String)],
    current: &str,
    empty_label: Option<&str>,
) -> Markup {
    html! {
        label class="field" {
            span { (label) }
            select name=(name) {
                @if let Some(empty) = empty_label {
                    option value="" selected[current.is_empty()] { (empty) }
                }
                @for (value, text) in options {
                    option value=(value) selected[current == value] { (text) }
                }
            }
        }
    }
}
