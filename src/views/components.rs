use maud::{html, Markup};

use crate::models::FormErrors;

/// Single-line text input that echoes `value` and shows the field's error.
pub fn text_field(
    label: &str,
    name: &'static str,
    value: &str,
    max_len: usize,
    errors: &FormErrors,
) -> Markup {
    html! {
        label {
            (label)
            @if let Some(message) = errors.get(name) {
                input type="text" name=(name) value=(value) maxlength=(max_len)
                      required aria-invalid="true";
                small { (message) }
            } @else {
                input type="text" name=(name) value=(value) maxlength=(max_len) required;
            }
        }
    }
}

/// A form holding one button, for POST-only actions such as delete.
pub fn post_button(action: &str, label: &str, class: &str) -> Markup {
    html! {
        form action=(action) method="post" style="display: inline;" {
            button type="submit" class=(class) { (label) }
        }
    }
}

pub fn flash(message: Option<&str>) -> Markup {
    html! {
        @if let Some(message) = message {
            p role="status" class="flash" { (message) }
        }
    }
}
