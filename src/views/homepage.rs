use maud::{html, Markup};

use crate::{
    db::SetSummary,
    models::{FormErrors, SetForm, MAX_TITLE_LEN},
    names,
    views::components,
};

pub fn set_list(sets: &[SetSummary]) -> Markup {
    html! {
        h1 { "Flashcard sets" }
        @if sets.is_empty() {
            p { "No sets yet." }
        } @else {
            table {
                thead { tr {
                    th { "Set" }
                    th { "Questions" }
                    th {}
                } }
                tbody {
                    @for set in sets {
                        tr {
                            td { a href=(names::edit_set_url(set.id)) { (set.title) } }
                            td { (set.question_count) }
                            td {
                                @if set.question_count > 0 {
                                    a href=(names::quiz_url(set.id)) { "Take quiz" }
                                }
                            }
                        }
                    }
                }
            }
        }
        a role="button" href=(names::CREATE_SET_URL) { "Create a set" }
    }
}

pub fn create_set(form: &SetForm, errors: &FormErrors) -> Markup {
    html! {
        h1 { "Create a set" }
        article style="width: fit-content;" {
            form action=(names::CREATE_SET_URL) method="post" {
                (components::text_field("Set Title", "title", &form.title, MAX_TITLE_LEN, errors))
                button type="submit" { "Create Set" }
            }
        }
    }
}
