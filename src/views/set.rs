use maud::{html, Markup};

use crate::{
    db::{FlashcardSet, Question},
    models::{FormErrors, QuestionForm, SetForm, MAX_TITLE_LEN},
    names,
    views::{components, question},
};

pub struct SetPageData<'a> {
    pub set: &'a FlashcardSet,
    pub questions: &'a [Question],
    pub set_form: &'a SetForm,
    pub set_errors: &'a FormErrors,
    pub message: Option<&'a str>,
}

pub fn set_page(data: SetPageData<'_>) -> Markup {
    let set_id = data.set.id;

    html! {
        p { a href=(names::INDEX_URL) { "← All sets" } }
        h1 { (data.set.title) }
        (components::flash(data.message))

        article {
            form action=(names::edit_set_url(set_id)) method="post" {
                (components::text_field("Set Title", "title", &data.set_form.title, MAX_TITLE_LEN, data.set_errors))
                button type="submit" { "Save Title" }
            }
        }

        h2 { "Questions (" (data.questions.len()) ")" }
        @if data.questions.is_empty() {
            p { "This set has no questions yet." }
        } @else {
            a role="button" href=(names::quiz_url(set_id)) { "Take quiz" }
            (question_list(data.questions))
        }

        h2 id=(names::ADD_QUESTION_ANCHOR) { "Add a question" }
        article {
            (question::question_form(
                &question::QuestionFormMode::Add { set_id },
                &QuestionForm::default(),
                &FormErrors::default(),
            ))
        }

        hr;
        (components::post_button(&names::delete_set_url(set_id), "Delete set", "secondary"))
    }
}

fn question_list(questions: &[Question]) -> Markup {
    html! {
        ol {
            @for q in questions {
                li {
                    strong { (q.question_text) }
                    ul {
                        @for (label, text) in q.options() {
                            li {
                                (label.as_str()) ". " (text)
                                @if label == q.correct_option { " ✓" }
                            }
                        }
                    }
                    a href=(names::edit_question_url(q.id)) { "Edit" }
                    " "
                    (components::post_button(&names::delete_question_url(q.id), "Delete", "secondary outline"))
                }
            }
        }
    }
}
