use maud::{html, Markup};

use crate::{
    db::FlashcardSet,
    models::{FormErrors, OptionLabel, QuestionForm, MAX_OPTION_LEN, MAX_QUESTION_LEN},
    names,
    views::components,
};

pub enum QuestionFormMode {
    /// Creating; `continue_adding` checkbox is shown.
    Add { set_id: i64 },
    Edit { question_id: i64 },
}

impl QuestionFormMode {
    fn action(&self) -> String {
        match self {
            QuestionFormMode::Add { set_id } => names::add_question_url(*set_id),
            QuestionFormMode::Edit { question_id } => names::edit_question_url(*question_id),
        }
    }

    fn submit_label(&self) -> &'static str {
        match self {
            QuestionFormMode::Add { .. } => "Add Question",
            QuestionFormMode::Edit { .. } => "Save Question",
        }
    }
}

/// The bare question form, shared by the set page and the add/edit pages.
pub fn question_form(mode: &QuestionFormMode, form: &QuestionForm, errors: &FormErrors) -> Markup {
    html! {
        form action=(mode.action()) method="post" {
            (components::text_field("Question", "question_text", &form.question_text, MAX_QUESTION_LEN, errors))
            @for label in OptionLabel::ALL {
                @let name = option_field(label);
                (components::text_field(&format!("Option {label}"), name, form.option(label), MAX_OPTION_LEN, errors))
            }
            label {
                "Correct Option"
                select name="correct_option" aria-invalid=[errors.get("correct_option").map(|_| "true")] {
                    @for label in OptionLabel::ALL {
                        option value=(label.as_str()) selected[form.correct_option == label.as_str()] { (label.as_str()) }
                    }
                }
                @if let Some(message) = errors.get("correct_option") {
                    small { (message) }
                }
            }
            @if let QuestionFormMode::Add { .. } = mode {
                label {
                    input type="checkbox" name="continue_adding" value="y" checked[form.continue_adding()];
                    "Add another question after this one"
                }
            }
            button type="submit" { (mode.submit_label()) }
        }
    }
}

fn option_field(label: OptionLabel) -> &'static str {
    match label {
        OptionLabel::A => "option_a",
        OptionLabel::B => "option_b",
        OptionLabel::C => "option_c",
        OptionLabel::D => "option_d",
    }
}

pub fn add_question_page(
    set: &FlashcardSet,
    form: &QuestionForm,
    errors: &FormErrors,
    message: Option<&str>,
) -> Markup {
    html! {
        p { a href=(names::edit_set_url(set.id)) { "← " (set.title) } }
        h1 { "Add a question" }
        (components::flash(message))
        article {
            (question_form(&QuestionFormMode::Add { set_id: set.id }, form, errors))
        }
    }
}

pub fn edit_question_page(
    set: &FlashcardSet,
    question_id: i64,
    form: &QuestionForm,
    errors: &FormErrors,
) -> Markup {
    html! {
        p { a href=(names::edit_set_url(set.id)) { "← " (set.title) } }
        h1 { "Edit question" }
        article {
            (question_form(&QuestionFormMode::Edit { question_id }, form, errors))
        }
    }
}
