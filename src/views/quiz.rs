use maud::{html, Markup};

use crate::{
    db::{FlashcardSet, Question},
    models::OptionLabel,
    names,
    services::quiz::{GradeReport, QuestionResult},
};

/// Unanswered quiz. Correct labels are never rendered here.
pub fn quiz(set: &FlashcardSet, questions: &[Question]) -> Markup {
    html! {
        p { "Taking quiz " mark { (set.title) } "." }
        @if questions.is_empty() {
            p { "This set has no questions yet." }
            a href=(names::add_question_url(set.id)) { "Add a question" }
        } @else {
            form action=(names::quiz_url(set.id)) method="post" {
                @for (idx, q) in questions.iter().enumerate() {
                    article {
                        p style="color: #666; font-size: 0.9rem;" {
                            "Question " strong { (idx + 1) } " of " (questions.len())
                        }
                        h3 { (q.question_text) }
                        fieldset {
                            @for (label, text) in q.options() {
                                label {
                                    input type="radio" name=(q.id) value=(label.as_str());
                                    (label.as_str()) ". " (text)
                                }
                            }
                        }
                    }
                }
                button type="submit" { "Submit answers" }
            }
        }
    }
}

pub fn results(set: &FlashcardSet, report: &GradeReport) -> Markup {
    html! {
        p { "Results for " mark { (set.title) } "." }
        h1 { "Score: " (report.score) " / " (report.total()) }
        @if report.results.is_empty() {
            p { "There was nothing to grade. Start the quiz again to get a fresh set of questions." }
        }
        @for result in &report.results {
            (result_card(result))
        }
        p {
            a role="button" href=(names::quiz_url(set.id)) { "Try again" }
            " "
            a role="button" class="secondary" href=(names::edit_set_url(set.id)) { "Back to set" }
        }
    }
}

fn result_card(result: &QuestionResult) -> Markup {
    let q = &result.question;
    let selected = result.selected.as_deref().and_then(OptionLabel::parse);

    html! {
        article {
            h3 { (q.question_text) }
            @for (label, text) in q.options() {
                @let css_class = if label == result.correct {
                    "option-correct"
                } else if Some(label) == selected {
                    "option-incorrect"
                } else {
                    "option-neutral"
                };
                div class=(css_class) {
                    (label.as_str()) ". " (text)
                    @if label == result.correct {
                        " " span class="badge-correct" { "Correct" }
                    } @else if Some(label) == selected {
                        " " span class="badge-incorrect" { "Incorrect" }
                    }
                }
            }
            footer {
                @match &result.selected {
                    Some(selected) => { "Your answer: " strong { (selected) } }
                    None => { "Not answered." }
                }
                " Correct answer: " strong { (result.correct.as_str()) }
                @if result.is_correct { " ✔" } @else { " ✘" }
            }
        }
    }
}
