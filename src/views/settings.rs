use maud::{html, Markup};

use crate::{models::FormErrors, names};

pub fn settings_page(num_questions: &str, errors: &FormErrors) -> Markup {
    html! {
        h1 { "Settings" }
        article style="width: fit-content;" {
            form action=(names::SETTINGS_URL) method="post" {
                label {
                    "Questions per quiz"
                    @if let Some(message) = errors.get("num_questions") {
                        input type="number" name="num_questions" value=(num_questions)
                              min=(names::MIN_SAMPLE_SIZE) max=(names::MAX_SAMPLE_SIZE)
                              required aria-invalid="true";
                        small { (message) }
                    } @else {
                        input type="number" name="num_questions" value=(num_questions)
                              min=(names::MIN_SAMPLE_SIZE) max=(names::MAX_SAMPLE_SIZE)
                              required;
                        small {
                            "Quizzes draw this many questions at random, or the whole set if it is smaller."
                        }
                    }
                }
                button type="submit" { "Save" }
            }
        }
    }
}
