use std::{collections::BTreeMap, fmt};

use serde::Deserialize;

use crate::{
    db::{FlashcardSet, NewQuestion, Question},
    names,
};

pub const MAX_TITLE_LEN: usize = 100;
pub const MAX_QUESTION_LEN: usize = 200;
pub const MAX_OPTION_LEN: usize = 100;

/// One of the four answer slots of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, sqlx::Type)]
pub enum OptionLabel {
    A,
    B,
    C,
    D,
}

impl OptionLabel {
    pub const ALL: [OptionLabel; 4] = [Self::A, Self::B, Self::C, Self::D];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }

    /// Exact, case-sensitive match. `"a"` is not a label.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "A" => Some(Self::A),
            "B" => Some(Self::B),
            "C" => Some(Self::C),
            "D" => Some(Self::D),
            _ => None,
        }
    }
}

impl fmt::Display for OptionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field name to message. Empty means the form is valid.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<&'static str, &'static str>);

impl FormErrors {
    pub fn insert(&mut self, field: &'static str, message: &'static str) {
        self.0.entry(field).or_insert(message);
    }

    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn into_result<T>(self, value: T) -> Result<T, FormErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

fn required(
    errors: &mut FormErrors,
    field: &'static str,
    value: &str,
    max_len: usize,
) -> String {
    let value = value.trim();
    if value.is_empty() {
        errors.insert(field, "This field is required.");
    } else if value.chars().count() > max_len {
        errors.insert(field, "This value is too long.");
    }
    value.to_string()
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct SetForm {
    pub title: String,
}

impl SetForm {
    pub fn from_set(set: &FlashcardSet) -> Self {
        Self {
            title: set.title.clone(),
        }
    }

    /// Returns the trimmed title.
    pub fn validate(&self) -> Result<String, FormErrors> {
        let mut errors = FormErrors::default();
        let title = required(&mut errors, "title", &self.title, MAX_TITLE_LEN);
        errors.into_result(title)
    }
}

/// Field-level defaults only: an unticked `continue_adding` must stay `None`
/// rather than pick up the ticked value from [`QuestionForm::default`].
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionForm {
    #[serde(default)]
    pub question_text: String,
    #[serde(default)]
    pub option_a: String,
    #[serde(default)]
    pub option_b: String,
    #[serde(default)]
    pub option_c: String,
    #[serde(default)]
    pub option_d: String,
    #[serde(default)]
    pub correct_option: String,
    /// Checkbox; present when ticked.
    #[serde(default)]
    pub continue_adding: Option<String>,
}

impl Default for QuestionForm {
    fn default() -> Self {
        Self {
            question_text: String::new(),
            option_a: String::new(),
            option_b: String::new(),
            option_c: String::new(),
            option_d: String::new(),
            correct_option: String::new(),
            continue_adding: Some("y".to_string()),
        }
    }
}

impl QuestionForm {
    pub fn from_question(question: &Question) -> Self {
        Self {
            question_text: question.question_text.clone(),
            option_a: question.option_a.clone(),
            option_b: question.option_b.clone(),
            option_c: question.option_c.clone(),
            option_d: question.option_d.clone(),
            correct_option: question.correct_option.to_string(),
            continue_adding: None,
        }
    }

    pub fn continue_adding(&self) -> bool {
        self.continue_adding.is_some()
    }

    pub fn option(&self, label: OptionLabel) -> &str {
        match label {
            OptionLabel::A => &self.option_a,
            OptionLabel::B => &self.option_b,
            OptionLabel::C => &self.option_c,
            OptionLabel::D => &self.option_d,
        }
    }

    pub fn validate(&self) -> Result<NewQuestion, FormErrors> {
        let mut errors = FormErrors::default();

        let question_text = required(
            &mut errors,
            "question_text",
            &self.question_text,
            MAX_QUESTION_LEN,
        );
        let option_a = required(&mut errors, "option_a", &self.option_a, MAX_OPTION_LEN);
        let option_b = required(&mut errors, "option_b", &self.option_b, MAX_OPTION_LEN);
        let option_c = required(&mut errors, "option_c", &self.option_c, MAX_OPTION_LEN);
        let option_d = required(&mut errors, "option_d", &self.option_d, MAX_OPTION_LEN);

        let correct_option = OptionLabel::parse(self.correct_option.trim());
        if correct_option.is_none() {
            errors.insert("correct_option", "Choose one of A, B, C or D.");
        }

        match correct_option {
            Some(correct_option) if errors.is_empty() => Ok(NewQuestion {
                question_text,
                option_a,
                option_b,
                option_c,
                option_d,
                correct_option,
            }),
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct SettingsForm {
    pub num_questions: String,
}

impl SettingsForm {
    pub fn validate(&self) -> Result<usize, FormErrors> {
        let mut errors = FormErrors::default();
        let sample_size = match self.num_questions.trim().parse::<usize>() {
            Ok(n) if (names::MIN_SAMPLE_SIZE..=names::MAX_SAMPLE_SIZE).contains(&n) => n,
            _ => {
                errors.insert("num_questions", "Enter a whole number between 1 and 100.");
                names::DEFAULT_SAMPLE_SIZE
            }
        };
        errors.into_result(sample_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> QuestionForm {
        QuestionForm {
            question_text: "Capital of France?".to_string(),
            option_a: "Paris".to_string(),
            option_b: "Lyon".to_string(),
            option_c: "Nice".to_string(),
            option_d: "Lille".to_string(),
            correct_option: "A".to_string(),
            continue_adding: None,
        }
    }

    #[test]
    fn option_label_parse_is_exact() {
        assert_eq!(OptionLabel::parse("C"), Some(OptionLabel::C));
        assert_eq!(OptionLabel::parse("c"), None);
        assert_eq!(OptionLabel::parse(" C"), None);
        assert_eq!(OptionLabel::parse("E"), None);
        assert_eq!(OptionLabel::parse(""), None);
    }

    #[test]
    fn valid_question_form_maps_to_new_question() {
        let question = filled_form().validate().unwrap();
        assert_eq!(question.question_text, "Capital of France?");
        assert_eq!(question.correct_option, OptionLabel::A);
    }

    #[test]
    fn question_form_trims_input() {
        let mut form = filled_form();
        form.option_b = "  Lyon  ".to_string();
        let question = form.validate().unwrap();
        assert_eq!(question.option_b, "Lyon");
    }

    #[test]
    fn empty_option_b_is_rejected() {
        let mut form = filled_form();
        form.option_b = "   ".to_string();
        let errors = form.validate().unwrap_err();
        assert!(errors.contains("option_b"));
        assert!(!errors.contains("option_a"));
    }

    #[test]
    fn correct_option_outside_labels_is_rejected() {
        let mut form = filled_form();
        form.correct_option = "E".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.get("correct_option"),
            Some("Choose one of A, B, C or D.")
        );
    }

    #[test]
    fn over_long_question_text_is_rejected() {
        let mut form = filled_form();
        form.question_text = "x".repeat(MAX_QUESTION_LEN + 1);
        assert!(form.validate().unwrap_err().contains("question_text"));
    }

    #[test]
    fn set_form_requires_title() {
        assert!(SetForm::default().validate().is_err());
        let form = SetForm {
            title: " Capitals ".to_string(),
        };
        assert_eq!(form.validate().unwrap(), "Capitals");
    }

    #[test]
    fn set_form_round_trips_existing_set() {
        let set = FlashcardSet {
            id: 3,
            title: "Capitals".to_string(),
        };
        assert_eq!(SetForm::from_set(&set).validate().unwrap(), "Capitals");
    }

    #[test]
    fn settings_form_accepts_range() {
        let form = |n: &str| SettingsForm {
            num_questions: n.to_string(),
        };
        assert_eq!(form("10").validate().unwrap(), 10);
        assert!(form("0").validate().is_err());
        assert!(form("101").validate().is_err());
        assert!(form("-3").validate().is_err());
        assert!(form("five").validate().is_err());
    }
}
