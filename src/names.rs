pub const INDEX_URL: &str = "/";
pub const CREATE_SET_URL: &str = "/create_set";
pub const SETTINGS_URL: &str = "/settings";

pub const QUIZ_QUESTION_IDS_COOKIE_NAME: &str = "quiz_question_ids";
pub const SAMPLE_SIZE_COOKIE_NAME: &str = "sample_size";

/// Anchor of the inline add-question form on the set page.
pub const ADD_QUESTION_ANCHOR: &str = "add-question";

pub fn set_url(set_id: i64) -> String {
    format!("/set/{set_id}")
}

pub fn edit_set_url(set_id: i64) -> String {
    format!("/set/{set_id}/edit")
}

pub fn delete_set_url(set_id: i64) -> String {
    format!("/set/{set_id}/delete")
}

pub fn add_question_url(set_id: i64) -> String {
    format!("/set/{set_id}/add_question")
}

pub fn quiz_url(set_id: i64) -> String {
    format!("/set/{set_id}/quiz")
}

pub fn edit_question_url(question_id: i64) -> String {
    format!("/question/{question_id}/edit")
}

pub fn delete_question_url(question_id: i64) -> String {
    format!("/question/{question_id}/delete")
}

// Quiz sample size
pub const MIN_SAMPLE_SIZE: usize = 1;
pub const MAX_SAMPLE_SIZE: usize = 100;
pub const DEFAULT_SAMPLE_SIZE: usize = 5;
