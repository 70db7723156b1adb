#![allow(dead_code)]

use flashquiz::db::{Db, NewQuestion, Question};
use flashquiz::models::OptionLabel;

pub async fn create_test_db() -> Db {
    use std::sync::atomic::{AtomicU32, Ordering};
    static COUNTER: AtomicU32 = AtomicU32::new(0);
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    let path =
        std::env::temp_dir().join(format!("flashquiz_test_{}_{}.db", std::process::id(), id));
    // Clean up leftover file from previous runs
    let _ = std::fs::remove_file(&path);
    let url = format!("sqlite://{}", path.display());
    Db::new(&url).await.expect("failed to create test database")
}

pub fn new_question(text: &str, correct: OptionLabel) -> NewQuestion {
    NewQuestion {
        question_text: text.to_string(),
        option_a: format!("{text} A"),
        option_b: format!("{text} B"),
        option_c: format!("{text} C"),
        option_d: format!("{text} D"),
        correct_option: correct,
    }
}

/// Set "Capitals" with Q1 (A), Q2 (C), Q3 (B). Returns the set id and questions.
pub async fn capitals(db: &Db) -> (i64, Vec<Question>) {
    let set = db.create_set("Capitals").await.unwrap();
    let mut questions = Vec::new();
    for (text, correct) in [
        ("Capital of France?", OptionLabel::A),
        ("Capital of Japan?", OptionLabel::C),
        ("Capital of Peru?", OptionLabel::B),
    ] {
        questions.push(
            db.add_question(set.id, &new_question(text, correct))
                .await
                .unwrap(),
        );
    }
    (set.id, questions)
}
