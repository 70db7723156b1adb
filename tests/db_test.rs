mod common;

use std::collections::{HashMap, HashSet};

use common::{capitals, create_test_db, new_question};
use flashquiz::models::OptionLabel;
use flashquiz::services::quiz::{GradeOutcome, QuizService, QuizSession, StartOutcome};
use rand::{rngs::StdRng, SeedableRng};

#[tokio::test]
async fn test_db_connection() {
    let db = create_test_db().await;
    assert!(db.migration_applied("V1").await.unwrap());
    assert!(!db.migration_applied("V2").await.unwrap());
}

#[tokio::test]
async fn test_set_crud() {
    let db = create_test_db().await;

    let set = db.create_set("Capitals").await.unwrap();
    assert!(set.id > 0);

    let sets = db.sets().await.unwrap();
    assert_eq!(sets.len(), 1);
    assert_eq!(sets[0].title, "Capitals");
    assert_eq!(sets[0].question_count, 0);

    let renamed = db.update_set(set.id, "World Capitals").await.unwrap();
    assert_eq!(renamed.map(|s| s.title), Some("World Capitals".to_string()));
    assert_eq!(
        db.flashcard_set(set.id).await.unwrap().unwrap().title,
        "World Capitals"
    );
}

#[tokio::test]
async fn test_update_unknown_set_is_none() {
    let db = create_test_db().await;
    assert!(db.update_set(999, "Nothing").await.unwrap().is_none());
    assert!(db.flashcard_set(999).await.unwrap().is_none());
}

#[tokio::test]
async fn test_set_listing_counts_questions() {
    let db = create_test_db().await;
    let (set_id, _) = capitals(&db).await;
    db.create_set("Empty").await.unwrap();

    let sets = db.sets().await.unwrap();
    assert_eq!(sets.len(), 2);
    assert_eq!(sets[0].id, set_id);
    assert_eq!(sets[0].question_count, 3);
    assert_eq!(sets[1].question_count, 0);
}

#[tokio::test]
async fn test_question_crud() {
    let db = create_test_db().await;
    let set = db.create_set("Capitals").await.unwrap();

    let question = db
        .add_question(set.id, &new_question("Capital of Chile?", OptionLabel::D))
        .await
        .unwrap();
    assert_eq!(db.question(question.id).await.unwrap(), Some(question.clone()));
    assert_eq!(question.option_text(OptionLabel::D), "Capital of Chile? D");

    let mut fields = new_question("Capital of Chile?", OptionLabel::B);
    fields.option_b = "Santiago".to_string();
    let updated = db
        .update_question(question.id, &fields)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.set_id, set.id);
    assert_eq!(updated.correct_option, OptionLabel::B);

    let stored = db.question(question.id).await.unwrap().unwrap();
    assert_eq!(stored.option_text(stored.correct_option), "Santiago");

    assert_eq!(db.delete_question(question.id).await.unwrap(), Some(set.id));
    assert!(db.question(question.id).await.unwrap().is_none());
    assert_eq!(db.delete_question(question.id).await.unwrap(), None);
}

#[tokio::test]
async fn test_update_unknown_question_is_none() {
    let db = create_test_db().await;
    let fields = new_question("Nowhere?", OptionLabel::A);
    assert!(db.update_question(42, &fields).await.unwrap().is_none());
}

#[tokio::test]
async fn test_question_needs_existing_set() {
    let db = create_test_db().await;
    let result = db
        .add_question(12345, &new_question("Orphan?", OptionLabel::A))
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_delete_set_cascades_to_questions() {
    let db = create_test_db().await;
    let (set_id, questions) = capitals(&db).await;
    let (other_id, _) = capitals(&db).await;

    assert!(db.delete_set(set_id).await.unwrap());

    for q in &questions {
        assert!(db.question(q.id).await.unwrap().is_none());
    }
    assert!(db.questions_for_set(set_id).await.unwrap().is_empty());
    assert_eq!(db.questions_for_set(other_id).await.unwrap().len(), 3);

    // Second delete finds nothing
    assert!(!db.delete_set(set_id).await.unwrap());
}

#[tokio::test]
async fn test_questions_by_ids_stays_inside_set() {
    let db = create_test_db().await;
    let (set_id, questions) = capitals(&db).await;
    let (_, other_questions) = capitals(&db).await;

    let ids = [questions[2].id, other_questions[0].id, 9999, questions[0].id];
    let found = db.questions_by_ids(set_id, &ids).await.unwrap();
    let found_ids: Vec<i64> = found.iter().map(|q| q.id).collect();
    assert_eq!(found_ids, vec![questions[0].id, questions[2].id]);

    assert!(db.questions_by_ids(set_id, &[]).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_questions_by_ids_binds_repeated_ids_once() {
    let db = create_test_db().await;
    let (set_id, questions) = capitals(&db).await;

    let ids = vec![questions[1].id; 40_000];
    let found = db.questions_by_ids(set_id, &ids).await.unwrap();
    assert_eq!(found, vec![questions[1].clone()]);
}

#[tokio::test]
async fn test_quiz_round_trip_against_store() {
    let db = create_test_db().await;
    let (set_id, questions) = capitals(&db).await;
    let quiz = QuizService::new(db.clone());
    let mut rng = StdRng::seed_from_u64(3);

    let session = QuizSession::default().with_sample_size(3);
    let StartOutcome::Started(started) = quiz.start(set_id, session, &mut rng).await.unwrap() else {
        panic!("expected a started quiz");
    };
    let sampled: HashSet<i64> = started.questions.iter().map(|q| q.id).collect();
    let all: HashSet<i64> = questions.iter().map(|q| q.id).collect();
    assert_eq!(sampled, all);

    let answers: HashMap<String, String> = [
        (questions[0].id, "A"),
        (questions[1].id, "C"),
        (questions[2].id, "D"),
    ]
    .into_iter()
    .map(|(id, label)| (id.to_string(), label.to_string()))
    .collect();

    let GradeOutcome::Graded(graded) = quiz.grade(set_id, &started.session, &answers).await.unwrap()
    else {
        panic!("expected a graded quiz");
    };
    assert_eq!(graded.report.score, 2);
    let third = graded
        .report
        .results
        .iter()
        .find(|r| r.question.id == questions[2].id)
        .unwrap();
    assert!(!third.is_correct);
    assert_eq!(third.correct, OptionLabel::B);
}

#[tokio::test]
async fn test_second_start_replaces_graded_sample() {
    let db = create_test_db().await;
    let set = db.create_set("Numbers").await.unwrap();
    for n in 0..10 {
        db.add_question(set.id, &new_question(&format!("Q{n}"), OptionLabel::A))
            .await
            .unwrap();
    }
    let quiz = QuizService::new(db.clone());
    let mut rng = StdRng::seed_from_u64(77);

    let session = QuizSession::default().with_sample_size(2);
    let StartOutcome::Started(first) = quiz.start(set.id, session, &mut rng).await.unwrap() else {
        panic!("expected a started quiz");
    };
    let StartOutcome::Started(second) = quiz
        .start(set.id, first.session.clone(), &mut rng)
        .await
        .unwrap()
    else {
        panic!("expected a started quiz");
    };

    let GradeOutcome::Graded(graded) = quiz
        .grade(set.id, &second.session, &HashMap::new())
        .await
        .unwrap()
    else {
        panic!("expected a graded quiz");
    };
    let graded_ids: Vec<i64> = graded.report.results.iter().map(|r| r.question.id).collect();
    assert_eq!(graded_ids, second.session.question_ids);
    assert_eq!(graded.report.score, 0);
}

#[tokio::test]
async fn test_deleted_question_drops_out_of_grading() {
    let db = create_test_db().await;
    let (set_id, questions) = capitals(&db).await;
    let quiz = QuizService::new(db.clone());

    let session = QuizSession {
        question_ids: questions.iter().map(|q| q.id).collect(),
        sample_size: 3,
    };
    db.delete_question(questions[1].id).await.unwrap();

    let GradeOutcome::Graded(graded) = quiz.grade(set_id, &session, &HashMap::new()).await.unwrap()
    else {
        panic!("expected a graded quiz");
    };
    assert_eq!(graded.report.total(), 2);
}

#[tokio::test]
async fn test_quiz_on_deleted_set_is_not_found() {
    let db = create_test_db().await;
    let (set_id, _) = capitals(&db).await;
    db.delete_set(set_id).await.unwrap();

    let quiz = QuizService::new(db.clone());
    let mut rng = StdRng::seed_from_u64(1);
    let outcome = quiz
        .start(set_id, QuizSession::default(), &mut rng)
        .await
        .unwrap();
    assert!(matches!(outcome, StartOutcome::SetNotFound));
}
