use std::collections::{HashMap, HashSet};

use color_eyre::Result;
use rand::{seq::SliceRandom, Rng};

use crate::db::{Db, FlashcardSet, Question};
use crate::models::OptionLabel;
use crate::names;

// ---------------------------------------------------------------------------
// QuizRepository trait (the store reads the quiz engine needs)
// ---------------------------------------------------------------------------

#[cfg_attr(test, mockall::automock)]
pub trait QuizRepository: Send + Sync {
    fn flashcard_set(
        &self,
        set_id: i64,
    ) -> impl std::future::Future<Output = Result<Option<FlashcardSet>>> + Send;

    fn questions_for_set(
        &self,
        set_id: i64,
    ) -> impl std::future::Future<Output = Result<Vec<Question>>> + Send;

    fn questions_by_ids(
        &self,
        set_id: i64,
        ids: &[i64],
    ) -> impl std::future::Future<Output = Result<Vec<Question>>> + Send;
}

impl QuizRepository for Db {
    fn flashcard_set(
        &self,
        set_id: i64,
    ) -> impl std::future::Future<Output = Result<Option<FlashcardSet>>> + Send {
        Db::flashcard_set(self, set_id)
    }

    fn questions_for_set(
        &self,
        set_id: i64,
    ) -> impl std::future::Future<Output = Result<Vec<Question>>> + Send {
        Db::questions_for_set(self, set_id)
    }

    fn questions_by_ids(
        &self,
        set_id: i64,
        ids: &[i64],
    ) -> impl std::future::Future<Output = Result<Vec<Question>>> + Send {
        Db::questions_by_ids(self, set_id, ids)
    }
}

// ---------------------------------------------------------------------------
// Session context
// ---------------------------------------------------------------------------

/// Per-browser quiz state. Travels in cookies between the quiz GET and POST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    /// Ids sampled by the latest `start`, in presentation order.
    pub question_ids: Vec<i64>,
    pub sample_size: usize,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self {
            question_ids: Vec::new(),
            sample_size: names::DEFAULT_SAMPLE_SIZE,
        }
    }
}

impl QuizSession {
    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }
}

// ---------------------------------------------------------------------------
// Outcome types
// ---------------------------------------------------------------------------

pub struct StartedQuiz {
    pub set: FlashcardSet,
    pub questions: Vec<Question>,
    /// Replaces the caller's session; holds exactly the ids of `questions`.
    pub session: QuizSession,
}

pub enum StartOutcome {
    Started(StartedQuiz),
    SetNotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionResult {
    pub question: Question,
    /// Raw submitted value, `None` when unanswered.
    pub selected: Option<String>,
    pub correct: OptionLabel,
    pub is_correct: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeReport {
    pub results: Vec<QuestionResult>,
    pub score: usize,
}

impl GradeReport {
    pub fn total(&self) -> usize {
        self.results.len()
    }
}

pub struct GradedQuiz {
    pub set: FlashcardSet,
    pub report: GradeReport,
}

pub enum GradeOutcome {
    Graded(GradedQuiz),
    SetNotFound,
}

// ---------------------------------------------------------------------------
// Pure steps
// ---------------------------------------------------------------------------

/// Picks `min(desired, questions.len())` distinct questions, each subset equally likely.
pub fn sample_questions<G: Rng + ?Sized>(
    mut questions: Vec<Question>,
    desired: usize,
    rng: &mut G,
) -> Vec<Question> {
    let amount = desired.min(questions.len());
    let (chosen, _) = questions.partial_shuffle(rng, amount);
    chosen.to_vec()
}

/// Grades `questions` in order. Answers are keyed by question id; missing or
/// malformed labels score as incorrect.
pub fn grade_answers(questions: Vec<Question>, answers: &HashMap<String, String>) -> GradeReport {
    let results: Vec<QuestionResult> = questions
        .into_iter()
        .map(|question| {
            let selected = answers.get(&question.id.to_string()).cloned();
            let correct = question.correct_option;
            let is_correct = selected.as_deref().and_then(OptionLabel::parse) == Some(correct);
            QuestionResult {
                question,
                selected,
                correct,
                is_correct,
            }
        })
        .collect();

    let score = results.iter().filter(|r| r.is_correct).count();
    GradeReport { results, score }
}

/// Puts `resolved` back into session order, dropping duplicates.
fn in_session_order(ids: &[i64], resolved: Vec<Question>) -> Vec<Question> {
    let mut by_id: HashMap<i64, Question> = resolved.into_iter().map(|q| (q.id, q)).collect();
    let mut seen = HashSet::new();
    ids.iter()
        .filter(|id| seen.insert(**id))
        .filter_map(|id| by_id.remove(id))
        .collect()
}

// ---------------------------------------------------------------------------
// QuizService
// ---------------------------------------------------------------------------

pub struct QuizService<R: QuizRepository = Db> {
    repo: R,
}

impl<R: QuizRepository + Clone> Clone for QuizService<R> {
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
        }
    }
}

impl<R: QuizRepository> QuizService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub async fn start<G: Rng>(
        &self,
        set_id: i64,
        session: QuizSession,
        rng: &mut G,
    ) -> Result<StartOutcome> {
        let Some(set) = self.repo.flashcard_set(set_id).await? else {
            return Ok(StartOutcome::SetNotFound);
        };

        let pool = self.repo.questions_for_set(set_id).await?;
        let available = pool.len();
        let questions = sample_questions(pool, session.sample_size, rng);

        tracing::info!(
            set_id,
            available,
            sampled = questions.len(),
            "quiz started"
        );

        let session = QuizSession {
            question_ids: questions.iter().map(|q| q.id).collect(),
            ..session
        };

        Ok(StartOutcome::Started(StartedQuiz {
            set,
            questions,
            session,
        }))
    }

    pub async fn grade(
        &self,
        set_id: i64,
        session: &QuizSession,
        answers: &HashMap<String, String>,
    ) -> Result<GradeOutcome> {
        let Some(set) = self.repo.flashcard_set(set_id).await? else {
            return Ok(GradeOutcome::SetNotFound);
        };

        let resolved = self
            .repo
            .questions_by_ids(set_id, &session.question_ids)
            .await?;
        let questions = in_session_order(&session.question_ids, resolved);
        let report = grade_answers(questions, answers);

        tracing::info!(
            set_id,
            score = report.score,
            total = report.total(),
            "quiz graded"
        );

        Ok(GradeOutcome::Graded(GradedQuiz { set, report }))
    }
}
