use std::collections::HashMap;

use axum::{
    extract::{Form, Path, State},
    http::{header::SET_COOKIE, HeaderMap},
    response::IntoResponse,
    routing::get,
    Router,
};
use maud::Markup;
use rand::{rngs::StdRng, SeedableRng};

use crate::{
    extractors::SessionContext,
    names,
    rejections::{AppError, ResultExt},
    services::quiz::{GradeOutcome, StartOutcome},
    utils, views, AppState,
};

use crate::views::quiz as quiz_views;

pub fn routes() -> Router<AppState> {
    Router::new().route("/set/{id}/quiz", get(start_quiz).post(grade_quiz))
}

async fn start_quiz(
    State(state): State<AppState>,
    Path(set_id): Path<i64>,
    SessionContext(session): SessionContext,
) -> Result<impl IntoResponse, AppError> {
    let mut rng = StdRng::from_entropy();

    let started = match state
        .quiz
        .start(set_id, session, &mut rng)
        .await
        .reject("could not start quiz")?
    {
        StartOutcome::Started(started) => started,
        StartOutcome::SetNotFound => return Err(AppError::NotFound),
    };

    let cookie = utils::cookie(
        names::QUIZ_QUESTION_IDS_COOKIE_NAME,
        &utils::encode_ids(&started.session.question_ids),
        state.secure_cookies,
    )
    .reject("could not build quiz cookie")?;
    let mut headers = HeaderMap::new();
    headers.insert(SET_COOKIE, cookie);

    let page = views::page(
        &started.set.title,
        quiz_views::quiz(&started.set, &started.questions),
    );

    Ok((headers, page))
}

async fn grade_quiz(
    State(state): State<AppState>,
    Path(set_id): Path<i64>,
    SessionContext(session): SessionContext,
    Form(answers): Form<HashMap<String, String>>,
) -> Result<Markup, AppError> {
    let graded = match state
        .quiz
        .grade(set_id, &session, &answers)
        .await
        .reject("could not grade quiz")?
    {
        GradeOutcome::Graded(graded) => graded,
        GradeOutcome::SetNotFound => return Err(AppError::NotFound),
    };

    Ok(views::page(
        "Results",
        quiz_views::results(&graded.set, &graded.report),
    ))
}
