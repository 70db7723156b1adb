use axum::{
    extract::{Form, Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
    Router,
};
use maud::Markup;

use crate::{
    db::Question,
    models::{FormErrors, QuestionForm},
    names,
    rejections::{AppError, ResultExt},
    views, AppState,
};

use super::set::find_set;
use crate::views::question as question_views;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/question/{id}/edit",
            get(edit_question_page).post(edit_question_post),
        )
        .route("/question/{id}/delete", post(delete_question))
}

async fn find_question(state: &AppState, question_id: i64) -> Result<Question, AppError> {
    state
        .db
        .question(question_id)
        .await
        .reject("could not get question")?
        .ok_or(AppError::NotFound)
}

async fn edit_question_page(
    State(state): State<AppState>,
    Path(question_id): Path<i64>,
) -> Result<Markup, AppError> {
    let question = find_question(&state, question_id).await?;
    let set = find_set(&state, question.set_id).await?;

    Ok(views::page(
        "Edit Question",
        question_views::edit_question_page(
            &set,
            question.id,
            &QuestionForm::from_question(&question),
            &FormErrors::default(),
        ),
    ))
}

async fn edit_question_post(
    State(state): State<AppState>,
    Path(question_id): Path<i64>,
    Form(form): Form<QuestionForm>,
) -> Result<Response, AppError> {
    let question = find_question(&state, question_id).await?;

    let fields = match form.validate() {
        Ok(fields) => fields,
        Err(errors) => {
            let set = find_set(&state, question.set_id).await?;
            let page = views::page(
                "Edit Question",
                question_views::edit_question_page(&set, question.id, &form, &errors),
            );
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response());
        }
    };

    let updated = state
        .db
        .update_question(question_id, &fields)
        .await
        .reject("could not update question")?
        .ok_or(AppError::NotFound)?;

    Ok(Redirect::to(&names::edit_set_url(updated.set_id)).into_response())
}

async fn delete_question(
    State(state): State<AppState>,
    Path(question_id): Path<i64>,
) -> Result<Redirect, AppError> {
    let set_id = state
        .db
        .delete_question(question_id)
        .await
        .reject("could not delete question")?
        .ok_or(AppError::NotFound)?;

    Ok(Redirect::to(&names::edit_set_url(set_id)))
}
