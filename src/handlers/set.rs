use axum::{
    extract::{Form, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
    Router,
};
use maud::Markup;
use serde::Deserialize;

use crate::{
    db::FlashcardSet,
    models::{FormErrors, QuestionForm, SetForm},
    names,
    rejections::{AppError, ResultExt},
    views, AfterAddQuestion, AppState,
};

use crate::views::{question as question_views, set as set_views};

pub(crate) const SET_UPDATED_MESSAGE: &str = "Set updated successfully!";
pub(crate) const QUESTION_ADDED_MESSAGE: &str = "Question added!";

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/set/{id}", get(set_page).post(update_set))
        .route("/set/{id}/edit", get(set_page).post(update_set))
        .route("/set/{id}/delete", post(delete_set))
        .route(
            "/set/{id}/add_question",
            get(add_question_page).post(add_question_post),
        )
}

/// `?updated=1` / `?added=1` markers left by the redirect after a POST.
#[derive(Deserialize, Default)]
struct FlashQuery {
    updated: Option<String>,
    added: Option<String>,
}

impl FlashQuery {
    fn message(&self, enabled: bool) -> Option<&'static str> {
        if !enabled {
            None
        } else if self.updated.is_some() {
            Some(SET_UPDATED_MESSAGE)
        } else if self.added.is_some() {
            Some(QUESTION_ADDED_MESSAGE)
        } else {
            None
        }
    }
}

/// Appends `?{marker}=1` when flash messages are on.
pub(crate) fn with_flash(url: String, marker: &str, enabled: bool) -> String {
    if enabled {
        format!("{url}?{marker}=1")
    } else {
        url
    }
}

pub(crate) async fn find_set(state: &AppState, set_id: i64) -> Result<FlashcardSet, AppError> {
    state
        .db
        .flashcard_set(set_id)
        .await
        .reject("could not get set")?
        .ok_or(AppError::NotFound)
}

async fn render_set_page(
    state: &AppState,
    set: &FlashcardSet,
    set_form: &SetForm,
    set_errors: &FormErrors,
    message: Option<&str>,
) -> Result<Markup, AppError> {
    let questions = state
        .db
        .questions_for_set(set.id)
        .await
        .reject("could not get questions")?;

    Ok(views::page(
        &set.title,
        set_views::set_page(set_views::SetPageData {
            set,
            questions: &questions,
            set_form,
            set_errors,
            message,
        }),
    ))
}

async fn set_page(
    State(state): State<AppState>,
    Path(set_id): Path<i64>,
    Query(flash): Query<FlashQuery>,
) -> Result<Markup, AppError> {
    let set = find_set(&state, set_id).await?;

    render_set_page(
        &state,
        &set,
        &SetForm::from_set(&set),
        &FormErrors::default(),
        flash.message(state.flash_messages),
    )
    .await
}

async fn update_set(
    State(state): State<AppState>,
    Path(set_id): Path<i64>,
    Form(form): Form<SetForm>,
) -> Result<Response, AppError> {
    let set = find_set(&state, set_id).await?;

    let title = match form.validate() {
        Ok(title) => title,
        Err(errors) => {
            let page = render_set_page(&state, &set, &form, &errors, None).await?;
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response());
        }
    };

    state
        .db
        .update_set(set_id, &title)
        .await
        .reject("could not update set")?
        .ok_or(AppError::NotFound)?;

    let target = with_flash(names::edit_set_url(set_id), "updated", state.flash_messages);
    Ok(Redirect::to(&target).into_response())
}

async fn delete_set(
    State(state): State<AppState>,
    Path(set_id): Path<i64>,
) -> Result<Redirect, AppError> {
    let deleted = state
        .db
        .delete_set(set_id)
        .await
        .reject("could not delete set")?;

    if !deleted {
        return Err(AppError::NotFound);
    }

    Ok(Redirect::to(names::INDEX_URL))
}

async fn add_question_page(
    State(state): State<AppState>,
    Path(set_id): Path<i64>,
    Query(flash): Query<FlashQuery>,
) -> Result<Markup, AppError> {
    let set = find_set(&state, set_id).await?;

    Ok(views::page(
        "Add Question",
        question_views::add_question_page(
            &set,
            &QuestionForm::default(),
            &FormErrors::default(),
            flash.message(state.flash_messages),
        ),
    ))
}

async fn add_question_post(
    State(state): State<AppState>,
    Path(set_id): Path<i64>,
    Form(form): Form<QuestionForm>,
) -> Result<Response, AppError> {
    let set = find_set(&state, set_id).await?;

    let fields = match form.validate() {
        Ok(fields) => fields,
        Err(errors) => {
            let page = views::page(
                "Add Question",
                question_views::add_question_page(&set, &form, &errors, None),
            );
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response());
        }
    };

    state
        .db
        .add_question(set_id, &fields)
        .await
        .reject("could not add question")?;

    let target = after_add_target(set_id, form.continue_adding(), &state);
    Ok(Redirect::to(&target).into_response())
}

fn after_add_target(set_id: i64, continue_adding: bool, state: &AppState) -> String {
    let flash = state.flash_messages;
    match (continue_adding, state.after_add_question) {
        (false, _) => with_flash(names::edit_set_url(set_id), "added", flash),
        (true, AfterAddQuestion::AddForm) => {
            with_flash(names::add_question_url(set_id), "added", flash)
        }
        (true, AfterAddQuestion::SetPage) => format!(
            "{}#{}",
            with_flash(names::edit_set_url(set_id), "added", flash),
            names::ADD_QUESTION_ANCHOR
        ),
    }
}
