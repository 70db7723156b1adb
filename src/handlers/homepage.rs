use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use maud::Markup;

use crate::{
    models::{FormErrors, SetForm},
    names,
    rejections::{AppError, ResultExt},
    views, AppState,
};

use crate::views::homepage as homepage_views;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(homepage))
        .route("/create_set", get(create_set_page).post(create_set_post))
}

async fn homepage(State(state): State<AppState>) -> Result<Markup, AppError> {
    let sets = state.db.sets().await.reject("could not get sets")?;

    Ok(views::page("Flashcard Sets", homepage_views::set_list(&sets)))
}

async fn create_set_page() -> Markup {
    views::page(
        "Create Set",
        homepage_views::create_set(&SetForm::default(), &FormErrors::default()),
    )
}

async fn create_set_post(
    State(state): State<AppState>,
    Form(form): Form<SetForm>,
) -> Result<Response, AppError> {
    let title = match form.validate() {
        Ok(title) => title,
        Err(errors) => {
            return Ok((
                StatusCode::UNPROCESSABLE_ENTITY,
                views::page("Create Set", homepage_views::create_set(&form, &errors)),
            )
                .into_response());
        }
    };

    state
        .db
        .create_set(&title)
        .await
        .reject("could not create set")?;

    Ok(Redirect::to(names::INDEX_URL).into_response())
}
