use axum::{
    extract::{Form, State},
    http::{
        header::{LOCATION, SET_COOKIE},
        HeaderValue, StatusCode,
    },
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use maud::Markup;

use crate::{
    extractors::SessionContext,
    models::{FormErrors, SettingsForm},
    names,
    rejections::{AppError, ResultExt},
    utils, views, AppState,
};

use crate::views::settings as settings_views;

pub fn routes() -> Router<AppState> {
    Router::new().route("/settings", get(settings_page).post(settings_post))
}

async fn settings_page(SessionContext(session): SessionContext) -> Markup {
    views::page(
        "Settings",
        settings_views::settings_page(&session.sample_size.to_string(), &FormErrors::default()),
    )
}

async fn settings_post(
    State(state): State<AppState>,
    Form(form): Form<SettingsForm>,
) -> Result<Response, AppError> {
    let sample_size = match form.validate() {
        Ok(sample_size) => sample_size,
        Err(errors) => {
            let page = views::page(
                "Settings",
                settings_views::settings_page(&form.num_questions, &errors),
            );
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response());
        }
    };

    let cookie = utils::cookie(
        names::SAMPLE_SIZE_COOKIE_NAME,
        &sample_size.to_string(),
        state.secure_cookies,
    )
    .reject("could not build sample size cookie")?;

    tracing::debug!(sample_size, "sample size preference saved");

    Ok((
        StatusCode::SEE_OTHER,
        [
            (SET_COOKIE, cookie),
            (LOCATION, HeaderValue::from_static(names::INDEX_URL)),
        ],
    )
        .into_response())
}
