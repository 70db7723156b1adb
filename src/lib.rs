pub mod db;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod names;
pub mod rejections;
pub mod services;
pub mod utils;
pub mod views;

use axum::{middleware, Router};

use services::quiz::QuizService;

/// Where "add another question" lands after a successful add.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum AfterAddQuestion {
    /// Back to the standalone add-question form.
    AddForm,
    /// The set page, scrolled to its inline add-question form.
    #[default]
    SetPage,
}

#[derive(Clone)]
pub struct AppState {
    pub db: db::Db,
    pub quiz: QuizService,
    pub secure_cookies: bool,
    pub after_add_question: AfterAddQuestion,
    pub flash_messages: bool,
}

impl AppState {
    pub fn new(db: db::Db) -> Self {
        Self {
            quiz: QuizService::new(db.clone()),
            db,
            secure_cookies: false,
            after_add_question: AfterAddQuestion::default(),
            flash_messages: true,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::homepage::routes())
        .merge(handlers::set::routes())
        .merge(handlers::question::routes())
        .merge(handlers::quiz::routes())
        .merge(handlers::settings::routes())
        .fallback(rejections::not_found)
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

async fn log_request(
    req: axum::http::Request<axum::body::Body>,
    next: middleware::Next,
) -> axum::response::Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    let response = next.run(req).await;

    tracing::debug!(%method, %path, status = response.status().as_u16(), "handled request");
    response
}
