use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::CookieJar;

use crate::{names, services::quiz::QuizSession, utils};

/// Extracts the caller's quiz session from its cookies. Missing or unreadable
/// cookies fall back to an empty sample and the default sample size. A sample
/// holds at most `MAX_SAMPLE_SIZE` ids; a longer list is unreadable.
pub struct SessionContext(pub QuizSession);

impl<S: Send + Sync> FromRequestParts<S> for SessionContext {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);

        let question_ids = jar
            .get(names::QUIZ_QUESTION_IDS_COOKIE_NAME)
            .map(|c| utils::decode_ids(c.value()))
            .filter(|ids| ids.len() <= names::MAX_SAMPLE_SIZE)
            .unwrap_or_default();

        let sample_size = jar
            .get(names::SAMPLE_SIZE_COOKIE_NAME)
            .and_then(|c| parse_sample_size(c.value()))
            .unwrap_or(names::DEFAULT_SAMPLE_SIZE);

        let mut session = QuizSession::default().with_sample_size(sample_size);
        session.question_ids = question_ids;

        Ok(SessionContext(session))
    }
}

fn parse_sample_size(value: &str) -> Option<usize> {
    value
        .parse::<usize>()
        .ok()
        .filter(|n| (names::MIN_SAMPLE_SIZE..=names::MAX_SAMPLE_SIZE).contains(n))
}
