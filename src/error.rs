use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Contact handler failure, carrying the locale its reply is rendered in.
#[derive(Error, Debug)]
#[error("{source}")]
pub struct AppError {
    #[source]
    source: homeservice_contact::Error,
    locale: String,
}

impl AppError {
    pub fn new(source: homeservice_contact::Error, locale: impl Into<String>) -> Self {
        Self {
            source,
            locale: locale.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self.source {
            homeservice_contact::Error::Forbidden => StatusCode::FORBIDDEN,
            homeservice_contact::Error::Validate(_) => StatusCode::BAD_REQUEST,
            homeservice_contact::Error::Dispatch(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message_key(&self) -> &'static str {
        match self.source {
            homeservice_contact::Error::Forbidden => "contact.denied",
            homeservice_contact::Error::Validate(_) => "contact.invalid",
            homeservice_contact::Error::Dispatch(_) => "contact.failed",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let homeservice_contact::Error::Dispatch(err) = &self.source {
            tracing::error!(error = ?err, "Contact notification dispatch failed");
        }

        text_reply(
            self.status(),
            rust_i18n::t!(self.message_key(), locale = self.locale.as_str()).to_string(),
        )
    }
}

/// Plain-text UTF-8 reply.
pub fn text_reply(status: StatusCode, body: String) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        body,
    )
        .into_response()
}
