use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Backend answered with a non-success status.
    #[error("{context}: {status_text}")]
    Upstream {
        context: String,
        status: u16,
        status_text: String,
    },

    #[error("Invalid backend response: {0}")]
    InvalidResponse(String),

    #[error("HTTP error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Console request body that axum could not read as JSON.
    #[error("Invalid request body: {0}")]
    JsonRejection(#[from] JsonRejection),
}

impl Error {
    /// `status_text` is the canonical reason phrase for `status`. reqwest does
    /// not expose a custom phrase sent by the backend.
    pub fn upstream(context: impl Into<String>, status: reqwest::StatusCode) -> Self {
        Error::Upstream {
            context: context.into(),
            status: status.as_u16(),
            status_text: status
                .canonical_reason()
                .unwrap_or("Unknown status")
                .to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// Text shown to the operator in a toast.
    pub fn user_message(&self) -> String {
        match self {
            Error::BadRequest(msg) | Error::NotFound(msg) | Error::Clipboard(msg) => msg.clone(),
            Error::JsonRejection(rejection) => rejection.body_text(),
            Error::Validation(errors) => validation_summary(errors),
            other => other.to_string(),
        }
    }
}

fn validation_summary(errors: &validator::ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| match &err.message {
                Some(message) => message.to_string(),
                None => format!("{} is invalid", field),
            })
        })
        .collect::<Vec<_>>()
        .join("; ")
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            Error::BadRequest(_) | Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::JsonRejection(rejection) => rejection.status(),
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Upstream { .. } | Error::InvalidResponse(_) | Error::Reqwest(_) => {
                StatusCode::BAD_GATEWAY
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.user_message() }));
        (status, body).into_response()
    }
}
