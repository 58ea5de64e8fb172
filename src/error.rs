use std::collections::BTreeMap;

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] nutriplan_shared::Error),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<BTreeMap<String, String>>,
}

fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

fn validation_details(errors: &validator::ValidationErrors) -> BTreeMap<String, String> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errors)| {
            let message = errors
                .first()
                .and_then(|e| e.message.as_ref().map(|m| m.to_string()))
                .unwrap_or_else(|| format!("{field} is invalid"));

            (camel_case(field.as_ref()), message)
        })
        .collect()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        use nutriplan_shared::Error;

        let (status, error, message, details) = match self {
            AppError::Domain(Error::Validate(errors)) => (
                StatusCode::BAD_REQUEST,
                "BadRequest",
                "Some fields are missing or invalid.".to_owned(),
                Some(validation_details(&errors)),
            ),
            AppError::Domain(Error::User(msg)) | AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "BadRequest", msg, None)
            }
            AppError::Domain(Error::Unauthorized(msg)) | AppError::Unauthorized(msg) => {
                (StatusCode::UNAUTHORIZED, "Unauthorized", msg, None)
            }
            AppError::Domain(Error::NotFound(msg)) | AppError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, "NotFound", msg, None)
            }
            AppError::Domain(Error::Conflict(msg)) => (StatusCode::CONFLICT, "Conflict", msg, None),
            AppError::Domain(Error::Server(msg)) => {
                tracing::error!("Server error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "InternalServerError",
                    "Internal server error".to_owned(),
                    None,
                )
            }
            AppError::Domain(Error::Unknown(e)) => {
                tracing::error!("Unexpected error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "InternalServerError",
                    "Internal server error".to_owned(),
                    None,
                )
            }
        };

        if status.is_client_error() {
            tracing::warn!(status = status.as_u16(), %message, "request rejected");
        }

        (
            status,
            Json(ErrorBody {
                error,
                message,
                details,
            }),
        )
            .into_response()
    }
}
