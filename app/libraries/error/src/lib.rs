use askama::Error as TemplateError;
use axum::{
    Json,
    extract::rejection::{FormRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::warn;
use serde::Serialize;
use serde_json::Error as JsonError;
use sqlx::{Error as SqlxError, migrate::MigrateError};
use std::{error::Error as StdError, fmt, io::Error as IoError};

pub use axum::http::StatusCode as HttpStatus;

pub static SYSTEM_ERROR_CODE: i64 = -1000;
pub static SYSTEM_ERROR_CODE_DB: i64 = -1001;
pub static SYSTEM_ERROR_CODE_IO: i64 = -1002;
pub static SYSTEM_ERROR_CODE_TEMPLATE: i64 = -1003;
pub static SYSTEM_ERROR_CODE_JSON: i64 = -1004;
pub static SYSTEM_ERROR_CODE_CONFIG: i64 = -1005;

pub static ERROR_CODE_NOT_FOUND: i64 = 1;
pub static ERROR_CODE_INPUT_SHAPE: i64 = 2;

/// Broad classification of an [`AppError`], derived from its code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    InputShape,
    StorageFailure,
    Internal,
}

#[derive(Debug, Clone, Serialize)]
pub struct AppError {
    pub message: String,
    #[serde(serialize_with = "serialize_status")]
    pub status: StatusCode,
    pub code: i64,
}

fn serialize_status<S>(status: &StatusCode, s: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    s.serialize_u16(status.as_u16())
}

impl AppError {
    pub fn new(message: impl Into<String>, status: StatusCode, code: i64) -> Self {
        Self {
            message: message.into(),
            status,
            code,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(
            message,
            StatusCode::INTERNAL_SERVER_ERROR,
            SYSTEM_ERROR_CODE,
        )
    }

    /// A requested customer or reservation does not exist.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(message, StatusCode::NOT_FOUND, ERROR_CODE_NOT_FOUND)
    }

    /// A path or form field is missing or malformed.
    pub fn input_shape(message: impl Into<String>) -> Self {
        Self::new(message, StatusCode::BAD_REQUEST, ERROR_CODE_INPUT_SHAPE)
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(
            message,
            StatusCode::INTERNAL_SERVER_ERROR,
            SYSTEM_ERROR_CODE_DB,
        )
    }

    pub fn kind(&self) -> ErrorKind {
        match self.code {
            c if c == ERROR_CODE_NOT_FOUND => ErrorKind::NotFound,
            c if c == ERROR_CODE_INPUT_SHAPE => ErrorKind::InputShape,
            c if c == SYSTEM_ERROR_CODE_DB => ErrorKind::StorageFailure,
            _ => ErrorKind::Internal,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (HTTP {}, code {})",
            self.message,
            self.status.as_u16(),
            self.code
        )
    }
}

impl StdError for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        warn!(
            "AppError ({}): {} (HTTP {})",
            self.code,
            self.message,
            self.status.as_u16()
        );
        (self.status, Json(self)).into_response()
    }
}

// --------------------
// Error conversions
// --------------------

impl From<SqlxError> for AppError {
    fn from(value: SqlxError) -> Self {
        match value {
            SqlxError::RowNotFound => Self::not_found("Record not found"),
            other => Self::storage(format!("{other:?}")),
        }
    }
}

impl From<MigrateError> for AppError {
    fn from(value: MigrateError) -> Self {
        Self::storage(format!("{value:?}"))
    }
}

impl From<TemplateError> for AppError {
    fn from(value: TemplateError) -> Self {
        Self::new(
            format!("{value:?}"),
            StatusCode::INTERNAL_SERVER_ERROR,
            SYSTEM_ERROR_CODE_TEMPLATE,
        )
    }
}

impl From<IoError> for AppError {
    fn from(value: IoError) -> Self {
        Self::new(
            format!("{value:?}"),
            StatusCode::INTERNAL_SERVER_ERROR,
            SYSTEM_ERROR_CODE_IO,
        )
    }
}

impl From<JsonError> for AppError {
    fn from(value: JsonError) -> Self {
        Self::new(
            format!("{value:?}"),
            StatusCode::INTERNAL_SERVER_ERROR,
            SYSTEM_ERROR_CODE_JSON,
        )
    }
}

impl From<PathRejection> for AppError {
    fn from(value: PathRejection) -> Self {
        Self::input_shape(value.body_text())
    }
}

impl From<FormRejection> for AppError {
    fn from(value: FormRejection) -> Self {
        Self::input_shape(value.body_text())
    }
}
