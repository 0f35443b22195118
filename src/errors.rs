// errors.rs
use astra::Response;
use thiserror::Error;

use crate::lfpe::{EditError, StoreError};

/// Errors originating from either the server logic
/// (routing, missing resources, etc.) or downstream layers (DB).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Payload Too Large")]
    PayloadTooLarge,
    #[error("Database Error: {0}")]
    DbError(String),
    #[error("Internal Server Error")]
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::Unauthorized(_) => 401,
            ServerError::Conflict(_) => 409,
            ServerError::PayloadTooLarge => 413,
            ServerError::DbError(_) | ServerError::InternalError => 500,
        }
    }
}

impl From<StoreError> for ServerError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(_) => ServerError::NotFound,
            other => ServerError::DbError(other.to_string()),
        }
    }
}

impl From<EditError> for ServerError {
    fn from(e: EditError) -> Self {
        match e {
            EditError::Store(store) => store.into(),
            EditError::AlreadySubmitting => ServerError::Conflict(e.to_string()),
            EditError::NotEditing => ServerError::InternalError,
            validation => ServerError::BadRequest(validation.to_string()),
        }
    }
}
