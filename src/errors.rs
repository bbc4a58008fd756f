//! # Error Handling
//!
//! Read endpoints return `ApiError`. Storage failures are logged with
//! `tracing` and reach the caller only as a generic 500 with no partial
//! data; malformed filter input never becomes an error at all (see
//! [`crate::filtering`]).
//!
//! ```rust,ignore
//! async fn handler(State(state): State<AppState>) -> Result<Json<RecipeView>, ApiError> {
//!     let recipe = recipecrate::core::get_one(&state.db, 7).await?; // DbErr converts here
//!     Ok(Json(recipe))
//! }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::Serialize;
use std::fmt;

/// Message returned for every storage failure.
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

/// API error type with automatic logging and sanitized responses.
#[derive(Debug)]
pub enum ApiError {
    /// 404 Not Found
    NotFound {
        resource: String,
        id: Option<String>,
    },

    /// 500 Internal Server Error - details logged, not exposed
    Database { internal: DbErr },
}

impl ApiError {
    pub fn not_found(resource: impl Into<String>, id: Option<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
            id,
        }
    }

    #[must_use]
    pub const fn database(err: DbErr) -> Self {
        Self::Database { internal: err }
    }

    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The sanitized message sent to callers.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound { resource, id: Some(id) } => {
                format!("{resource} with ID '{id}' not found")
            }
            Self::NotFound { resource, id: None } => format!("{resource} not found"),
            Self::Database { .. } => INTERNAL_SERVER_ERROR.to_string(),
        }
    }

    fn log_internal(&self) {
        match self {
            Self::Database { internal } => {
                tracing::error!(error = ?internal, "Database error occurred");
            }
            Self::NotFound { .. } => {
                tracing::debug!(
                    error = %self.user_message(),
                    status = %self.status_code(),
                    "API error"
                );
            }
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.log_internal();
        let body = ErrorResponse {
            error: self.user_message(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl std::error::Error for ApiError {}

/// `DbErr::RecordNotFound` becomes 404; every other storage error is a 500.
impl From<DbErr> for ApiError {
    fn from(err: DbErr) -> Self {
        match err {
            DbErr::RecordNotFound(_) => Self::not_found("Recipe", None),
            other => Self::database(other),
        }
    }
}
