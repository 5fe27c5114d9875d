//! # REST Interface Layer
//!
//! Translates HTTP requests into novena service calls.
//!
//! - **page_apis**: HTML pages and form submissions
//! - **novena_apis**: JSON endpoints under `/api`
//! - **pages**: HTML rendering
//!
//! Identifier validation happens here, never in the store: a path id that is
//! not an integer is a `400`, an unknown id a `404`.

pub mod novena_apis;
pub mod page_apis;
pub mod pages;

pub use novena_apis::*;
pub use page_apis::*;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

use crate::domain::IdsExhausted;

/// Request failures surfaced to HTTP clients
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid Novena ID")]
    InvalidId(String),
    #[error("Novena not found")]
    NotFound(i64),
    #[error("No novena ID available")]
    IdsExhausted(#[from] IdsExhausted),
    #[error("Internal server error")]
    TaskFailed(#[from] tokio::task::JoinError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidId(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::IdsExhausted(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::TaskFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::InvalidId(raw) => warn!("Rejected novena id: {:?}", raw),
            ApiError::NotFound(id) => warn!("Novena not found: {}", id),
            ApiError::IdsExhausted(e) => error!("{}", e),
            ApiError::TaskFailed(e) => error!("Registration task failed: {}", e),
        }
        (self.status_code(), self.to_string()).into_response()
    }
}

/// Parse a user-supplied novena id
pub fn parse_novena_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>()
        .map_err(|_| ApiError::InvalidId(raw.to_string()))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_novena_id() {
        assert_eq!(parse_novena_id("1").unwrap(), 1);
        assert_eq!(parse_novena_id("-4").unwrap(), -4);
        assert!(matches!(parse_novena_id("abc"), Err(ApiError::InvalidId(_))));
        assert!(matches!(parse_novena_id(""), Err(ApiError::InvalidId(_))));
        assert!(matches!(parse_novena_id("1.5"), Err(ApiError::InvalidId(_))));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::InvalidId("x".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::NotFound(9).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::from(IdsExhausted(i64::MAX)).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
