//! # API Error Types
//!
//! Unified error handling for the GraphQL API layer.

use async_graphql::{Error as GraphQLError, ErrorExtensions};
use axum::http::StatusCode;
use launch_analytics::AnalyticsError;
use thiserror::Error;

/// API-level errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Analytics error: {0}")]
    Analytics(#[from] AnalyticsError),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) | Self::Analytics(AnalyticsError::InvalidParameter(_)) => {
                StatusCode::BAD_REQUEST
            }
            Self::Analytics(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error code for GraphQL extensions
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) | Self::Analytics(AnalyticsError::InvalidParameter(_)) => {
                "INVALID_INPUT"
            }
            Self::Analytics(_) => "ANALYTICS_ERROR",
        }
    }
}

impl ErrorExtensions for ApiError {
    fn extend(&self) -> GraphQLError {
        GraphQLError::new(self.to_string()).extend_with(|_, e| {
            e.set("code", self.error_code());
            e.set("status", self.status_code().as_u16());
        })
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;
