//! The error type shared by every endpoint.
//!
//! All failures are reported with a JSON body of the form
//! `{"message": "..."}`. Infrastructure errors are logged in full and replaced
//! by a generic message before they reach the client.

use aide::OperationOutput;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use inv_core::models::TransactionFailure;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{Level, event};

/// The body of every error response.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ErrorMessage {
    /// A human-readable description of the failure
    pub message: String,
}

/// An error ready to be turned into an HTTP response.
#[derive(Debug)]
pub enum ApiError {
    /// The referenced product does not exist (404)
    ProductNotFound,
    /// The request was well-formed but refused by the ledger (400)
    BadRequest(String),
    /// Storage failed (500)
    Internal(String),
}

impl ApiError {
    /// Log a repository error and hide it behind a generic message.
    pub(crate) fn internal<E: std::fmt::Display>(context: &'static str) -> impl FnOnce(E) -> Self {
        move |err| {
            event!(Level::ERROR, err = err.to_string(), context);
            Self::Internal(context.to_string())
        }
    }
}

impl From<TransactionFailure> for ApiError {
    fn from(value: TransactionFailure) -> Self {
        match value {
            TransactionFailure::ProductNotFound(_) => Self::ProductNotFound,
            TransactionFailure::InvalidQuantity | TransactionFailure::InsufficientStock { .. } => {
                Self::BadRequest(value.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::ProductNotFound => (StatusCode::NOT_FOUND, "Product not found".to_string()),
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            Self::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };
        (status, Json(ErrorMessage { message })).into_response()
    }
}

// The possible statuses are documented per-route with `response_with`.
impl OperationOutput for ApiError {
    type Inner = ErrorMessage;
}

#[cfg(test)]
mod tests {
    use super::*;
    use inv_core::models::ProductId;

    #[test]
    fn transaction_failures_map_to_statuses() {
        let cases = [
            (
                TransactionFailure::ProductNotFound(ProductId(1)),
                StatusCode::NOT_FOUND,
            ),
            (TransactionFailure::InvalidQuantity, StatusCode::BAD_REQUEST),
            (
                TransactionFailure::InsufficientStock {
                    available: 1,
                    requested: 2,
                },
                StatusCode::BAD_REQUEST,
            ),
        ];
        for (failure, status) in cases {
            assert_eq!(ApiError::from(failure).into_response().status(), status);
        }
    }
}
