// jersey_app/src/errors.rs

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use jersey_orders::OrderError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  /// Request-level validation (malformed body, bad upload) outside the intake pipeline.
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Order Error: {source}")]
  Order {
    #[from]
    source: OrderError,
  },

  #[error("Internal Server Error: {0}")]
  Internal(String),
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Validation(_) => StatusCode::BAD_REQUEST,
      AppError::NotFound(_) => StatusCode::NOT_FOUND,
      AppError::Order { source } => match source {
        OrderError::Validation { .. } | OrderError::InvalidColorFormat { .. } => StatusCode::BAD_REQUEST,
        OrderError::EmptyStore | OrderError::NotLatestOrder { .. } | OrderError::AlreadyExported => {
          StatusCode::CONFLICT
        }
        _ => StatusCode::INTERNAL_SERVER_ERROR,
      },
      AppError::Config(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let status = self.status_code();
    if status.is_server_error() {
      tracing::error!(application_error = %self, "Responding with error");
    } else {
      tracing::warn!(application_error = %self, "Responding with client error");
    }

    let body = match self {
      AppError::Validation(m) => json!({"error": m}),
      AppError::NotFound(m) => json!({"error": m}),
      AppError::Order { source } => match source {
        OrderError::Validation { field, message } => json!({"error": message, "field": field}),
        OrderError::InvalidColorFormat { input, reason } => {
          json!({"error": "Invalid color format", "field": "color", "input": input, "detail": reason})
        }
        OrderError::EmptyStore => json!({"error": "No orders yet. Place an order first."}),
        OrderError::AlreadyExported => {
          json!({"error": "Data has already been exported. You can save the next data."})
        }
        OrderError::NotLatestOrder { .. } => json!({"error": source.to_string()}),
        _ => json!({"error": "Order processing error", "detail": source.to_string()}),
      },
      AppError::Config(m) => json!({"error": "Configuration issue", "detail": m}),
      AppError::Internal(m) => json!({"error": "An internal error occurred", "detail": m}),
    };
    HttpResponse::build(status).json(body)
  }
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;
