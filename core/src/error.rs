// jersey_orders/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrderError {
    /// A required submission field is missing or out of range.
    #[error("Validation failed for '{field}': {message}")]
    Validation { field: &'static str, message: String },

    #[error("Invalid color format '{input}': {reason}")]
    InvalidColorFormat { input: String, reason: String },

    #[error("The order store is empty")]
    EmptyStore,

    #[error("Order at position {position} is no longer the latest order (latest is {latest})")]
    NotLatestOrder { position: usize, latest: usize },

    #[error("Orders have already been exported for this session")]
    AlreadyExported,

    #[error("Handler missing for non-optional step: {step_name}")]
    HandlerMissing { step_name: String },

    #[error("Error in step handler or external operation. Source: {source}")]
    HandlerError {
        #[source]
        source: AnyhowError,
    },

    #[error("CSV export failed: {0}")]
    Export(#[from] csv::Error),

    #[error("Internal order error: {0}")]
    Internal(String),
}

impl OrderError {
  pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
    OrderError::Validation {
      field,
      message: message.into(),
    }
  }

  pub(crate) fn invalid_color(input: &str, reason: impl Into<String>) -> Self {
    OrderError::InvalidColorFormat {
      input: input.to_string(),
      reason: reason.into(),
    }
  }
}

impl From<AnyhowError> for OrderError {
  fn from(err: AnyhowError) -> Self {
    // An OrderError that travelled through anyhow keeps its original variant.
    match err.downcast::<OrderError>() {
      Ok(order_err) => order_err,
      Err(other) => OrderError::HandlerError { source: other },
    }
  }
}

pub type OrderResult<T, E = OrderError> = std::result::Result<T, E>;
