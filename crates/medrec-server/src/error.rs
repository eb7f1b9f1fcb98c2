//! Server error type and [`axum::response::IntoResponse`] implementation.
//!
//! Responses are plain text: this is a form-driven application, not a JSON
//! API, and a rejected form submission needs nothing more than a message and
//! a 400-class status.

use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
};
use thiserror::Error;

/// An error returned by a request handler.
#[derive(Debug, Error)]
pub enum Error {
  /// A submitted form failed the record invariant (empty field, bad date).
  #[error("{0}")]
  Validation(#[from] medrec_core::Error),

  #[error("bad request: {0}")]
  BadRequest(String),

  /// The external OCR engine could not be run or reported failure.
  #[error("OCR failed: {0}")]
  Ocr(#[from] medrec_ocr::Error),

  /// A stored row no longer satisfies the record invariant.
  #[error("corrupt stored record: {0}")]
  CorruptRecord(medrec_core::Error),

  #[error("I/O error: {0}")]
  Io(#[from] std::io::Error),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    let status = match &self {
      Error::Validation(_) | Error::BadRequest(_) => StatusCode::BAD_REQUEST,
      Error::Ocr(_) => StatusCode::BAD_GATEWAY,
      Error::CorruptRecord(_) | Error::Io(_) | Error::Store(_) => {
        StatusCode::INTERNAL_SERVER_ERROR
      }
    };
    if status.is_server_error() {
      tracing::error!(error = %self, "request failed");
    }
    (status, self.to_string()).into_response()
  }
}
