//! Error type returned by handlers, rendered as `{ "error": ... }`.

use crate::models::response::ErrorBody;
use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ApiError {
  #[error("Invalid data. Check the joystick_x and joystick_y values.")]
  InvalidJoystick,
  #[error("Invalid data. Check the types of the submitted data.")]
  InvalidPayload,
  /// Surfaced verbatim; the service only runs on trusted networks.
  #[error("{0}")]
  Storage(#[from] sqlx::Error),
}

impl ApiError {
  pub fn status(&self) -> StatusCode {
    match self {
      Self::InvalidJoystick | Self::InvalidPayload => StatusCode::BAD_REQUEST,
      Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    if let Self::Storage(e) = &self {
      error!("storage error: {e}");
    }
    (
      status,
      Json(ErrorBody {
        error: self.to_string(),
      }),
    )
      .into_response()
  }
}
