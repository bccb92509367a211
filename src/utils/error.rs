use axum::{
  extract::rejection::JsonRejection,
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use serde_json::json;

use crate::domains::contact::service::ContactServiceError;

#[derive(Debug)]
pub struct AppError {
  pub status_code: StatusCode,
  pub message: String,
}

impl AppError {
  pub fn new(status_code: StatusCode, message: impl Into<String>) -> Self {
    Self {
      status_code,
      message: message.into(),
    }
  }

  pub fn bad_request(message: impl Into<String>) -> Self {
    Self::new(StatusCode::BAD_REQUEST, message)
  }

  pub fn method_not_allowed() -> Self {
    Self::new(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
  }

  pub fn internal_server_error(message: impl Into<String>) -> Self {
    Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
  }
}

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
    let body = Json(json!({
      "message": self.message,
      "status_code": self.status_code.as_u16(),
    }));

    (self.status_code, body).into_response()
  }
}

impl From<JsonRejection> for AppError {
  fn from(rejection: JsonRejection) -> Self {
    tracing::debug!("Rejected request body: {}", rejection.body_text());
    AppError::bad_request(format!("Invalid request body: {}", rejection.body_text()))
  }
}

impl From<ContactServiceError> for AppError {
  fn from(error: ContactServiceError) -> Self {
    match error {
      ContactServiceError::ValidationError(msg) => AppError::bad_request(msg),
      ContactServiceError::DeliveryFailed(msg) => {
        tracing::error!("Error sending email: {}", msg);
        AppError::internal_server_error("Error sending message")
      }
    }
  }
}
