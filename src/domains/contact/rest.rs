use axum::{
  extract::{rejection::JsonRejection, Json, State},
  response::Json as JsonResponse,
  routing::post,
  Router,
};

use super::model::{ContactRequest, ContactResponse};
use crate::{
  state::{AppState, SharedAppState},
  AppError,
};

pub fn contact_routes() -> Router<SharedAppState> {
  Router::new().route("/send", post(send_contact_handler).fallback(method_not_allowed_handler))
}

pub async fn send_contact_handler(
  State(state): State<SharedAppState>,
  payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<JsonResponse<ContactResponse>, AppError> {
  let Json(payload) = payload?;

  state.submit_contact(payload).await?;

  Ok(JsonResponse(ContactResponse { success: true }))
}

async fn method_not_allowed_handler() -> AppError {
  AppError::method_not_allowed()
}
