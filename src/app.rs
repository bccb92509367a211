use axum::{
  http::{header, HeaderValue, Method, StatusCode},
  routing::get,
  Router,
};
use tower_http::{
  cors::{AllowOrigin, Any, CorsLayer},
  trace::TraceLayer,
};

use crate::{domains::contact::rest::contact_routes, state::SharedAppState};

pub fn create_app(state: SharedAppState) -> Router {
  Router::new()
    .route("/health", get(health_check_handler))
    .nest("/api", contact_routes())
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

pub async fn health_check_handler() -> StatusCode {
  StatusCode::OK
}

/// CORS for the portfolio frontend. An empty origin list allows any origin.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
  let layer = CorsLayer::new()
    .allow_methods([Method::POST])
    .allow_headers([header::CONTENT_TYPE]);

  if allowed_origins.is_empty() {
    return layer.allow_origin(Any);
  }

  let origins: Vec<HeaderValue> = allowed_origins
    .iter()
    .filter_map(|origin| match origin.parse() {
      Ok(value) => Some(value),
      Err(_) => {
        tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
        None
      }
    })
    .collect();

  layer.allow_origin(AllowOrigin::list(origins))
}
