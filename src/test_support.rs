use std::{
  sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
  },
  time::Duration,
};

use async_trait::async_trait;
use axum::{
  body::{Body, Bytes},
  http::{Method, Request, StatusCode},
  Router,
};
use serde::Serialize;
use tower::ServiceExt;

use crate::{
  app::create_app,
  domains::contact::service::{ContactServiceImpl, ContactSettings},
  email::{Mailer, MailerError, OutboundEmail},
  state::SharedAppState,
};

/// Mailer double that records every attempt and optionally fails it.
#[derive(Clone, Default)]
pub struct RecordingMailer {
  sent: Arc<Mutex<Vec<OutboundEmail>>>,
  attempts: Arc<AtomicUsize>,
  fail: bool,
}

impl RecordingMailer {
  pub fn succeeding() -> Self {
    Self::default()
  }

  pub fn failing() -> Self {
    Self {
      fail: true,
      ..Self::default()
    }
  }

  pub fn sent(&self) -> Vec<OutboundEmail> {
    self.sent.lock().expect("lock sent emails").clone()
  }

  pub fn attempts(&self) -> usize {
    self.attempts.load(Ordering::SeqCst)
  }
}

#[async_trait]
impl Mailer for RecordingMailer {
  async fn send(&self, email: OutboundEmail) -> Result<(), MailerError> {
    self.attempts.fetch_add(1, Ordering::SeqCst);
    if self.fail {
      return Err(MailerError::Transport("connection refused".to_string()));
    }
    self.sent.lock().expect("lock sent emails").push(email);
    Ok(())
  }
}

pub fn contact_settings() -> ContactSettings {
  ContactSettings {
    recipient: "owner@example.com".to_string(),
    from_name: "Portfolio Contact Form".to_string(),
    from_address: "site@example.com".to_string(),
    send_timeout: Duration::from_secs(5),
  }
}

pub fn app_with_mailer<M: Mailer + 'static>(mailer: M) -> Router {
  let contact_service = Arc::new(ContactServiceImpl::new(mailer, contact_settings()));
  create_app(SharedAppState::new(contact_service))
}

pub async fn request(app: Router, method: Method, uri: &str, content_type: &str, body: Body) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method(method)
    .uri(uri)
    .header("content-type", content_type)
    .body(body)
    .expect("build request");

  let response = app.oneshot(request).await.expect("handle request");
  let status = response.status();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .expect("read response body");
  (status, body)
}

pub async fn post_json<T: Serialize>(app: Router, uri: &str, body: &T) -> (StatusCode, Bytes) {
  let body = Body::from(serde_json::to_vec(body).expect("serialize request body"));
  request(app, Method::POST, uri, "application/json", body).await
}

pub async fn post_raw(app: Router, uri: &str, content_type: &str, body: &'static str) -> (StatusCode, Bytes) {
  request(app, Method::POST, uri, content_type, Body::from(body)).await
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Bytes) {
  request(app, Method::GET, uri, "application/json", Body::empty()).await
}
