use async_trait::async_trait;
use std::{error::Error, time::Duration};
use validator::Validate;

use super::{email::compose_contact_email, model::ContactRequest};
use crate::email::{Mailer, MailerError};

#[derive(Debug)]
pub enum ContactServiceError {
  ValidationError(String),
  DeliveryFailed(String),
}

impl Error for ContactServiceError {}

impl std::fmt::Display for ContactServiceError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ContactServiceError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
      ContactServiceError::DeliveryFailed(msg) => write!(f, "Delivery Failed: {}", msg),
    }
  }
}

impl From<MailerError> for ContactServiceError {
  fn from(err: MailerError) -> Self {
    ContactServiceError::DeliveryFailed(err.to_string())
  }
}

/// Where contact notifications go and who they appear to come from.
#[derive(Debug, Clone)]
pub struct ContactSettings {
  pub recipient: String,
  pub from_name: String,
  pub from_address: String,
  pub send_timeout: Duration,
}

#[async_trait]
pub trait ContactService: Send + Sync {
  async fn submit(&self, req: ContactRequest) -> Result<(), ContactServiceError>;
}

pub struct ContactServiceImpl<M> {
  mailer: M,
  settings: ContactSettings,
}

impl<M> ContactServiceImpl<M>
where
  M: Mailer,
{
  pub fn new(mailer: M, settings: ContactSettings) -> Self {
    Self { mailer, settings }
  }
}

#[async_trait]
impl<M> ContactService for ContactServiceImpl<M>
where
  M: Mailer,
{
  async fn submit(&self, req: ContactRequest) -> Result<(), ContactServiceError> {
    req
      .validate()
      .map_err(|e| ContactServiceError::ValidationError(format!("Validation failed: {}", e)))?;

    let email = compose_contact_email(&req, &self.settings)
      .map_err(|e| ContactServiceError::DeliveryFailed(format!("Failed to render email: {}", e)))?;

    // Single attempt; the timeout covers connect and send.
    tokio::time::timeout(self.settings.send_timeout, self.mailer.send(email))
      .await
      .map_err(|_| MailerError::Timeout(format!("no response within {:?}", self.settings.send_timeout)))??;

    tracing::info!(recipient = %self.settings.recipient, "Contact message accepted for delivery");
    Ok(())
  }
}
