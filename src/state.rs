use std::sync::Arc;

use crate::{
  config::AppConfig,
  domains::contact::{
    model::ContactRequest,
    service::{ContactService, ContactServiceError, ContactServiceImpl},
  },
  email::{MailerError, SmtpMailer},
};

pub trait AppState: Clone + Send + Sync + 'static {
  fn submit_contact(
    &self,
    req: ContactRequest,
  ) -> impl std::future::Future<Output = Result<(), ContactServiceError>> + Send;
}

#[derive(Clone)]
pub struct SharedAppState {
  pub contact_service: Arc<dyn ContactService>,
}

impl SharedAppState {
  pub fn new(contact_service: Arc<dyn ContactService>) -> Self {
    Self { contact_service }
  }

  /// Wires the SMTP mailer described by `config` into the contact service.
  pub fn from_config(config: &AppConfig) -> Result<Self, MailerError> {
    let mailer = SmtpMailer::new(config.smtp.clone())?;
    let contact_service = Arc::new(ContactServiceImpl::new(mailer, config.contact.clone()));

    Ok(Self::new(contact_service))
  }
}

impl AppState for SharedAppState {
  async fn submit_contact(&self, req: ContactRequest) -> Result<(), ContactServiceError> {
    self.contact_service.submit(req).await
  }
}
