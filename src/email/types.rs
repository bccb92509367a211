use std::{fmt, time::Duration};

#[derive(Clone)]
pub struct SmtpConfig {
  pub host: String,
  pub port: u16,
  pub username: String,
  pub password: String,
  pub timeout: Duration,
}

impl fmt::Debug for SmtpConfig {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("SmtpConfig")
      .field("host", &self.host)
      .field("port", &self.port)
      .field("username", &self.username)
      .field("password", &"[REDACTED]")
      .field("timeout", &self.timeout)
      .finish()
  }
}

/// A fully composed email, ready to be handed to a [`Mailer`](super::Mailer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
  pub from_name: String,
  pub from_address: String,
  pub reply_to: Option<String>,
  pub to: String,
  pub subject: String,
  pub text_body: String,
  pub html_body: String,
}
