use std::{error::Error, sync::Arc};

use async_trait::async_trait;
use lettre::{
  message::{Mailbox, MultiPart},
  transport::smtp::authentication::Credentials,
  Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::email::types::{OutboundEmail, SmtpConfig};

#[derive(Debug)]
pub enum MailerError {
  InvalidAddress(String),
  Build(String),
  Transport(String),
  Timeout(String),
}

impl Error for MailerError {}

impl std::fmt::Display for MailerError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      MailerError::InvalidAddress(msg) => write!(f, "Invalid Address: {}", msg),
      MailerError::Build(msg) => write!(f, "Message Build Error: {}", msg),
      MailerError::Transport(msg) => write!(f, "Transport Error: {}", msg),
      MailerError::Timeout(msg) => write!(f, "Timeout: {}", msg),
    }
  }
}

impl From<lettre::transport::smtp::Error> for MailerError {
  fn from(err: lettre::transport::smtp::Error) -> Self {
    MailerError::Transport(err.to_string())
  }
}

impl From<lettre::error::Error> for MailerError {
  fn from(err: lettre::error::Error) -> Self {
    MailerError::Build(err.to_string())
  }
}

/// Hands a composed email to a delivery provider.
///
/// `Ok` means the provider accepted the message for delivery, nothing more.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Mailer: Send + Sync {
  async fn send(&self, email: OutboundEmail) -> Result<(), MailerError>;
}

#[async_trait]
impl<M: Mailer + ?Sized> Mailer for Arc<M> {
  async fn send(&self, email: OutboundEmail) -> Result<(), MailerError> {
    (**self).send(email).await
  }
}

pub struct SmtpMailer {
  smtp_config: SmtpConfig,
  transporter: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
  pub fn new(smtp_config: SmtpConfig) -> Result<Self, MailerError> {
    let creds = Credentials::new(smtp_config.username.clone(), smtp_config.password.clone());

    let transporter = if smtp_config.host == "localhost" || smtp_config.host == "mailhog" {
      AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&smtp_config.host)
        .credentials(creds)
        .port(smtp_config.port)
        .timeout(Some(smtp_config.timeout))
        .build()
    } else {
      AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&smtp_config.host)?
        .credentials(creds)
        .port(smtp_config.port)
        .timeout(Some(smtp_config.timeout))
        .build()
    };

    tracing::info!(
      smtp_host = %smtp_config.host,
      smtp_port = smtp_config.port,
      "SMTP mailer initialized"
    );

    Ok(SmtpMailer {
      smtp_config,
      transporter,
    })
  }

  pub(crate) fn build_message(email: &OutboundEmail) -> Result<Message, MailerError> {
    let from = Mailbox::new(Some(email.from_name.clone()), parse_address(&email.from_address)?);
    let to = Mailbox::new(None, parse_address(&email.to)?);

    let mut builder = Message::builder().from(from).to(to).subject(&email.subject);
    if let Some(reply_to) = &email.reply_to {
      builder = builder.reply_to(Mailbox::new(None, parse_address(reply_to)?));
    }

    let message = builder.multipart(MultiPart::alternative_plain_html(
      email.text_body.clone(),
      email.html_body.clone(),
    ))?;

    Ok(message)
  }
}

fn parse_address(address: &str) -> Result<Address, MailerError> {
  address
    .parse()
    .map_err(|e| MailerError::InvalidAddress(format!("{}: {}", address, e)))
}

#[async_trait]
impl Mailer for SmtpMailer {
  async fn send(&self, email: OutboundEmail) -> Result<(), MailerError> {
    let message = Self::build_message(&email)?;
    let response = self.transporter.send(message).await?;

    tracing::debug!(
      smtp_host = %self.smtp_config.host,
      code = %response.code(),
      "SMTP server accepted message"
    );

    Ok(())
  }
}
