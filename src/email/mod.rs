//! Outbound email delivery
//!
//! [`Mailer`] is the transport port the rest of the crate talks to.
//! [`SmtpMailer`] implements it on top of lettre's async SMTP transport.

mod service;
mod types;

#[cfg(test)]
pub use service::MockMailer;
pub use service::{Mailer, MailerError, SmtpMailer};
pub use types::{OutboundEmail, SmtpConfig};
