use askama::Template;

use super::{model::ContactRequest, service::ContactSettings};
use crate::email::OutboundEmail;

#[derive(Template)]
#[template(path = "emails/contact.html")]
struct ContactHtmlTemplate<'a> {
  name: &'a str,
  email: &'a str,
  subject: &'a str,
  message: &'a str,
}

pub fn build_subject(name: &str, subject: &str) -> String {
  format!("New message from {}: {}", name, subject)
}

/// Builds the notification sent to the site owner for one submission.
///
/// The plain-text part is the message verbatim; the HTML part is rendered
/// with every user-supplied field escaped.
pub fn compose_contact_email(req: &ContactRequest, settings: &ContactSettings) -> Result<OutboundEmail, askama::Error> {
  let html_body = ContactHtmlTemplate {
    name: &req.name,
    email: &req.email,
    subject: &req.subject,
    message: &req.message,
  }
  .render()?;

  Ok(OutboundEmail {
    from_name: settings.from_name.clone(),
    from_address: settings.from_address.clone(),
    reply_to: Some(req.email.clone()),
    to: settings.recipient.clone(),
    subject: build_subject(&req.name, &req.subject),
    text_body: req.message.clone(),
    html_body,
  })
}
