use std::sync::LazyLock;

use lettre::Address;
use regex::Regex;
use validator::ValidationError;

pub mod error;

static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\r\n]").unwrap());

pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
  if value.trim().is_empty() {
    return Err(ValidationError::new("blank").with_message("must not be blank".into()));
  }

  Ok(())
}

/// Rejects values that would break out of a single mail header line.
pub fn validate_single_line(value: &str) -> Result<(), ValidationError> {
  if LINE_BREAK.is_match(value) {
    return Err(ValidationError::new("single_line").with_message("must not contain line breaks".into()));
  }

  Ok(())
}

pub fn validate_header_text(value: &str) -> Result<(), ValidationError> {
  validate_not_blank(value)?;
  validate_single_line(value)
}

/// Accepts exactly the addresses the mail transport can put in a header.
pub fn validate_mail_address(value: &str) -> Result<(), ValidationError> {
  value
    .parse::<Address>()
    .map(|_| ())
    .map_err(|_| ValidationError::new("email").with_message("email must be a valid email address".into()))
}
