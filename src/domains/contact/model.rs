use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::{validate_header_text, validate_mail_address, validate_not_blank};

/// A contact form submission as posted by the portfolio frontend.
///
/// Absent fields deserialize to empty strings so that they are reported by
/// validation rather than by the JSON extractor.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct ContactRequest {
  #[validate(
    length(max = 100, message = "name must be at most 100 characters"),
    custom(function = "validate_header_text")
  )]
  pub name: String,
  #[validate(custom(function = "validate_mail_address"))]
  pub email: String,
  #[validate(
    length(max = 200, message = "subject must be at most 200 characters"),
    custom(function = "validate_header_text")
  )]
  pub subject: String,
  #[validate(
    length(max = 5000, message = "message must be at most 5000 characters"),
    custom(function = "validate_not_blank")
  )]
  pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactResponse {
  pub success: bool,
}
