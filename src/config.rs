use std::{env, error::Error, fmt, time::Duration};

use crate::{domains::contact::service::ContactSettings, email::SmtpConfig};

const DEFAULT_FROM_NAME: &str = "Portfolio Contact Form";
const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
const DEFAULT_SMTP_PORT: u16 = 587;
const DEFAULT_SMTP_TIMEOUT_SECS: u64 = 10;
const DEFAULT_APP_HOST: &str = "0.0.0.0";
const DEFAULT_APP_PORT: u16 = 8000;

#[derive(Debug)]
pub enum ConfigError {
  Missing(&'static str),
  Invalid { key: &'static str, value: String },
}

impl Error for ConfigError {}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ConfigError::Missing(key) => write!(f, "{} environment variable must be set", key),
      ConfigError::Invalid { key, value } => write!(f, "{} has an invalid value: {:?}", key, value),
    }
  }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
  pub host: String,
  pub port: u16,
  pub cors_allowed_origins: Vec<String>,
}

impl ServerConfig {
  pub fn address(&self) -> String {
    format!("{}:{}", self.host, self.port)
  }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server: ServerConfig,
  pub smtp: SmtpConfig,
  pub contact: ContactSettings,
}

impl AppConfig {
  /// Reads the configuration from the process environment.
  ///
  /// Call `dotenvy::dotenv()` beforehand to pick up a `.env` file.
  pub fn from_env() -> Result<Self, ConfigError> {
    Self::from_lookup(|key| env::var(key).ok())
  }

  pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
  where
    F: Fn(&str) -> Option<String>,
  {
    let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
    let required = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

    let username = required("EMAIL_USER")?;
    let password = required("EMAIL_PASSWORD")?;
    let recipient = required("CONTACT_RECIPIENT")?;

    let timeout_secs = parse_or("SMTP_TIMEOUT_SECS", get("SMTP_TIMEOUT_SECS"), DEFAULT_SMTP_TIMEOUT_SECS)?;
    let timeout = Duration::from_secs(timeout_secs);
    if timeout.is_zero() {
      return Err(ConfigError::Invalid {
        key: "SMTP_TIMEOUT_SECS",
        value: "0".to_string(),
      });
    }

    let smtp = SmtpConfig {
      host: get("SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string()),
      port: parse_or("SMTP_PORT", get("SMTP_PORT"), DEFAULT_SMTP_PORT)?,
      username: username.clone(),
      password,
      timeout,
    };

    let contact = ContactSettings {
      recipient,
      from_name: get("CONTACT_FROM_NAME").unwrap_or_else(|| DEFAULT_FROM_NAME.to_string()),
      from_address: username,
      send_timeout: timeout,
    };

    let server = ServerConfig {
      host: get("APP_HOST").unwrap_or_else(|| DEFAULT_APP_HOST.to_string()),
      port: parse_or("APP_PORT", get("APP_PORT"), DEFAULT_APP_PORT)?,
      cors_allowed_origins: get("CORS_ALLOWED_ORIGINS")
        .map(|origins| {
          origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
        })
        .unwrap_or_default(),
    };

    Ok(AppConfig { server, smtp, contact })
  }
}

fn parse_or<T: std::str::FromStr>(key: &'static str, value: Option<String>, default: T) -> Result<T, ConfigError> {
  match value {
    Some(value) => value.parse().map_err(|_| ConfigError::Invalid { key, value }),
    None => Ok(default),
  }
}
