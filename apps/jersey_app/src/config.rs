// jersey_app/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
  #[default]
  Pretty,
  Json,
}

impl FromStr for LogFormat {
  type Err = AppError;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "pretty" | "text" => Ok(LogFormat::Pretty),
      "json" => Ok(LogFormat::Json),
      other => Err(AppError::Config(format!("Invalid LOG_FORMAT '{}': expected 'pretty' or 'json'", other))),
    }
  }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  /// Largest accepted jersey image, in decoded bytes.
  pub max_image_bytes: usize,
  /// Sessions not used for this many seconds are dropped.
  pub session_idle_secs: u64,
  pub log_format: LogFormat,
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      server_host: "127.0.0.1".to_string(),
      server_port: 8080,
      max_image_bytes: 5 * 1024 * 1024,
      session_idle_secs: 60 * 60,
      log_format: LogFormat::Pretty,
    }
  }
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let defaults = Self::default();
    let get_env = |var_name: &str| env::var(var_name).ok();

    let server_host = get_env("SERVER_HOST").unwrap_or(defaults.server_host);
    let server_port = match get_env("SERVER_PORT") {
      Some(raw) => raw
        .parse::<u16>()
        .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?,
      None => defaults.server_port,
    };
    let max_image_bytes = match get_env("MAX_IMAGE_BYTES") {
      Some(raw) => raw
        .parse::<usize>()
        .map_err(|e| AppError::Config(format!("Invalid MAX_IMAGE_BYTES: {}", e)))?,
      None => defaults.max_image_bytes,
    };
    let session_idle_secs = match get_env("SESSION_IDLE_SECS") {
      Some(raw) => raw
        .parse::<u64>()
        .map_err(|e| AppError::Config(format!("Invalid SESSION_IDLE_SECS: {}", e)))?,
      None => defaults.session_idle_secs,
    };
    let log_format = match get_env("LOG_FORMAT") {
      Some(raw) => raw.parse()?,
      None => defaults.log_format,
    };

    Ok(Self {
      server_host,
      server_port,
      max_image_bytes,
      session_idle_secs,
      log_format,
    })
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }

  pub fn session_idle_timeout(&self) -> chrono::Duration {
    // Clamped to the largest span chrono accepts.
    let secs = self.session_idle_secs.min(i64::MAX as u64 / 1000) as i64;
    chrono::Duration::seconds(secs)
  }

  /// JSON body limit: a base64 image at the size cap plus room for the other fields.
  pub fn json_body_limit(&self) -> usize {
    self.max_image_bytes.div_ceil(3) * 4 + 64 * 1024
  }
}
