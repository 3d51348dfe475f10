use std::io;

use thiserror::Error;

/// Error type for movies-config operations.
///
/// Reading the configuration record never fails; these errors only surface
/// from string parsing, key lookup and export.
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("Configuration error: {0}")]
  Config(String),

  #[error("Invalid color mode '{0}'. Expected one of: auto, light, dark")]
  InvalidMode(String),

  #[error(
    "Unknown configuration key: '{0}'. Run `movies-site show` to list the \
     available fields."
  )]
  UnknownKey(String),

  #[error("I/O error: {0}")]
  Io(#[from] io::Error),

  #[error("Serde error: {0}")]
  Serde(#[from] serde_json::Error),

  #[error("TOML error: {0}")]
  Toml(#[from] toml::ser::Error),
}
