use std::{fs, path::Path};

use serde::Serialize;
use serde_json::Value;

use crate::{error::ConfigError, mode::Mode};

/// An image asset reference: the path or URL of the image plus the text
/// describing it to assistive technology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Logo {
  /// Path or URL of the image resource.
  pub src: &'static str,

  /// Accessibility text for the image.
  pub alt: &'static str,
}

/// Site-wide metadata and feature flags.
///
/// Every field is required; there is no `Default` and nothing is optional.
/// The serialized form keeps the camelCase keys templates expect
/// (`siteTitle`, `ogImage`, `scrollAnimations`, ...).
///
/// A record missing a field does not compile:
///
/// ```compile_fail
/// use movies_config::{Config, Logo, Mode};
///
/// let _ = Config {
///   site_title:       "Title",
///   site_description: "Description",
///   og_image:         "/og.jpg",
///   logo:             Logo { src: "/logo.svg", alt: "Logo" },
///   canonical:        true,
///   noindex:          false,
///   mode:             Mode::Auto,
/// };
/// ```
///
/// Neither does one whose mode is a bare string:
///
/// ```compile_fail
/// use movies_config::{Config, Logo};
///
/// let _ = Config {
///   site_title:        "Title",
///   site_description:  "Description",
///   og_image:          "/og.jpg",
///   logo:              Logo { src: "/logo.svg", alt: "Logo" },
///   canonical:         true,
///   noindex:           false,
///   mode:              "sepia",
///   scroll_animations: true,
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
  /// Human-readable site name.
  pub site_title: &'static str,

  /// Site description used for metadata and SEO.
  pub site_description: &'static str,

  /// Path or URL of the social-sharing preview image.
  pub og_image: &'static str,

  /// Branding image shown in the navigation.
  pub logo: Logo,

  /// Whether canonical-URL metadata should be emitted.
  pub canonical: bool,

  /// Whether search-engine indexing should be suppressed.
  pub noindex: bool,

  /// Color-scheme preference.
  pub mode: Mode,

  /// Whether scroll-triggered animation effects are enabled.
  pub scroll_animations: bool,
}

impl Config {
  /// Every leaf key accepted by [`Config::lookup`], in declaration order.
  pub const KEYS: [&'static str; 9] = [
    "siteTitle",
    "siteDescription",
    "ogImage",
    "logo.src",
    "logo.alt",
    "canonical",
    "noindex",
    "mode",
    "scrollAnimations",
  ];

  /// Look up a single field by its serialized key.
  ///
  /// Nested fields are addressed with dotted keys, e.g. `logo.alt`. Looking
  /// up `logo` itself yields the whole object.
  ///
  /// # Errors
  ///
  /// Returns [`ConfigError::UnknownKey`] if no field matches `key`.
  pub fn lookup(&self, key: &str) -> Result<Value, ConfigError> {
    let mut value = serde_json::to_value(self)?;

    for segment in key.split('.') {
      value = match value {
        Value::Object(mut map) => map.remove(segment),
        _ => None,
      }
      .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
    }

    Ok(value)
  }

  /// Render the record as pretty-printed JSON.
  ///
  /// # Errors
  ///
  /// Returns an error if serialization fails.
  pub fn to_json(&self) -> Result<String, ConfigError> {
    Ok(serde_json::to_string_pretty(self)?)
  }

  /// Render the record as TOML.
  ///
  /// # Errors
  ///
  /// Returns an error if serialization fails.
  pub fn to_toml(&self) -> Result<String, ConfigError> {
    Ok(toml::to_string(self)?)
  }

  /// Render the record in the named format (`json` or `toml`,
  /// case-insensitive).
  ///
  /// # Errors
  ///
  /// Returns an error if the format is unsupported or serialization fails.
  pub fn render(&self, format: &str) -> Result<String, ConfigError> {
    match format.to_lowercase().as_str() {
      "json" => self.to_json(),
      "toml" => self.to_toml(),
      _ => {
        Err(ConfigError::Config(format!(
          "Unsupported config format: {format}. Expected json or toml"
        )))
      },
    }
  }

  /// Write the record to `path` in the named format.
  ///
  /// Parent directories are not created; callers decide where the file may
  /// live.
  ///
  /// # Errors
  ///
  /// Returns an error if the format is unsupported or the file cannot be
  /// written.
  pub fn export(&self, format: &str, path: &Path) -> Result<(), ConfigError> {
    let mut content = self.render(format)?;
    if !content.ends_with('\n') {
      content.push('\n');
    }

    fs::write(path, content).map_err(|e| {
      ConfigError::Config(format!(
        "Failed to write site config to {}: {}",
        path.display(),
        e
      ))
    })?;

    log::info!("Exported site configuration: {}", path.display());
    Ok(())
  }
}
