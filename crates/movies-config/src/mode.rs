use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Color-scheme preference of the site.
///
/// The set of modes is closed: a value outside `auto`, `light` and `dark`
/// cannot be constructed, and parsing any other tag fails.
///
/// ```compile_fail
/// let _ = movies_config::Mode::Sepia;
/// ```
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
  /// Follow the visitor's system preference.
  Auto,
  Light,
  Dark,
}

impl Mode {
  /// Every mode, in declaration order.
  pub const ALL: [Self; 3] = [Self::Auto, Self::Light, Self::Dark];

  /// The literal tag of this mode (`auto`, `light` or `dark`).
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Auto => "auto",
      Self::Light => "light",
      Self::Dark => "dark",
    }
  }
}

impl fmt::Display for Mode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Mode {
  type Err = ConfigError;

  /// Tags are matched exactly; `"Dark"` is not a mode.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .into_iter()
      .find(|mode| mode.as_str() == s)
      .ok_or_else(|| ConfigError::InvalidMode(s.to_string()))
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, reason = "Fine in tests")]

  use super::*;

  #[test]
  fn test_mode_parse_accepts_literal_tags() {
    assert_eq!("auto".parse::<Mode>().unwrap(), Mode::Auto);
    assert_eq!("light".parse::<Mode>().unwrap(), Mode::Light);
    assert_eq!("dark".parse::<Mode>().unwrap(), Mode::Dark);
  }

  #[test]
  fn test_mode_parse_rejects_unknown_tags() {
    for tag in ["sepia", "", "Auto", " dark", "light "] {
      let err = tag.parse::<Mode>().unwrap_err();
      assert!(matches!(err, ConfigError::InvalidMode(ref s) if s == tag));
    }
  }

  #[test]
  fn test_mode_display_matches_tag() {
    for mode in Mode::ALL {
      assert_eq!(mode.to_string(), mode.as_str());
      assert_eq!(mode.as_str().parse::<Mode>().unwrap(), mode);
    }
  }

  #[test]
  fn test_mode_serde_uses_lowercase_tags() {
    assert_eq!(serde_json::to_string(&Mode::Light).unwrap(), "\"light\"");
    assert_eq!(
      serde_json::from_str::<Mode>("\"dark\"").unwrap(),
      Mode::Dark
    );
    assert!(serde_json::from_str::<Mode>("\"sepia\"").is_err());
  }
}
