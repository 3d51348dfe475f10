//! Site-wide configuration for My Favorite Movies Ranked.
//!
//! The whole configuration is a single immutable [`Config`] value,
//! [`CONFIG_DATA`], fixed when the crate is compiled. Templates and
//! metadata injectors read it through [`config_data`]:
//!
//! ```
//! use movies_config::{Mode, config_data};
//!
//! let config = config_data();
//! assert_eq!(config.mode, Mode::Auto);
//! assert_eq!(config.logo.alt, "My Favorite Movies Ranked Logo");
//! ```
pub mod config;
pub mod error;
pub mod mode;
pub mod site;

pub use config::{Config, Logo};
pub use error::ConfigError;
pub use mode::Mode;
pub use site::{CONFIG_DATA, config_data};
