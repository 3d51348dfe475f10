use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Command line interface for movies-site
#[derive(Parser, Debug)]
#[command(
  author,
  version,
  about = "Inspect the My Favorite Movies Ranked site configuration"
)]
pub struct Cli {
  /// Subcommand to execute (see [`Commands`])
  #[command(subcommand)]
  pub command: Commands,

  /// Enable verbose debug logging
  #[arg(short, long, global = true)]
  pub verbose: bool,
}

/// All supported subcommands for the movies-site CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Print the full site configuration
  Show {
    /// Output format.
    #[arg(short = 'F', long, default_value = "json", value_parser = ["json", "toml"])]
    format: String,
  },

  /// Print a single configuration field (e.g. `mode` or `logo.alt`)
  Get {
    /// Serialized key of the field, nested fields joined with dots.
    key: String,
  },

  /// Write the site configuration to a file for other build tools
  Export {
    /// Path to write the configuration to
    #[arg(short, long, default_value = "site-config.json")]
    output: PathBuf,

    /// Format of the written file.
    #[arg(short = 'F', long, default_value = "json", value_parser = ["json", "toml"])]
    format: String,

    /// Force overwrite if file already exists
    #[arg(short, long)]
    force: bool,
  },
}

impl Cli {
  /// Parse command line arguments.
  #[must_use]
  pub fn parse_args() -> Self {
    Self::parse()
  }
}
