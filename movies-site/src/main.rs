use std::{fs, path::Path};

use color_eyre::eyre::{Context, Result, bail};
use log::{LevelFilter, debug, info};
use movies_config::config_data;
use serde_json::Value;

mod cli;

use cli::{Cli, Commands};

fn main() -> Result<()> {
  color_eyre::install()?;

  let cli = Cli::parse_args();

  env_logger::Builder::new()
    .filter_level(if cli.verbose {
      LevelFilter::Debug
    } else {
      LevelFilter::Info
    })
    .write_style(env_logger::WriteStyle::Always)
    .init();

  match &cli.command {
    Commands::Show { format } => {
      let rendered = config_data()
        .render(format)
        .wrap_err("Failed to render site configuration")?;
      print_output(rendered.trim_end());
    },

    Commands::Get { key } => {
      let value = config_data()
        .lookup(key)
        .wrap_err_with(|| format!("Failed to read configuration key {key}"))?;
      debug!("Resolved {key} to {value}");
      print_output(&display_value(&value));
    },

    Commands::Export {
      output,
      format,
      force,
    } => export(output, format, *force)?,
  }

  Ok(())
}

/// Write the configuration file, refusing to clobber existing files unless
/// forced.
fn export(output: &Path, format: &str, force: bool) -> Result<()> {
  if output.exists() && !force {
    bail!(
      "Output file already exists: {}. Use --force to overwrite.",
      output.display()
    );
  }

  if let Some(parent) = output.parent() {
    if !parent.as_os_str().is_empty() && !parent.exists() {
      fs::create_dir_all(parent).wrap_err_with(|| {
        format!("Failed to create directory: {}", parent.display())
      })?;
      info!("Created directory: {}", parent.display());
    }
  }

  config_data().export(format, output).wrap_err_with(|| {
    format!("Failed to export site configuration: {}", output.display())
  })
}

/// Strings are printed without quotes so shell scripts can use them as-is.
fn display_value(value: &Value) -> String {
  match value {
    Value::String(s) => s.clone(),
    other => other.to_string(),
  }
}

#[allow(clippy::print_stdout, reason = "Printing is the point of the CLI")]
fn print_output(text: &str) {
  println!("{text}");
}
