/* src/cli/core/src/main.rs */

mod config;
mod export;
mod render;
mod serve;
mod session;
mod ui;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::config::resolve_config;
use crate::session::{new_app, session_store};

#[derive(Parser)]
#[command(name = "foodgram", version, about = "Render, export and serve Foodgram pages")]
struct Cli {
  /// Path to foodgram.toml (searched upward from the current directory by default)
  #[arg(long, global = true)]
  config: Option<PathBuf>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Render one route as a full HTML document
  Render {
    /// Route path, e.g. /about
    path: String,
    /// Write to a file instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,
    /// Dump head tags and the layout tree as JSON instead of HTML
    #[arg(long)]
    json: bool,
  },
  /// Pre-render every static route into a directory
  Export {
    /// Output directory (defaults to [export] out_dir)
    #[arg(long)]
    out: Option<PathBuf>,
  },
  /// Serve pages over HTTP
  Serve {
    #[arg(long)]
    host: Option<String>,
    #[arg(long, short)]
    port: Option<u16>,
  },
  /// List the route table
  Routes,
}

fn init_tracing() {
  tracing_subscriber::fmt()
    .with_env_filter(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
    )
    .with_writer(std::io::stderr)
    .init();
}

async fn run(cli: Cli) -> Result<()> {
  let cwd = std::env::current_dir().context("failed to read current directory")?;
  let loaded = resolve_config(cli.config.as_deref(), &cwd)?;
  match &loaded.source {
    Some(source) => {
      let project = loaded.config.project.name.as_str();
      tracing::debug!(project, config = %source.display(), "config loaded");
    }
    None => tracing::debug!("no foodgram.toml found, using defaults"),
  }

  match cli.command {
    Command::Render { path, out, json } => {
      let mut app = new_app(&loaded.config, session_store(&loaded.config));
      render::run_render(&mut app, &path, out.as_deref(), json)
    }
    Command::Export { out } => {
      let out_dir = out.unwrap_or_else(|| loaded.resolve(&loaded.config.export.out_dir));
      let mut app = new_app(&loaded.config, session_store(&loaded.config));
      export::run_export(&mut app, &out_dir)
    }
    Command::Serve { host, port } => serve::run_serve(&loaded, host.as_deref(), port).await,
    Command::Routes => {
      let app = new_app(&loaded.config, session_store(&loaded.config));
      render::run_routes(&app);
      Ok(())
    }
  }
}

#[tokio::main]
async fn main() -> ExitCode {
  init_tracing();
  match run(Cli::parse()).await {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      ui::fail(&format!("{err:#}"));
      ExitCode::FAILURE
    }
  }
}

#[cfg(test)]
mod tests {
  use clap::CommandFactory;

  use super::*;

  #[test]
  fn cli_definition_is_valid() {
    Cli::command().debug_assert();
  }

  #[test]
  fn parses_global_config_after_subcommand() {
    let cli = Cli::try_parse_from(["foodgram", "export", "--config", "site/foodgram.toml"]).unwrap();
    assert_eq!(cli.config, Some(PathBuf::from("site/foodgram.toml")));
    assert!(matches!(cli.command, Command::Export { out: None }));
  }

  #[test]
  fn parses_render_json_flag() {
    let cli = Cli::try_parse_from(["foodgram", "render", "/about", "--json"]).unwrap();
    assert!(matches!(cli.command, Command::Render { json: true, out: None, .. }));
  }

  #[test]
  fn parses_serve_port() {
    let cli = Cli::try_parse_from(["foodgram", "serve", "-p", "8080"]).unwrap();
    assert!(matches!(cli.command, Command::Serve { port: Some(8080), host: None }));
  }
}
