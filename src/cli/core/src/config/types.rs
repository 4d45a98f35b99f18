/* src/cli/core/src/config/types.rs */

use anyhow::{Result, bail};
use foodgram_client::DocumentOptions;
use foodgram_store::Order;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FoodgramConfig {
  #[serde(default)]
  pub project: ProjectConfig,
  #[serde(default)]
  pub document: DocumentOptions,
  #[serde(default)]
  pub server: ServerSection,
  #[serde(default)]
  pub export: ExportSection,
  /// Shopping list the session store starts with.
  #[serde(default)]
  pub orders: Vec<Order>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectConfig {
  #[serde(default = "default_project_name")]
  pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSection {
  #[serde(default = "default_host")]
  pub host: String,
  #[serde(default = "default_port")]
  pub port: u16,
  /// Directory served under `/static`, relative to the config file.
  #[serde(default)]
  pub static_dir: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportSection {
  #[serde(default = "default_out_dir")]
  pub out_dir: String,
}

fn default_project_name() -> String {
  "foodgram".to_string()
}

fn default_host() -> String {
  "0.0.0.0".to_string()
}

fn default_port() -> u16 {
  3000
}

fn default_out_dir() -> String {
  "dist".to_string()
}

impl Default for ProjectConfig {
  fn default() -> Self {
    Self { name: default_project_name() }
  }
}

impl Default for ServerSection {
  fn default() -> Self {
    Self { host: default_host(), port: default_port(), static_dir: None }
  }
}

impl Default for ExportSection {
  fn default() -> Self {
    Self { out_dir: default_out_dir() }
  }
}

impl FoodgramConfig {
  /// Reject values that parse but cannot produce a usable document.
  pub fn validate(&self) -> Result<()> {
    if self.document.root_id.trim().is_empty() {
      bail!("[document] root_id must not be empty");
    }
    if self.document.data_id.trim().is_empty() {
      bail!("[document] data_id must not be empty");
    }
    if self.export.out_dir.trim().is_empty() {
      bail!("[export] out_dir must not be empty");
    }
    let mut seen = std::collections::HashSet::new();
    for order in &self.orders {
      if !seen.insert(order.id) {
        bail!("recipe {} appears more than once in [[orders]]", order.id);
      }
    }
    Ok(())
  }
}
