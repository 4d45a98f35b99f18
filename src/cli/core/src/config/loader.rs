/* src/cli/core/src/config/loader.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::types::FoodgramConfig;

pub const CONFIG_FILE: &str = "foodgram.toml";

/// Walk up from `start` looking for `foodgram.toml`.
pub fn find_foodgram_config(start: &Path) -> Option<PathBuf> {
  start.ancestors().map(|dir| dir.join(CONFIG_FILE)).find(|candidate| candidate.is_file())
}

pub fn load_foodgram_config(path: &Path) -> Result<FoodgramConfig> {
  let content =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  let config: FoodgramConfig =
    toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))?;
  config.validate().with_context(|| format!("invalid config {}", path.display()))?;
  Ok(config)
}

/// Config plus the directory relative paths in it are resolved against.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
  pub config: FoodgramConfig,
  pub base_dir: PathBuf,
  pub source: Option<PathBuf>,
}

impl LoadedConfig {
  pub fn resolve(&self, relative: &str) -> PathBuf {
    self.base_dir.join(relative)
  }
}

/// Use the explicit path when given, otherwise search upward from `cwd`.
/// A project without `foodgram.toml` runs on defaults.
pub fn resolve_config(explicit: Option<&Path>, cwd: &Path) -> Result<LoadedConfig> {
  let source = match explicit {
    Some(path) => Some(path.to_path_buf()),
    None => find_foodgram_config(cwd),
  };
  match source {
    Some(path) => {
      let config = load_foodgram_config(&path)?;
      let base_dir = path.parent().map_or_else(|| cwd.to_path_buf(), Path::to_path_buf);
      Ok(LoadedConfig { config, base_dir, source: Some(path) })
    }
    None => {
      Ok(LoadedConfig { config: FoodgramConfig::default(), base_dir: cwd.to_path_buf(), source: None })
    }
  }
}
