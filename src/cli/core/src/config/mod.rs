/* src/cli/core/src/config/mod.rs */

mod loader;
mod types;

#[cfg(test)]
mod tests;

pub use loader::{LoadedConfig, resolve_config};
pub use types::FoodgramConfig;
