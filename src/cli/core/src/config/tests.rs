/* src/cli/core/src/config/tests.rs */

use std::fs;

use foodgram_store::Order;

use super::loader::{CONFIG_FILE, find_foodgram_config, load_foodgram_config};
use super::*;

#[test]
fn empty_file_uses_defaults() {
  let config: FoodgramConfig = toml::from_str("").unwrap();
  assert_eq!(config.project.name, "foodgram");
  assert_eq!(config.server.port, 3000);
  assert_eq!(config.server.host, "0.0.0.0");
  assert_eq!(config.export.out_dir, "dist");
  assert_eq!(config.document.lang, "ru");
  assert_eq!(config.document.base_title, "Фудграм");
  assert!(config.orders.is_empty());
}

#[test]
fn full_config_parses() {
  let config: FoodgramConfig = toml::from_str(
    r#"
[project]
name = "foodgram-st"

[document]
lang = "en"
base_title = "Foodgram"
stylesheets = ["/static/main.css"]

[server]
port = 8080
static_dir = "public"

[export]
out_dir = "site"

[[orders]]
id = 4
name = "Борщ"

[[orders]]
id = 9
"#,
  )
  .unwrap();
  assert_eq!(config.project.name, "foodgram-st");
  assert_eq!(config.document.lang, "en");
  // Unset document fields keep their defaults
  assert_eq!(config.document.root_id, "root");
  assert_eq!(config.document.stylesheets, ["/static/main.css"]);
  assert_eq!(config.server.port, 8080);
  assert_eq!(config.server.static_dir.as_deref(), Some("public"));
  assert_eq!(config.export.out_dir, "site");
  assert_eq!(config.orders, vec![Order::named(4, "Борщ"), Order::new(9)]);
  config.validate().unwrap();
}

#[test]
fn duplicate_orders_rejected() {
  let config: FoodgramConfig = toml::from_str("[[orders]]\nid = 1\n\n[[orders]]\nid = 1\n").unwrap();
  let err = config.validate().unwrap_err();
  assert!(err.to_string().contains("recipe 1"));
}

#[test]
fn empty_root_id_rejected() {
  let config: FoodgramConfig = toml::from_str("[document]\nroot_id = \" \"\n").unwrap();
  assert!(config.validate().is_err());
}

#[test]
fn finds_config_in_ancestor() {
  let tmp = tempfile::tempdir().unwrap();
  let nested = tmp.path().join("a/b");
  fs::create_dir_all(&nested).unwrap();
  fs::write(tmp.path().join(CONFIG_FILE), "[project]\nname = \"up\"\n").unwrap();

  let found = find_foodgram_config(&nested).unwrap();
  assert_eq!(found, tmp.path().join(CONFIG_FILE));

  let loaded = resolve_config(None, &nested).unwrap();
  assert_eq!(loaded.config.project.name, "up");
  assert_eq!(loaded.base_dir, tmp.path());
  assert_eq!(loaded.resolve("dist"), tmp.path().join("dist"));
}

#[test]
fn missing_config_falls_back_to_defaults() {
  let tmp = tempfile::tempdir().unwrap();
  let loaded = resolve_config(None, tmp.path()).unwrap();
  assert!(loaded.source.is_none());
  assert_eq!(loaded.config.server.port, 3000);
  assert_eq!(loaded.base_dir, tmp.path());
}

#[test]
fn explicit_missing_config_is_an_error() {
  let tmp = tempfile::tempdir().unwrap();
  let err = resolve_config(Some(&tmp.path().join("nope.toml")), tmp.path()).unwrap_err();
  assert!(err.to_string().contains("failed to read"));
}

#[test]
fn parse_error_names_the_file() {
  let tmp = tempfile::tempdir().unwrap();
  let path = tmp.path().join(CONFIG_FILE);
  fs::write(&path, "[server]\nport = \"eighty\"\n").unwrap();
  let err = load_foodgram_config(&path).unwrap_err();
  assert!(err.to_string().contains("failed to parse"));
}
