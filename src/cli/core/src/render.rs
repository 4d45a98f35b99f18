/* src/cli/core/src/render.rs */

// `foodgram render` and `foodgram routes`.

use std::path::Path;

use anyhow::{Context, Result};
use foodgram_client::App;
use foodgram_head::HeadTag;
use foodgram_view::Node;
use serde::Serialize;

use crate::ui::{self, DIM, RESET};

/// Mount `path` and return the full document.
pub fn render_route(app: &mut App, path: &str) -> Result<String> {
  app.navigate(path).with_context(|| format!("failed to render {path}"))?;
  Ok(app.render_document())
}

/// Structure of a mounted page: effective head tags and the layout tree.
#[derive(Serialize)]
struct TreeDump<'a> {
  path: &'a str,
  page: &'static str,
  head: Vec<HeadTag>,
  tree: &'a Node,
}

/// Mount `path` and dump its head and layout tree as JSON.
pub fn render_tree_json(app: &mut App, path: &str) -> Result<String> {
  app.navigate(path).with_context(|| format!("failed to render {path}"))?;
  let (Some(page), Some(tree)) = (app.current_page(), app.tree()) else {
    anyhow::bail!("no page mounted after navigating to {path}");
  };
  let dump = TreeDump { path, page, head: app.head().tags(), tree };
  serde_json::to_string_pretty(&dump).context("failed to serialize page tree")
}

pub fn run_render(app: &mut App, path: &str, out: Option<&Path>, json: bool) -> Result<()> {
  let output = if json { render_tree_json(app, path)? } else { render_route(app, path)? };
  match out {
    Some(file) => {
      if let Some(parent) = file.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
          .with_context(|| format!("failed to create {}", parent.display()))?;
      }
      std::fs::write(file, &output).with_context(|| format!("failed to write {}", file.display()))?;
      ui::ok(&format!("{path} → {}", file.display()));
    }
    None => ui::raw(&output),
  }
  Ok(())
}

/// One line per route: pattern and page name, fallback last.
pub fn route_lines(app: &App) -> Vec<String> {
  let router = app.router();
  let width = router.table().iter().map(|(pattern, _)| pattern.len()).max().unwrap_or(0);
  let mut lines: Vec<String> =
    router.table().into_iter().map(|(pattern, page)| format!("{pattern:<width$}  {page}")).collect();
  if router.has_fallback() {
    lines.push(format!("{:<width$}  {}", "*", "fallback"));
  }
  lines
}

pub fn run_routes(app: &App) {
  ui::banner("routes", None);
  for line in route_lines(app) {
    ui::detail(&line);
  }
  ui::detail(&format!("{DIM}{} static path(s){RESET}", app.router().static_paths().len()));
}
