/* src/cli/core/src/export.rs */

// `foodgram export`: pre-render every static route into a directory tree
// that any file server can host.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use foodgram_client::App;
use tracing::debug;

use crate::ui;

/// Probe path for the fallback page; only used when no route claims it.
const NOT_FOUND_PROBE: &str = "/404";

/// Output file for a route: `/` → `index.html`, `/about` → `about/index.html`.
fn output_path(out_dir: &Path, route: &str) -> PathBuf {
  let mut path = out_dir.to_path_buf();
  for segment in route.split('/').filter(|s| !s.is_empty()) {
    path.push(segment);
  }
  path.join("index.html")
}

fn write_page(path: &Path, html: &str) -> Result<()> {
  if let Some(parent) = path.parent() {
    std::fs::create_dir_all(parent)
      .with_context(|| format!("failed to create {}", parent.display()))?;
  }
  std::fs::write(path, html).with_context(|| format!("failed to write {}", path.display()))
}

/// Navigate one `App` through every static route, the way a visitor would,
/// and write each document. Returns the written files in route order.
pub fn export_site(app: &mut App, out_dir: &Path) -> Result<Vec<PathBuf>> {
  let routes: Vec<String> = app.router().static_paths().into_iter().map(String::from).collect();
  let mut written = Vec::with_capacity(routes.len() + 1);

  for route in &routes {
    app.navigate(route).with_context(|| format!("failed to render {route}"))?;
    let path = output_path(out_dir, route);
    write_page(&path, &app.render_document())?;
    debug!(route = route.as_str(), file = %path.display(), "exported");
    written.push(path);
  }

  if app.router().has_fallback() && !routes.iter().any(|r| r == NOT_FOUND_PROBE) {
    app.navigate(NOT_FOUND_PROBE)?;
    if app.is_fallback() {
      let path = out_dir.join("404.html");
      write_page(&path, &app.render_document())?;
      written.push(path);
    }
  }

  app.unmount();
  Ok(written)
}

pub fn run_export(app: &mut App, out_dir: &Path) -> Result<()> {
  ui::banner("export", Some(&out_dir.display().to_string()));
  let written = export_site(app, out_dir)?;
  for path in &written {
    let shown = path.strip_prefix(out_dir).unwrap_or(path);
    ui::detail(&shown.display().to_string());
  }
  ui::ok(&format!("exported {} page(s)", written.len()));
  Ok(())
}
