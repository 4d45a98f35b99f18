/* src/cli/core/src/serve/mod.rs */

// `foodgram serve`: render pages per request over one session store.

mod error;
mod handler;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use axum::routing::{get, get_service, post};
use foodgram_store::OrdersStore;
use tower_http::services::ServeDir;
use tracing::info;

use crate::config::{FoodgramConfig, LoadedConfig};
use crate::session::session_store;
use crate::ui;

pub(crate) struct ServeState {
  pub config: FoodgramConfig,
  /// Shared by every request; each request mounts its own `App` over it.
  pub store: Arc<OrdersStore>,
}

pub(crate) fn build_router(state: Arc<ServeState>, static_dir: Option<PathBuf>) -> Router {
  let mut router = Router::new()
    .route("/_foodgram/orders", get(handler::handle_orders))
    .route("/_foodgram/event", post(handler::handle_event));
  if let Some(dir) = static_dir {
    router = router.nest_service("/static", get_service(ServeDir::new(dir)));
  }
  router.fallback(handler::handle_page).with_state(state)
}

pub(crate) async fn run_serve(loaded: &LoadedConfig, host: Option<&str>, port: Option<u16>) -> Result<()> {
  let config = loaded.config.clone();
  let host = host.unwrap_or(&config.server.host).to_string();
  let port = port.unwrap_or(config.server.port);
  let static_dir = config.server.static_dir.as_deref().map(|dir| loaded.resolve(dir));

  let state = Arc::new(ServeState { store: session_store(&config), config });
  let router = build_router(state, static_dir);

  let addr = format!("{host}:{port}");
  let listener =
    tokio::net::TcpListener::bind(&addr).await.with_context(|| format!("failed to bind {addr}"))?;
  let local = listener.local_addr().context("failed to read local address")?;
  info!(%local, "server listening");
  ui::ok(&format!("serving on http://localhost:{}", local.port()));
  ui::arrow("press Ctrl+C to stop");

  axum::serve(listener, router).await.context("server stopped unexpectedly")?;
  Ok(())
}
