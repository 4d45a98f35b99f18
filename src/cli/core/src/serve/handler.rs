/* src/cli/core/src/serve/handler.rs */

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::{Method, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use foodgram_client::PageEvent;
use foodgram_store::{Orders, Store};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::ServeState;
use super::error::ServeError;
use crate::session::new_app;

/// Any GET that no other route claims is a page request. The fallback page
/// is served with a 404 status.
pub(super) async fn handle_page(
  State(state): State<Arc<ServeState>>,
  method: Method,
  uri: Uri,
) -> Result<Response, ServeError> {
  if method != Method::GET && method != Method::HEAD {
    return Ok(StatusCode::METHOD_NOT_ALLOWED.into_response());
  }
  let mut app = new_app(&state.config, state.store.clone());
  app.navigate(uri.path())?;
  let status = if app.is_fallback() { StatusCode::NOT_FOUND } else { StatusCode::OK };
  debug!(path = uri.path(), status = status.as_u16(), "page request");
  Ok((status, Html(app.render_document())).into_response())
}

pub(super) async fn handle_orders(State(state): State<Arc<ServeState>>) -> Json<Orders> {
  Json(state.store.get().as_ref().clone())
}

#[derive(Debug, Deserialize)]
pub(super) struct EventRequest {
  /// Page the event was raised on.
  pub path: String,
  /// `data-event` value of the triggering element.
  pub event: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub(super) struct EventResponse {
  pub handled: bool,
  pub orders: Orders,
}

/// Mount the page the event came from and let it handle the event.
pub(super) async fn handle_event(
  State(state): State<Arc<ServeState>>,
  Json(req): Json<EventRequest>,
) -> Result<Json<EventResponse>, ServeError> {
  let event = PageEvent::decode(&req.event).ok_or_else(|| ServeError::BadEvent(req.event.clone()))?;
  let mut app = new_app(&state.config, state.store.clone());
  app.navigate(&req.path)?;
  let handled = app.emit(&event)?;
  Ok(Json(EventResponse { handled, orders: state.store.get().as_ref().clone() }))
}
