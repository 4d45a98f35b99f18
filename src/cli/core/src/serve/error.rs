/* src/cli/core/src/serve/error.rs */

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use foodgram_client::ClientError;

/// Failure of a request handler, rendered as a JSON error body.
#[derive(Debug)]
pub enum ServeError {
  Client(ClientError),
  BadEvent(String),
}

impl ServeError {
  fn status(&self) -> StatusCode {
    match self {
      ServeError::Client(err) => {
        StatusCode::from_u16(err.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
      }
      ServeError::BadEvent(_) => StatusCode::BAD_REQUEST,
    }
  }

  fn code(&self) -> &'static str {
    match self {
      ServeError::Client(ClientError::NoRoute(_)) => "NOT_FOUND",
      ServeError::Client(ClientError::NotMounted) => "INTERNAL_ERROR",
      ServeError::BadEvent(_) => "BAD_EVENT",
    }
  }
}

impl From<ClientError> for ServeError {
  fn from(err: ClientError) -> Self {
    ServeError::Client(err)
  }
}

impl std::fmt::Display for ServeError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ServeError::Client(err) => write!(f, "{err}"),
      ServeError::BadEvent(raw) => write!(f, "unknown event '{raw}'"),
    }
  }
}

impl IntoResponse for ServeError {
  fn into_response(self) -> Response {
    let body = serde_json::json!({
      "ok": false,
      "error": { "code": self.code(), "message": self.to_string() },
    });
    (self.status(), Json(body)).into_response()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn maps_client_errors_to_status() {
    let resp = ServeError::from(ClientError::NoRoute("/x".into())).into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let resp = ServeError::from(ClientError::NotMounted).into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let resp = ServeError::BadEvent("nope".into()).into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  }
}
