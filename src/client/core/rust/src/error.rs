/* src/client/core/rust/src/error.rs */

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
  /// No route matched and the router has no fallback page.
  NoRoute(String),
  /// An operation needed a mounted page but none is mounted.
  NotMounted,
}

impl ClientError {
  /// HTTP status an adapter should answer with.
  pub fn status(&self) -> u16 {
    match self {
      ClientError::NoRoute(_) => 404,
      ClientError::NotMounted => 500,
    }
  }
}

impl fmt::Display for ClientError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ClientError::NoRoute(path) => write!(f, "no route matches '{path}'"),
      ClientError::NotMounted => write!(f, "no page is mounted"),
    }
  }
}

impl std::error::Error for ClientError {}
