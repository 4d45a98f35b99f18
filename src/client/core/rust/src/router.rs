/* src/client/core/rust/src/router.rs */

use std::fmt;
use std::sync::Arc;

use crate::error::ClientError;
use crate::page::Page;
use crate::props::RouteParams;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
  Static(String),
  Param(String),
}

struct Route {
  pattern: String,
  segments: Vec<Segment>,
  page: Arc<dyn Page>,
}

/// A successful route lookup.
pub struct Resolved {
  pub page: Arc<dyn Page>,
  pub params: RouteParams,
  /// Matched pattern, `None` when the fallback page was selected.
  pub pattern: Option<String>,
}

impl fmt::Debug for Resolved {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Resolved")
      .field("page", &self.page.name())
      .field("params", &self.params)
      .field("pattern", &self.pattern)
      .finish()
  }
}

/// Maps paths to pages. Patterns use `{name}` for a captured segment, e.g.
/// `/recipes/{id}`. Routes are tried in registration order.
#[derive(Default)]
pub struct Router {
  routes: Vec<Route>,
  fallback: Option<Arc<dyn Page>>,
}

/// Split a request path into segments, ignoring query, fragment and
/// empty segments (so trailing and doubled slashes do not matter).
fn split_path(path: &str) -> Vec<&str> {
  let end = path.find(['?', '#']).unwrap_or(path.len());
  path[..end].split('/').filter(|s| !s.is_empty()).collect()
}

fn parse_pattern(pattern: &str) -> Vec<Segment> {
  split_path(pattern)
    .into_iter()
    .map(|seg| match seg.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
      Some(name) => Segment::Param(name.to_string()),
      None => Segment::Static(seg.to_string()),
    })
    .collect()
}

impl Route {
  fn matches(&self, segments: &[&str]) -> Option<RouteParams> {
    if segments.len() != self.segments.len() {
      return None;
    }
    let mut params = RouteParams::new();
    for (seg, actual) in self.segments.iter().zip(segments) {
      match seg {
        Segment::Static(expected) if expected == actual => {}
        Segment::Static(_) => return None,
        Segment::Param(name) => params.insert(name.as_str(), *actual),
      }
    }
    Some(params)
  }
}

impl Router {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn route(mut self, pattern: &str, page: impl Page + 'static) -> Self {
    self.routes.push(Route {
      pattern: pattern.to_string(),
      segments: parse_pattern(pattern),
      page: Arc::new(page),
    });
    self
  }

  pub fn fallback(mut self, page: impl Page + 'static) -> Self {
    self.fallback = Some(Arc::new(page));
    self
  }

  pub fn resolve(&self, path: &str) -> Result<Resolved, ClientError> {
    let segments = split_path(path);
    for route in &self.routes {
      if let Some(params) = route.matches(&segments) {
        return Ok(Resolved {
          page: Arc::clone(&route.page),
          params,
          pattern: Some(route.pattern.clone()),
        });
      }
    }
    match &self.fallback {
      Some(page) => {
        Ok(Resolved { page: Arc::clone(page), params: RouteParams::new(), pattern: None })
      }
      None => Err(ClientError::NoRoute(path.to_string())),
    }
  }

  /// `(pattern, page name)` pairs in registration order.
  pub fn table(&self) -> Vec<(&str, &'static str)> {
    self.routes.iter().map(|r| (r.pattern.as_str(), r.page.name())).collect()
  }

  /// Patterns without captured segments: the pages that can be pre-rendered
  /// without knowing any data.
  pub fn static_paths(&self) -> Vec<&str> {
    self
      .routes
      .iter()
      .filter(|r| r.segments.iter().all(|s| matches!(s, Segment::Static(_))))
      .map(|r| r.pattern.as_str())
      .collect()
  }

  pub fn has_fallback(&self) -> bool {
    self.fallback.is_some()
  }
}
