/* src/client/core/rust/src/app.rs */

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use foodgram_head::{HeadManager, HeadScope};
use foodgram_store::{DynOrdersStore, Orders, Subscription};
use foodgram_view::{IntoNode, Node};
use tracing::{debug, info};

use crate::document::{DocumentOptions, render_document};
use crate::error::ClientError;
use crate::page::Page;
use crate::props::{PageEvent, PageProps, RouteParams};
use crate::router::Router;

struct Mounted {
  path: String,
  page: Arc<dyn Page>,
  params: RouteParams,
  /// Matched route pattern; `None` when the router fell back.
  pattern: Option<String>,
  /// Held for the whole mount; dropping it retracts the page's head tags.
  scope: HeadScope,
  tree: Node,
}

/// Root composition: owns the router, the document head and the session
/// store, and keeps exactly one page mounted at a time.
pub struct App {
  router: Router,
  store: Arc<DynOrdersStore>,
  head: HeadManager,
  options: DocumentOptions,
  stale: Arc<AtomicBool>,
  _subscription: Subscription,
  mounted: Option<Mounted>,
}

fn props_for<'a>(
  page: &dyn Page,
  params: &'a RouteParams,
  store: &'a DynOrdersStore,
) -> PageProps<'a> {
  let props = PageProps::new(params);
  if page.uses_orders() { props.with_orders(store) } else { props }
}

impl App {
  pub fn new(router: Router, store: Arc<DynOrdersStore>, options: DocumentOptions) -> Self {
    let head = HeadManager::with_title(options.base_title.clone());
    let stale = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&stale);
    let subscription = store.subscribe(Box::new(move |_: &Arc<Orders>| {
      flag.store(true, Ordering::SeqCst);
    }));
    Self { router, store, head, options, stale, _subscription: subscription, mounted: None }
  }

  pub fn head(&self) -> &HeadManager {
    &self.head
  }

  pub fn store(&self) -> &Arc<DynOrdersStore> {
    &self.store
  }

  pub fn router(&self) -> &Router {
    &self.router
  }

  pub fn options(&self) -> &DocumentOptions {
    &self.options
  }

  pub fn is_mounted(&self) -> bool {
    self.mounted.is_some()
  }

  pub fn current_path(&self) -> Option<&str> {
    self.mounted.as_ref().map(|m| m.path.as_str())
  }

  pub fn current_page(&self) -> Option<&'static str> {
    self.mounted.as_ref().map(|m| m.page.name())
  }

  /// Route pattern of the mounted page, `None` for the fallback page.
  pub fn current_pattern(&self) -> Option<&str> {
    self.mounted.as_ref().and_then(|m| m.pattern.as_deref())
  }

  /// Whether the mounted page was chosen by the router's fallback.
  pub fn is_fallback(&self) -> bool {
    self.mounted.as_ref().is_some_and(|m| m.pattern.is_none())
  }

  pub fn tree(&self) -> Option<&Node> {
    self.mounted.as_ref().map(|m| &m.tree)
  }

  /// Mount the page for `path`. The outgoing page is unmounted (and its head
  /// scope retracted) before the incoming descriptor is applied. On a
  /// routing error the current page stays mounted.
  pub fn navigate(&mut self, path: &str) -> Result<&Node, ClientError> {
    let resolved = self.router.resolve(path)?;
    self.unmount();

    let page = resolved.page;
    let params = resolved.params;
    let pattern = resolved.pattern;
    // Cleared before the snapshot is taken so a concurrent write marks it stale
    self.stale.store(false, Ordering::SeqCst);
    let props = props_for(page.as_ref(), &params, self.store.as_ref());
    let descriptor = page.head(&props);
    let scope = self.head.apply(&descriptor);
    let tree = page.render(&props).into_node();
    drop(props);

    info!(path, page = page.name(), title = descriptor.title(), "page mounted");
    let mounted =
      self.mounted.insert(Mounted { path: path.to_string(), page, params, pattern, scope, tree });
    Ok(&mounted.tree)
  }

  /// Unmount the current page. Safe to call when nothing is mounted.
  pub fn unmount(&mut self) -> bool {
    let Some(mut mounted) = self.mounted.take() else {
      return false;
    };
    mounted.scope.retract();
    debug!(path = mounted.path.as_str(), page = mounted.page.name(), "page unmounted");
    true
  }

  /// Re-render the mounted page if the store changed since its last render.
  /// The head descriptor stays as applied at mount.
  pub fn refresh(&mut self) -> Result<bool, ClientError> {
    let mounted = self.mounted.as_mut().ok_or(ClientError::NotMounted)?;
    if !self.stale.swap(false, Ordering::SeqCst) {
      return Ok(false);
    }
    let props = props_for(mounted.page.as_ref(), &mounted.params, self.store.as_ref());
    mounted.tree = mounted.page.render(&props).into_node();
    debug!(path = mounted.path.as_str(), "page re-rendered");
    Ok(true)
  }

  /// Deliver an interaction to the mounted page, then re-render from the
  /// store's next snapshot. Returns whether the page handled the event.
  pub fn emit(&mut self, event: &PageEvent) -> Result<bool, ClientError> {
    let mounted = self.mounted.as_ref().ok_or(ClientError::NotMounted)?;
    let props = props_for(mounted.page.as_ref(), &mounted.params, self.store.as_ref());
    let handled = mounted.page.handle(event, &props);
    debug!(event = %event.encode(), handled, "page event");
    drop(props);
    self.refresh()?;
    Ok(handled)
  }

  /// Full HTML document for the current state: head tags, mounted tree and
  /// the serialized orders snapshot.
  pub fn render_document(&self) -> String {
    let body = self.tree().map(Node::to_html).unwrap_or_default();
    let data = serde_json::json!({ "orders": *self.store.get() });
    render_document(&self.head.render_html(), &body, &self.options, Some(&data))
  }
}

#[cfg(test)]
mod tests;
