/* src/client/head/rust/src/manager.rs */

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use tracing::debug;

use crate::descriptor::HeadDescriptor;
use crate::tag::{HeadTag, TagKey, upsert};

struct Layer {
  id: u64,
  descriptor: HeadDescriptor,
}

struct HeadState {
  base: Vec<HeadTag>,
  /// Live descriptors in application order; only the last one is visible.
  layers: Vec<Layer>,
  next_id: u64,
}

impl HeadState {
  fn effective(&self) -> Vec<HeadTag> {
    let mut tags = self.base.clone();
    if let Some(top) = self.layers.last() {
      for tag in top.descriptor.tags() {
        upsert(&mut tags, tag.clone());
      }
    }
    tags
  }
}

/// Owner of the document head.
///
/// Pages never write head tags directly: they `apply` a descriptor and hold
/// the returned [`HeadScope`] for as long as they are mounted. The visible
/// head is always the base tags overridden by the most recently applied
/// descriptor that is still live, so descriptors from different pages are
/// never merged and a superseded page cannot leak tags into the next one.
#[derive(Clone)]
pub struct HeadManager {
  state: Arc<Mutex<HeadState>>,
}

impl HeadManager {
  pub fn new(base: Vec<HeadTag>) -> Self {
    let mut deduped = Vec::with_capacity(base.len());
    for tag in base {
      upsert(&mut deduped, tag);
    }
    Self { state: Arc::new(Mutex::new(HeadState { base: deduped, layers: Vec::new(), next_id: 1 })) }
  }

  pub fn with_title(title: impl Into<String>) -> Self {
    Self::new(vec![HeadTag::title(title)])
  }

  fn lock(&self) -> MutexGuard<'_, HeadState> {
    self.state.lock().unwrap_or_else(PoisonError::into_inner)
  }

  #[must_use = "dropping the scope retracts the descriptor immediately"]
  pub fn apply(&self, descriptor: &HeadDescriptor) -> HeadScope {
    let mut state = self.lock();
    let id = state.next_id;
    state.next_id += 1;
    state.layers.push(Layer { id, descriptor: descriptor.clone() });
    debug!(scope = id, title = descriptor.title(), live = state.layers.len(), "head applied");
    HeadScope { id, state: Arc::downgrade(&self.state), retracted: false }
  }

  pub fn title(&self) -> Option<String> {
    self.get(&TagKey::Title).map(|t| t.content().to_string())
  }

  /// Currently visible tags, base order first.
  pub fn tags(&self) -> Vec<HeadTag> {
    self.lock().effective()
  }

  pub fn get(&self, key: &TagKey) -> Option<HeadTag> {
    self.lock().effective().into_iter().find(|t| t.key() == *key)
  }

  pub fn active_scopes(&self) -> usize {
    self.lock().layers.len()
  }

  pub fn render_html(&self) -> String {
    let mut out = String::new();
    for tag in self.tags() {
      tag.to_element().write_html(&mut out);
    }
    out
  }
}

impl Default for HeadManager {
  fn default() -> Self {
    Self::new(Vec::new())
  }
}

/// Live application of one descriptor. Retracting removes exactly this
/// descriptor wherever it sits, so out-of-order cleanup after a fast
/// navigation never removes the newer page's tags. Dropping the scope
/// retracts it.
pub struct HeadScope {
  id: u64,
  state: Weak<Mutex<HeadState>>,
  retracted: bool,
}

impl HeadScope {
  pub fn id(&self) -> u64 {
    self.id
  }

  pub fn is_retracted(&self) -> bool {
    self.retracted
  }

  /// Returns `true` only on the call that actually removed the layer.
  pub fn retract(&mut self) -> bool {
    if self.retracted {
      return false;
    }
    self.retracted = true;
    // Manager gone: nothing left to clean up
    let Some(state) = self.state.upgrade() else {
      return false;
    };
    let mut state = state.lock().unwrap_or_else(PoisonError::into_inner);
    let before = state.layers.len();
    state.layers.retain(|layer| layer.id != self.id);
    let removed = state.layers.len() != before;
    debug!(scope = self.id, removed, live = state.layers.len(), "head retracted");
    removed
  }
}

impl Drop for HeadScope {
  fn drop(&mut self) {
    self.retract();
  }
}

impl std::fmt::Debug for HeadScope {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("HeadScope").field("id", &self.id).field("retracted", &self.retracted).finish()
  }
}
