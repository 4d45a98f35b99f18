/* src/client/store/rust/src/store.rs */

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

pub type Listener<S> = Box<dyn Fn(&Arc<S>) + Send + Sync>;

/// Read/subscribe/dispatch capability over one piece of session state.
///
/// `get` hands out an immutable snapshot; `dispatch` is the only write path
/// and replaces the snapshot instead of mutating it, so a snapshot a caller
/// already holds never changes underneath it.
pub trait Store: Send + Sync {
  type State;
  type Action;

  fn get(&self) -> Arc<Self::State>;

  fn subscribe(&self, listener: Listener<Self::State>) -> Subscription;

  fn dispatch(&self, action: Self::Action);
}

/// Pure state transition used by [`MemoryStore`].
pub trait Reducer: Send + Sync {
  type State: Send + Sync + 'static;
  type Action;

  fn reduce(&self, state: &Self::State, action: Self::Action) -> Self::State;
}

/// Live store subscription. Dropping it unsubscribes.
pub struct Subscription {
  cancel: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
  pub fn new(cancel: impl FnOnce() + Send + Sync + 'static) -> Self {
    Self { cancel: Some(Box::new(cancel)) }
  }

  /// A subscription with nothing to cancel, for stores that never notify.
  pub fn noop() -> Self {
    Self { cancel: None }
  }

  pub fn is_active(&self) -> bool {
    self.cancel.is_some()
  }

  pub fn unsubscribe(&mut self) {
    if let Some(cancel) = self.cancel.take() {
      cancel();
    }
  }
}

impl Drop for Subscription {
  fn drop(&mut self) {
    self.unsubscribe();
  }
}

impl std::fmt::Debug for Subscription {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Subscription").field("active", &self.is_active()).finish()
  }
}

type SharedListener<S> = Arc<dyn Fn(&Arc<S>) + Send + Sync>;

struct Inner<S> {
  state: Arc<S>,
  listeners: Vec<(u64, SharedListener<S>)>,
  next_id: u64,
}

/// In-process store driven by a [`Reducer`].
pub struct MemoryStore<R: Reducer> {
  reducer: R,
  inner: Arc<Mutex<Inner<R::State>>>,
}

impl<R: Reducer> MemoryStore<R> {
  pub fn new(reducer: R, initial: R::State) -> Self {
    let inner = Inner { state: Arc::new(initial), listeners: Vec::new(), next_id: 1 };
    Self { reducer, inner: Arc::new(Mutex::new(inner)) }
  }

  fn lock(&self) -> MutexGuard<'_, Inner<R::State>> {
    self.inner.lock().unwrap_or_else(PoisonError::into_inner)
  }

  pub fn listener_count(&self) -> usize {
    self.lock().listeners.len()
  }
}

impl<R: Reducer> Store for MemoryStore<R> {
  type State = R::State;
  type Action = R::Action;

  fn get(&self) -> Arc<R::State> {
    Arc::clone(&self.lock().state)
  }

  fn subscribe(&self, listener: Listener<R::State>) -> Subscription {
    let id = {
      let mut inner = self.lock();
      let id = inner.next_id;
      inner.next_id += 1;
      inner.listeners.push((id, Arc::from(listener)));
      id
    };
    let weak: Weak<Mutex<Inner<R::State>>> = Arc::downgrade(&self.inner);
    Subscription::new(move || {
      if let Some(inner) = weak.upgrade() {
        let mut inner = inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.listeners.retain(|(lid, _)| *lid != id);
      }
    })
  }

  fn dispatch(&self, action: R::Action) {
    let (next, listeners) = {
      let mut inner = self.lock();
      let next = Arc::new(self.reducer.reduce(&inner.state, action));
      inner.state = Arc::clone(&next);
      let listeners: Vec<SharedListener<R::State>> =
        inner.listeners.iter().map(|(_, l)| Arc::clone(l)).collect();
      (next, listeners)
    };
    // Listeners run without the lock so they may read or dispatch again
    for listener in &listeners {
      listener(&next);
    }
  }
}

#[cfg(test)]
mod tests {
  use std::sync::atomic::{AtomicUsize, Ordering};

  use super::*;

  struct Counter;

  impl Reducer for Counter {
    type State = i64;
    type Action = i64;

    fn reduce(&self, state: &i64, action: i64) -> i64 {
      state + action
    }
  }

  #[test]
  fn dispatch_replaces_snapshot() {
    let store = MemoryStore::new(Counter, 1);
    let before = store.get();
    store.dispatch(41);
    assert_eq!(*before, 1);
    assert_eq!(*store.get(), 42);
  }

  #[test]
  fn listeners_see_next_state() {
    let store = MemoryStore::new(Counter, 0);
    let seen = Arc::new(AtomicUsize::new(0));
    let sink = Arc::clone(&seen);
    let _sub = store.subscribe(Box::new(move |state: &Arc<i64>| {
      sink.store(usize::try_from(**state).unwrap_or(0), Ordering::SeqCst);
    }));
    store.dispatch(7);
    assert_eq!(seen.load(Ordering::SeqCst), 7);
  }

  #[test]
  fn dropping_subscription_unsubscribes() {
    let store = MemoryStore::new(Counter, 0);
    let calls = Arc::new(AtomicUsize::new(0));
    let sink = Arc::clone(&calls);
    let sub = store.subscribe(Box::new(move |_: &Arc<i64>| {
      sink.fetch_add(1, Ordering::SeqCst);
    }));
    assert_eq!(store.listener_count(), 1);
    store.dispatch(1);
    drop(sub);
    assert_eq!(store.listener_count(), 0);
    store.dispatch(1);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
  }

  #[test]
  fn unsubscribe_is_idempotent() {
    let store = MemoryStore::new(Counter, 0);
    let _keep = store.subscribe(Box::new(|_: &Arc<i64>| {}));
    let mut sub = store.subscribe(Box::new(|_: &Arc<i64>| {}));
    sub.unsubscribe();
    sub.unsubscribe();
    assert!(!sub.is_active());
    assert_eq!(store.listener_count(), 1);
  }

  #[test]
  fn subscription_outliving_store_is_harmless() {
    let store = MemoryStore::new(Counter, 0);
    let mut sub = store.subscribe(Box::new(|_: &Arc<i64>| {}));
    drop(store);
    sub.unsubscribe();
    assert!(!sub.is_active());
  }

  #[test]
  fn noop_subscription_is_inactive() {
    assert!(!Subscription::noop().is_active());
  }
}
