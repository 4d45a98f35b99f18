/* src/client/core/rust/src/props.rs */

use std::collections::BTreeMap;
use std::sync::Arc;

use foodgram_store::{DynOrdersStore, Order, Orders, OrdersAction, RecipeId};

/// Named path parameters captured by the router, e.g. `{id}` in `/recipes/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams(BTreeMap<String, String>);

impl RouteParams {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
    self.0.insert(name.into(), value.into());
  }

  pub fn get(&self, name: &str) -> Option<&str> {
    self.0.get(name).map(String::as_str)
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
    self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
  }
}

/// Everything a page may read during one render. Pages have no other access
/// path to session state.
pub struct PageProps<'a> {
  pub params: &'a RouteParams,
  pub orders: Option<OrdersProps<'a>>,
}

impl<'a> PageProps<'a> {
  pub fn new(params: &'a RouteParams) -> Self {
    Self { params, orders: None }
  }

  pub fn with_orders(mut self, store: &'a DynOrdersStore) -> Self {
    self.orders = Some(OrdersProps::new(store));
    self
  }
}

/// The shopping-list conduit: the snapshot taken when the props were built
/// plus the store's single write path. Writes become visible only in the
/// snapshot of the next render.
pub struct OrdersProps<'a> {
  snapshot: Arc<Orders>,
  store: &'a DynOrdersStore,
}

impl<'a> OrdersProps<'a> {
  pub fn new(store: &'a DynOrdersStore) -> Self {
    Self { snapshot: store.get(), store }
  }

  pub fn orders(&self) -> &[Order] {
    &self.snapshot
  }

  pub fn update_orders(&self, action: OrdersAction) {
    self.store.dispatch(action);
  }
}

/// User interactions a mounted page can react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
  RemoveFromCart(RecipeId),
  ClearCart,
}

impl PageEvent {
  /// Value of the `data-event` attribute carried by the triggering element.
  pub fn encode(&self) -> String {
    match self {
      PageEvent::RemoveFromCart(id) => format!("cart-remove:{id}"),
      PageEvent::ClearCart => "cart-clear".to_string(),
    }
  }

  pub fn decode(raw: &str) -> Option<Self> {
    match raw.split_once(':') {
      Some(("cart-remove", id)) => id.parse().ok().map(|id| PageEvent::RemoveFromCart(RecipeId(id))),
      None if raw == "cart-clear" => Some(PageEvent::ClearCart),
      _ => None,
    }
  }
}
