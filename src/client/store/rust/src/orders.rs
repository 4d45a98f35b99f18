/* src/client/store/rust/src/orders.rs */

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::store::{MemoryStore, Reducer, Store};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(pub u64);

impl fmt::Display for RecipeId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// One recipe on the shopping list. A recipe appears at most once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
  pub id: RecipeId,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
}

impl Order {
  pub fn new(id: u64) -> Self {
    Self { id: RecipeId(id), name: None }
  }

  pub fn named(id: u64, name: impl Into<String>) -> Self {
    Self { id: RecipeId(id), name: Some(name.into()) }
  }
}

pub type Orders = Vec<Order>;

/// Update descriptions accepted by the orders store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrdersAction {
  Replace(Orders),
  Add(Order),
  Remove(RecipeId),
  Clear,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct OrdersReducer;

impl Reducer for OrdersReducer {
  type State = Orders;
  type Action = OrdersAction;

  fn reduce(&self, state: &Orders, action: OrdersAction) -> Orders {
    match action {
      OrdersAction::Replace(orders) => {
        let mut next: Orders = Vec::with_capacity(orders.len());
        for order in orders {
          if !next.iter().any(|o| o.id == order.id) {
            next.push(order);
          }
        }
        next
      }
      OrdersAction::Add(order) => {
        let mut next = state.clone();
        if !next.iter().any(|o| o.id == order.id) {
          next.push(order);
        }
        next
      }
      OrdersAction::Remove(id) => state.iter().filter(|o| o.id != id).cloned().collect(),
      OrdersAction::Clear => Vec::new(),
    }
  }
}

/// Store type-erased to the orders state, as handed to pages.
pub type DynOrdersStore = dyn Store<State = Orders, Action = OrdersAction>;

pub type OrdersStore = MemoryStore<OrdersReducer>;

impl MemoryStore<OrdersReducer> {
  pub fn with_orders(initial: Orders) -> Self {
    debug!(count = initial.len(), "orders store created");
    MemoryStore::new(OrdersReducer, OrdersReducer.reduce(&Vec::new(), OrdersAction::Replace(initial)))
  }
}
