/* src/cli/core/src/session.rs */

use std::sync::Arc;

use foodgram_client::{App, routes};
use foodgram_store::{DynOrdersStore, OrdersStore};

use crate::config::FoodgramConfig;

/// Session-wide orders store seeded from `[[orders]]`.
pub fn session_store(config: &FoodgramConfig) -> Arc<OrdersStore> {
  Arc::new(OrdersStore::with_orders(config.orders.clone()))
}

/// A root composition over the shipped route table.
pub fn new_app(config: &FoodgramConfig, store: Arc<DynOrdersStore>) -> App {
  App::new(routes(), store, config.document.clone())
}

#[cfg(test)]
mod tests {
  use foodgram_store::{Order, Store};

  use super::*;

  #[test]
  fn store_starts_with_configured_orders() {
    let config = FoodgramConfig { orders: vec![Order::new(5)], ..FoodgramConfig::default() };
    let store = session_store(&config);
    assert_eq!(*store.get(), vec![Order::new(5)]);
  }

  #[test]
  fn app_uses_document_options() {
    let mut config = FoodgramConfig::default();
    config.document.base_title = "Foodgram".to_string();
    let app = new_app(&config, session_store(&config));
    assert_eq!(app.head().title().as_deref(), Some("Foodgram"));
  }
}
