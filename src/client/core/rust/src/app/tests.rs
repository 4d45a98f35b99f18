/* src/client/core/rust/src/app/tests.rs */

use std::sync::Mutex;
use std::sync::atomic::AtomicUsize;

use foodgram_head::{HeadDescriptor, TagKey};
use foodgram_store::{Listener, Order, OrdersAction, OrdersStore, RecipeId, Store};
use foodgram_view::Main;

use super::*;
use crate::pages::routes;

/// Orders store that counts writes and otherwise behaves like the real one.
struct CountingStore {
  inner: OrdersStore,
  dispatched: AtomicUsize,
}

impl CountingStore {
  fn new(orders: Orders) -> Arc<Self> {
    Arc::new(Self { inner: OrdersStore::with_orders(orders), dispatched: AtomicUsize::new(0) })
  }

  fn dispatched(&self) -> usize {
    self.dispatched.load(Ordering::SeqCst)
  }
}

impl Store for CountingStore {
  type State = Orders;
  type Action = OrdersAction;

  fn get(&self) -> Arc<Orders> {
    self.inner.get()
  }

  fn subscribe(&self, listener: Listener<Orders>) -> Subscription {
    self.inner.subscribe(listener)
  }

  fn dispatch(&self, action: OrdersAction) {
    self.dispatched.fetch_add(1, Ordering::SeqCst);
    self.inner.dispatch(action);
  }
}

/// Orders store where another writer lands right after the next snapshot
/// is read, the way a concurrent request can under `serve`.
struct RacingStore {
  inner: OrdersStore,
  pending: Mutex<Option<OrdersAction>>,
}

impl Store for RacingStore {
  type State = Orders;
  type Action = OrdersAction;

  fn get(&self) -> Arc<Orders> {
    let snapshot = self.inner.get();
    let pending = self.pending.lock().unwrap().take();
    if let Some(action) = pending {
      self.inner.dispatch(action);
    }
    snapshot
  }

  fn subscribe(&self, listener: Listener<Orders>) -> Subscription {
    self.inner.subscribe(listener)
  }

  fn dispatch(&self, action: OrdersAction) {
    self.inner.dispatch(action);
  }
}

fn app_with(store: Arc<DynOrdersStore>) -> App {
  App::new(routes(), store, DocumentOptions::default())
}

fn app() -> App {
  app_with(Arc::new(OrdersStore::with_orders(Vec::new())))
}

fn title(app: &App) -> String {
  app.head().title().unwrap_or_default()
}

fn description(app: &App) -> Option<String> {
  app.head().get(&TagKey::name("description")).map(|t| t.content().to_string())
}

const PAGES: &[(&str, &str)] = &[
  ("/about", "О проекте"),
  ("/technologies", "Используемые технологии"),
  ("/cart", "Список покупок"),
  ("/no/such/page", "Страница не найдена"),
];

#[test]
fn every_page_mounts_one_main_and_its_title() {
  for (path, expected_title) in PAGES {
    let mut app = app();
    let tree = app.navigate(path).unwrap();
    let root = tree.as_element().unwrap();
    assert_eq!(root.tag(), "main", "{path}");
    assert!(root.has_class("main"), "{path}");
    assert_eq!(tree.count("main"), 1, "{path}");
    assert_eq!(app.head().active_scopes(), 1, "{path}");
    assert_eq!(title(&app), *expected_title, "{path}");
  }
}

#[test]
fn about_scenario() {
  let mut app = app();
  let tree = app.navigate("/about").unwrap();
  let heading = tree.find_all("h1");
  assert_eq!(heading.len(), 1);
  assert_eq!(heading[0].text_content(), "Коротко о проекте");
  assert_eq!(title(&app), "О проекте");
  assert_eq!(description(&app).as_deref(), Some("Фудграм - О проекте"));
}

#[test]
fn technologies_scenario() {
  let mut app = app();
  let tree = app.navigate("/technologies").unwrap();
  let groups: Vec<String> = tree.find_all("h2").iter().map(|h| h.text_content()).collect();
  assert_eq!(groups, ["Backend", "Frontend", "Другое"]);
  let lists = tree.find_all("ul");
  assert_eq!(lists.len(), 3);
  for list in lists {
    assert!(list.child_nodes().iter().filter_map(Node::as_element).any(|li| li.tag() == "li"));
  }
  assert_eq!(title(&app), "Используемые технологии");
}

#[test]
fn navigation_does_not_leak_previous_head() {
  let mut app = app();
  app.navigate("/about").unwrap();
  assert_eq!(title(&app), "О проекте");

  app.navigate("/technologies").unwrap();
  assert_eq!(title(&app), "Используемые технологии");
  assert_eq!(description(&app).as_deref(), Some("Фудграм - Технологии"));
  assert_eq!(
    app.head().get(&TagKey::property("og:title")).map(|t| t.content().to_string()).as_deref(),
    Some("Технологии")
  );
  assert_eq!(app.head().active_scopes(), 1);
  assert!(!app.head().render_html().contains("О проекте"));
}

#[test]
fn navigation_into_page_without_description_drops_it() {
  let mut app = app();
  app.navigate("/about").unwrap();
  app.navigate("/missing").unwrap();
  assert_eq!(title(&app), "Страница не найдена");
  assert_eq!(description(&app), None);
}

#[test]
fn unmount_is_idempotent() {
  let mut app = app();
  app.navigate("/about").unwrap();
  assert!(app.unmount());
  let once = app.head().tags();
  assert!(!app.unmount());
  assert_eq!(app.head().tags(), once);
  assert_eq!(title(&app), "Фудграм");
  assert!(!app.is_mounted());
  assert!(app.tree().is_none());
}

#[test]
fn routing_error_keeps_current_page() {
  let store: Arc<DynOrdersStore> = Arc::new(OrdersStore::with_orders(Vec::new()));
  let router = Router::new().route("/about", crate::pages::About);
  let mut app = App::new(router, store, DocumentOptions::default());
  app.navigate("/about").unwrap();

  let err = app.navigate("/nowhere").unwrap_err();
  assert_eq!(err, ClientError::NoRoute("/nowhere".into()));
  assert_eq!(app.current_path(), Some("/about"));
  assert_eq!(title(&app), "О проекте");
}

#[test]
fn pages_render_with_empty_orders_and_never_write() {
  let store = CountingStore::new(Vec::new());
  let mut app = app_with(store.clone());
  for (path, _) in PAGES {
    app.navigate(path).unwrap();
    assert!(!app.refresh().unwrap());
  }
  app.unmount();
  assert_eq!(store.dispatched(), 0);
}

#[test]
fn cart_reflects_store_after_external_update() {
  let store = Arc::new(OrdersStore::with_orders(vec![Order::named(1, "Борщ")]));
  let mut app = app_with(store.clone());
  assert_eq!(app.navigate("/cart").unwrap().count("li"), 1);

  store.dispatch(OrdersAction::Add(Order::named(2, "Плов")));
  // Nothing changes until the next render pass
  assert_eq!(app.tree().unwrap().count("li"), 1);
  assert!(app.refresh().unwrap());
  assert_eq!(app.tree().unwrap().count("li"), 2);
  assert!(!app.refresh().unwrap());
}

#[test]
fn cart_event_goes_through_store() {
  let store = CountingStore::new(vec![Order::new(1), Order::new(2)]);
  let mut app = app_with(store.clone());
  app.navigate("/cart").unwrap();

  assert!(app.emit(&PageEvent::RemoveFromCart(RecipeId(1))).unwrap());
  assert_eq!(store.dispatched(), 1);
  assert_eq!(*store.get(), vec![Order::new(2)]);
  assert_eq!(app.tree().unwrap().count("li"), 1);

  assert!(app.emit(&PageEvent::ClearCart).unwrap());
  assert!(app.tree().unwrap().contains_text("Список покупок пуст"));
}

#[test]
fn events_on_static_pages_are_ignored() {
  let store = CountingStore::new(vec![Order::new(1)]);
  let mut app = app_with(store.clone());
  app.navigate("/about").unwrap();
  assert!(!app.emit(&PageEvent::ClearCart).unwrap());
  assert_eq!(store.dispatched(), 0);
}

#[test]
fn emit_and_refresh_need_a_mounted_page() {
  let mut app = app();
  assert_eq!(app.emit(&PageEvent::ClearCart), Err(ClientError::NotMounted));
  assert_eq!(app.refresh(), Err(ClientError::NotMounted));
}

#[test]
fn original_collection_is_not_mutated() {
  let store = Arc::new(OrdersStore::with_orders(vec![Order::new(1)]));
  let given = store.get();
  let mut app = app_with(store.clone());
  app.navigate("/cart").unwrap();
  store.dispatch(OrdersAction::Replace(vec![Order::new(1), Order::new(2)]));
  assert_eq!(*given, vec![Order::new(1)]);
}

struct Probe;

impl Page for Probe {
  fn name(&self) -> &'static str {
    "probe"
  }

  fn head(&self, props: &PageProps<'_>) -> HeadDescriptor {
    HeadDescriptor::new(if props.orders.is_some() { "with orders" } else { "without orders" })
  }

  fn render(&self, _props: &PageProps<'_>) -> Main {
    Main::new()
  }
}

#[test]
fn conduit_only_for_pages_that_ask() {
  let store: Arc<DynOrdersStore> = Arc::new(OrdersStore::with_orders(Vec::new()));
  let mut app = App::new(Router::new().route("/probe", Probe), store, DocumentOptions::default());
  app.navigate("/probe").unwrap();
  assert_eq!(title(&app), "without orders");
}

#[test]
fn document_contains_head_body_and_state() {
  let store = Arc::new(OrdersStore::with_orders(vec![Order::new(3)]));
  let mut app = app_with(store);
  app.navigate("/technologies").unwrap();
  let html = app.render_document();
  assert!(html.contains("<title>Используемые технологии</title>"));
  assert!(html.contains(r#"<div id="root"><main class="main">"#));
  assert!(html.contains(r#"{"orders":[{"id":3}]}"#));
}

#[test]
fn document_without_page_uses_base_title() {
  let html = app().render_document();
  assert!(html.contains("<title>Фудграм</title>"));
  assert!(html.contains(r#"<div id="root"></div>"#));
}

#[test]
fn dropping_app_releases_store_subscription() {
  let store = Arc::new(OrdersStore::with_orders(Vec::new()));
  let app = app_with(store.clone());
  assert_eq!(store.listener_count(), 1);
  drop(app);
  assert_eq!(store.listener_count(), 0);
}

#[test]
fn fallback_is_reported() {
  let mut app = app();
  app.navigate("/cart").unwrap();
  assert_eq!(app.current_pattern(), Some("/cart"));
  assert!(!app.is_fallback());
  app.navigate("/recipes/5").unwrap();
  assert_eq!(app.current_pattern(), None);
  assert!(app.is_fallback());
  assert_eq!(app.current_page(), Some("not_found"));
}

#[test]
fn write_during_mount_is_picked_up_by_refresh() {
  let store = Arc::new(RacingStore {
    inner: OrdersStore::with_orders(vec![Order::new(1)]),
    pending: Mutex::new(Some(OrdersAction::Add(Order::new(2)))),
  });
  let mut app = app_with(store.clone());
  assert_eq!(app.navigate("/cart").unwrap().count("li"), 1);
  assert_eq!(store.inner.get().len(), 2);

  assert!(app.refresh().unwrap());
  assert_eq!(app.tree().unwrap().count("li"), 2);
}
