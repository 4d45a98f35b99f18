/* src/client/core/rust/src/pages/cart.rs */

use foodgram_head::HeadDescriptor;
use foodgram_store::{Order, OrdersAction};
use foodgram_view::{Container, Element, IntoNode, Main, Node, Title};

use crate::page::Page;
use crate::props::{PageEvent, PageProps};

mod styles {
  use foodgram_view::ClassName;

  pub const TITLE: ClassName = ClassName::new("cart_title");
  pub const LIST: ClassName = ClassName::new("cart_list");
  pub const ITEM: ClassName = ClassName::new("cart_item");
  pub const EMPTY: ClassName = ClassName::new("cart_empty");
  pub const BUTTON: ClassName = ClassName::new("cart_button");
}

/// Shopping list: one entry per recipe the user has added.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cart;

fn event_button(event: &PageEvent, label: &str) -> Element {
  Element::new("button")
    .attr("type", "button")
    .attr("data-event", event.encode())
    .class(styles::BUTTON)
    .child(label)
}

fn item(order: &Order) -> Element {
  let label = match &order.name {
    Some(name) => name.clone(),
    None => format!("Рецепт #{}", order.id),
  };
  Element::new("li")
    .class(styles::ITEM)
    .child(Element::new("span").child(label))
    .child(event_button(&PageEvent::RemoveFromCart(order.id), "Удалить"))
}

impl Page for Cart {
  fn name(&self) -> &'static str {
    "cart"
  }

  fn head(&self, _props: &PageProps<'_>) -> HeadDescriptor {
    HeadDescriptor::new("Список покупок")
      .meta("description", "Фудграм - Список покупок")
      .property("og:title", "Список покупок")
  }

  fn render(&self, props: &PageProps<'_>) -> Main {
    let orders = props.orders.as_ref().map(|o| o.orders()).unwrap_or_default();

    let body = if orders.is_empty() {
      Element::new("p").class(styles::EMPTY).child("Список покупок пуст").into_node()
    } else {
      Node::Fragment(vec![
        Element::new("ul").class(styles::LIST).children(orders.iter().map(item)).into_node(),
        event_button(&PageEvent::ClearCart, "Очистить список").into_node(),
      ])
    };

    Main::new().child(
      Container::new().child(Title::new("Список покупок").class(styles::TITLE)).child(body),
    )
  }

  fn uses_orders(&self) -> bool {
    true
  }

  fn handle(&self, event: &PageEvent, props: &PageProps<'_>) -> bool {
    let Some(conduit) = props.orders.as_ref() else {
      return false;
    };
    match event {
      PageEvent::RemoveFromCart(id) => conduit.update_orders(OrdersAction::Remove(*id)),
      PageEvent::ClearCart => conduit.update_orders(OrdersAction::Clear),
    }
    true
  }
}
