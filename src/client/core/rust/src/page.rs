/* src/client/core/rust/src/page.rs */

use foodgram_head::HeadDescriptor;
use foodgram_view::Main;

use crate::props::{PageEvent, PageProps};

/// A route-bound page. Rendering is a pure function of the props; the
/// return type pins every page to a single `Main` root.
pub trait Page: Send + Sync {
  /// Stable identifier used in logs and route listings.
  fn name(&self) -> &'static str;

  /// Head tags applied while the page is mounted.
  fn head(&self, props: &PageProps<'_>) -> HeadDescriptor;

  fn render(&self, props: &PageProps<'_>) -> Main;

  /// Whether the page takes the orders conduit. Pages that return `false`
  /// receive `props.orders == None`.
  fn uses_orders(&self) -> bool {
    false
  }

  /// React to an interaction. Returns `true` if the event was handled.
  fn handle(&self, event: &PageEvent, props: &PageProps<'_>) -> bool {
    let _ = (event, props);
    false
  }
}
