/* src/client/core/rust/src/pages/mod.rs */

mod about;
mod cart;
mod not_found;
mod technologies;


pub use about::About;
pub use cart::Cart;
pub use not_found::NotFound;
pub use technologies::{GROUPS as TECHNOLOGY_GROUPS, Technologies};

use crate::router::Router;

/// Route table of the shipped pages.
pub fn routes() -> Router {
  Router::new()
    .route("/", About)
    .route("/about", About)
    .route("/technologies", Technologies)
    .route("/cart", Cart)
    .fallback(NotFound)
}
