/* src/client/core/rust/src/lib.rs */

pub mod app;
pub mod document;
pub mod error;
pub mod page;
pub mod pages;
pub mod props;
pub mod router;

pub use app::App;
pub use document::{DocumentOptions, render_document};
pub use error::ClientError;
pub use page::Page;
pub use pages::{About, Cart, NotFound, TECHNOLOGY_GROUPS, Technologies, routes};
pub use props::{OrdersProps, PageEvent, PageProps, RouteParams};
pub use router::{Resolved, Router};
