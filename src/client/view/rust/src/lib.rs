/* src/client/view/rust/src/lib.rs */

pub mod escape;
pub mod layout;
pub mod node;
pub mod render;

pub use escape::{escape_html, escape_into};
pub use layout::{Container, Main, Title};
pub use node::{ClassName, Element, IntoNode, Node};
pub use render::is_void_element;
