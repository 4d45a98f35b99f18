/* src/client/head/rust/src/lib.rs */

pub mod descriptor;
pub mod manager;
pub mod tag;

pub use descriptor::HeadDescriptor;
pub use manager::{HeadManager, HeadScope};
pub use tag::{HeadTag, TagKey};
