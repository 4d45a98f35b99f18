/* src/client/head/rust/src/descriptor.rs */

use crate::tag::{HeadTag, TagKey, upsert};

/// The head tags one page declares. A title is mandatory, so the only
/// constructor takes it; every other tag is optional and keyed, a later
/// call with the same key overwriting the earlier one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadDescriptor {
  tags: Vec<HeadTag>,
}

impl HeadDescriptor {
  pub fn new(title: impl Into<String>) -> Self {
    Self { tags: vec![HeadTag::title(title)] }
  }

  pub fn meta(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
    upsert(&mut self.tags, HeadTag::meta(name, content));
    self
  }

  pub fn property(mut self, property: impl Into<String>, content: impl Into<String>) -> Self {
    upsert(&mut self.tags, HeadTag::property(property, content));
    self
  }

  pub fn title(&self) -> &str {
    self.tags.first().map_or("", HeadTag::content)
  }

  pub fn tags(&self) -> &[HeadTag] {
    &self.tags
  }

  pub fn get(&self, key: &TagKey) -> Option<&HeadTag> {
    self.tags.iter().find(|t| t.key() == *key)
  }
}
