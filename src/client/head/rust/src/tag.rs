/* src/client/head/rust/src/tag.rs */

use foodgram_view::Element;
use serde::Serialize;

/// A single document-head entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum HeadTag {
  Title { text: String },
  Meta { name: String, content: String },
  Property { property: String, content: String },
}

/// Identity of a head entry: two tags with the same key occupy the same slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TagKey {
  Title,
  Name(String),
  Property(String),
}

impl HeadTag {
  pub fn title(text: impl Into<String>) -> Self {
    HeadTag::Title { text: text.into() }
  }

  pub fn meta(name: impl Into<String>, content: impl Into<String>) -> Self {
    HeadTag::Meta { name: name.into(), content: content.into() }
  }

  pub fn property(property: impl Into<String>, content: impl Into<String>) -> Self {
    HeadTag::Property { property: property.into(), content: content.into() }
  }

  pub fn key(&self) -> TagKey {
    match self {
      HeadTag::Title { .. } => TagKey::Title,
      HeadTag::Meta { name, .. } => TagKey::Name(name.clone()),
      HeadTag::Property { property, .. } => TagKey::Property(property.clone()),
    }
  }

  /// Title text or meta `content`.
  pub fn content(&self) -> &str {
    match self {
      HeadTag::Title { text } => text,
      HeadTag::Meta { content, .. } | HeadTag::Property { content, .. } => content,
    }
  }

  pub fn to_element(&self) -> Element {
    match self {
      HeadTag::Title { text } => Element::new("title").child(text.as_str()),
      HeadTag::Meta { name, content } => {
        Element::new("meta").attr("name", name.as_str()).attr("content", content.as_str())
      }
      HeadTag::Property { property, content } => {
        Element::new("meta").attr("property", property.as_str()).attr("content", content.as_str())
      }
    }
  }

  pub fn to_html(&self) -> String {
    self.to_element().to_html()
  }
}

impl TagKey {
  pub fn name(name: impl Into<String>) -> Self {
    TagKey::Name(name.into())
  }

  pub fn property(property: impl Into<String>) -> Self {
    TagKey::Property(property.into())
  }
}

/// Insert `tag`, replacing an entry with the same key in place.
pub(crate) fn upsert(tags: &mut Vec<HeadTag>, tag: HeadTag) {
  let key = tag.key();
  match tags.iter_mut().find(|t| t.key() == key) {
    Some(slot) => *slot = tag,
    None => tags.push(tag),
  }
}
