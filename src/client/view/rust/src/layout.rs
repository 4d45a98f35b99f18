/* src/client/view/rust/src/layout.rs */

// Stateless page chrome. Every primitive wraps whatever it is given and adds
// nothing but its own element and class hook.

use crate::node::{ClassName, Element, IntoNode, Node};

pub const MAIN_CLASS: ClassName = ClassName::new("main");
pub const CONTAINER_CLASS: ClassName = ClassName::new("container");
pub const TITLE_CLASS: ClassName = ClassName::new("title");

/// Outer page shell: `<main class="main">`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Main {
  content: Vec<Node>,
}

impl Main {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn child(mut self, child: impl IntoNode) -> Self {
    self.content.push(child.into_node());
    self
  }

  pub fn content(&self) -> &[Node] {
    &self.content
  }
}

impl IntoNode for Main {
  fn into_node(self) -> Node {
    Element::new("main").class(MAIN_CLASS).children(self.content).into_node()
  }
}

/// Width-constrained content block: `<div class="container">`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Container {
  content: Vec<Node>,
}

impl Container {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn child(mut self, child: impl IntoNode) -> Self {
    self.content.push(child.into_node());
    self
  }

  pub fn content(&self) -> &[Node] {
    &self.content
  }
}

impl IntoNode for Container {
  fn into_node(self) -> Node {
    Element::new("div").class(CONTAINER_CLASS).children(self.content).into_node()
  }
}

/// Page heading. The optional class is the page's own styling hook and is
/// appended after the shared `title` class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title {
  text: String,
  class: Option<ClassName>,
}

impl Title {
  pub fn new(text: impl Into<String>) -> Self {
    Self { text: text.into(), class: None }
  }

  pub fn class(mut self, class: ClassName) -> Self {
    self.class = Some(class);
    self
  }

  pub fn text(&self) -> &str {
    &self.text
  }
}

impl IntoNode for Title {
  fn into_node(self) -> Node {
    let mut heading = Element::new("h1").class(TITLE_CLASS);
    if let Some(class) = self.class {
      heading = heading.class(class);
    }
    heading.child(self.text).into_node()
  }
}
