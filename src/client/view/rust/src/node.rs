/* src/client/view/rust/src/node.rs */

use serde::Serialize;

/// Opaque class-name identifier. The view layer applies it verbatim and
/// attaches no other meaning to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassName(&'static str);

impl ClassName {
  pub const fn new(name: &'static str) -> Self {
    Self(name)
  }

  pub fn as_str(&self) -> &'static str {
    self.0
  }
}

/// One node of a layout tree. Trees are rebuilt on every render pass and
/// carry no identity of their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Node {
  Element(Element),
  Text(String),
  Fragment(Vec<Node>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
  tag: &'static str,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  attrs: Vec<(String, String)>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  children: Vec<Node>,
}

/// Anything that can take part in a render tree. Layout primitives and
/// element builders accept children through this trait only.
pub trait IntoNode {
  fn into_node(self) -> Node;
}

impl Element {
  pub fn new(tag: &'static str) -> Self {
    Self { tag, attrs: Vec::new(), children: Vec::new() }
  }

  pub fn tag(&self) -> &'static str {
    self.tag
  }

  /// Set an attribute, replacing an earlier value with the same name.
  pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
    let name = name.into();
    let value = value.into();
    match self.attrs.iter_mut().find(|(n, _)| *n == name) {
      Some(slot) => slot.1 = value,
      None => self.attrs.push((name, value)),
    }
    self
  }

  /// Append a class name to the `class` attribute.
  pub fn class(mut self, class: ClassName) -> Self {
    match self.attrs.iter_mut().find(|(n, _)| n == "class") {
      Some((_, existing)) if !existing.is_empty() => {
        existing.push(' ');
        existing.push_str(class.as_str());
      }
      Some((_, existing)) => existing.push_str(class.as_str()),
      None => self.attrs.push(("class".to_string(), class.as_str().to_string())),
    }
    self
  }

  pub fn child(mut self, child: impl IntoNode) -> Self {
    push_flattened(&mut self.children, child.into_node());
    self
  }

  pub fn children<I, T>(mut self, children: I) -> Self
  where
    I: IntoIterator<Item = T>,
    T: IntoNode,
  {
    for child in children {
      push_flattened(&mut self.children, child.into_node());
    }
    self
  }

  pub fn get_attr(&self, name: &str) -> Option<&str> {
    self.attrs.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_str())
  }

  pub fn attrs(&self) -> &[(String, String)] {
    &self.attrs
  }

  pub fn child_nodes(&self) -> &[Node] {
    &self.children
  }

  pub fn has_class(&self, class: &str) -> bool {
    self.get_attr("class").is_some_and(|v| v.split_whitespace().any(|c| c == class))
  }

  pub fn text_content(&self) -> String {
    let mut out = String::new();
    for child in &self.children {
      collect_text(child, &mut out);
    }
    out
  }
}

/// Fragments never survive as children: their contents are spliced into the
/// parent, so an empty fragment leaves no trace.
fn push_flattened(children: &mut Vec<Node>, node: Node) {
  match node {
    Node::Fragment(nodes) => {
      for n in nodes {
        push_flattened(children, n);
      }
    }
    other => children.push(other),
  }
}

impl Node {
  pub fn text(text: impl Into<String>) -> Self {
    Node::Text(text.into())
  }

  pub fn empty() -> Self {
    Node::Fragment(Vec::new())
  }

  pub fn as_element(&self) -> Option<&Element> {
    match self {
      Node::Element(el) => Some(el),
      _ => None,
    }
  }

  pub fn children(&self) -> &[Node] {
    match self {
      Node::Element(el) => &el.children,
      Node::Fragment(nodes) => nodes,
      Node::Text(_) => &[],
    }
  }

  /// Pre-order walk over every element in the tree.
  pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a Element)) {
    if let Node::Element(el) = self {
      f(el);
    }
    for child in self.children() {
      child.walk(f);
    }
  }

  pub fn find_all(&self, tag: &str) -> Vec<&Element> {
    let mut found = Vec::new();
    self.walk(&mut |el| {
      if el.tag == tag {
        found.push(el);
      }
    });
    found
  }

  pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
    let mut found = Vec::new();
    self.walk(&mut |el| {
      if el.has_class(class) {
        found.push(el);
      }
    });
    found
  }

  pub fn count(&self, tag: &str) -> usize {
    self.find_all(tag).len()
  }

  pub fn text_content(&self) -> String {
    let mut out = String::new();
    collect_text(self, &mut out);
    out
  }

  pub fn contains_text(&self, needle: &str) -> bool {
    self.text_content().contains(needle)
  }
}

fn collect_text(node: &Node, out: &mut String) {
  match node {
    Node::Text(t) => out.push_str(t),
    Node::Element(el) => {
      for child in &el.children {
        collect_text(child, out);
      }
    }
    Node::Fragment(nodes) => {
      for child in nodes {
        collect_text(child, out);
      }
    }
  }
}

// -- IntoNode impls --

impl IntoNode for Node {
  fn into_node(self) -> Node {
    self
  }
}

impl IntoNode for Element {
  fn into_node(self) -> Node {
    Node::Element(self)
  }
}

impl IntoNode for String {
  fn into_node(self) -> Node {
    Node::Text(self)
  }
}

impl IntoNode for &str {
  fn into_node(self) -> Node {
    Node::Text(self.to_string())
  }
}

impl IntoNode for () {
  fn into_node(self) -> Node {
    Node::empty()
  }
}

impl<T: IntoNode> IntoNode for Option<T> {
  fn into_node(self) -> Node {
    self.map_or_else(Node::empty, IntoNode::into_node)
  }
}

impl<T: IntoNode> IntoNode for Vec<T> {
  fn into_node(self) -> Node {
    Node::Fragment(self.into_iter().map(IntoNode::into_node).collect())
  }
}
