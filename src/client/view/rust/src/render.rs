/* src/client/view/rust/src/render.rs */

use crate::escape::escape_into;
use crate::node::{Element, Node};

const VOID_ELEMENTS: &[&str] =
  &["area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "wbr"];

pub fn is_void_element(tag: &str) -> bool {
  VOID_ELEMENTS.contains(&tag)
}

impl Node {
  pub fn to_html(&self) -> String {
    let mut out = String::new();
    self.write_html(&mut out);
    out
  }

  pub fn write_html(&self, out: &mut String) {
    match self {
      Node::Text(text) => escape_into(out, text),
      Node::Element(el) => el.write_html(out),
      Node::Fragment(nodes) => {
        for node in nodes {
          node.write_html(out);
        }
      }
    }
  }
}

impl Element {
  pub fn to_html(&self) -> String {
    let mut out = String::new();
    self.write_html(&mut out);
    out
  }

  pub fn write_html(&self, out: &mut String) {
    out.push('<');
    out.push_str(self.tag());
    for (name, value) in self.attrs() {
      out.push(' ');
      out.push_str(name);
      out.push_str("=\"");
      escape_into(out, value);
      out.push('"');
    }
    out.push('>');

    // Void elements never get a closing tag; children are dropped
    if is_void_element(self.tag()) {
      return;
    }
    for child in self.child_nodes() {
      child.write_html(out);
    }
    out.push_str("</");
    out.push_str(self.tag());
    out.push('>');
  }
}
