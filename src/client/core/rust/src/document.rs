/* src/client/core/rust/src/document.rs */

use foodgram_view::{Element, escape_html};
use serde::{Deserialize, Serialize};

/// Options of the HTML shell that wraps every rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentOptions {
  pub lang: String,
  /// Id of the element the page tree is mounted into.
  pub root_id: String,
  /// Document title shown when no page is mounted.
  pub base_title: String,
  /// Script id for the serialized session state.
  pub data_id: String,
  pub stylesheets: Vec<String>,
}

impl Default for DocumentOptions {
  fn default() -> Self {
    Self {
      lang: "ru".to_string(),
      root_id: "root".to_string(),
      base_title: "Фудграм".to_string(),
      data_id: "__FOODGRAM_DATA__".to_string(),
      stylesheets: Vec::new(),
    }
  }
}

/// Assemble a full document around already-rendered head and body HTML.
/// `data` is embedded as a JSON script for the client to pick up.
pub fn render_document(
  head_html: &str,
  body_html: &str,
  options: &DocumentOptions,
  data: Option<&serde_json::Value>,
) -> String {
  let mut html = String::with_capacity(head_html.len() + body_html.len() + 256);
  html.push_str("<!DOCTYPE html>");
  html.push_str(&format!(r#"<html lang="{}"><head>"#, escape_html(&options.lang)));
  Element::new("meta").attr("charset", "utf-8").write_html(&mut html);
  // Page head tags sit directly after the charset
  html.push_str(head_html);
  Element::new("meta")
    .attr("name", "viewport")
    .attr("content", "width=device-width, initial-scale=1")
    .write_html(&mut html);
  for href in &options.stylesheets {
    Element::new("link").attr("rel", "stylesheet").attr("href", href.as_str()).write_html(&mut html);
  }
  html.push_str("</head><body>");
  html.push_str(&format!(r#"<div id="{}">"#, escape_html(&options.root_id)));
  html.push_str(body_html);
  html.push_str("</div>");
  if let Some(data) = data {
    html.push_str(&format!(
      r#"<script id="{}" type="application/json">{}</script>"#,
      escape_html(&options.data_id),
      script_safe_json(data),
    ));
  }
  html.push_str("</body></html>");
  html
}

/// Serialize `value` so it can sit inside a `<script>` element: non-ASCII
/// characters in strings become `\uXXXX` and `</` cannot close the tag.
pub fn script_safe_json(value: &serde_json::Value) -> String {
  ascii_escape_json(&value.to_string()).replace("</", "<\\/")
}

/// Escape non-ASCII characters in JSON string values to `\uXXXX` sequences.
///
/// Walks the JSON text tracking whether the current position is inside a
/// JSON string (handling `\"` and `\\` correctly). Chars outside the BMP are
/// encoded as surrogate pairs.
pub fn ascii_escape_json(json: &str) -> String {
  let mut out = String::with_capacity(json.len());
  let mut in_string = false;
  let mut chars = json.chars();

  while let Some(ch) = chars.next() {
    if !in_string {
      if ch == '"' {
        in_string = true;
      }
      out.push(ch);
      continue;
    }
    match ch {
      '\\' => {
        out.push(ch);
        if let Some(next) = chars.next() {
          out.push(next);
        }
      }
      '"' => {
        in_string = false;
        out.push(ch);
      }
      c if c.is_ascii() => out.push(c),
      c => {
        let mut units = [0u16; 2];
        for unit in c.encode_utf16(&mut units) {
          out.push_str(&format!("\\u{unit:04x}"));
        }
      }
    }
  }
  out
}
