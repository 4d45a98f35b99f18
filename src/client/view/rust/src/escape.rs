/* src/client/view/rust/src/escape.rs */

fn entity(ch: char) -> Option<&'static str> {
  Some(match ch {
    '&' => "&amp;",
    '<' => "&lt;",
    '>' => "&gt;",
    '"' => "&quot;",
    '\'' => "&#x27;",
    _ => return None,
  })
}

/// Append `text` to `out`, escaped for element content and quoted
/// attribute values. Runs without special characters are copied in one go.
pub fn escape_into(out: &mut String, text: &str) {
  let mut start = 0;
  for (i, ch) in text.char_indices() {
    if let Some(rep) = entity(ch) {
      out.push_str(&text[start..i]);
      out.push_str(rep);
      start = i + ch.len_utf8();
    }
  }
  out.push_str(&text[start..]);
}

pub fn escape_html(text: &str) -> String {
  let mut out = String::with_capacity(text.len());
  escape_into(&mut out, text);
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn escape_html_special_chars() {
    assert_eq!(escape_html("<>&\"'"), "&lt;&gt;&amp;&quot;&#x27;");
  }

  #[test]
  fn escape_html_keeps_cyrillic() {
    assert_eq!(escape_html("Фудграм - О проекте"), "Фудграм - О проекте");
  }

  #[test]
  fn escape_into_appends() {
    let mut out = String::from("<p>");
    escape_into(&mut out, "a & b");
    assert_eq!(out, "<p>a &amp; b");
  }

  #[test]
  fn escape_html_empty() {
    assert_eq!(escape_html(""), "");
  }
}
