/* src/client/core/rust/src/pages/not_found.rs */

use foodgram_head::HeadDescriptor;
use foodgram_view::{Container, Element, Main, Title};

use crate::page::Page;
use crate::props::PageProps;

mod styles {
  use foodgram_view::ClassName;

  pub const TITLE: ClassName = ClassName::new("notFound_title");
  pub const TEXT: ClassName = ClassName::new("notFound_text");
  pub const LINK: ClassName = ClassName::new("notFound_link");
}

/// Fallback for paths no route matches.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotFound;

impl Page for NotFound {
  fn name(&self) -> &'static str {
    "not_found"
  }

  fn head(&self, _props: &PageProps<'_>) -> HeadDescriptor {
    HeadDescriptor::new("Страница не найдена").meta("robots", "noindex")
  }

  fn render(&self, _props: &PageProps<'_>) -> Main {
    Main::new().child(
      Container::new()
        .child(Title::new("404").class(styles::TITLE))
        .child(Element::new("p").class(styles::TEXT).child("Страница не найдена"))
        .child(Element::new("a").attr("href", "/").class(styles::LINK).child("На главную")),
    )
  }
}
