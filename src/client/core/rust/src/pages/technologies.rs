/* src/client/core/rust/src/pages/technologies.rs */

use foodgram_head::HeadDescriptor;
use foodgram_view::{Container, Element, Main, Title};

use crate::page::Page;
use crate::props::PageProps;

mod styles {
  use foodgram_view::ClassName;

  pub const TITLE: ClassName = ClassName::new("technologies_title");
  pub const CONTENT: ClassName = ClassName::new("technologies_content");
  pub const SUBTITLE: ClassName = ClassName::new("technologies_subtitle");
  pub const TEXT: ClassName = ClassName::new("technologies_text");
  pub const TEXT_ITEM: ClassName = ClassName::new("technologies_textItem");
}

/// Stack groups in display order.
pub const GROUPS: &[(&str, &[&str])] = &[
  ("Backend", &["Python 3.12", "Django 5.2", "Django REST Framework", "PostgreSQL"]),
  ("Frontend", &["JS", "React"]),
  ("Другое", &["Docker / Podman", "NGINX"]),
];

/// "Technologies used" page.
#[derive(Debug, Clone, Copy, Default)]
pub struct Technologies;

fn group(name: &str, items: &[&str]) -> Element {
  let list = Element::new("ul")
    .class(styles::TEXT_ITEM)
    .children(items.iter().map(|item| Element::new("li").class(styles::TEXT_ITEM).child(*item)));

  Element::new("div")
    .child(Element::new("h2").class(styles::SUBTITLE).child(name))
    .child(Element::new("div").class(styles::TEXT).child(list))
}

impl Page for Technologies {
  fn name(&self) -> &'static str {
    "technologies"
  }

  fn head(&self, _props: &PageProps<'_>) -> HeadDescriptor {
    HeadDescriptor::new("Используемые технологии")
      .meta("description", "Фудграм - Технологии")
      .property("og:title", "Технологии")
  }

  fn render(&self, _props: &PageProps<'_>) -> Main {
    let content = Element::new("div")
      .class(styles::CONTENT)
      .children(GROUPS.iter().map(|(name, items)| group(name, items)));

    Main::new()
      .child(Container::new().child(Title::new("Технологии").class(styles::TITLE)).child(content))
  }
}
