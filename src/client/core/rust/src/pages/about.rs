/* src/client/core/rust/src/pages/about.rs */

use foodgram_head::HeadDescriptor;
use foodgram_view::{ClassName, Container, Element, Main, Title};

use crate::page::Page;
use crate::props::PageProps;

mod styles {
  use foodgram_view::ClassName;

  pub const TITLE: ClassName = ClassName::new("about_title");
  pub const CONTENT: ClassName = ClassName::new("about_content");
  pub const SUBTITLE: ClassName = ClassName::new("about_subtitle");
  pub const ADDITIONAL_TITLE: ClassName = ClassName::new("about_additionalTitle");
  pub const TEXT: ClassName = ClassName::new("about_text");
  pub const TEXT_ITEM: ClassName = ClassName::new("about_textItem");
  pub const TEXT_LINK: ClassName = ClassName::new("about_textLink");
}

const REPOSITORY_URL: &str = "https://github.com/MorganBlack777/foodgram-st";
const AUTHOR_URL: &str = "https://github.com/MorganBlack777";

const INTRO: &[&str] = &[
  "Foodgram - это веб-приложение и API, созданные в рамках курса \"Бэкенд-разработка\" в РТУ МИРЭА (в партнёрстве с Яндекс Практикумом).",
  "Авторизованные пользователи могут публиковать рецепты, добавлять понравившиеся рецепты в избранное, подписываться на публикации других авторов и формировать список покупок для выбранных рецептов.",
  "Любые посетители сайта могут изучить каталог рецептов.",
  "Чтобы использовать все возможности сайта — нужна регистрация. Заходите и делитесь своими любимыми рецептами!",
];

/// "About the project" page.
#[derive(Debug, Clone, Copy, Default)]
pub struct About;

fn paragraph(class: ClassName) -> Element {
  Element::new("p").class(class)
}

fn link(href: &str, label: &str) -> Element {
  Element::new("a").attr("href", href).class(styles::TEXT_LINK).child(label)
}

impl Page for About {
  fn name(&self) -> &'static str {
    "about"
  }

  fn head(&self, _props: &PageProps<'_>) -> HeadDescriptor {
    HeadDescriptor::new("О проекте")
      .meta("description", "Фудграм - О проекте")
      .property("og:title", "О проекте")
  }

  fn render(&self, _props: &PageProps<'_>) -> Main {
    let intro = Element::new("div")
      .child(Element::new("h2").class(styles::SUBTITLE).child("Что это за сайт?"))
      .child(
        Element::new("div")
          .class(styles::TEXT)
          .children(INTRO.iter().map(|text| paragraph(styles::TEXT_ITEM).child(*text))),
      );

    let links = Element::new("aside")
      .child(Element::new("h2").class(styles::ADDITIONAL_TITLE).child("Ссылки"))
      .child(
        Element::new("div")
          .class(styles::TEXT)
          .child(
            paragraph(styles::TEXT_ITEM)
              .child("Код проекта находится тут - ")
              .child(link(REPOSITORY_URL, "Github")),
          )
          .child(
            paragraph(styles::TEXT_ITEM)
              .child("Автор проекта: ")
              .child(link(AUTHOR_URL, "Ежов Арсений")),
          ),
      );

    Main::new().child(
      Container::new()
        .child(Title::new("Коротко о проекте").class(styles::TITLE))
        .child(Element::new("div").class(styles::CONTENT).child(intro).child(links)),
    )
  }
}
