//! Card widget: header, body, optional image and footer.

use telaio_markup::{Child, Element};

use crate::component::{Component, wrapper};

/// A content card.
///
/// ```
/// use telaio_components::{Card, Component};
///
/// let mut card = Card::new().title("Hello").body_text("Welcome back.");
/// let html = card.render();
/// assert!(html.contains("card__title"));
/// ```
#[derive(Debug, Clone)]
pub struct Card {
    element: Element,
    title: Option<String>,
    image: Option<(String, String)>,
    body: Vec<Child>,
    footer: Vec<Child>,
}

impl Card {
    /// Create an empty card.
    pub fn new() -> Self {
        Self {
            element: wrapper("card"),
            title: None,
            image: None,
            body: Vec::new(),
            footer: Vec::new(),
        }
    }

    /// Set the card title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self.element.mark_for_rebuild();
        self
    }

    /// Set a cover image (source URL and alt text).
    pub fn image(mut self, src: impl Into<String>, alt: impl Into<String>) -> Self {
        self.image = Some((src.into(), alt.into()));
        self.element.mark_for_rebuild();
        self
    }

    /// Append a child to the card body.
    pub fn body(mut self, child: impl Into<Child>) -> Self {
        self.body.push(child.into());
        self.element.mark_for_rebuild();
        self
    }

    /// Append escaped text to the card body.
    pub fn body_text(self, text: impl Into<String>) -> Self {
        self.body(Element::new("p").text(text.into()))
    }

    /// Append a child to the card footer.
    pub fn footer(mut self, child: impl Into<Child>) -> Self {
        self.footer.push(child.into());
        self.element.mark_for_rebuild();
        self
    }
}

impl Default for Card {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Card {
    fn kind(&self) -> &'static str {
        "card"
    }

    fn element(&self) -> &Element {
        &self.element
    }

    fn element_mut(&mut self) -> &mut Element {
        &mut self.element
    }

    fn rebuild(&mut self) {
        let mut children = Vec::new();

        if let Some((src, alt)) = &self.image {
            children.push(
                Element::new("img")
                    .class("card__image")
                    .attr("src", src.as_str())
                    .attr("alt", alt.as_str())
                    .into(),
            );
        }

        if let Some(title) = &self.title {
            children.push(
                Element::new("header")
                    .class("card__header")
                    .child(Element::new("h3").class("card__title").text(title.clone()))
                    .into(),
            );
        }

        if !self.body.is_empty() {
            let mut body = Element::new("div").class("card__body");
            for child in &self.body {
                body.add_child(child.clone());
            }
            children.push(body.into());
        }

        if !self.footer.is_empty() {
            let mut footer = Element::new("footer").class("card__footer");
            for child in &self.footer {
                footer.add_child(child.clone());
            }
            children.push(footer.into());
        }

        self.element.set_children(children);
    }
}

#[cfg(test)]
// Tests are allowed to use unwrap/expect freely.
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_full_card() {
        let mut card = Card::new()
            .image("cover.png", "Cover")
            .title("Greetings")
            .body_text("Body copy")
            .footer(Element::new("a").attr("href", "/more").text("Read more"));
        let html = card.render();

        assert!(html.starts_with(r#"<div class="card">"#));
        assert!(html.contains(r#"<img class="card__image" src="cover.png" alt="Cover" />"#));
        assert!(html.contains(r#"<h3 class="card__title">Greetings</h3>"#));
        assert!(html.contains("<p>Body copy</p>"));
        assert!(html.contains(r#"<a href="/more">Read more</a>"#));
    }

    #[test]
    fn test_empty_card_is_bare_wrapper() {
        let mut card = Card::new();
        assert_eq!(card.render(), r#"<div class="card"></div>"#);
    }

    #[test]
    fn test_title_escaped() {
        let mut card = Card::new().title("<b>t</b>");
        assert!(card.render().contains("&lt;b&gt;t&lt;/b&gt;"));
    }

    #[test]
    fn test_sections_render_in_order() {
        let mut card = Card::new().title("T").body_text("B").footer("F");
        let html = card.render();
        let header = html.find("card__header").unwrap();
        let body = html.find("card__body").unwrap();
        let footer = html.find("card__footer").unwrap();
        assert!(header < body && body < footer);
    }
}
