//! The element node: tag, attributes, children, and serialization.

use serde::{Deserialize, Serialize};

use crate::attributes::{
    AttrInput, AttrValue, AttributeList, class_tokens, normalize_classes, normalize_style,
    with_style_property,
};
use crate::escape::html_escape;
use crate::query::Query;
use crate::tags;

/// One entry in an element's child sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Child {
    /// A nested element, serialized via its own [`Element::render`].
    Element(Element),
    /// A raw text run, escaped according to the parent's escaping rule.
    Text(String),
    /// An ignorable placeholder, skipped at render time.
    Placeholder,
}

impl From<Element> for Child {
    fn from(element: Element) -> Self {
        Child::Element(element)
    }
}

impl From<String> for Child {
    fn from(text: String) -> Self {
        Child::Text(text)
    }
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Child::Text(text.to_string())
    }
}

impl<T: Into<Child>> From<Option<T>> for Child {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Child::Placeholder,
        }
    }
}

/// An in-memory HTML element awaiting serialization.
///
/// The self-closing rule and the escaping rule are both resolved once at
/// construction from the fixed tag tables in [`crate::tags`]; escaping can be
/// overridden per element with [`Element::with_escaping`]. Escaping applies to
/// this element's own text children only; it never cascades into nested
/// elements, which always render with their own flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    tag: String,
    #[serde(default, skip_serializing_if = "AttributeList::is_empty")]
    attributes: AttributeList,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<Child>,
    self_closing: bool,
    escape_content: bool,
    #[serde(skip)]
    needs_rebuild: bool,
}

impl Element {
    /// Create an element, deriving the escaping rule from the tag tables:
    /// container tags hold raw markup, everything else escapes its text.
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        let escape_content = !tags::is_container(&tag);
        Self::build(tag, escape_content)
    }

    /// Create an element with an explicit escaping rule, bypassing the
    /// container-tag lookup.
    pub fn with_escaping(tag: impl Into<String>, escape_content: bool) -> Self {
        Self::build(tag.into(), escape_content)
    }

    fn build(tag: String, escape_content: bool) -> Self {
        let self_closing = tags::is_void(&tag);
        Self {
            tag,
            attributes: AttributeList::new(),
            children: Vec::new(),
            self_closing,
            escape_content,
            needs_rebuild: false,
        }
    }

    /// The element's tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Whether this element renders as `<tag />` with no children.
    pub fn is_self_closing(&self) -> bool {
        self.self_closing
    }

    /// Whether raw text children are escaped at render time.
    pub fn escapes_content(&self) -> bool {
        self.escape_content
    }

    /// The current children, placeholders included.
    pub fn children(&self) -> &[Child] {
        &self.children
    }

    // ---- attributes ----------------------------------------------------

    /// Store, overwrite, or remove an attribute.
    ///
    /// `true` stores a bare flag; `false` or `None` removes the attribute;
    /// strings and numbers store their string form. The `class` and `style`
    /// keys are normalized on the way in. Idempotent.
    pub fn set_attribute(&mut self, name: &str, value: impl Into<AttrInput>) {
        match value.into() {
            AttrInput::Remove => {
                self.attributes.remove(name);
            }
            AttrInput::Set(value) => {
                let value = match (name, value) {
                    ("class", AttrValue::Text(v)) => AttrValue::Text(normalize_classes(&v)),
                    ("style", AttrValue::Text(v)) => AttrValue::Text(normalize_style(&v)),
                    (_, v) => v,
                };
                self.attributes.set(name, value);
            }
        }
    }

    /// Look up an attribute value.
    pub fn get_attribute(&self, name: &str) -> Option<&AttrValue> {
        self.attributes.get(name)
    }

    /// Remove an attribute, returning the old value if present.
    pub fn remove_attribute(&mut self, name: &str) -> Option<AttrValue> {
        self.attributes.remove(name)
    }

    /// Whether an attribute is stored.
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains(name)
    }

    /// The attribute map, in insertion order.
    pub fn attributes(&self) -> &AttributeList {
        &self.attributes
    }

    // ---- classes and style ---------------------------------------------

    /// Add a class token. Adding an already-present token is a no-op.
    pub fn add_class(&mut self, class: &str) {
        let mut tokens = self.class_list();
        for token in class.split_whitespace() {
            if !tokens.iter().any(|t| t == token) {
                tokens.push(token.to_string());
            }
        }
        self.store_classes(tokens);
    }

    /// Remove a class token.
    pub fn remove_class(&mut self, class: &str) {
        let tokens: Vec<String> = self
            .class_list()
            .into_iter()
            .filter(|t| t != class)
            .collect();
        self.store_classes(tokens);
    }

    /// Remove every class token matching a predicate, e.g. all tokens with a
    /// given prefix.
    pub fn remove_class_if(&mut self, predicate: impl Fn(&str) -> bool) {
        let tokens: Vec<String> = self
            .class_list()
            .into_iter()
            .filter(|t| !predicate(t))
            .collect();
        self.store_classes(tokens);
    }

    /// Add the class when `condition` is true, remove it otherwise.
    pub fn toggle_class(&mut self, class: &str, condition: bool) {
        if condition {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }

    /// Whether a class token is present.
    pub fn has_class(&self, class: &str) -> bool {
        self.class_list().iter().any(|t| t == class)
    }

    /// The class tokens in insertion order.
    pub fn class_list(&self) -> Vec<String> {
        self.attributes
            .get("class")
            .and_then(AttrValue::as_text)
            .map(class_tokens)
            .unwrap_or_default()
    }

    fn store_classes(&mut self, tokens: Vec<String>) {
        if tokens.is_empty() {
            self.attributes.remove("class");
        } else {
            self.attributes
                .set("class", AttrValue::Text(tokens.join(" ")));
        }
    }

    /// Set one `style` property, replacing any existing declaration for it.
    /// An empty value drops the property.
    pub fn set_style(&mut self, property: &str, value: &str) {
        let existing = self
            .attributes
            .get("style")
            .and_then(AttrValue::as_text)
            .unwrap_or_default()
            .to_string();
        let style = with_style_property(&existing, property, value);
        if style.is_empty() {
            self.attributes.remove("style");
        } else {
            self.attributes.set("style", AttrValue::Text(style));
        }
    }

    // ---- children ------------------------------------------------------

    /// Append a child. Silently ignored on self-closing elements.
    pub fn add_child(&mut self, child: impl Into<Child>) {
        if self.self_closing {
            return;
        }
        self.children.push(child.into());
    }

    /// Prepend a child. Silently ignored on self-closing elements.
    pub fn prepend_child(&mut self, child: impl Into<Child>) {
        if self.self_closing {
            return;
        }
        self.children.insert(0, child.into());
    }

    /// Replace all children with a single item.
    pub fn set_content(&mut self, content: impl Into<Child>) {
        self.children.clear();
        self.add_child(content);
    }

    /// Replace all children with a sequence.
    pub fn set_children(&mut self, children: impl IntoIterator<Item = Child>) {
        self.children.clear();
        if self.self_closing {
            return;
        }
        self.children.extend(children);
    }

    /// Remove all children.
    pub fn clear_children(&mut self) {
        self.children.clear();
    }

    // ---- chainable builder forms ---------------------------------------

    /// Chainable [`Element::set_attribute`].
    pub fn attr(mut self, name: &str, value: impl Into<AttrInput>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Chainable [`Element::add_class`].
    pub fn class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    /// Chainable [`Element::set_style`].
    pub fn style(mut self, property: &str, value: &str) -> Self {
        self.set_style(property, value);
        self
    }

    /// Chainable [`Element::add_child`].
    pub fn child(mut self, child: impl Into<Child>) -> Self {
        self.add_child(child);
        self
    }

    /// Chainable text append.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.add_child(text.into());
        self
    }

    // ---- rebuild flag ---------------------------------------------------

    /// Mark this element dirty so the component layer regenerates its
    /// children before the next render.
    pub fn mark_for_rebuild(&mut self) {
        self.needs_rebuild = true;
    }

    /// Whether the element is marked dirty.
    pub fn needs_rebuild(&self) -> bool {
        self.needs_rebuild
    }

    /// Clear the dirty flag.
    pub fn clear_rebuild(&mut self) {
        self.needs_rebuild = false;
    }

    // ---- serialization ---------------------------------------------------

    /// Serialize the element tree to an HTML string.
    ///
    /// Pure given current state: two calls without intervening mutation yield
    /// identical output. The component layer runs its rebuild hook before
    /// delegating here.
    pub fn render(&self) -> String {
        tracing::trace!(tag = %self.tag, "rendering element tree");
        let mut out = String::new();
        self.render_to(&mut out);
        out
    }

    fn render_to(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in self.attributes.iter() {
            out.push(' ');
            out.push_str(name);
            if let Some(rendered) = value.as_rendered() {
                out.push_str("=\"");
                out.push_str(&html_escape(&rendered));
                out.push('"');
            }
        }

        if self.self_closing {
            out.push_str(" />");
            return;
        }

        out.push('>');
        for child in &self.children {
            match child {
                Child::Element(element) => element.render_to(out),
                Child::Text(text) => {
                    if self.escape_content {
                        out.push_str(&html_escape(text));
                    } else {
                        out.push_str(text);
                    }
                }
                Child::Placeholder => {}
            }
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }

    // ---- queries ---------------------------------------------------------

    /// Collect descendant elements matching `query`, in document order.
    ///
    /// With `recursive` false only direct element children are considered.
    pub fn find_descendants(&self, query: &Query, recursive: bool) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_descendants(query, recursive, &mut found);
        found
    }

    fn collect_descendants<'a>(
        &'a self,
        query: &Query,
        recursive: bool,
        found: &mut Vec<&'a Element>,
    ) {
        for child in &self.children {
            if let Child::Element(element) = child {
                if query.matches(element) {
                    found.push(element);
                }
                if recursive {
                    element.collect_descendants(query, recursive, found);
                }
            }
        }
    }
}

#[cfg(test)]
// Tests are allowed to use unwrap/expect freely.
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_container_default_is_raw() {
        let list = Element::new("ul").text("a").text("b");
        assert_eq!(list.render(), "<ul>ab</ul>");
    }

    #[test]
    fn test_text_tag_default_escapes() {
        let mut paragraph = Element::new("p");
        paragraph.set_content("<b>x</b>");
        assert_eq!(paragraph.render(), "<p>&lt;b&gt;x&lt;/b&gt;</p>");
    }

    #[test]
    fn test_explicit_escaping_overrides_table() {
        let raw = Element::with_escaping("p", false).text("<b>x</b>");
        assert_eq!(raw.render(), "<p><b>x</b></p>");

        let escaped = Element::with_escaping("div", true).text("<b>x</b>");
        assert_eq!(escaped.render(), "<div>&lt;b&gt;x&lt;/b&gt;</div>");
    }

    #[test]
    fn test_escaping_never_cascades() {
        let child = Element::with_escaping("span", false).text("<i>raw</i>");
        let parent = Element::with_escaping("div", true)
            .text("<escaped>")
            .child(child);
        assert_eq!(
            parent.render(),
            "<div>&lt;escaped&gt;<span><i>raw</i></span></div>"
        );
    }

    #[test]
    fn test_self_closing_ignores_children() {
        let mut image = Element::new("img");
        image.set_attribute("src", "a.png");
        image.add_child("ignored");
        image.prepend_child(Element::new("div"));
        assert_eq!(image.render(), r#"<img src="a.png" />"#);
        assert!(image.children().is_empty());
    }

    #[test]
    fn test_attribute_round_trip() {
        let mut el = Element::new("div");
        el.set_attribute("id", "main");
        assert_eq!(el.get_attribute("id").unwrap().as_text(), Some("main"));

        el.set_attribute("id", "other");
        assert_eq!(el.get_attribute("id").unwrap().as_text(), Some("other"));

        el.remove_attribute("id");
        assert!(el.get_attribute("id").is_none());
    }

    #[test]
    fn test_flag_attribute_renders_bare() {
        let input = Element::new("input").attr("type", "text").attr("required", true);
        assert_eq!(input.render(), r#"<input type="text" required />"#);
    }

    #[test]
    fn test_false_removes_attribute() {
        let mut el = Element::new("div");
        el.set_attribute("hidden", true);
        el.set_attribute("hidden", false);
        assert!(!el.has_attribute("hidden"));
    }

    #[test]
    fn test_add_class_idempotent() {
        let mut el = Element::new("div");
        el.add_class("card");
        el.add_class("card");
        el.add_class("wide");
        assert_eq!(el.class_list(), vec!["card", "wide"]);
        assert_eq!(el.render(), r#"<div class="card wide"></div>"#);
    }

    #[test]
    fn test_set_attribute_normalizes_class() {
        let mut el = Element::new("div");
        el.set_attribute("class", "  a  b a ");
        assert_eq!(el.get_attribute("class").unwrap().as_text(), Some("a b"));
    }

    #[test]
    fn test_remove_class_by_predicate() {
        let mut el = Element::new("div");
        el.add_class("card card--wide card--flat plain");
        el.remove_class_if(|token| token.starts_with("card--"));
        assert_eq!(el.class_list(), vec!["card", "plain"]);
    }

    #[test]
    fn test_toggle_class() {
        let mut el = Element::new("div");
        el.toggle_class("open", true);
        assert!(el.has_class("open"));
        el.toggle_class("open", false);
        assert!(!el.has_class("open"));
        assert!(!el.has_attribute("class"));
    }

    #[test]
    fn test_set_style() {
        let mut el = Element::new("div");
        el.set_style("color", "red");
        el.set_style("width", "10px");
        el.set_style("color", "blue");
        assert_eq!(
            el.get_attribute("style").unwrap().as_text(),
            Some("color: blue; width: 10px")
        );
        el.set_style("color", "");
        el.set_style("width", "");
        assert!(!el.has_attribute("style"));
    }

    #[test]
    fn test_placeholder_children_skipped() {
        let el = Element::new("div")
            .child(Option::<Element>::None)
            .text("a")
            .child(Option::<&str>::None);
        assert_eq!(el.children().len(), 3);
        assert_eq!(el.render(), "<div>a</div>");
    }

    #[test]
    fn test_set_content_replaces_children() {
        let mut el = Element::new("div").text("a").text("b");
        el.set_content(Element::new("span").text("only"));
        assert_eq!(el.render(), "<div><span>only</span></div>");
    }

    #[test]
    fn test_prepend_child() {
        let mut el = Element::new("ul");
        el.add_child(Element::new("li").text("second"));
        el.prepend_child(Element::new("li").text("first"));
        assert_eq!(el.render(), "<ul><li>first</li><li>second</li></ul>");
    }

    #[test]
    fn test_render_is_stable() {
        let el = Element::new("div").class("a").text("x");
        assert_eq!(el.render(), el.render());
    }

    #[test]
    fn test_attribute_value_escaped() {
        let el = Element::new("div").attr("title", r#"say "hi" & <go>"#);
        assert_eq!(
            el.render(),
            r#"<div title="say &quot;hi&quot; &amp; &lt;go&gt;"></div>"#
        );
    }

    #[test]
    fn test_find_descendants_recursive_document_order() {
        let tree = Element::new("div").child(
            Element::new("ul")
                .child(Element::new("li").class("item").text("a"))
                .child(Element::new("li").class("item").child(
                    Element::new("ul").child(Element::new("li").class("item").text("b")),
                )),
        );

        let query = Query::new().tag("li").class("item");
        let found = tree.find_descendants(&query, true);
        assert_eq!(found.len(), 3);

        let shallow = tree.find_descendants(&query, false);
        assert!(shallow.is_empty());
    }

    #[test]
    fn test_find_descendants_by_attribute() {
        let tree = Element::new("form")
            .child(Element::new("input").attr("name", "a"))
            .child(Element::new("input").attr("name", "b"));

        let query = Query::new().attr("name", "b");
        let found = tree.find_descendants(&query, true);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].get_attribute("name").unwrap().as_text(), Some("b"));
    }

    #[test]
    fn test_json_round_trip() {
        let el = Element::new("div")
            .class("card")
            .attr("data-open", true)
            .text("hello")
            .child(Element::new("img").attr("src", "a.png"));

        let json = serde_json::to_string(&el).unwrap();
        let parsed: Element = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.render(), el.render());
    }
}
