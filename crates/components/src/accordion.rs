//! Accordion widget: stacked collapsible sections.

use serde::{Deserialize, Serialize};
use telaio_markup::Element;
use uuid::Uuid;

use crate::component::{Component, wrapper};

/// One accordion section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccordionSection {
    /// Section header text.
    pub title: String,
    /// Panel content.
    pub content: Element,
    /// Whether the panel starts expanded.
    #[serde(default)]
    pub open: bool,
}

/// A stack of collapsible sections.
///
/// With `allow_multiple` off (the default), opening one section closes the
/// others, so at most one panel is expanded at a time.
#[derive(Debug, Clone)]
pub struct Accordion {
    element: Element,
    id_prefix: String,
    sections: Vec<AccordionSection>,
    allow_multiple: bool,
}

impl Accordion {
    /// Create an empty accordion.
    pub fn new() -> Self {
        Self {
            element: wrapper("accordion"),
            id_prefix: format!("accordion-{}", Uuid::now_v7()),
            sections: Vec::new(),
            allow_multiple: false,
        }
    }

    /// Append a collapsed section.
    pub fn section(mut self, title: impl Into<String>, content: Element) -> Self {
        self.sections.push(AccordionSection {
            title: title.into(),
            content,
            open: false,
        });
        self.element.mark_for_rebuild();
        self
    }

    /// Allow several sections to be open at once.
    pub fn allow_multiple(mut self) -> Self {
        self.allow_multiple = true;
        self.element.mark_for_rebuild();
        self
    }

    /// Open a section by index; without `allow_multiple` every other section
    /// closes. Out-of-range indexes are ignored.
    pub fn open_section(&mut self, index: usize) {
        if index >= self.sections.len() {
            return;
        }
        if !self.allow_multiple {
            for section in &mut self.sections {
                section.open = false;
            }
        }
        self.sections[index].open = true;
        self.element.mark_for_rebuild();
    }

    /// Close a section by index. Out-of-range indexes are ignored.
    pub fn close_section(&mut self, index: usize) {
        if let Some(section) = self.sections.get_mut(index) {
            section.open = false;
            self.element.mark_for_rebuild();
        }
    }

    /// The current sections.
    pub fn sections(&self) -> &[AccordionSection] {
        &self.sections
    }
}

impl Default for Accordion {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Accordion {
    fn kind(&self) -> &'static str {
        "accordion"
    }

    fn element(&self) -> &Element {
        &self.element
    }

    fn element_mut(&mut self) -> &mut Element {
        &mut self.element
    }

    fn rebuild(&mut self) {
        let mut children = Vec::new();

        for (index, section) in self.sections.iter().enumerate() {
            let header_id = format!("{}-header-{index}", self.id_prefix);
            let panel_id = format!("{}-panel-{index}", self.id_prefix);

            let toggle = Element::with_escaping("button", true)
                .class("accordion__toggle")
                .attr("type", "button")
                .attr("id", header_id.as_str())
                .attr("aria-controls", panel_id.as_str())
                .attr("aria-expanded", if section.open { "true" } else { "false" })
                .text(section.title.clone());

            let header = Element::new("h3").class("accordion__header").child(toggle);

            let mut panel = Element::new("div")
                .class("accordion__panel")
                .attr("role", "region")
                .attr("id", panel_id.as_str())
                .attr("aria-labelledby", header_id.as_str())
                .child(section.content.clone());
            panel.set_attribute("hidden", !section.open);

            children.push(
                Element::new("div")
                    .class("accordion__section")
                    .child(header)
                    .child(panel)
                    .into(),
            );
        }

        self.element.set_children(children);
    }
}

#[cfg(test)]
// Tests are allowed to use unwrap/expect freely.
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn three_sections() -> Accordion {
        Accordion::new()
            .section("One", Element::new("p").text("1"))
            .section("Two", Element::new("p").text("2"))
            .section("Three", Element::new("p").text("3"))
    }

    #[test]
    fn test_all_sections_closed_by_default() {
        let mut accordion = three_sections();
        let html = accordion.render();

        assert_eq!(html.matches(r#"aria-expanded="false""#).count(), 3);
        assert_eq!(html.matches(" hidden").count(), 3);
        assert_eq!(html.matches("accordion__section").count(), 3);
    }

    #[test]
    fn test_single_open_mode() {
        let mut accordion = three_sections();
        accordion.open_section(0);
        accordion.open_section(2);
        let html = accordion.render();

        // Opening section 2 closed section 0.
        assert_eq!(html.matches(r#"aria-expanded="true""#).count(), 1);
        assert_eq!(html.matches(" hidden").count(), 2);
    }

    #[test]
    fn test_allow_multiple() {
        let mut accordion = three_sections().allow_multiple();
        accordion.open_section(0);
        accordion.open_section(2);
        let html = accordion.render();

        assert_eq!(html.matches(r#"aria-expanded="true""#).count(), 2);
    }

    #[test]
    fn test_close_section() {
        let mut accordion = three_sections();
        accordion.open_section(1);
        accordion.close_section(1);
        let html = accordion.render();
        assert_eq!(html.matches(r#"aria-expanded="true""#).count(), 0);
    }

    #[test]
    fn test_out_of_range_open_ignored() {
        let mut accordion = three_sections();
        accordion.open_section(10);
        let html = accordion.render();
        assert_eq!(html.matches(r#"aria-expanded="true""#).count(), 0);
    }

    #[test]
    fn test_aria_wiring() {
        let mut accordion = three_sections();
        let html = accordion.render();

        assert_eq!(html.matches(r#"role="region""#).count(), 3);
        assert_eq!(html.matches("aria-controls").count(), 3);
        assert_eq!(html.matches("aria-labelledby").count(), 3);
    }

    #[test]
    fn test_base_class_once_after_state_changes() {
        let mut accordion = three_sections();
        for index in 0..3 {
            accordion.open_section(index);
            accordion.render();
        }
        let html = accordion.render();
        assert!(html.starts_with(r#"<div class="accordion">"#));
        assert_eq!(html.matches(r#"class="accordion""#).count(), 1);
    }
}
