//! Tabbed panel widget.

use serde::{Deserialize, Serialize};
use telaio_markup::Element;
use uuid::Uuid;

use crate::component::{Component, wrapper};

/// One tab: a label and its panel content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabPane {
    /// Tab button label.
    pub label: String,
    /// Panel content.
    pub content: Element,
}

/// A tablist with panels, one pane active at a time.
#[derive(Debug, Clone)]
pub struct Tabs {
    element: Element,
    id_prefix: String,
    panes: Vec<TabPane>,
    active: usize,
}

impl Tabs {
    /// Create an empty tab set.
    pub fn new() -> Self {
        Self {
            element: wrapper("tabs"),
            id_prefix: format!("tabs-{}", Uuid::now_v7()),
            panes: Vec::new(),
            active: 0,
        }
    }

    /// Append a pane.
    pub fn pane(mut self, label: impl Into<String>, content: Element) -> Self {
        self.panes.push(TabPane {
            label: label.into(),
            content,
        });
        self.element.mark_for_rebuild();
        self
    }

    /// Activate a pane by index; out-of-range indexes clamp to the last pane.
    pub fn set_active(&mut self, index: usize) {
        self.active = index.min(self.panes.len().saturating_sub(1));
        self.element.mark_for_rebuild();
    }

    /// Chainable [`Tabs::set_active`].
    pub fn active(mut self, index: usize) -> Self {
        self.set_active(index);
        self
    }

    /// The active pane index.
    pub fn active_index(&self) -> usize {
        self.active
    }
}

impl Default for Tabs {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Tabs {
    fn kind(&self) -> &'static str {
        "tabs"
    }

    fn element(&self) -> &Element {
        &self.element
    }

    fn element_mut(&mut self) -> &mut Element {
        &mut self.element
    }

    fn rebuild(&mut self) {
        let mut list = Element::new("div")
            .class("tabs__list")
            .attr("role", "tablist");
        let mut panels = Vec::new();

        for (index, pane) in self.panes.iter().enumerate() {
            let selected = index == self.active;
            let tab_id = format!("{}-tab-{index}", self.id_prefix);
            let panel_id = format!("{}-panel-{index}", self.id_prefix);

            let mut tab = Element::with_escaping("button", true)
                .class("tabs__tab")
                .attr("type", "button")
                .attr("role", "tab")
                .attr("id", tab_id.as_str())
                .attr("aria-controls", panel_id.as_str())
                .attr("aria-selected", if selected { "true" } else { "false" })
                .text(pane.label.clone());
            if selected {
                tab.add_class("tabs__tab--active");
            }
            list.add_child(tab);

            let mut panel = Element::new("div")
                .class("tabs__panel")
                .attr("role", "tabpanel")
                .attr("id", panel_id.as_str())
                .attr("aria-labelledby", tab_id.as_str())
                .child(pane.content.clone());
            panel.set_attribute("hidden", !selected);
            panels.push(panel.into());
        }

        let mut children = vec![list.into()];
        children.extend(panels);
        self.element.set_children(children);
    }
}

#[cfg(test)]
// Tests are allowed to use unwrap/expect freely.
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn two_tabs() -> Tabs {
        Tabs::new()
            .pane("First", Element::new("p").text("one"))
            .pane("Second", Element::new("p").text("two"))
    }

    #[test]
    fn test_first_pane_active_by_default() {
        let mut tabs = two_tabs();
        let html = tabs.render();

        assert_eq!(html.matches(r#"aria-selected="true""#).count(), 1);
        assert_eq!(html.matches(r#"aria-selected="false""#).count(), 1);
        assert_eq!(html.matches("tabs__tab--active").count(), 1);
        // Only the inactive panel is hidden.
        assert_eq!(html.matches(" hidden").count(), 1);
    }

    #[test]
    fn test_switching_active_pane() {
        let mut tabs = two_tabs();
        tabs.render();
        tabs.set_active(1);
        let html = tabs.render();

        // The first tab is now deselected, the second selected.
        let deselected = html.find(r#"aria-selected="false""#).unwrap();
        let selected = html.find(r#"aria-selected="true""#).unwrap();
        assert!(deselected < selected);
        // The first panel is hidden, the second is not.
        assert!(html.contains("<p>two</p>"));
        assert_eq!(html.matches(" hidden").count(), 1);
    }

    #[test]
    fn test_out_of_range_clamps() {
        let mut tabs = two_tabs();
        tabs.set_active(99);
        assert_eq!(tabs.active_index(), 1);
        let html = tabs.render();
        assert!(html.contains("tabs__tab--active"));
    }

    #[test]
    fn test_tab_panel_wiring() {
        let mut tabs = two_tabs();
        let html = tabs.render();

        assert!(html.contains(r#"role="tablist""#));
        assert_eq!(html.matches(r#"role="tab""#).count(), 2);
        assert_eq!(html.matches(r#"role="tabpanel""#).count(), 2);
        // Every tab id referenced by exactly one panel.
        assert_eq!(html.matches("aria-labelledby").count(), 2);
    }

    #[test]
    fn test_pane_serialization() {
        let pane = TabPane {
            label: "First".to_string(),
            content: Element::new("p").text("one"),
        };
        let json = serde_json::to_string(&pane).unwrap();
        let parsed: TabPane = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.label, "First");
        assert_eq!(parsed.content.render(), "<p>one</p>");
    }

    #[test]
    fn test_rebuild_does_not_duplicate() {
        let mut tabs = two_tabs();
        for _ in 0..3 {
            tabs.mark_for_rebuild();
            tabs.render();
        }
        let html = tabs.render();
        assert_eq!(html.matches("tabs__list").count(), 1);
        assert_eq!(html.matches("<p>one</p>").count(), 1);
    }
}
