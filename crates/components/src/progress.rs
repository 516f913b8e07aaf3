//! Progress bar widget.

use telaio_markup::Element;

use crate::component::{Component, wrapper};

/// A horizontal progress indicator.
///
/// Values clamp to 0..=100. The wrapper carries the `progressbar` role with
/// `aria-valuenow`/`min`/`max`; the fill width tracks the value.
#[derive(Debug, Clone)]
pub struct ProgressBar {
    element: Element,
    value: u32,
    label: Option<String>,
    show_value: bool,
}

impl ProgressBar {
    /// Create a progress bar at a value (clamped to 100).
    pub fn new(value: u32) -> Self {
        Self {
            element: wrapper("progress-bar"),
            value: value.min(100),
            label: None,
            show_value: false,
        }
    }

    /// Set the current value, clamped to 100.
    pub fn set_value(&mut self, value: u32) {
        self.value = value.min(100);
        self.element.mark_for_rebuild();
    }

    /// The current value.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Set a text label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self.element.mark_for_rebuild();
        self
    }

    /// Show the numeric value next to the bar.
    pub fn show_value(mut self) -> Self {
        self.show_value = true;
        self.element.mark_for_rebuild();
        self
    }
}

impl Component for ProgressBar {
    fn kind(&self) -> &'static str {
        "progress-bar"
    }

    fn element(&self) -> &Element {
        &self.element
    }

    fn element_mut(&mut self) -> &mut Element {
        &mut self.element
    }

    fn rebuild(&mut self) {
        self.element.set_attribute("role", "progressbar");
        self.element.set_attribute("aria-valuemin", 0);
        self.element.set_attribute("aria-valuemax", 100);
        self.element.set_attribute("aria-valuenow", i64::from(self.value));

        let mut children = Vec::new();

        if let Some(label) = &self.label {
            children.push(
                Element::with_escaping("div", true)
                    .class("progress-bar__label")
                    .text(label.clone())
                    .into(),
            );
        }

        let fill = Element::new("div")
            .class("progress-bar__fill")
            .style("width", &format!("{}%", self.value));
        children.push(
            Element::new("div")
                .class("progress-bar__track")
                .child(fill)
                .into(),
        );

        if self.show_value {
            children.push(
                Element::new("span")
                    .class("progress-bar__value")
                    .text(format!("{}%", self.value))
                    .into(),
            );
        }

        self.element.set_children(children);
    }
}
