//! Datepicker widget: a text input with date wiring for a host-side picker.

use chrono::NaiveDate;
use telaio_markup::Element;
use uuid::Uuid;

use crate::component::{Component, wrapper};
use crate::error::ComponentError;

const ISO_FORMAT: &str = "%Y-%m-%d";

/// A date input field.
///
/// Renders as a text input carrying `data-*` attributes (format, current
/// value, allowed range) that a host-side picker script reads. The min/max
/// range is always emitted in ISO form regardless of the display format.
#[derive(Debug, Clone)]
pub struct Datepicker {
    element: Element,
    id: String,
    name: String,
    value: Option<NaiveDate>,
    min: Option<NaiveDate>,
    max: Option<NaiveDate>,
    format: String,
    required: bool,
}

impl Datepicker {
    /// Create a datepicker for a form field name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            element: wrapper("datepicker"),
            id: format!("datepicker-{}", Uuid::now_v7()),
            name: name.into(),
            value: None,
            min: None,
            max: None,
            format: ISO_FORMAT.to_string(),
            required: false,
        }
    }

    /// Set the current value.
    pub fn value(mut self, value: NaiveDate) -> Self {
        self.value = Some(value);
        self.element.mark_for_rebuild();
        self
    }

    /// Restrict selectable dates to `start..=end`.
    pub fn range(mut self, start: NaiveDate, end: NaiveDate) -> Result<Self, ComponentError> {
        if start > end {
            return Err(ComponentError::InvalidDateRange { start, end });
        }
        self.min = Some(start);
        self.max = Some(end);
        self.element.mark_for_rebuild();
        Ok(self)
    }

    /// Set the display format (chrono strftime syntax).
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self.element.mark_for_rebuild();
        self
    }

    /// Mark the field required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self.element.mark_for_rebuild();
        self
    }
}

impl Component for Datepicker {
    fn kind(&self) -> &'static str {
        "datepicker"
    }

    fn element(&self) -> &Element {
        &self.element
    }

    fn element_mut(&mut self) -> &mut Element {
        &mut self.element
    }

    fn rebuild(&mut self) {
        let mut input = Element::new("input")
            .class("datepicker__input")
            .attr("type", "text")
            .attr("id", self.id.as_str())
            .attr("name", self.name.as_str())
            .attr("data-datepicker", true)
            .attr("data-date-format", self.format.as_str());

        input.set_attribute(
            "value",
            self.value.map(|d| d.format(&self.format).to_string()),
        );
        input.set_attribute(
            "data-min-date",
            self.min.map(|d| d.format(ISO_FORMAT).to_string()),
        );
        input.set_attribute(
            "data-max-date",
            self.max.map(|d| d.format(ISO_FORMAT).to_string()),
        );
        if self.required {
            input.set_attribute("required", true);
        }

        self.element.set_children([input.into()]);
    }
}
