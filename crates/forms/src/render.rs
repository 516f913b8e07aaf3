//! Lowering form definitions to markup elements.

use serde_json::Value;
use telaio_markup::{Element, EscapeAll, Sanitizer};
use tracing::debug;

use crate::types::{FieldKind, Form, FormField};

impl Form {
    /// Lower the form to a markup element tree with the escape-everything
    /// sanitizer. Markup fields come out escaped; inject a host sanitizer via
    /// [`Form::to_element_with`] to let cleaned markup through.
    pub fn to_element(&self) -> Element {
        self.to_element_with(&EscapeAll)
    }

    /// Lower the form to a markup element tree, passing markup field values
    /// through `sanitizer`.
    pub fn to_element_with(&self, sanitizer: &dyn Sanitizer) -> Element {
        debug!(form_id = %self.form_id, fields = self.fields.len(), "lowering form");

        let mut form = Element::new("form")
            .class("form")
            .attr("id", self.form_id.as_str())
            .attr("method", self.method.as_str());
        if !self.action.is_empty() {
            form.set_attribute("action", self.action.as_str());
        }
        for (name, value) in &self.attributes {
            form.set_attribute(name, value.as_str());
        }

        if let Some(title) = &self.title {
            form.add_child(Element::new("h2").class("form__title").text(title.clone()));
        }
        if let Some(description) = &self.description {
            form.add_child(
                Element::with_escaping("div", true)
                    .class("form__description")
                    .text(description.clone()),
            );
        }

        form.add_child(
            Element::new("input")
                .attr("type", "hidden")
                .attr("name", "form_build_id")
                .attr("value", self.form_build_id.as_str()),
        );

        for (name, field) in self.sorted_fields() {
            form.add_child(field.to_element(name, sanitizer));
        }

        form
    }
}

impl FormField {
    /// Lower one field to a markup element.
    ///
    /// Input controls get a `form-item` wrapper with label, description, and
    /// prefix/suffix markup; structural kinds (fieldset, container, markup,
    /// hidden, submit) lower to their own shapes.
    pub fn to_element(&self, name: &str, sanitizer: &dyn Sanitizer) -> Element {
        match &self.kind {
            FieldKind::Hidden => Element::new("input")
                .attr("type", "hidden")
                .attr("name", name)
                .attr("value", self.default_text()),
            FieldKind::Markup { value } => Element::with_escaping("div", false)
                .class("form-markup")
                .text(sanitizer.sanitize(value)),
            FieldKind::Submit { value } => {
                let mut button = Element::with_escaping("button", true)
                    .class("form-submit")
                    .attr("type", "submit")
                    .attr("name", name)
                    .text(value.clone());
                if self.disabled {
                    button.set_attribute("disabled", true);
                }
                button
            }
            FieldKind::Fieldset {
                collapsible,
                collapsed,
            } => self.fieldset_element(name, *collapsible, *collapsed, sanitizer),
            FieldKind::Container => {
                let mut wrapper = Element::new("div").class("form-wrapper");
                for (child_name, child) in self.sorted_children() {
                    wrapper.add_child(child.to_element(child_name, sanitizer));
                }
                wrapper
            }
            _ => self.control_item(name),
        }
    }

    /// Wrapper + label + control for input-like kinds.
    fn control_item(&self, name: &str) -> Element {
        let id = control_id(name);
        let mut wrapper = Element::new("div")
            .class("form-item")
            .class(&format!("form-item--{}", self.kind.kind_name()));
        if self.disabled {
            wrapper.add_class("form-item--disabled");
        }

        if let Some(prefix) = &self.prefix {
            wrapper.add_child(prefix.clone());
        }

        // A single checkbox puts its label after the control.
        let label_after = matches!(self.kind, FieldKind::Checkbox);
        if !label_after {
            if let Some(label) = self.label_element(&id) {
                wrapper.add_child(label);
            }
        }

        wrapper.add_child(self.control_element(name, &id));

        if label_after {
            if let Some(label) = self.label_element(&id) {
                wrapper.add_child(label);
            }
        }

        if let Some(description) = &self.description {
            wrapper.add_child(
                Element::with_escaping("div", true)
                    .class("form-item__description")
                    .text(description.clone()),
            );
        }

        if let Some(suffix) = &self.suffix {
            wrapper.add_child(suffix.clone());
        }

        wrapper
    }

    fn label_element(&self, id: &str) -> Option<Element> {
        let title = self.title.as_ref()?;
        let mut label = Element::new("label").attr("for", id).text(title.clone());
        if self.required {
            label.add_child(Element::new("span").class("form-required").text("*"));
        }
        Some(label)
    }

    fn control_element(&self, name: &str, id: &str) -> Element {
        match &self.kind {
            FieldKind::Textfield { max_length } => {
                let mut input = self.text_input("text", name, id).class("form-text");
                if let Some(max) = max_length {
                    input.set_attribute("maxlength", i64::from(*max));
                }
                input.set_attribute("value", self.default_value.as_ref().map(value_text));
                input
            }
            FieldKind::Password => self.text_input("password", name, id).class("form-text"),
            FieldKind::File => self.text_input("file", name, id).class("form-file"),
            FieldKind::Textarea { rows } => {
                let mut textarea = Element::new("textarea")
                    .class("form-textarea")
                    .attr("id", id)
                    .attr("name", name)
                    .attr("rows", i64::from(*rows));
                self.apply_common_flags(&mut textarea);
                if let Some(value) = &self.default_value {
                    textarea.add_child(value_text(value));
                }
                textarea
            }
            FieldKind::Select { options, multiple } => {
                let mut select = Element::new("select")
                    .class("form-select")
                    .attr("id", id)
                    .attr("name", name)
                    .attr("multiple", *multiple);
                self.apply_common_flags(&mut select);
                for (key, label) in options {
                    let mut option = Element::with_escaping("option", true)
                        .attr("value", key.as_str())
                        .text(label.clone());
                    if self.default_selects(key) {
                        option.set_attribute("selected", true);
                    }
                    select.add_child(option);
                }
                select
            }
            FieldKind::Checkbox => {
                let mut input = Element::new("input")
                    .class("form-checkbox")
                    .attr("type", "checkbox")
                    .attr("id", id)
                    .attr("name", name)
                    .attr("value", "1");
                self.apply_common_flags(&mut input);
                if self.default_value.as_ref().is_some_and(is_truthy) {
                    input.set_attribute("checked", true);
                }
                input
            }
            FieldKind::Checkboxes { options } => {
                self.option_group(name, options, "checkbox", "form-checkboxes")
            }
            FieldKind::Radio { options } => self.option_group(name, options, "radio", "form-radios"),
            // Structural kinds are handled in to_element.
            _ => Element::new("div"),
        }
    }

    fn text_input(&self, input_type: &str, name: &str, id: &str) -> Element {
        let mut input = Element::new("input")
            .attr("type", input_type)
            .attr("id", id)
            .attr("name", name);
        if let Some(placeholder) = &self.placeholder {
            input.set_attribute("placeholder", placeholder.as_str());
        }
        self.apply_common_flags(&mut input);
        input
    }

    fn apply_common_flags(&self, control: &mut Element) {
        if self.required {
            control.set_attribute("required", true);
        }
        if self.disabled {
            control.set_attribute("disabled", true);
        }
    }

    /// A group of checkbox or radio controls, one per option.
    fn option_group(
        &self,
        name: &str,
        options: &[(String, String)],
        input_type: &str,
        group_class: &str,
    ) -> Element {
        let radio = input_type == "radio";
        let mut group = Element::new("div").class(group_class);
        for (key, label) in options {
            let option_id = format!("{}-{}", control_id(name), key.replace('_', "-"));
            let input_name = if radio {
                name.to_string()
            } else {
                format!("{name}[{key}]")
            };
            let mut input = Element::new("input")
                .attr("type", input_type)
                .attr("id", option_id.as_str())
                .attr("name", input_name)
                .attr("value", key.as_str());
            if self.default_selects(key) {
                input.set_attribute("checked", true);
            }
            self.apply_common_flags(&mut input);

            group.add_child(
                Element::new("div")
                    .class(&format!("form-item--{input_type}"))
                    .child(input)
                    .child(
                        Element::new("label")
                            .attr("for", option_id.as_str())
                            .text(label.clone()),
                    ),
            );
        }
        group
    }

    fn fieldset_element(
        &self,
        name: &str,
        collapsible: bool,
        collapsed: bool,
        sanitizer: &dyn Sanitizer,
    ) -> Element {
        let mut wrapper = if collapsible {
            let mut details = Element::new("details").class("form-fieldset");
            details.set_attribute("open", !collapsed);
            if let Some(title) = &self.title {
                details.add_child(Element::with_escaping("summary", true).text(title.clone()));
            }
            details
        } else {
            let mut fieldset = Element::new("fieldset").class("form-fieldset");
            if let Some(title) = &self.title {
                fieldset.add_child(Element::with_escaping("legend", true).text(title.clone()));
            }
            fieldset
        };

        if let Some(description) = &self.description {
            wrapper.add_child(
                Element::with_escaping("div", true)
                    .class("form-fieldset__description")
                    .text(description.clone()),
            );
        }
        for (child_name, child) in self.sorted_children() {
            wrapper.add_child(child.to_element(child_name, sanitizer));
        }
        wrapper
    }

    fn default_text(&self) -> String {
        self.default_value.as_ref().map(value_text).unwrap_or_default()
    }

    /// Whether an option key is selected by the default value: direct match,
    /// or membership for array defaults (multi-select, checkboxes).
    fn default_selects(&self, key: &str) -> bool {
        match &self.default_value {
            Some(Value::Array(values)) => values.iter().any(|v| value_text(v) == key),
            Some(value) => value_text(value) == key,
            None => false,
        }
    }
}

/// Control id for a field name: `edit-{name}` with underscores dashed.
fn control_id(name: &str) -> String {
    format!("edit-{}", name.replace('_', "-"))
}

/// String form of a JSON default value.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty() && s != "0",
        Value::Null => false,
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
