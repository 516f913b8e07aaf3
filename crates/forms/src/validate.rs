//! Submitted-value validation against a form definition.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::types::{FieldKind, Form, FormField};

/// Validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Field name (None for form-level errors).
    pub field: Option<String>,

    /// Error message.
    pub message: String,
}

impl ValidationError {
    /// Create a field-level error.
    pub fn field(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: Some(name.into()),
            message: message.into(),
        }
    }

    /// Create a form-level error.
    pub fn form(message: impl Into<String>) -> Self {
        Self {
            field: None,
            message: message.into(),
        }
    }
}

impl Form {
    /// Check submitted values against the definition: required fields must be
    /// present and non-empty, selection fields must submit known option keys.
    /// Fieldset and container children are checked recursively.
    pub fn validate(&self, values: &HashMap<String, Value>) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        for (name, field) in &self.fields {
            validate_field(name, field, values, &mut errors);
        }
        if !errors.is_empty() {
            debug!(form_id = %self.form_id, errors = errors.len(), "form validation failed");
        }
        errors
    }
}

fn validate_field(
    name: &str,
    field: &FormField,
    values: &HashMap<String, Value>,
    errors: &mut Vec<ValidationError>,
) {
    // Structural kinds only carry children.
    if matches!(
        field.kind,
        FieldKind::Fieldset { .. } | FieldKind::Container
    ) {
        for (child_name, child) in &field.children {
            validate_field(child_name, child, values, errors);
        }
        return;
    }

    let submitted = values.get(name);

    if field.required && !has_value(submitted) {
        let label = field.title.clone().unwrap_or_else(|| name.to_string());
        errors.push(ValidationError::field(name, format!("{label} is required.")));
        return;
    }

    if let (Some(value), Some(options)) = (submitted, option_keys(&field.kind)) {
        let unknown = match value {
            Value::Array(items) => items
                .iter()
                .filter_map(Value::as_str)
                .find(|key| !options.iter().any(|o| o == key))
                .map(ToString::to_string),
            Value::String(key) if !key.is_empty() => {
                (!options.iter().any(|o| o == key)).then(|| key.clone())
            }
            _ => None,
        };
        if let Some(key) = unknown {
            errors.push(ValidationError::field(
                name,
                format!("`{key}` is not a valid choice."),
            ));
        }
    }
}

fn has_value(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(a)) => !a.is_empty(),
        Some(_) => true,
    }
}

fn option_keys(kind: &FieldKind) -> Option<Vec<String>> {
    match kind {
        FieldKind::Select { options, .. }
        | FieldKind::Checkboxes { options }
        | FieldKind::Radio { options } => Some(options.iter().map(|(k, _)| k.clone()).collect()),
        _ => None,
    }
}

#[cfg(test)]
// Tests are allowed to use unwrap/expect freely.
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn submitted(pairs: &[(&str, Value)]) -> HashMap<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_required_field_missing() {
        let form = Form::new("test").field("name", FormField::textfield().title("Name").required());
        let errors = form.validate(&HashMap::new());

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field.as_deref(), Some("name"));
        assert!(errors[0].message.contains("Name"));
    }

    #[test]
    fn test_required_field_empty_string() {
        let form = Form::new("test").field("name", FormField::textfield().required());
        let errors = form.validate(&submitted(&[("name", Value::String(String::new()))]));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_required_field_present() {
        let form = Form::new("test").field("name", FormField::textfield().required());
        let errors = form.validate(&submitted(&[("name", Value::String("ok".into()))]));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_optional_field_missing_is_fine() {
        let form = Form::new("test").field("bio", FormField::textarea(4));
        assert!(form.validate(&HashMap::new()).is_empty());
    }

    #[test]
    fn test_unknown_select_option() {
        let form = Form::new("test").field(
            "choice",
            FormField::select(vec![("a".to_string(), "A".to_string())]),
        );
        let errors = form.validate(&submitted(&[("choice", Value::String("z".into()))]));

        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains('z'));
    }

    #[test]
    fn test_known_option_accepted() {
        let form = Form::new("test").field(
            "choice",
            FormField::radio(vec![("a".to_string(), "A".to_string())]),
        );
        let errors = form.validate(&submitted(&[("choice", Value::String("a".into()))]));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_fieldset_children_validated() {
        let form = Form::new("test").field(
            "address",
            FormField::fieldset().child("city", FormField::textfield().required()),
        );
        let errors = form.validate(&HashMap::new());

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field.as_deref(), Some("city"));
    }

    #[test]
    fn test_validation_error_constructors() {
        let field_error = ValidationError::field("email", "Invalid email");
        assert_eq!(field_error.field, Some("email".to_string()));

        let form_error = ValidationError::form("Form expired");
        assert!(form_error.field.is_none());
    }
}
