//! Form and form field definitions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A complete form definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Form {
    /// Unique form identifier (e.g., "contact_form").
    pub form_id: String,

    /// Unique build ID for this form instance.
    pub form_build_id: String,

    /// Form action URL.
    pub action: String,

    /// HTTP method ("post" or "get").
    pub method: String,

    /// Form fields keyed by name.
    pub fields: BTreeMap<String, FormField>,

    /// Optional form title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Optional form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Additional form attributes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<(String, String)>,
}

impl Form {
    /// Create a new form with the given ID.
    pub fn new(form_id: impl Into<String>) -> Self {
        Self {
            form_id: form_id.into(),
            form_build_id: uuid::Uuid::now_v7().to_string(),
            action: String::new(),
            method: "post".to_string(),
            fields: BTreeMap::new(),
            title: None,
            description: None,
            attributes: Vec::new(),
        }
    }

    /// Set the form action URL.
    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = action.into();
        self
    }

    /// Set the form method.
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    /// Set the form title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the form description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set an extra attribute on the `<form>` element.
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Add a field to the form.
    pub fn field(mut self, name: impl Into<String>, field: FormField) -> Self {
        self.fields.insert(name.into(), field);
        self
    }

    /// Add multiple fields.
    pub fn fields(mut self, fields: impl IntoIterator<Item = (String, FormField)>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Get a mutable reference to a field.
    pub fn get_field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        self.fields.get_mut(name)
    }

    /// Get fields sorted by weight, name as tiebreaker.
    pub fn sorted_fields(&self) -> Vec<(&String, &FormField)> {
        let mut fields: Vec<_> = self.fields.iter().collect();
        fields.sort_by_key(|(name, field)| (field.weight, name.as_str()));
        fields
    }
}

/// A form field definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormField {
    /// Field kind with kind-specific configuration.
    #[serde(flatten)]
    pub kind: FieldKind,

    /// Field title/label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Field description/help text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Default value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,

    /// Whether this field is required.
    #[serde(default)]
    pub required: bool,

    /// Sort weight (lower = appears first).
    #[serde(default)]
    pub weight: i32,

    /// Child fields (for fieldsets and containers).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub children: BTreeMap<String, FormField>,

    /// Whether this field is disabled.
    #[serde(default)]
    pub disabled: bool,

    /// Placeholder text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    /// Prefix markup (displayed before the control).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    /// Suffix markup (displayed after the control).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
}

impl FormField {
    /// Create a textfield.
    pub fn textfield() -> Self {
        Self::new(FieldKind::Textfield { max_length: None })
    }

    /// Create a textarea.
    pub fn textarea(rows: u32) -> Self {
        Self::new(FieldKind::Textarea { rows })
    }

    /// Create a select.
    pub fn select(options: Vec<(String, String)>) -> Self {
        Self::new(FieldKind::Select {
            options,
            multiple: false,
        })
    }

    /// Create a multi-select.
    pub fn multi_select(options: Vec<(String, String)>) -> Self {
        Self::new(FieldKind::Select {
            options,
            multiple: true,
        })
    }

    /// Create a single checkbox.
    pub fn checkbox() -> Self {
        Self::new(FieldKind::Checkbox)
    }

    /// Create a checkboxes group.
    pub fn checkboxes(options: Vec<(String, String)>) -> Self {
        Self::new(FieldKind::Checkboxes { options })
    }

    /// Create a radio button group.
    pub fn radio(options: Vec<(String, String)>) -> Self {
        Self::new(FieldKind::Radio { options })
    }

    /// Create a hidden field.
    pub fn hidden() -> Self {
        Self::new(FieldKind::Hidden)
    }

    /// Create a password field.
    pub fn password() -> Self {
        Self::new(FieldKind::Password)
    }

    /// Create a file upload field.
    pub fn file() -> Self {
        Self::new(FieldKind::File)
    }

    /// Create a submit button.
    pub fn submit(value: impl Into<String>) -> Self {
        Self::new(FieldKind::Submit {
            value: value.into(),
        })
    }

    /// Create a fieldset.
    pub fn fieldset() -> Self {
        Self::new(FieldKind::Fieldset {
            collapsible: false,
            collapsed: false,
        })
    }

    /// Create a collapsible fieldset.
    pub fn fieldset_collapsible(collapsed: bool) -> Self {
        Self::new(FieldKind::Fieldset {
            collapsible: true,
            collapsed,
        })
    }

    /// Create a markup field (display-only HTML, passed through the
    /// sanitizer at lowering time).
    pub fn markup(value: impl Into<String>) -> Self {
        Self::new(FieldKind::Markup {
            value: value.into(),
        })
    }

    /// Create a generic container.
    pub fn container() -> Self {
        Self::new(FieldKind::Container)
    }

    fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            title: None,
            description: None,
            default_value: None,
            required: false,
            weight: 0,
            children: BTreeMap::new(),
            disabled: false,
            placeholder: None,
            prefix: None,
            suffix: None,
        }
    }

    /// Set the field title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the field description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the default value.
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Mark as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set the weight.
    pub fn weight(mut self, weight: i32) -> Self {
        self.weight = weight;
        self
    }

    /// Set placeholder text.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set max length for a textfield.
    pub fn max_length(mut self, max: u32) -> Self {
        if let FieldKind::Textfield { ref mut max_length } = self.kind {
            *max_length = Some(max);
        }
        self
    }

    /// Add a child field.
    pub fn child(mut self, name: impl Into<String>, field: FormField) -> Self {
        self.children.insert(name.into(), field);
        self
    }

    /// Mark as disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Set prefix markup.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Set suffix markup.
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    /// Child fields sorted by weight, name as tiebreaker.
    pub fn sorted_children(&self) -> Vec<(&String, &FormField)> {
        let mut children: Vec<_> = self.children.iter().collect();
        children.sort_by_key(|(name, field)| (field.weight, name.as_str()));
        children
    }
}

/// Field kind variants with kind-specific configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
    /// Single-line text input.
    Textfield {
        #[serde(skip_serializing_if = "Option::is_none")]
        max_length: Option<u32>,
    },

    /// Multi-line text input.
    Textarea { rows: u32 },

    /// Dropdown select.
    Select {
        options: Vec<(String, String)>,
        #[serde(default)]
        multiple: bool,
    },

    /// Single checkbox.
    Checkbox,

    /// Multiple checkboxes.
    Checkboxes { options: Vec<(String, String)> },

    /// Radio button group.
    Radio { options: Vec<(String, String)> },

    /// Hidden field.
    Hidden,

    /// Password field.
    Password,

    /// File upload.
    File,

    /// Submit button.
    Submit { value: String },

    /// Fieldset/group.
    Fieldset {
        #[serde(default)]
        collapsible: bool,
        #[serde(default)]
        collapsed: bool,
    },

    /// Display-only markup.
    Markup { value: String },

    /// Generic grouping container.
    Container,
}

impl FieldKind {
    /// Get the kind name as a string.
    pub fn kind_name(&self) -> &'static str {
        match self {
            FieldKind::Textfield { .. } => "textfield",
            FieldKind::Textarea { .. } => "textarea",
            FieldKind::Select { .. } => "select",
            FieldKind::Checkbox => "checkbox",
            FieldKind::Checkboxes { .. } => "checkboxes",
            FieldKind::Radio { .. } => "radio",
            FieldKind::Hidden => "hidden",
            FieldKind::Password => "password",
            FieldKind::File => "file",
            FieldKind::Submit { .. } => "submit",
            FieldKind::Fieldset { .. } => "fieldset",
            FieldKind::Markup { .. } => "markup",
            FieldKind::Container => "container",
        }
    }
}
