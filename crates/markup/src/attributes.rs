//! Ordered attribute storage and attribute value types.
//!
//! Attributes keep insertion order, which the serializer preserves. The
//! `class` and `style` keys get set semantics and pair semantics on top of
//! plain string storage; the normalization helpers here keep those values
//! free of duplicate tokens and stray whitespace.

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A stored attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// A string value, rendered as `name="value"`.
    Text(String),
    /// A bare attribute, rendered as just `name` (e.g. `disabled`).
    Flag,
    /// An integer value.
    Int(i64),
    /// A floating-point value.
    Float(f64),
}

impl AttrValue {
    /// The string form of this value, or `None` for a bare flag.
    pub fn as_rendered(&self) -> Option<String> {
        match self {
            AttrValue::Text(v) => Some(v.clone()),
            AttrValue::Flag => None,
            AttrValue::Int(v) => Some(v.to_string()),
            AttrValue::Float(v) => Some(v.to_string()),
        }
    }

    /// The stored string, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttrValue::Text(v) => Some(v),
            _ => None,
        }
    }
}

impl Serialize for AttrValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AttrValue::Text(v) => serializer.serialize_str(v),
            AttrValue::Flag => serializer.serialize_bool(true),
            AttrValue::Int(v) => serializer.serialize_i64(*v),
            AttrValue::Float(v) => serializer.serialize_f64(*v),
        }
    }
}

impl<'de> Deserialize<'de> for AttrValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        match value {
            serde_json::Value::String(s) => Ok(AttrValue::Text(s)),
            serde_json::Value::Bool(true) => Ok(AttrValue::Flag),
            serde_json::Value::Bool(false) => {
                Err(de::Error::custom("false is not a storable attribute value"))
            }
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(AttrValue::Int(i))
                } else if let Some(f) = n.as_f64() {
                    Ok(AttrValue::Float(f))
                } else {
                    Err(de::Error::custom("attribute number out of range"))
                }
            }
            other => Err(de::Error::custom(format!(
                "invalid attribute value: {other}"
            ))),
        }
    }
}

/// Input to `set_attribute`: either a value to store, or a removal.
///
/// Boolean `true` stores a bare [`AttrValue::Flag`]; boolean `false` and
/// `None` remove the attribute, matching the set/remove contract.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrInput {
    /// Store this value.
    Set(AttrValue),
    /// Remove the attribute.
    Remove,
}

impl From<AttrValue> for AttrInput {
    fn from(value: AttrValue) -> Self {
        AttrInput::Set(value)
    }
}

impl From<bool> for AttrInput {
    fn from(value: bool) -> Self {
        if value {
            AttrInput::Set(AttrValue::Flag)
        } else {
            AttrInput::Remove
        }
    }
}

impl From<&str> for AttrInput {
    fn from(value: &str) -> Self {
        AttrInput::Set(AttrValue::Text(value.to_string()))
    }
}

impl From<String> for AttrInput {
    fn from(value: String) -> Self {
        AttrInput::Set(AttrValue::Text(value))
    }
}

impl From<&String> for AttrInput {
    fn from(value: &String) -> Self {
        AttrInput::Set(AttrValue::Text(value.clone()))
    }
}

impl From<i64> for AttrInput {
    fn from(value: i64) -> Self {
        AttrInput::Set(AttrValue::Int(value))
    }
}

impl From<i32> for AttrInput {
    fn from(value: i32) -> Self {
        AttrInput::Set(AttrValue::Int(i64::from(value)))
    }
}

impl From<u32> for AttrInput {
    fn from(value: u32) -> Self {
        AttrInput::Set(AttrValue::Int(i64::from(value)))
    }
}

impl From<f64> for AttrInput {
    fn from(value: f64) -> Self {
        AttrInput::Set(AttrValue::Float(value))
    }
}

impl<T: Into<AttrInput>> From<Option<T>> for AttrInput {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => AttrInput::Remove,
        }
    }
}

/// Insertion-ordered attribute map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeList {
    entries: Vec<(String, AttrValue)>,
}

impl AttributeList {
    /// Create an empty attribute list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the list holds no attributes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of stored attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Look up an attribute by name.
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Whether an attribute with this name is stored.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    /// Store an attribute, replacing in place to preserve insertion order.
    pub fn set(&mut self, name: &str, value: AttrValue) {
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| n == name) {
            entry.1 = value;
        } else {
            self.entries.push((name.to_string(), value));
        }
    }

    /// Remove an attribute, returning the old value if present.
    pub fn remove(&mut self, name: &str) -> Option<AttrValue> {
        let index = self.entries.iter().position(|(n, _)| n == name)?;
        Some(self.entries.remove(index).1)
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }
}

impl Serialize for AttributeList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for AttributeList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ListVisitor;

        impl<'de> Visitor<'de> for ListVisitor {
            type Value = AttributeList;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a map of attribute names to values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, value)) = access.next_entry::<String, AttrValue>()? {
                    entries.push((name, value));
                }
                Ok(AttributeList { entries })
            }
        }

        deserializer.deserialize_map(ListVisitor)
    }
}

/// Split a class string into tokens, deduplicated, insertion order preserved.
pub fn class_tokens(value: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    for token in value.split_whitespace() {
        if !tokens.iter().any(|t| t == token) {
            tokens.push(token.to_string());
        }
    }
    tokens
}

/// Normalize a class string: collapse whitespace and duplicate tokens.
pub fn normalize_classes(value: &str) -> String {
    class_tokens(value).join(" ")
}

/// Normalize a style string into `property: value` pairs joined by `; `,
/// dropping pairs with empty values.
pub fn normalize_style(value: &str) -> String {
    let mut pairs: Vec<(String, String)> = Vec::new();
    for declaration in value.split(';') {
        let Some((property, val)) = declaration.split_once(':') else {
            continue;
        };
        let property = property.trim();
        let val = val.trim();
        if property.is_empty() || val.is_empty() {
            continue;
        }
        set_style_pair(&mut pairs, property, val);
    }
    join_style(&pairs)
}

/// Set one property in a style string, replacing an existing declaration.
/// An empty value drops the property.
pub fn with_style_property(existing: &str, property: &str, value: &str) -> String {
    let mut pairs: Vec<(String, String)> = Vec::new();
    for declaration in existing.split(';') {
        let Some((p, v)) = declaration.split_once(':') else {
            continue;
        };
        let (p, v) = (p.trim(), v.trim());
        if p.is_empty() || v.is_empty() {
            continue;
        }
        set_style_pair(&mut pairs, p, v);
    }

    let property = property.trim();
    let value = value.trim();
    if value.is_empty() {
        pairs.retain(|(p, _)| p != property);
    } else {
        set_style_pair(&mut pairs, property, value);
    }

    join_style(&pairs)
}

fn set_style_pair(pairs: &mut Vec<(String, String)>, property: &str, value: &str) {
    if let Some(pair) = pairs.iter_mut().find(|(p, _)| p == property) {
        pair.1 = value.to_string();
    } else {
        pairs.push((property.to_string(), value.to_string()));
    }
}

fn join_style(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(p, v)| format!("{p}: {v}"))
        .collect::<Vec<_>>()
        .join("; ")
}
