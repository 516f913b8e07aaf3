//! Descendant matching: criteria builder and a small selector syntax.

use thiserror::Error;

use crate::attributes::AttrValue;
use crate::element::Element;

/// Selector parsing errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectorError {
    #[error("empty selector")]
    Empty,

    #[error("unclosed `[` in selector `{0}`")]
    UnclosedBracket(String),

    #[error("attribute test `{0}` is missing `=`")]
    MissingEquals(String),

    #[error("unexpected `{0}` in selector")]
    UnexpectedChar(char),
}

/// A set of predicates over elements: tag, classes, attribute equality.
///
/// All criteria must hold for an element to match. An empty query matches
/// every element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    tag: Option<String>,
    classes: Vec<String>,
    attrs: Vec<(String, String)>,
}

impl Query {
    /// Create an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require a tag name.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Require a class token.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Require an attribute to equal a value. A bare flag matches the empty
    /// string.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Parse a compact selector: `tag.class.other[attr=value][flag=]`.
    ///
    /// Attribute values may be quoted with `"` or `'`. This is deliberately
    /// not a CSS engine; combinators and pseudo-classes are unsupported.
    pub fn parse(selector: &str) -> Result<Self, SelectorError> {
        let selector = selector.trim();
        if selector.is_empty() {
            return Err(SelectorError::Empty);
        }

        let mut query = Query::new();
        let tag_end = selector.find(['.', '[']).unwrap_or(selector.len());
        if tag_end > 0 {
            query.tag = Some(selector[..tag_end].to_string());
        }

        let mut rest = &selector[tag_end..];
        while !rest.is_empty() {
            if let Some(stripped) = rest.strip_prefix('.') {
                let end = stripped.find(['.', '[']).unwrap_or(stripped.len());
                if end == 0 {
                    return Err(SelectorError::UnexpectedChar('.'));
                }
                query.classes.push(stripped[..end].to_string());
                rest = &stripped[end..];
            } else if let Some(stripped) = rest.strip_prefix('[') {
                let Some(end) = stripped.find(']') else {
                    return Err(SelectorError::UnclosedBracket(selector.to_string()));
                };
                let test = &stripped[..end];
                let Some((name, value)) = test.split_once('=') else {
                    return Err(SelectorError::MissingEquals(test.to_string()));
                };
                let value = value.trim().trim_matches('"').trim_matches('\'');
                query.attrs.push((name.trim().to_string(), value.to_string()));
                rest = &stripped[end + 1..];
            } else {
                let unexpected = rest.chars().next().unwrap_or(' ');
                return Err(SelectorError::UnexpectedChar(unexpected));
            }
        }

        Ok(query)
    }

    /// Whether an element satisfies every predicate in this query.
    pub fn matches(&self, element: &Element) -> bool {
        if let Some(tag) = &self.tag {
            if element.tag() != tag {
                return false;
            }
        }

        if !self.classes.iter().all(|class| element.has_class(class)) {
            return false;
        }

        self.attrs.iter().all(|(name, expected)| {
            element
                .get_attribute(name)
                .is_some_and(|value| match value {
                    AttrValue::Text(v) => v == expected,
                    AttrValue::Flag => expected.is_empty(),
                    AttrValue::Int(v) => v.to_string() == *expected,
                    AttrValue::Float(v) => v.to_string() == *expected,
                })
        })
    }
}
