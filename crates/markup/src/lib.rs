//! Telaio markup core.
//!
//! A chainable API for building HTML element trees and serializing them to
//! markup strings. Elements track their tag, ordered attributes, children,
//! self-closing rule, and per-element escaping behavior; the component layer
//! built on top (see `telaio-components`) adds rebuild-on-demand semantics
//! via the dirty flag exposed here.

pub mod attributes;
pub mod element;
pub mod escape;
pub mod query;
pub mod sanitize;
pub mod tags;

pub use attributes::{AttrInput, AttrValue, AttributeList};
pub use element::{Child, Element};
pub use escape::html_escape;
pub use query::{Query, SelectorError};
pub use sanitize::{EscapeAll, Sanitizer, Trusted};
