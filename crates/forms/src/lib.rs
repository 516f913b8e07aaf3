//! Telaio form builder.
//!
//! Chainable form definitions in the render-tree style: a [`Form`] holds
//! weighted, named [`FormField`]s; every definition lowers to
//! `telaio-markup` elements for serialization. Definitions are plain serde
//! data so a host can ship them across a process or plugin boundary before
//! rendering.

pub mod render;
pub mod types;
pub mod validate;

pub use types::{FieldKind, Form, FormField};
pub use validate::ValidationError;
