//! Injected sanitization seam for host-formatted markup.
//!
//! CMS-specific filtering (kses-style allowlists, shortcode expansion, text
//! formats) lives in the host, not here. Code that accepts rich markup from
//! the outside takes a [`Sanitizer`] so the host decides what survives;
//! [`EscapeAll`] is the safe default when nothing is injected.

use crate::escape::html_escape;

/// Host-injected markup cleaning.
pub trait Sanitizer: Send + Sync {
    /// Clean a raw markup string for output.
    fn sanitize(&self, input: &str) -> String;
}

/// Escapes everything; markup characters display literally.
#[derive(Debug, Default, Clone, Copy)]
pub struct EscapeAll;

impl Sanitizer for EscapeAll {
    fn sanitize(&self, input: &str) -> String {
        html_escape(input)
    }
}

/// Passes markup through untouched, for values the host already cleaned.
#[derive(Debug, Default, Clone, Copy)]
pub struct Trusted;

impl Sanitizer for Trusted {
    fn sanitize(&self, input: &str) -> String {
        input.to_string()
    }
}
