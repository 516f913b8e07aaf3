//! Telaio test utilities.
//!
//! Helpers for integration testing: element tree fixtures and assertion
//! utilities for rendered markup.

use telaio_markup::Element;

/// A small representative tree: a card-like section with a heading, a list,
/// and an image.
pub fn sample_tree() -> Element {
    Element::new("section")
        .class("card")
        .child(Element::new("header").child(Element::new("h2").text("Title")))
        .child(
            Element::new("ul")
                .class("card__list")
                .child(Element::new("li").text("first"))
                .child(Element::new("li").text("second")),
        )
        .child(Element::new("img").attr("src", "cover.png").attr("alt", "cover"))
}

/// A nested chain of `div` elements `depth` levels deep, innermost holding
/// a single marker class.
pub fn nested_tree(depth: usize) -> Element {
    let mut current = Element::new("div").class("innermost");
    for _ in 0..depth {
        current = Element::new("div").child(current);
    }
    current
}

/// Assert that `needle` occurs exactly once in `haystack`.
///
/// # Panics
///
/// Panics when the count differs from one.
pub fn assert_once(haystack: &str, needle: &str) {
    let count = haystack.matches(needle).count();
    assert!(
        count == 1,
        "expected `{needle}` exactly once, found {count} times in: {haystack}"
    );
}

/// Assert that `a` occurs before `b` in `haystack`; both must be present.
///
/// # Panics
///
/// Panics when either substring is absent or the order is reversed.
pub fn assert_ordered(haystack: &str, a: &str, b: &str) {
    let pos_a = haystack.find(a);
    let pos_b = haystack.find(b);
    match (pos_a, pos_b) {
        (Some(pa), Some(pb)) => assert!(pa < pb, "`{a}` does not precede `{b}` in: {haystack}"),
        _ => panic!("`{a}` or `{b}` missing from: {haystack}"),
    }
}

/// Round-trip an element through JSON, panicking on serialization failure.
///
/// # Panics
///
/// Panics when serde round-tripping fails.
pub fn json_round_trip(element: &Element) -> Element {
    let json = serde_json::to_string(element).unwrap_or_else(|e| panic!("serialize failed: {e}"));
    serde_json::from_str(&json).unwrap_or_else(|e| panic!("deserialize failed: {e}"))
}
