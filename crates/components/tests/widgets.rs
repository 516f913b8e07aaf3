//! Integration tests for the widget rebuild contract.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use telaio_components::{
    Accordion, Card, Component, Modal, ModalSize, ProgressBar, Tabs, Tooltip,
};
use telaio_markup::{Element, Query};
use telaio_test_utils::assert_once;

#[test]
fn base_class_appears_once_after_many_rebuilds() {
    let mut card = Card::new().title("T");
    let mut modal = Modal::new("M");
    let mut tabs = Tabs::new().pane("A", Element::new("p").text("a"));
    let mut bar = ProgressBar::new(5);

    for _ in 0..10 {
        card.mark_for_rebuild();
        modal.mark_for_rebuild();
        tabs.mark_for_rebuild();
        bar.mark_for_rebuild();
        card.render();
        modal.render();
        tabs.render();
        bar.render();
    }

    assert_once(&card.render(), r#"class="card""#);
    assert_once(&modal.render(), "modal__dialog");
    assert_once(&tabs.render(), "tabs__list");
    assert_once(&bar.render(), "progress-bar__track");
}

#[test]
fn render_without_mutation_is_stable() {
    let mut accordion = Accordion::new().section("S", Element::new("p").text("body"));
    let first = accordion.render();
    let second = accordion.render();
    assert_eq!(first, second);
}

#[test]
fn mutation_between_renders_changes_output() {
    let mut bar = ProgressBar::new(10);
    let before = bar.render();
    bar.set_value(90);
    let after = bar.render();
    assert_ne!(before, after);
    assert!(after.contains("width: 90%"));
}

#[test]
fn component_wrapper_never_escapes_its_content() {
    // A card body built from raw markup children survives unescaped, while
    // text inside escaping descendants still escapes.
    let mut card = Card::new().body(Element::new("ul").text("<li>x</li>"));
    let html = card.render();
    assert!(html.contains("<li>x</li>"));

    let mut card = Card::new().body_text("<b>bold</b>");
    assert!(card.render().contains("&lt;b&gt;bold&lt;/b&gt;"));
}

#[test]
fn rendered_widgets_are_queryable_trees() {
    let mut modal = Modal::new("Confirm")
        .size(ModalSize::Large)
        .action(Element::with_escaping("button", true).class("ok").text("OK"));
    modal.render();

    let buttons = modal
        .element()
        .find_descendants(&Query::parse("button.ok").unwrap(), true);
    assert_eq!(buttons.len(), 1);

    let titles = modal
        .element()
        .find_descendants(&Query::parse("h2.modal__title").unwrap(), true);
    assert_eq!(titles.len(), 1);
}

#[test]
fn widgets_compose_as_children() {
    let mut inner = Tabs::new()
        .pane("One", Element::new("p").text("1"))
        .pane("Two", Element::new("p").text("2"));
    inner.render();

    let mut card = Card::new().title("Wrapper").body(inner.element().clone());
    let html = card.render();

    assert_once(&html, r#"role="tablist""#);
    assert!(html.contains("card__body"));
}

#[test]
fn tooltip_ids_are_stable_across_rebuilds() {
    let mut tooltip = Tooltip::new("t", "tip");
    let first = tooltip.render();
    tooltip.mark_for_rebuild();
    let second = tooltip.render();
    assert_eq!(first, second);
}
