//! Modal dialog widget.

use serde::{Deserialize, Serialize};
use telaio_markup::{Child, Element};
use uuid::Uuid;

use crate::component::{Component, wrapper};

/// Modal size variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModalSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ModalSize {
    fn as_class(self) -> &'static str {
        match self {
            ModalSize::Small => "modal--small",
            ModalSize::Medium => "modal--medium",
            ModalSize::Large => "modal--large",
        }
    }
}

/// A dialog overlay with title, body, and action row.
///
/// The wrapper carries `role="dialog"`, `aria-modal`, and an
/// `aria-labelledby` reference to the generated title id; the id is minted
/// once at construction and stable across rebuilds.
#[derive(Debug, Clone)]
pub struct Modal {
    element: Element,
    id: String,
    title: String,
    body: Vec<Child>,
    actions: Vec<Element>,
    dismissible: bool,
    size: ModalSize,
}

impl Modal {
    /// Create a modal with a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            element: wrapper("modal"),
            id: format!("modal-{}", Uuid::now_v7()),
            title: title.into(),
            body: Vec::new(),
            actions: Vec::new(),
            dismissible: true,
            size: ModalSize::Medium,
        }
    }

    /// The modal's generated id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Append a child to the modal body.
    pub fn body(mut self, child: impl Into<Child>) -> Self {
        self.body.push(child.into());
        self.element.mark_for_rebuild();
        self
    }

    /// Append an action element (typically a button) to the footer.
    pub fn action(mut self, action: Element) -> Self {
        self.actions.push(action);
        self.element.mark_for_rebuild();
        self
    }

    /// Hide the close button.
    pub fn not_dismissible(mut self) -> Self {
        self.dismissible = false;
        self.element.mark_for_rebuild();
        self
    }

    /// Set the size variant.
    pub fn size(mut self, size: ModalSize) -> Self {
        self.size = size;
        self.element.mark_for_rebuild();
        self
    }
}

impl Component for Modal {
    fn kind(&self) -> &'static str {
        "modal"
    }

    fn element(&self) -> &Element {
        &self.element
    }

    fn element_mut(&mut self) -> &mut Element {
        &mut self.element
    }

    fn rebuild(&mut self) {
        let title_id = format!("{}-title", self.id);

        // Wrapper wiring is idempotent; the size class swaps in place.
        self.element.set_attribute("id", self.id.as_str());
        self.element.set_attribute("role", "dialog");
        self.element.set_attribute("aria-modal", "true");
        self.element.set_attribute("aria-labelledby", title_id.as_str());
        self.element.set_attribute("tabindex", "-1");
        self.element.remove_class_if(|token| token.starts_with("modal--"));
        self.element.add_class(self.size.as_class());

        let mut header = Element::new("header").class("modal__header").child(
            Element::new("h2")
                .class("modal__title")
                .attr("id", title_id.as_str())
                .text(self.title.clone()),
        );
        if self.dismissible {
            header.add_child(
                Element::with_escaping("button", true)
                    .class("modal__close")
                    .attr("type", "button")
                    .attr("aria-label", "Close")
                    .attr("data-modal-close", self.id.as_str())
                    .text("\u{00d7}"),
            );
        }

        let mut body = Element::new("div").class("modal__body");
        for child in &self.body {
            body.add_child(child.clone());
        }

        let mut content = Element::new("div")
            .class("modal__content")
            .child(header)
            .child(body);

        if !self.actions.is_empty() {
            let mut footer = Element::new("footer").class("modal__footer");
            for action in &self.actions {
                footer.add_child(action.clone());
            }
            content.add_child(footer);
        }

        let dialog = Element::new("div").class("modal__dialog").child(content);
        self.element.set_children([dialog.into()]);
    }
}
