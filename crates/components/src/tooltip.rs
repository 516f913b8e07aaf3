//! Tooltip widget: a trigger with an attached tip.

use serde::{Deserialize, Serialize};
use telaio_markup::{Child, Element};
use uuid::Uuid;

use crate::component::{Component, wrapper};

/// Tip placement relative to the trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

impl Placement {
    fn as_suffix(self) -> &'static str {
        match self {
            Placement::Top => "top",
            Placement::Bottom => "bottom",
            Placement::Left => "left",
            Placement::Right => "right",
        }
    }
}

/// A hover/focus tip attached to inline content.
///
/// The trigger references the tip via `aria-describedby`; the tip id is
/// minted once at construction and stable across rebuilds.
#[derive(Debug, Clone)]
pub struct Tooltip {
    element: Element,
    id: String,
    trigger: Child,
    tip: String,
    placement: Placement,
}

impl Tooltip {
    /// Create a tooltip around trigger content.
    pub fn new(trigger: impl Into<Child>, tip: impl Into<String>) -> Self {
        Self {
            element: wrapper("tooltip"),
            id: format!("tooltip-{}", Uuid::now_v7()),
            trigger: trigger.into(),
            tip: tip.into(),
            placement: Placement::Top,
        }
    }

    /// Set the tip placement.
    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self.element.mark_for_rebuild();
        self
    }
}

impl Component for Tooltip {
    fn kind(&self) -> &'static str {
        "tooltip"
    }

    fn element(&self) -> &Element {
        &self.element
    }

    fn element_mut(&mut self) -> &mut Element {
        &mut self.element
    }

    fn rebuild(&mut self) {
        let trigger = Element::new("span")
            .class("tooltip__trigger")
            .attr("tabindex", "0")
            .attr("aria-describedby", self.id.as_str())
            .child(self.trigger.clone());

        let tip = Element::new("span")
            .class("tooltip__tip")
            .class(&format!("tooltip__tip--{}", self.placement.as_suffix()))
            .attr("role", "tooltip")
            .attr("id", self.id.as_str())
            .text(self.tip.clone());

        self.element.set_children([trigger.into(), tip.into()]);
    }
}
