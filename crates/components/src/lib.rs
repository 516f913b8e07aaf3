//! Telaio UI components.
//!
//! Pre-built widgets (card, modal, tabs, accordion, progress bar, datepicker,
//! tooltip) on top of `telaio-markup`. Each widget holds option state next to
//! its wrapper element; mutating an option marks the wrapper dirty, and the
//! next render discards and regenerates every child from that state. Rebuilds
//! are total and idempotent; there is no incremental patching.

pub mod accordion;
pub mod card;
pub mod component;
pub mod datepicker;
pub mod error;
pub mod modal;
pub mod progress;
pub mod tabs;
pub mod tooltip;

pub use accordion::{Accordion, AccordionSection};
pub use card::Card;
pub use component::Component;
pub use datepicker::Datepicker;
pub use error::ComponentError;
pub use modal::{Modal, ModalSize};
pub use progress::ProgressBar;
pub use tabs::{TabPane, Tabs};
pub use tooltip::{Placement, Tooltip};
