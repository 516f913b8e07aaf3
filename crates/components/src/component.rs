//! The component contract: dirty tracking and rebuild-on-demand rendering.

use telaio_markup::Element;
use tracing::debug;

/// A stateful widget that regenerates its markup from option state.
///
/// A component's wrapper element never escapes its own text children, and its
/// kind name is guaranteed present as a base CSS class exactly once no matter
/// how many rebuilds run: [`Component::rebuild`] replaces children only,
/// never the wrapper's attributes. Implementations must make `rebuild` total:
/// discard all children and regenerate them, rather than patching.
pub trait Component {
    /// The component kind name, doubling as the wrapper's base CSS class.
    fn kind(&self) -> &'static str;

    /// The wrapper element.
    fn element(&self) -> &Element;

    /// The wrapper element, mutably.
    fn element_mut(&mut self) -> &mut Element;

    /// Fully regenerate the wrapper's children from option state.
    fn rebuild(&mut self);

    /// Mark the component dirty so the next render regenerates children.
    fn mark_for_rebuild(&mut self) {
        self.element_mut().mark_for_rebuild();
    }

    /// Render to HTML, running [`Component::rebuild`] first when dirty.
    ///
    /// The rebuild hook runs to completion before serialization and fires at
    /// most once per dirty marking: repeated renders without intervening
    /// mutation serialize the existing tree.
    fn render(&mut self) -> String {
        if self.element().needs_rebuild() {
            debug!(kind = self.kind(), "rebuilding component");
            self.rebuild();
            self.element_mut().clear_rebuild();
        }
        self.element().render()
    }
}

/// A fresh wrapper element for a component kind: a non-escaping `div`
/// carrying the kind as its base class, born dirty so the first render
/// builds the children.
pub fn wrapper(kind: &str) -> Element {
    let mut element = Element::with_escaping("div", false);
    element.add_class(kind);
    element.mark_for_rebuild();
    element
}

#[cfg(test)]
// Tests are allowed to use unwrap/expect freely.
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    struct Stub {
        element: Element,
        rebuilds: usize,
    }

    impl Component for Stub {
        fn kind(&self) -> &'static str {
            "stub"
        }

        fn element(&self) -> &Element {
            &self.element
        }

        fn element_mut(&mut self) -> &mut Element {
            &mut self.element
        }

        fn rebuild(&mut self) {
            self.rebuilds += 1;
            let generation = self.rebuilds.to_string();
            self.element.set_content(Element::new("p").text(generation));
        }
    }

    #[test]
    fn test_first_render_rebuilds() {
        let mut stub = Stub {
            element: wrapper("stub"),
            rebuilds: 0,
        };
        let html = stub.render();
        assert_eq!(stub.rebuilds, 1);
        assert!(html.contains("<p>1</p>"));
    }

    #[test]
    fn test_rebuild_once_per_marking() {
        let mut stub = Stub {
            element: wrapper("stub"),
            rebuilds: 0,
        };
        stub.render();
        stub.render();
        stub.render();
        assert_eq!(stub.rebuilds, 1);

        stub.mark_for_rebuild();
        stub.render();
        stub.render();
        assert_eq!(stub.rebuilds, 2);
    }

    #[test]
    fn test_base_class_survives_rebuilds() {
        let mut stub = Stub {
            element: wrapper("stub"),
            rebuilds: 0,
        };
        for _ in 0..5 {
            stub.mark_for_rebuild();
            stub.render();
        }
        let html = stub.render();
        assert_eq!(html.matches("stub").count(), 1);
        assert!(html.starts_with(r#"<div class="stub">"#));
    }
}
