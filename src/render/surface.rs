//! Preview surfaces

use std::cell::RefCell;
use std::rc::Rc;

use super::PreviewSurface;

/// DOM element whose `innerHTML` receives the preview
pub struct ElementSurface {
    element: web_sys::Element,
}

impl ElementSurface {
    pub fn new(element: web_sys::Element) -> Self {
        Self { element }
    }
}

impl PreviewSurface for ElementSurface {
    fn show(&mut self, html: &str) {
        self.element.set_inner_html(html);
    }
}

/// In-memory surface that keeps every frame it was shown
///
/// Clones share the same frame list. Used by native hosts and tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    frames: Rc<RefCell<Vec<String>>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently shown HTML
    pub fn last(&self) -> Option<String> {
        self.frames.borrow().last().cloned()
    }

    /// Number of renders shown so far
    pub fn count(&self) -> usize {
        self.frames.borrow().len()
    }
}

impl PreviewSurface for RecordingSurface {
    fn show(&mut self, html: &str) {
        self.frames.borrow_mut().push(html.to_string());
    }
}
