//! Preview rendering
//!
//! The session only knows the two seams defined here: a pure text to HTML
//! [`Renderer`] and a [`PreviewSurface`] that displays the result.

pub mod markdown;
pub mod surface;

pub use markdown::MarkdownRenderer;
pub use surface::{ElementSurface, RecordingSurface};

/// Pure function of buffer text to preview HTML
pub trait Renderer {
    fn render(&self, text: &str) -> String;
}

/// Where rendered HTML ends up
pub trait PreviewSurface {
    fn show(&mut self, html: &str);
}

impl<F> Renderer for F
where
    F: Fn(&str) -> String,
{
    fn render(&self, text: &str) -> String {
        self(text)
    }
}
