//! Markdown to HTML with comrak.

use comrak::{markdown_to_html, Options};

use super::Renderer;

/// CommonMark + GFM renderer for the preview pane
///
/// Raw HTML passes through, bare URLs are linkified and quotes/dashes are
/// typographically replaced. Code blocks carry the `hljs` class so the
/// page's highlighter can pick them up.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    pub fn new() -> Self {
        MarkdownRenderer
    }
}

impl Renderer for MarkdownRenderer {
    fn render(&self, text: &str) -> String {
        let mut options = Options::default();

        // GFM extensions
        options.extension.strikethrough = true;
        options.extension.table = true;
        options.extension.autolink = true;
        options.extension.tasklist = true;

        options.parse.smart = true;
        options.render.unsafe_ = true;

        markdown_to_html(text, &options).replace("<pre><code", "<pre class=\"hljs\"><code")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_heading_and_emphasis() {
        let html = MarkdownRenderer::new().render("# Title\n\nsome **bold** text");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn test_code_block_gets_hljs_class() {
        let html = MarkdownRenderer::new().render("```python\nprint(1 < 2)\n```\n");
        assert!(html.contains("<pre class=\"hljs\"><code class=\"language-python\">"));
        assert!(html.contains("1 &lt; 2"));
    }

    #[test]
    fn test_linkify_and_raw_html() {
        let html = MarkdownRenderer::new().render("see https://example.com\n\n<div>raw</div>\n");
        assert!(html.contains("<a href=\"https://example.com\">"));
        assert!(html.contains("<div>raw</div>"));
    }

    #[test]
    fn test_empty_text() {
        assert!(MarkdownRenderer::new().render("").trim().is_empty());
    }
}
