//! Markdown rendering with GitHub Flavored Markdown support.

use comrak::Options;

/// Renders markdown to HTML with GitHub Flavored Markdown extensions.
///
/// Enables tables, strikethrough, autolinks, task lists and footnotes.
/// Raw HTML in the source is passed through, since page content is
/// authored by the application itself.
pub struct MarkdownRenderer<'a> {
    options: Options<'a>,
}

impl<'a> MarkdownRenderer<'a> {
    /// Creates renderer with GitHub Flavored Markdown options.
    pub fn new() -> Self {
        let mut options = Options::default();

        options.extension.strikethrough = true;
        options.extension.table = true;
        options.extension.autolink = true;
        options.extension.tasklist = true;
        options.extension.footnotes = true;

        options.parse.smart = true;

        options.render.unsafe_ = true;

        Self { options }
    }

    /// Renders markdown content to an HTML string.
    pub fn render(&self, content: &str) -> String {
        comrak::markdown_to_html(content, &self.options)
    }
}

impl Default for MarkdownRenderer<'_> {
    fn default() -> Self {
        Self::new()
    }
}
