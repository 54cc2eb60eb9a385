//! Content node loading for page bodies.
//!
//! Builds the opaque content node handed to the root layout from page
//! source files. Format is picked from the file extension unless the
//! caller overrides it.

use anyhow::{Context, Result};
use clap::ValueEnum;
use maud::{Markup, PreEscaped, html};
use std::fs;
use std::path::Path;

use crate::markdown::MarkdownRenderer;

/// Source format of page content
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ContentFormat {
    /// Plain text, escaped before embedding
    Text,
    /// Pre-rendered HTML fragment, embedded verbatim
    Html,
    /// Markdown rendered with GitHub Flavored Markdown extensions
    Markdown,
}

impl ContentFormat {
    /// Detects content format from file extension.
    ///
    /// Extension matching is case insensitive. Files without a known
    /// extension are treated as plain text.
    pub fn detect(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);

        match ext.as_deref() {
            Some("md" | "markdown") => Self::Markdown,
            Some("html" | "htm") => Self::Html,
            _ => Self::Text,
        }
    }
}

/// Builds a content node from source text
///
/// # Arguments
///
/// * `source`: Page content in the given format
/// * `format`: How `source` is turned into markup
///
/// # Returns
///
/// Content node ready for the root layout
pub fn content_node(source: &str, format: ContentFormat) -> Markup {
    match format {
        ContentFormat::Text => html! { (source) },
        ContentFormat::Html => PreEscaped(source.to_string()),
        ContentFormat::Markdown => PreEscaped(MarkdownRenderer::new().render(source)),
    }
}

/// Reads a page source file and builds its content node.
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid UTF8.
pub fn load_content(path: impl AsRef<Path>, format: Option<ContentFormat>) -> Result<Markup> {
    let path = path.as_ref();
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read content file: {}", path.display()))?;

    let format = format.unwrap_or_else(|| ContentFormat::detect(path));
    tracing::debug!(path = %path.display(), ?format, "loaded page content");

    Ok(content_node(&source, format))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_detect_markdown() {
        assert_eq!(
            ContentFormat::detect(Path::new("page.md")),
            ContentFormat::Markdown
        );
        assert_eq!(
            ContentFormat::detect(Path::new("docs/README.MARKDOWN")),
            ContentFormat::Markdown
        );
    }

    #[test]
    fn test_detect_html() {
        assert_eq!(
            ContentFormat::detect(Path::new("dashboard.html")),
            ContentFormat::Html
        );
        assert_eq!(
            ContentFormat::detect(Path::new("Dashboard.HTM")),
            ContentFormat::Html
        );
    }

    #[test]
    fn test_detect_text_fallback() {
        assert_eq!(
            ContentFormat::detect(Path::new("notes.txt")),
            ContentFormat::Text
        );
        assert_eq!(
            ContentFormat::detect(&PathBuf::from("Makefile")),
            ContentFormat::Text
        );
    }

    #[test]
    fn test_content_node_text_is_escaped() {
        // Arrange
        let source = "Score < 50 & falling";

        // Act
        let node = content_node(source, ContentFormat::Text);

        // Assert
        assert_eq!(node.into_string(), "Score &lt; 50 &amp; falling");
    }

    #[test]
    fn test_content_node_html_is_verbatim() {
        // Arrange
        let source = r#"<section id="gates"><p>G1</p></section>"#;

        // Act
        let node = content_node(source, ContentFormat::Html);

        // Assert
        assert_eq!(node.into_string(), source);
    }

    #[test]
    fn test_content_node_markdown_is_rendered() {
        // Arrange
        let source = "## Pillars\n\n*P1* ready";

        // Act
        let node = content_node(source, ContentFormat::Markdown).into_string();

        // Assert
        assert!(node.contains("<h2>Pillars</h2>"));
        assert!(node.contains("<em>P1</em>"));
    }

    #[test]
    fn test_content_node_empty_text() {
        // Arrange & Act
        let node = content_node("", ContentFormat::Text);

        // Assert
        assert!(node.into_string().is_empty());
    }

    #[test]
    fn test_load_content_missing_file() {
        // Arrange
        let path = PathBuf::from("/nonexistent/page-that-does-not-exist.md");

        // Act
        let result = load_content(&path, None);

        // Assert
        let err = result.expect_err("Missing file should fail");
        assert!(format!("{:#}", err).contains("page-that-does-not-exist.md"));
    }
}
