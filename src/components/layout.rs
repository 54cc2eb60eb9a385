//! Root document layout component

use maud::{DOCTYPE, Markup, Render, html};
use std::fmt;

use super::metadata::metadata;

/// Language tag applied to the root element of every document.
pub const DOCUMENT_LANG: &str = "en";

/// Document node produced by [`root_layout`].
///
/// Holds the language of the root element and the body node. The head is
/// not stored; it is derived from the static metadata record at render time.
#[derive(Clone)]
pub struct Document {
    lang: &'static str,
    body: Body,
}

/// Body node wrapping exactly one content node.
#[derive(Clone)]
pub struct Body {
    children: Markup,
}

/// Wraps page content in the shared document shell
///
/// The content node is moved into the body unchanged. Empty content is
/// valid and produces an empty body.
///
/// # Arguments
///
/// * `children`: Page specific content node
///
/// # Returns
///
/// Document node with `lang="en"` whose body holds `children`
pub fn root_layout(children: Markup) -> Document {
    Document {
        lang: DOCUMENT_LANG,
        body: Body { children },
    }
}

/// Renders page content to a complete HTML document string.
pub fn render_page(children: Markup) -> String {
    root_layout(children).render().into_string()
}

impl Document {
    pub fn lang(&self) -> &'static str {
        self.lang
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Consumes the document and returns the wrapped content node.
    pub fn into_children(self) -> Markup {
        self.body.children
    }
}

impl Body {
    pub fn children(&self) -> &Markup {
        &self.children
    }

    pub fn is_empty(&self) -> bool {
        self.children.0.is_empty()
    }
}

impl Render for Document {
    fn render(&self) -> Markup {
        html! {
            (DOCTYPE)
            html lang=(self.lang) {
                head {
                    (metadata().head())
                }
                (self.body)
            }
        }
    }
}

impl Render for Body {
    fn render(&self) -> Markup {
        html! {
            body { (self.children) }
        }
    }
}

impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        self.lang == other.lang && self.body == other.body
    }
}

impl Eq for Document {}

impl PartialEq for Body {
    fn eq(&self, other: &Self) -> bool {
        self.children.0 == other.children.0
    }
}

impl Eq for Body {}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("lang", &self.lang)
            .field("body", &self.body)
            .finish()
    }
}

impl fmt::Debug for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Body")
            .field("children", &self.children.0)
            .finish()
    }
}
