//! Root document layout and page metadata for the CloudReady ERP Scorecard.

pub mod components;
mod config;
mod content;
mod logging;
mod markdown;

pub use components::layout::{Body, DOCUMENT_LANG, Document, render_page, root_layout};
pub use components::metadata::{METADATA, Metadata, metadata};
pub use config::{Config, OUTPUT_FILE_NAME};
pub use content::{ContentFormat, content_node, load_content};
pub use logging::init_logging;
pub use markdown::MarkdownRenderer;
