//! Application metadata components

use anyhow::{Result, bail};
use maud::{Markup, html};

/// Page level metadata shared by every page using the root layout.
///
/// The record is process wide static configuration. It is read when the
/// document head is rendered and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Metadata {
    title: &'static str,
    description: &'static str,
}

/// Root metadata for the CloudReady ERP Scorecard application.
pub const METADATA: Metadata = Metadata::new("Health Check V2", "CloudReady ERP Scorecard");

/// Returns the root metadata record.
pub fn metadata() -> &'static Metadata {
    &METADATA
}

impl Metadata {
    /// Creates a metadata record from static strings.
    pub const fn new(title: &'static str, description: &'static str) -> Self {
        Self { title, description }
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Checks that both fields carry content.
    ///
    /// # Errors
    ///
    /// Returns error naming the first field that is empty or whitespace only.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            bail!("Metadata title must not be empty");
        }
        if self.description.trim().is_empty() {
            bail!("Metadata description must not be empty");
        }

        Ok(())
    }

    /// Renders document head elements for this record
    ///
    /// Emits charset and viewport declarations followed by the page title
    /// and description. Values are escaped by maud.
    ///
    /// # Returns
    ///
    /// Head element children markup
    pub fn head(&self) -> Markup {
        html! {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            title { (self.title) }
            meta name="description" content=(self.description);
        }
    }
}
