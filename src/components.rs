//! Reusable HTML components for the application shell
//!
//! This module provides the Maud components every page is rendered
//! through: the root document layout and the static page metadata that
//! populates the document head.

pub mod layout;
pub mod metadata;
