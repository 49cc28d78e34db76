//! Output formatting: present an inventory as Markdown.
//!
//! This module handles the final stage of the pipeline - rendering scanned
//! branches into the inventory report. It provides:
//!
//! - **write_markdown**: Stream the report to any `io::Write`
//! - **render_markdown**: Same report as a `String`
//! - **generate**: Scan a directory and render in one call
//!
//! Rendering is pure presentation. Keyword order, truncation of the file
//! list and the choice of which keywords to show are the only decisions made
//! here.

pub mod markdown;

pub use markdown::{
    generate, generate_with, render_markdown, write_branch, write_markdown, REPORT_TITLE,
    TOP_FILES_LIMIT,
};
