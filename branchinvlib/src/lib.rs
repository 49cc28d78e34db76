//! # branchinvlib
//!
//! Scan a directory of branch diffs and summarize what each branch touches.
//!
//! ## Overview
//!
//! Each `*.diff` file in a directory is treated as one branch. For every
//! branch the library records:
//!
//! - **Files**: Paths from `+++ b/<path>` headers, in order, duplicates kept
//! - **Added lines**: Lines starting with `+` (but not `+++`)
//! - **Removed lines**: Lines starting with `-` (but not `---`)
//! - **Keywords**: Hits of `TODO`, `FIXME`, `SECRET`, `class `, `function `
//!   and `interface ` on added lines
//!
//! Parsing is permissive. No diff grammar is enforced, so malformed input
//! yields empty or zero fields rather than errors.
//!
//! ## Pipeline
//!
//! 1. [`source`]: discover `*.diff` entries and decode their bytes
//! 2. [`data`]: analyze each diff into a [`DiffSummary`]
//! 3. [`output`]: render the [`Inventory`] as Markdown
//!
//! ## Example
//!
//! ```rust
//! use branchinvlib::{analyze, render_markdown, scan_directory, Keyword, ScanOptions};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! // Analyze diff text directly
//! let summary = analyze("+++ b/src/app.ts\n+export class App {}\n-// old\n");
//! assert_eq!(summary.files, vec!["src/app.ts"]);
//! assert_eq!(summary.keyword_counts.get(Keyword::Class), 1);
//!
//! // Scan a directory of branch diffs
//! let dir = tempdir().unwrap();
//! fs::write(dir.path().join("feature-login.diff"), "+++ b/login.rs\n+// FIXME\n").unwrap();
//!
//! let inventory = scan_directory(dir.path(), ScanOptions::new().sorted(true)).unwrap();
//! let report = render_markdown(&inventory);
//! assert!(report.contains("## Branch: `feature-login`"));
//! assert!(report.contains("- `FIXME`: 1"));
//! ```

pub mod data;
pub mod error;
pub mod options;
pub mod output;
pub mod source;

pub use data::{
    analyze, analyze_file, scan_directory, BranchReport, DiffSummary, Inventory, Keyword,
    KeywordCounts, LineKind,
};
pub use error::BranchInvError;
pub use options::{DecodePolicy, ListingOrder, ScanOptions};
pub use output::{generate, generate_with, render_markdown, write_markdown};
pub use source::{branch_label, discover_diff_files, read_diff, FilterConfig};

/// Result type for branchinvlib operations
pub type Result<T> = std::result::Result<T, BranchInvError>;
