//! Source discovery: find and read the diffs to analyze.
//!
//! This module handles the first stage of the pipeline - discovering which
//! diff files to scan and turning their bytes into text. It provides:
//!
//! - **Discovery**: List `*.diff` entries in a directory, optionally filtered
//!   with glob patterns and sorted by name
//! - **Reading**: Decode file bytes with an explicit [`DecodePolicy`](crate::DecodePolicy)
//! - **Labels**: Derive the branch label shown in the report
//!
//! ## Example
//!
//! ```rust,ignore
//! use branchinvlib::source::{discover_diff_files, FilterConfig};
//! use branchinvlib::ListingOrder;
//!
//! let filter = FilterConfig::new().exclude("wip-*")?;
//! let files = discover_diff_files("docs/branch_diffs", &filter, ListingOrder::ByName)?;
//! ```

pub mod filter;
pub mod reader;

pub use filter::{discover_diff_files, FilterConfig, DIFF_SUFFIX};
pub use reader::{branch_label, read_diff};
