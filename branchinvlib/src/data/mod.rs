//! Data collection: analyze diffs and collect statistics.
//!
//! This module handles the second stage of the pipeline - turning diff text
//! into per-branch statistics. It provides:
//!
//! - **Analysis**: Line classifier and file-header extraction (`analyze`)
//! - **Keywords**: The fixed, ordered keyword set (`Keyword`, `KeywordCounts`)
//! - **Statistics**: `DiffSummary`, `BranchReport`, `Inventory`
//! - **Scanning**: High-level API (`scan_directory`, `analyze_file`)
//!
//! ## Example
//!
//! ```rust,ignore
//! use branchinvlib::{scan_directory, ScanOptions};
//!
//! let inventory = scan_directory("docs/branch_diffs", ScanOptions::new())?;
//! println!("{} branches", inventory.len());
//! ```

pub mod analyzer;
pub mod keyword;
pub mod scan;
pub mod summary;

pub use analyzer::{analyze, file_header_path, LineKind};
pub use keyword::{Keyword, KeywordCounts};
pub use scan::{analyze_file, scan_directory};
pub use summary::{BranchReport, DiffSummary, Inventory};
