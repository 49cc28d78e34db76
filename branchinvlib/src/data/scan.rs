//! High-level scanning API.
//!
//! Ties discovery, reading and analysis together: one [`BranchReport`] per
//! diff file, in processing order. The first failure aborts the scan.

use std::path::Path;

use tracing::{debug, info};

use crate::options::{DecodePolicy, ScanOptions};
use crate::source::filter::discover_diff_files;
use crate::source::reader::{branch_label, read_diff};
use crate::Result;

use super::analyzer::analyze;
use super::summary::{BranchReport, DiffSummary, Inventory};

/// Scan a directory of branch diffs.
///
/// # Example
///
/// ```rust
/// use branchinvlib::{scan_directory, ScanOptions};
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// fs::write(dir.path().join("main.diff"), "+++ b/src/lib.rs\n+// TODO\n").unwrap();
/// fs::write(dir.path().join("README.md"), "ignored").unwrap();
///
/// let inventory = scan_directory(dir.path(), ScanOptions::new()).unwrap();
/// assert_eq!(inventory.len(), 1);
/// assert_eq!(inventory.branches[0].label, "main");
/// assert_eq!(inventory.branches[0].summary.added_lines, 1);
/// ```
pub fn scan_directory(path: impl AsRef<Path>, options: ScanOptions) -> Result<Inventory> {
    let path = path.as_ref();
    let files = discover_diff_files(path, &options.file_filter, options.order)?;

    let mut inventory = Inventory::new();

    for file_path in files {
        let file_name = file_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let summary = analyze_file(&file_path, options.decoding)?;

        debug!(
            branch = %file_name,
            files = summary.files_changed(),
            added = summary.added_lines,
            removed = summary.removed_lines,
            "analyzed diff"
        );

        inventory.push(BranchReport::new(branch_label(&file_name), file_path, summary));
    }

    info!(dir = %path.display(), branches = inventory.len(), "scan complete");

    Ok(inventory)
}

/// Read and analyze a single diff file.
pub fn analyze_file(path: impl AsRef<Path>, policy: DecodePolicy) -> Result<DiffSummary> {
    let content = read_diff(path, policy)?;
    Ok(analyze(&content))
}
