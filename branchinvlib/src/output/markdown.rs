//! Markdown rendering of a branch inventory.

use std::io::{self, Write};
use std::path::Path;

use crate::data::scan::scan_directory;
use crate::data::summary::{BranchReport, Inventory};
use crate::options::ScanOptions;
use crate::Result;

/// Document title, first line of every report.
pub const REPORT_TITLE: &str = "# Branch Analysis Inventory";

/// How many modified paths are listed per branch before truncating.
pub const TOP_FILES_LIMIT: usize = 10;

/// Write the full report: the title, then one section per branch in
/// inventory order.
pub fn write_markdown<W: Write>(inventory: &Inventory, mut out: W) -> io::Result<()> {
    writeln!(out, "{REPORT_TITLE}")?;
    writeln!(out)?;

    for branch in &inventory.branches {
        write_branch(branch, &mut out)?;
    }

    Ok(())
}

/// Write a single branch section, including its trailing rule.
pub fn write_branch<W: Write>(branch: &BranchReport, mut out: W) -> io::Result<()> {
    let summary = &branch.summary;

    writeln!(out, "## Branch: `{}`", branch.label)?;
    writeln!(out, "- **Files Changed:** {}", summary.files_changed())?;
    writeln!(out, "- **Lines Added:** {}", summary.added_lines)?;
    writeln!(out, "- **Lines Removed:** {}", summary.removed_lines)?;

    writeln!(out, "### Key Entities Detected:")?;
    for (keyword, count) in summary.keyword_counts.detected() {
        writeln!(out, "- `{keyword}`: {count}")?;
    }

    writeln!(out)?;
    writeln!(out, "### Modified Files (Top {TOP_FILES_LIMIT}):")?;
    let (shown, hidden) = summary.top_files(TOP_FILES_LIMIT);
    for path in shown {
        writeln!(out, "- {path}")?;
    }
    if hidden > 0 {
        writeln!(out, "- ... and {hidden} more")?;
    }

    writeln!(out)?;
    writeln!(out, "---")?;
    writeln!(out)?;

    Ok(())
}

/// Render the report into a string.
pub fn render_markdown(inventory: &Inventory) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail
    let _ = write_markdown(inventory, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Scan `path` with default options and render the report.
///
/// # Example
///
/// ```rust
/// use branchinvlib::generate;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// let report = generate(dir.path()).unwrap();
/// assert_eq!(report, "# Branch Analysis Inventory\n\n");
/// ```
pub fn generate(path: impl AsRef<Path>) -> Result<String> {
    generate_with(path, ScanOptions::new())
}

/// Scan `path` with `options` and render the report.
pub fn generate_with(path: impl AsRef<Path>, options: ScanOptions) -> Result<String> {
    let inventory = scan_directory(path, options)?;
    Ok(render_markdown(&inventory))
}
