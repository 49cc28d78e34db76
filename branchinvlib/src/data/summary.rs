//! Per-file statistics produced by the analyzer.

use serde::Serialize;
use std::path::PathBuf;

use super::keyword::KeywordCounts;

/// Statistics for a single diff file.
///
/// Built in one pass over the file's lines and not mutated afterwards.
/// `added_lines` and `removed_lines` are counted independently of `files`;
/// a line contributes to at most one of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiffSummary {
    /// Paths from `+++ b/<path>` headers, in order of appearance, duplicates kept
    pub files: Vec<String>,
    /// Lines starting with `+` but not `+++`
    pub added_lines: u64,
    /// Lines starting with `-` but not `---`
    pub removed_lines: u64,
    /// Keyword hits on added lines
    pub keyword_counts: KeywordCounts,
}

impl DiffSummary {
    /// Create an empty summary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of changed-file headers seen (duplicates included).
    pub fn files_changed(&self) -> usize {
        self.files.len()
    }

    /// The first `limit` paths, plus how many were left out.
    pub fn top_files(&self, limit: usize) -> (&[String], usize) {
        let shown = self.files.len().min(limit);
        (&self.files[..shown], self.files.len() - shown)
    }
}

/// One section of the inventory: a diff file and what was found in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BranchReport {
    /// Display name derived from the diff file name
    pub label: String,
    /// Location of the diff file
    pub path: PathBuf,
    pub summary: DiffSummary,
}

impl BranchReport {
    pub fn new(label: impl Into<String>, path: impl Into<PathBuf>, summary: DiffSummary) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
            summary,
        }
    }
}

/// Result of scanning a diff directory.
///
/// Branches are kept in processing order. There are no cross-branch totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Inventory {
    pub branches: Vec<BranchReport>,
}

impl Inventory {
    /// Create a new empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, branch: BranchReport) {
        self.branches.push(branch);
    }

    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }

    pub fn len(&self) -> usize {
        self.branches.len()
    }
}
