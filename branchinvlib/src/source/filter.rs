//! Diff file discovery with glob pattern support.
//!
//! Discovery looks at a single directory level and picks entries whose name
//! ends with `.diff`. Optional include/exclude globs are matched against the
//! entry's file name, not its full path.

use std::path::{Path, PathBuf};

use glob::Pattern;
use tracing::debug;
use walkdir::WalkDir;

use crate::error::BranchInvError;
use crate::options::ListingOrder;
use crate::Result;

/// Suffix that marks an entry as a branch diff.
pub const DIFF_SUFFIX: &str = ".diff";

/// Configuration for file name filtering.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Glob patterns to include (if empty, include all .diff files)
    pub include: Vec<Pattern>,
    /// Glob patterns to exclude
    pub exclude: Vec<Pattern>,
}

impl FilterConfig {
    /// Create a new empty filter config (includes all .diff files).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an include pattern.
    pub fn include(mut self, pattern: &str) -> Result<Self> {
        self.include.push(compile(pattern)?);
        Ok(self)
    }

    /// Add an exclude pattern.
    pub fn exclude(mut self, pattern: &str) -> Result<Self> {
        self.exclude.push(compile(pattern)?);
        Ok(self)
    }

    /// True when no patterns are configured.
    pub fn is_empty(&self) -> bool {
        self.include.is_empty() && self.exclude.is_empty()
    }

    /// Check if a file name matches the filter criteria.
    ///
    /// A name matches if:
    /// 1. It ends with `.diff`
    /// 2. It doesn't match any exclude pattern
    /// 3. It matches at least one include pattern (or include is empty)
    pub fn matches(&self, file_name: &str) -> bool {
        if !file_name.ends_with(DIFF_SUFFIX) {
            return false;
        }

        if self.exclude.iter().any(|p| p.matches(file_name)) {
            return false;
        }

        self.include.is_empty() || self.include.iter().any(|p| p.matches(file_name))
    }
}

fn compile(pattern: &str) -> Result<Pattern> {
    Pattern::new(pattern).map_err(|e| BranchInvError::InvalidGlob {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })
}

/// Discover diff files directly inside `root`.
///
/// Selection is by name only, so an entry such as a directory named
/// `x.diff` is returned too and will fail when read. With
/// [`ListingOrder::AsListed`] the result follows the directory listing.
pub fn discover_diff_files(
    root: impl AsRef<Path>,
    filter: &FilterConfig,
    order: ListingOrder,
) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();

    if !root.exists() {
        return Err(BranchInvError::PathNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(BranchInvError::NotADirectory(root.to_path_buf()));
    }

    let mut walker = WalkDir::new(root).min_depth(1).max_depth(1);
    if order == ListingOrder::ByName {
        walker = walker.sort_by_file_name();
    }

    let mut files = Vec::new();

    for entry in walker {
        let entry = entry.map_err(std::io::Error::from)?;
        let name = entry.file_name().to_string_lossy().into_owned();

        if filter.matches(&name) {
            debug!(file = %name, "selected diff file");
            files.push(entry.into_path());
        }
    }

    Ok(files)
}
