//! Line-oriented analysis of unified diff text.
//!
//! The analyzer is permissive: it does not validate diff
//! grammar. Two prefix rules classify lines, and a header pattern picks out
//! changed-file paths. Anything else is ignored, so malformed or truncated
//! input simply yields fewer counts.

use std::sync::LazyLock;

use regex::Regex;

use super::summary::DiffSummary;

/// `+++ b/<path>` header, path captured to end of line.
static FILE_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+\+\+ b/(.+)$").expect("file header pattern is valid"));

/// How a single diff line is counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `+` but not `+++`
    Added,
    /// `-` but not `---`
    Removed,
    /// Context, headers, hunk markers, blanks
    Other,
}

impl LineKind {
    pub fn classify(line: &str) -> Self {
        if line.starts_with('+') && !line.starts_with("+++") {
            LineKind::Added
        } else if line.starts_with('-') && !line.starts_with("---") {
            LineKind::Removed
        } else {
            LineKind::Other
        }
    }
}

/// Extract the changed-file path from a `+++ b/<path>` line.
pub fn file_header_path(line: &str) -> Option<&str> {
    FILE_HEADER
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Analyze the full text of one diff file.
///
/// Lines are split on `\n` (a preceding `\r` is dropped) and a final line
/// without a terminator still counts. Keyword needles are matched against
/// the whole added line, leading `+` included.
///
/// # Example
///
/// ```rust
/// use branchinvlib::{analyze, Keyword};
///
/// let diff = "+++ b/a.py\n+TODO: fix\n+function foo() {}\n-old line\n unchanged\n";
/// let summary = analyze(diff);
///
/// assert_eq!(summary.files, vec!["a.py"]);
/// assert_eq!(summary.added_lines, 2);
/// assert_eq!(summary.removed_lines, 1);
/// assert_eq!(summary.keyword_counts.get(Keyword::Todo), 1);
/// assert_eq!(summary.keyword_counts.get(Keyword::Function), 1);
/// ```
pub fn analyze(content: &str) -> DiffSummary {
    let mut summary = DiffSummary::new();

    for line in content.lines() {
        if let Some(path) = file_header_path(line) {
            summary.files.push(path.to_string());
        }

        match LineKind::classify(line) {
            LineKind::Added => {
                summary.added_lines += 1;
                summary.keyword_counts.record_line(line);
            }
            LineKind::Removed => summary.removed_lines += 1,
            LineKind::Other => {}
        }
    }

    summary
}
