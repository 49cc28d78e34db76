//! Reading diff files into text.

use std::fs;
use std::path::Path;

use crate::error::BranchInvError;
use crate::options::DecodePolicy;
use crate::Result;

use super::filter::DIFF_SUFFIX;

/// Read a diff file and decode it according to `policy`.
///
/// Under [`DecodePolicy::Lossy`] invalid UTF-8 is replaced with U+FFFD, so
/// binary or mis-encoded diffs never abort a scan.
pub fn read_diff(path: impl AsRef<Path>, policy: DecodePolicy) -> Result<String> {
    let path = path.as_ref();

    let bytes = fs::read(path).map_err(|e| BranchInvError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    match policy {
        DecodePolicy::Lossy => Ok(String::from_utf8_lossy(&bytes).into_owned()),
        DecodePolicy::Strict => String::from_utf8(bytes).map_err(|_| BranchInvError::InvalidUtf8 {
            path: path.to_path_buf(),
        }),
    }
}

/// Derive the branch label shown for a diff file name.
///
/// Every occurrence of `.diff` is removed, not just the suffix, so
/// `fix.diffing.diff` becomes `fixing`.
pub fn branch_label(file_name: &str) -> String {
    file_name.replace(DIFF_SUFFIX, "")
}
