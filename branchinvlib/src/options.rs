//! Input options for scanning a diff directory.
//!
//! This module contains the configuration types that control which diff
//! files are picked up, in what order, and how their bytes become text.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::source::filter::FilterConfig;

/// Order in which diff files are processed and reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ListingOrder {
    /// Whatever order the directory listing yields. Not stable across
    /// filesystems or runs.
    #[default]
    AsListed,
    /// Sorted by file name
    ByName,
}

impl FromStr for ListingOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "listed" | "as-listed" | "none" => Ok(ListingOrder::AsListed),
            "name" | "by-name" | "sorted" => Ok(ListingOrder::ByName),
            _ => Err(format!("Unknown listing order: {}", s)),
        }
    }
}

/// What to do with byte sequences that are not valid UTF-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DecodePolicy {
    /// Replace invalid sequences with U+FFFD and keep going
    #[default]
    Lossy,
    /// Fail the read with [`crate::BranchInvError::InvalidUtf8`]
    Strict,
}

/// Options for scanning a diff directory.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// File name filter applied after the `.diff` suffix check
    pub file_filter: FilterConfig,
    /// Processing order
    pub order: ListingOrder,
    /// Decoding applied when reading each diff
    pub decoding: DecodePolicy,
}

impl ScanOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set file name filter.
    pub fn filter(mut self, filter: FilterConfig) -> Self {
        self.file_filter = filter;
        self
    }

    /// Set processing order.
    pub fn order(mut self, order: ListingOrder) -> Self {
        self.order = order;
        self
    }

    /// Shorthand for `order(ListingOrder::ByName)` when `sorted` is true.
    pub fn sorted(self, sorted: bool) -> Self {
        self.order(if sorted {
            ListingOrder::ByName
        } else {
            ListingOrder::AsListed
        })
    }

    /// Set decode policy.
    pub fn decoding(mut self, policy: DecodePolicy) -> Self {
        self.decoding = policy;
        self
    }
}
