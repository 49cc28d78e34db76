//! The fixed keyword set counted on added lines.
//!
//! Keywords are plain, case-sensitive substrings. Their declaration order is
//! significant: it is the order in which counts are iterated, serialized and
//! rendered in the report.

use std::fmt;
use std::ops::{Index, IndexMut};

use serde::ser::{Serialize, SerializeMap, Serializer};

/// One of the substrings looked for in added lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Keyword {
    Todo,
    Fixme,
    Secret,
    /// `class ` with a trailing space
    Class,
    /// `function ` with a trailing space
    Function,
    /// `interface ` with a trailing space
    Interface,
}

impl Keyword {
    /// Number of keywords in the set.
    pub const COUNT: usize = 6;

    /// All keywords, in declared order.
    pub const ALL: [Keyword; Keyword::COUNT] = [
        Keyword::Todo,
        Keyword::Fixme,
        Keyword::Secret,
        Keyword::Class,
        Keyword::Function,
        Keyword::Interface,
    ];

    /// The substring this keyword matches.
    pub const fn as_str(self) -> &'static str {
        match self {
            Keyword::Todo => "TODO",
            Keyword::Fixme => "FIXME",
            Keyword::Secret => "SECRET",
            Keyword::Class => "class ",
            Keyword::Function => "function ",
            Keyword::Interface => "interface ",
        }
    }

    /// Whether `line` contains this keyword anywhere.
    pub fn occurs_in(self, line: &str) -> bool {
        line.contains(self.as_str())
    }

    const fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-keyword hit counters. Every keyword always has an entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeywordCounts {
    counts: [u64; Keyword::COUNT],
}

impl KeywordCounts {
    /// All counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, keyword: Keyword) -> u64 {
        self.counts[keyword.slot()]
    }

    /// Increment every keyword that occurs in `line`.
    pub fn record_line(&mut self, line: &str) {
        for keyword in Keyword::ALL {
            if keyword.occurs_in(line) {
                self[keyword] += 1;
            }
        }
    }

    /// Iterate `(keyword, count)` pairs in declared order, zeros included.
    pub fn iter(&self) -> impl Iterator<Item = (Keyword, u64)> + '_ {
        Keyword::ALL.into_iter().map(|k| (k, self.get(k)))
    }

    /// Iterate only keywords with a nonzero count, in declared order.
    pub fn detected(&self) -> impl Iterator<Item = (Keyword, u64)> + '_ {
        self.iter().filter(|(_, count)| *count > 0)
    }

    /// Sum of all counters.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}

impl Index<Keyword> for KeywordCounts {
    type Output = u64;

    fn index(&self, keyword: Keyword) -> &u64 {
        &self.counts[keyword.slot()]
    }
}

impl IndexMut<Keyword> for KeywordCounts {
    fn index_mut(&mut self, keyword: Keyword) -> &mut u64 {
        &mut self.counts[keyword.slot()]
    }
}

impl Serialize for KeywordCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Keyword::COUNT))?;
        for (keyword, count) in self.iter() {
            map.serialize_entry(keyword.as_str(), &count)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_order() {
        let needles: Vec<&str> = Keyword::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(
            needles,
            vec!["TODO", "FIXME", "SECRET", "class ", "function ", "interface "]
        );
    }

    #[test]
    fn test_trailing_space_is_part_of_needle() {
        assert!(Keyword::Class.occurs_in("+class Foo"));
        assert!(!Keyword::Class.occurs_in("+subclass"));
        assert!(!Keyword::Function.occurs_in("+function"));
        assert!(Keyword::Interface.occurs_in("+export interface Bar {}"));
    }

    #[test]
    fn test_case_sensitive() {
        assert!(!Keyword::Todo.occurs_in("+todo: later"));
        assert!(Keyword::Todo.occurs_in("+// TODO later"));
    }

    #[test]
    fn test_record_line_is_non_exclusive() {
        let mut counts = KeywordCounts::new();
        counts.record_line("+// TODO FIXME class Foo");

        assert_eq!(counts.get(Keyword::Todo), 1);
        assert_eq!(counts.get(Keyword::Fixme), 1);
        assert_eq!(counts.get(Keyword::Class), 1);
        assert_eq!(counts.get(Keyword::Secret), 0);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn test_repeated_needle_counts_once_per_line() {
        let mut counts = KeywordCounts::new();
        counts.record_line("+TODO TODO TODO");
        assert_eq!(counts[Keyword::Todo], 1);
    }

    #[test]
    fn test_detected_skips_zeros() {
        let mut counts = KeywordCounts::new();
        counts[Keyword::Interface] = 4;
        counts[Keyword::Todo] = 1;

        let detected: Vec<_> = counts.detected().collect();
        assert_eq!(detected, vec![(Keyword::Todo, 1), (Keyword::Interface, 4)]);
    }

    #[test]
    fn test_iter_includes_all_keywords() {
        let counts = KeywordCounts::new();
        assert_eq!(counts.iter().count(), Keyword::COUNT);
        assert!(counts.iter().all(|(_, c)| c == 0));
    }
}
