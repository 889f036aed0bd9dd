use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::natural;

/// Ordering applied when sorting lines or selections.
///
/// Descending variants swap the comparator arguments rather than reversing
/// the sorted output, so equal elements keep their input order in both
/// directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortStrategy {
    CaseSensitiveAZ,
    CaseSensitiveZA,
    CaseInsensitiveAZ,
    CaseInsensitiveZA,
    LineLengthShortLong,
    LineLengthLongShort,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown sort strategy: {name}")]
pub struct ParseStrategyError {
    pub name: String,
}

fn case_insensitive(a: &str, b: &str) -> Ordering {
    natural::compare(&a.to_lowercase(), &b.to_lowercase())
}

fn by_length(a: &str, b: &str) -> Ordering {
    a.chars().count().cmp(&b.chars().count())
}

impl SortStrategy {
    pub const ALL: [SortStrategy; 6] = [
        SortStrategy::CaseSensitiveAZ,
        SortStrategy::CaseSensitiveZA,
        SortStrategy::CaseInsensitiveAZ,
        SortStrategy::CaseInsensitiveZA,
        SortStrategy::LineLengthShortLong,
        SortStrategy::LineLengthLongShort,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SortStrategy::CaseSensitiveAZ => "case-sensitive-a-z",
            SortStrategy::CaseSensitiveZA => "case-sensitive-z-a",
            SortStrategy::CaseInsensitiveAZ => "case-insensitive-a-z",
            SortStrategy::CaseInsensitiveZA => "case-insensitive-z-a",
            SortStrategy::LineLengthShortLong => "line-length-short-long",
            SortStrategy::LineLengthLongShort => "line-length-long-short",
        }
    }

    /// The comparator bound to this strategy.
    pub fn compare(self, a: &str, b: &str) -> Ordering {
        match self {
            SortStrategy::CaseSensitiveAZ => natural::compare(a, b),
            SortStrategy::CaseSensitiveZA => natural::compare(b, a),
            SortStrategy::CaseInsensitiveAZ => case_insensitive(a, b),
            SortStrategy::CaseInsensitiveZA => case_insensitive(b, a),
            SortStrategy::LineLengthShortLong => by_length(a, b),
            SortStrategy::LineLengthLongShort => by_length(b, a),
        }
    }

    /// Stable sort of an arbitrary fragment sequence.
    ///
    /// Stability matters for multi-cursor writeback: fragments that compare
    /// equal must keep their relative order.
    pub fn sort_fragments(self, mut fragments: Vec<String>) -> Vec<String> {
        fragments.sort_by(|a, b| self.compare(a, b));
        fragments
    }

    /// Sort the `\n`-separated lines of `text`.
    ///
    /// A single trailing newline is set aside and re-appended, so it never
    /// sorts as an empty line. Other empty lines are kept and sorted like any
    /// other line.
    pub fn sort_text(self, text: &str) -> String {
        let (body, trailing_newline) = match text.strip_suffix('\n') {
            Some(body) => (body, true),
            None => (text, false),
        };

        let lines: Vec<String> = body.split('\n').map(str::to_string).collect();
        let mut sorted = self.sort_fragments(lines).join("\n");
        if trailing_newline {
            sorted.push('\n');
        }
        sorted
    }
}

impl fmt::Display for SortStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortStrategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortStrategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == s)
            .ok_or_else(|| ParseStrategyError {
                name: s.to_string(),
            })
    }
}
