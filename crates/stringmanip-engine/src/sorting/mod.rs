//! Line sorting.
//!
//! A [`SortStrategy`] is bound to one comparator built on the natural-order
//! comparator (or on line length). Strategies sort either arbitrary fragment
//! sequences (one fragment per multi-cursor selection) or the lines of a
//! single block of text.

mod strategy;

pub use strategy::{ParseStrategyError, SortStrategy};

/// Sort the lines of `text` with `strategy`, keeping a trailing newline.
pub fn sort_lines(strategy: SortStrategy, text: &str) -> String {
    strategy.sort_text(text)
}

/// Stable-sort `fragments` with `strategy`. The output has the same length
/// as the input.
pub fn sort_fragments(strategy: SortStrategy, fragments: Vec<String>) -> Vec<String> {
    strategy.sort_fragments(fragments)
}
