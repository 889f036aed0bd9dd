/*!
 * # Selection editing
 *
 * Applies the pure transforms in [`crate::sorting`] and [`crate::case`] to
 * editor selections.
 *
 * ## Host seam
 *
 * The editor is reached through [`SelectionHost`], which offers two
 * primitives: read every selection, and replace one byte range. A host may
 * renumber offsets after any replacement, so:
 *
 * - selections are read **once**, before any mutation,
 * - [`plan`] turns a [`Cmd`] into edits with no host access at all,
 * - [`apply`] writes those edits **back to front** by start offset, so
 *   earlier slots are never shifted by later writes. For selections in
 *   document order this is highest index to lowest; for out-of-order
 *   selections offset order wins over index order.
 *
 * ## Multi-cursor sorting
 *
 * With more than one selection, each selection's full text is one fragment.
 * The fragments are stable-sorted and written back into the original slots
 * in original order: content moves between slots, slots never move.
 *
 * ## Usage Pattern
 *
 * ```rust
 * use stringmanip_engine::editing::*;
 * use stringmanip_engine::SortStrategy;
 *
 * let mut doc = Document::new("b, a", vec![0..1, 3..4]).unwrap();
 * apply(&mut doc, Cmd::SortLines { strategy: SortStrategy::CaseSensitiveAZ }).unwrap();
 * assert_eq!(doc.text(), "a, b");
 * ```
 */

pub mod commands;
pub mod document;
pub mod patch;
pub mod selection;

pub use commands::{Cmd, apply, plan};
pub use document::Document;
pub use patch::Patch;
pub use selection::{Edit, Selection};

use std::ops::Range;

/// Errors raised at the host boundary
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("Range {start}..{end} is outside the document (length {len})")]
    InvalidRange { start: usize, end: usize, len: usize },
    #[error("Offset {offset} is not on a character boundary")]
    NotCharBoundary { offset: usize },
}

/// The editor side of a transform: where selections come from and where
/// replacements go.
pub trait SelectionHost {
    /// All selections in on-screen cursor order.
    fn selections(&self) -> Vec<Selection>;

    /// Replace `range` with `text`. May invalidate every other offset.
    fn replace_range(&mut self, range: Range<usize>, text: &str) -> Result<(), EditError>;
}
