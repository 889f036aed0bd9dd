use std::ops::Range;

use xi_rope::delta::Builder;
use xi_rope::{Rope, RopeInfo};

use crate::editing::{EditError, Selection, SelectionHost};

/// In-memory text buffer with a set of selections.
///
/// This is the host used by the command-line front end and by tests that
/// need a real document. Like an editor, it moves the remaining selections
/// whenever a range is replaced, so offsets read before an edit are stale
/// afterwards.
#[derive(Debug, Clone)]
pub struct Document {
    /// xi-rope buffer holding the whole document
    buffer: Rope,
    /// Selection byte ranges in cursor order
    selections: Vec<Range<usize>>,
    /// Incremented on each replacement
    version: u64,
}

impl Document {
    /// Create a document with the given selections.
    ///
    /// Every range must lie inside `text`, have `start <= end`, and fall on
    /// character boundaries.
    pub fn new(text: &str, selections: Vec<Range<usize>>) -> Result<Self, EditError> {
        for range in &selections {
            check_range(text.len(), range, |offset| text.is_char_boundary(offset))?;
        }

        Ok(Self {
            buffer: Rope::from(text),
            selections,
            version: 0,
        })
    }

    /// Create a document with one selection covering all of `text`.
    pub fn selecting_all(text: &str) -> Self {
        Self {
            buffer: Rope::from(text),
            selections: vec![0..text.len()],
            version: 0,
        }
    }

    /// Get the current text content
    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.len() == 0
    }

    /// Current selection ranges, adjusted for every replacement so far
    pub fn selection_ranges(&self) -> &[Range<usize>] {
        &self.selections
    }

    /// Get the current version
    pub fn version(&self) -> u64 {
        self.version
    }

    fn compile_replace(&self, range: Range<usize>, text: &str) -> xi_rope::Delta<RopeInfo> {
        let mut builder = Builder::new(self.buffer.len());
        builder.replace(range, Rope::from(text));
        builder.build()
    }
}

fn check_range(
    len: usize,
    range: &Range<usize>,
    is_boundary: impl Fn(usize) -> bool,
) -> Result<(), EditError> {
    if range.start > range.end || range.end > len {
        return Err(EditError::InvalidRange {
            start: range.start,
            end: range.end,
            len,
        });
    }
    for offset in [range.start, range.end] {
        if offset < len && !is_boundary(offset) {
            return Err(EditError::NotCharBoundary { offset });
        }
    }
    Ok(())
}

/// Move a selection through the replacement of `replaced` by `new_len` bytes.
fn transform_selection(
    selection: &Range<usize>,
    replaced: &Range<usize>,
    new_len: usize,
) -> Range<usize> {
    if selection == replaced {
        return replaced.start..replaced.start + new_len;
    }

    let old_len = replaced.len();
    let shift = |p: usize| p - old_len + new_len;

    let start = if selection.start <= replaced.start {
        selection.start
    } else if selection.start >= replaced.end {
        shift(selection.start)
    } else {
        replaced.start
    };

    let end = if selection.end <= replaced.start {
        selection.end
    } else if selection.end >= replaced.end {
        shift(selection.end)
    } else {
        replaced.start + new_len
    };

    start..end.max(start)
}

impl SelectionHost for Document {
    fn selections(&self) -> Vec<Selection> {
        self.selections
            .iter()
            .map(|range| {
                Selection::new(range.clone(), self.buffer.slice_to_cow(range.clone()))
            })
            .collect()
    }

    fn replace_range(&mut self, range: Range<usize>, text: &str) -> Result<(), EditError> {
        check_range(self.buffer.len(), &range, |offset| {
            self.buffer.is_codepoint_boundary(offset)
        })?;

        let delta = self.compile_replace(range.clone(), text);
        self.buffer = delta.apply(&self.buffer);

        for selection in &mut self.selections {
            *selection = transform_selection(selection, &range, text.len());
        }
        self.version += 1;
        Ok(())
    }
}
