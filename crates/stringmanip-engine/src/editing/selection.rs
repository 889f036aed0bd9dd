use std::ops::Range;

/// Text of one selection, read from the host before any edit is made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Byte range in the document at the time the selection was read.
    pub range: Range<usize>,
    pub text: String,
}

impl Selection {
    pub fn new(range: Range<usize>, text: impl Into<String>) -> Self {
        Self {
            range,
            text: text.into(),
        }
    }
}

/// A single replacement the host should perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub range: Range<usize>,
    pub text: String,
}
