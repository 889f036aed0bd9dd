/// Result of applying a command
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Patch {
    /// Replaced ranges in pre-edit coordinates, in the order they were written
    pub changed: Vec<std::ops::Range<usize>>,
    /// Number of selections the command read
    pub selections: usize,
}
