pub mod case;
pub mod editing;
pub mod natural;
pub mod sorting;

// Re-export key types for easier usage
pub use case::{CaseStyle, ParseStyleError, convert_case, convert_case_by_line, join, tokenize};
pub use editing::{Cmd, Document, EditError, Patch, Selection, SelectionHost};
pub use sorting::{ParseStrategyError, SortStrategy, sort_fragments, sort_lines};
