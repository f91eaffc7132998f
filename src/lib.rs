//! Scopetable - render hierarchical access scope as tree-table rows

pub mod check;
pub mod error;
pub mod input;
pub mod output;
pub mod scope;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use check::{CaseOutcome, CheckCase, CheckRunner, LineDiff, check_case, load_cases};
pub use error::ScopeError;
pub use input::{load_computed, load_selections};
pub use output::{LineFormatter, OutputConfig, print_json, print_report};
pub use scope::{
    ChildNode, FilterCriteria, InclusionState, OutputRow, ParentNode, ScopeTable, Selections,
    SymbolMode, format_lines, format_rows,
};
