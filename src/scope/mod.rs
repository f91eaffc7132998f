//! Access scope tree-table rendering
//!
//! This module turns a computed access scope (parents with children) into a
//! flat list of tree-table rows. Three inputs are reconciled per object:
//!
//! - the inclusion state computed by the server
//! - the selections held by the client, keyed by name
//! - optional name filter criteria
//!
//! Rendering is pure: the same inputs always produce the same rows.

mod filter;
mod model;
mod pipeline;
mod resolve;
mod row;

pub use filter::{CHILD_PREFIX, NameFilter, PARENT_PREFIX};
pub use model::{
    ChildNode, FilterCriteria, InclusionState, ParentNode, ScopeObject, Selections,
    StaleReference, pair_names,
};
pub use pipeline::{ScopeTable, format_lines, format_rows};
pub use resolve::{
    SymbolMode, is_child_selected, is_parent_selected, resolve_included_symbol, selected_symbol,
};
pub use row::{CHILD_LEVEL, OutputRow, PARENT_LEVEL, format_row};
