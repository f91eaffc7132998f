//! Tree-table row descriptors

use std::fmt;

use serde::Serialize;

use super::model::ScopeObject;
use super::resolve::selected_symbol;

/// Depth of a parent row.
pub const PARENT_LEVEL: u8 = 1;
/// Depth of a child row.
pub const CHILD_LEVEL: u8 = 2;

/// One display-ready row of the access scope tree table.
///
/// `level`, `position_in_set` and `set_size` map onto `aria-level`,
/// `aria-posinset` and `aria-setsize`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputRow {
    pub id: String,
    pub level: u8,
    pub position_in_set: usize,
    pub set_size: usize,
    pub included_symbol: char,
    pub selected_symbol: char,
    pub name: String,
}

impl OutputRow {
    pub fn is_parent(&self) -> bool {
        self.level == PARENT_LEVEL
    }

    pub fn is_selected(&self) -> bool {
        self.selected_symbol == '+'
    }
}

impl fmt::Display for OutputRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} aria-level={} aria-posinset={} aria-setsize={} {} {} {}",
            self.id,
            self.level,
            self.position_in_set,
            self.set_size,
            self.included_symbol,
            self.selected_symbol,
            self.name
        )
    }
}

/// Build the row for `node` at zero-based sibling `index`.
pub fn format_row<T: ScopeObject>(
    node: &T,
    index: usize,
    included_symbol: char,
    selected: bool,
    level: u8,
) -> OutputRow {
    OutputRow {
        id: node.id().to_string(),
        level,
        position_in_set: index + 1,
        set_size: node.set_size(),
        included_symbol,
        selected_symbol: selected_symbol(selected),
        name: node.name().to_string(),
    }
}
