//! Filter, resolve, and format the whole access scope table
//!
//! Parents are filtered first and numbered by their position among the
//! surviving parents. Children are filtered one at a time and keep the
//! position they have in the unfiltered child list, so a lone surviving
//! third child still reports `aria-posinset=3`.

use tracing::debug;

use crate::error::Result;

use super::filter::NameFilter;
use super::model::{FilterCriteria, ParentNode, Selections};
use super::resolve::{
    SymbolMode, is_child_selected, is_parent_selected, resolve_included_symbol,
};
use super::row::{CHILD_LEVEL, OutputRow, PARENT_LEVEL, format_row};

/// Renders a computed access scope into tree-table rows.
#[derive(Debug, Clone, Copy)]
pub struct ScopeTable<'a> {
    computed: &'a [ParentNode],
    selections: &'a Selections,
    filter: Option<&'a FilterCriteria>,
    mode: SymbolMode,
}

impl<'a> ScopeTable<'a> {
    pub fn new(computed: &'a [ParentNode], selections: &'a Selections) -> Self {
        Self {
            computed,
            selections,
            filter: None,
            mode: SymbolMode::default(),
        }
    }

    /// Restrict the rows by name. `None` keeps everything.
    pub fn with_filter(mut self, filter: Option<&'a FilterCriteria>) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_mode(mut self, mode: SymbolMode) -> Self {
        self.mode = mode;
        self
    }

    /// Produce rows for every surviving parent followed by its surviving children.
    pub fn rows(&self) -> Result<Vec<OutputRow>> {
        let parent_filter =
            NameFilter::parents(self.filter.and_then(|f| f.parent_name_filter.as_deref()));
        let child_filter =
            NameFilter::children(self.filter.and_then(|f| f.child_name_filter.as_deref()));

        let parents = parent_filter.apply(self.computed);
        debug!(
            total = self.computed.len(),
            surviving = parents.len(),
            "filtered parents"
        );

        let mut rows = Vec::new();
        for (p_index, parent) in parents.into_iter().enumerate() {
            let symbol = resolve_included_symbol(parent, self.mode)?;
            let selected = is_parent_selected(self.selections, parent);
            rows.push(format_row(parent, p_index, symbol, selected, PARENT_LEVEL));

            for (c_index, child) in parent.children.iter().enumerate() {
                if !child_filter.matches(&child.name) {
                    continue;
                }
                let symbol = resolve_included_symbol(child, self.mode)?;
                let selected = is_child_selected(self.selections, child, parent);
                rows.push(format_row(child, c_index, symbol, selected, CHILD_LEVEL));
            }
        }

        debug!(rows = rows.len(), mode = ?self.mode, "formatted scope table");
        Ok(rows)
    }

    /// Rows in their serialized line form.
    pub fn lines(&self) -> Result<Vec<String>> {
        Ok(self.rows()?.iter().map(ToString::to_string).collect())
    }
}

/// Convenience wrapper around [`ScopeTable`].
pub fn format_rows(
    computed: &[ParentNode],
    selections: &Selections,
    filter: Option<&FilterCriteria>,
    mode: SymbolMode,
) -> Result<Vec<OutputRow>> {
    ScopeTable::new(computed, selections)
        .with_filter(filter)
        .with_mode(mode)
        .rows()
}

/// Same as [`format_rows`] but returns the serialized lines.
pub fn format_lines(
    computed: &[ParentNode],
    selections: &Selections,
    filter: Option<&FilterCriteria>,
    mode: SymbolMode,
) -> Result<Vec<String>> {
    ScopeTable::new(computed, selections)
        .with_filter(filter)
        .with_mode(mode)
        .lines()
}
