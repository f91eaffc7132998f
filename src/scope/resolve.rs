//! Inclusion symbol and selection resolution

use clap::ValueEnum;

use crate::error::{Result, ScopeError};

use super::model::{ChildNode, InclusionState, ParentNode, ScopeObject, Selections, pair_names};

/// How inclusion state is rendered as a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SymbolMode {
    /// `+` for any inclusion, `-` otherwise
    #[default]
    TwoState,
    /// `+` included, `*` hierarchically included, `-` not included
    ThreeState,
}

impl SymbolMode {
    pub fn from_three_state(three_state: bool) -> Self {
        if three_state {
            SymbolMode::ThreeState
        } else {
            SymbolMode::TwoState
        }
    }

    pub fn symbol(&self, state: InclusionState) -> char {
        match (self, state) {
            (_, InclusionState::Included) => '+',
            (_, InclusionState::NotIncluded) => '-',
            (SymbolMode::TwoState, InclusionState::HierarchicallyIncluded) => '+',
            (SymbolMode::ThreeState, InclusionState::HierarchicallyIncluded) => '*',
        }
    }
}

/// Resolve the inclusion symbol for an object.
///
/// Fails on a state outside the known values instead of guessing a symbol.
pub fn resolve_included_symbol<T: ScopeObject>(node: &T, mode: SymbolMode) -> Result<char> {
    let state: InclusionState = node
        .raw_state()
        .parse()
        .map_err(|state| ScopeError::MalformedState {
            id: node.id().to_string(),
            state,
        })?;
    Ok(mode.symbol(state))
}

pub fn is_parent_selected(selections: &Selections, parent: &ParentNode) -> bool {
    selections.selected_parents.iter().any(|name| *name == parent.name)
}

/// A child is selected only under the parent named in its selection pair.
pub fn is_child_selected(selections: &Selections, child: &ChildNode, parent: &ParentNode) -> bool {
    selections
        .selected_children
        .iter()
        .any(|pair| pair_names(pair, &child.name, &parent.name))
}

pub fn selected_symbol(selected: bool) -> char {
    if selected { '+' } else { '-' }
}
