//! Input data model: the computed scope tree, selections, and filter criteria

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Inclusion state computed by the server for a parent or child object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InclusionState {
    /// The object itself is selected
    Included,
    /// Included through a selected parent or child
    HierarchicallyIncluded,
    NotIncluded,
}

impl InclusionState {
    /// Wire spelling of the state.
    pub fn as_str(&self) -> &'static str {
        match self {
            InclusionState::Included => "INCLUDED",
            InclusionState::HierarchicallyIncluded => "HIERARCHICALLY_INCLUDED",
            InclusionState::NotIncluded => "NOT_INCLUDED",
        }
    }
}

impl FromStr for InclusionState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INCLUDED" => Ok(InclusionState::Included),
            "HIERARCHICALLY_INCLUDED" => Ok(InclusionState::HierarchicallyIncluded),
            "NOT_INCLUDED" => Ok(InclusionState::NotIncluded),
            other => Err(other.to_string()),
        }
    }
}

/// Common view over parents and children used by the filter and row formatter.
pub trait ScopeObject {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    /// State exactly as received; validated only when a symbol is resolved.
    fn raw_state(&self) -> &str;
    /// Number of children in the unfiltered tree (0 for children).
    fn set_size(&self) -> usize;
}

/// Top-level object in the computed access scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentNode {
    pub id: String,
    pub name: String,
    pub state: String,
    #[serde(default)]
    pub children: Vec<ChildNode>,
}

/// Second-level object. Children never nest further, so an incoming
/// `children` field is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChildNode {
    pub id: String,
    pub name: String,
    pub state: String,
}

impl ParentNode {
    pub fn new(id: impl Into<String>, name: impl Into<String>, state: InclusionState) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            state: state.as_str().to_string(),
            children: Vec::new(),
        }
    }

    pub fn with_child(mut self, child: ChildNode) -> Self {
        self.children.push(child);
        self
    }
}

impl ChildNode {
    pub fn new(id: impl Into<String>, name: impl Into<String>, state: InclusionState) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            state: state.as_str().to_string(),
        }
    }
}

impl ScopeObject for ParentNode {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn raw_state(&self) -> &str {
        &self.state
    }

    fn set_size(&self) -> usize {
        self.children.len()
    }
}

impl ScopeObject for ChildNode {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn raw_state(&self) -> &str {
        &self.state
    }

    fn set_size(&self) -> usize {
        0
    }
}

/// Selections held in client form state.
///
/// Objects are selected by name rather than id, so a deleted and re-created
/// object keeps its selection. Names that no longer exist in the computed
/// scope simply match nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selections {
    #[serde(default)]
    pub selected_parents: Vec<String>,
    /// `(child name, parent name)` pairs
    #[serde(default)]
    pub selected_children: Vec<(String, String)>,
}

/// Whether a selected child pair names exactly `child` and `parent`.
///
/// The two names are compared as an unordered pair.
pub fn pair_names(pair: &(String, String), child: &str, parent: &str) -> bool {
    let (a, b) = pair;
    (a == child && b == parent) || (a == parent && b == child)
}

/// A selection that refers to nothing in the current computed scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StaleReference {
    Parent(String),
    Child { child: String, parent: String },
}

impl fmt::Display for StaleReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StaleReference::Parent(name) => write!(f, "{}", name),
            StaleReference::Child { child, parent } => write!(f, "{} (under {})", child, parent),
        }
    }
}

impl Selections {
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.selected_parents.push(parent.into());
        self
    }

    pub fn with_child(mut self, child: impl Into<String>, parent: impl Into<String>) -> Self {
        self.selected_children.push((child.into(), parent.into()));
        self
    }

    /// List selections with no matching object in `computed`.
    pub fn stale_references(&self, computed: &[ParentNode]) -> Vec<StaleReference> {
        let mut stale: Vec<StaleReference> = self
            .selected_parents
            .iter()
            .filter(|name| !computed.iter().any(|p| &p.name == *name))
            .map(|name| StaleReference::Parent(name.clone()))
            .collect();

        for pair in &self.selected_children {
            let found = computed.iter().any(|p| {
                p.children
                    .iter()
                    .any(|c| pair_names(pair, &c.name, &p.name))
            });
            if !found {
                stale.push(StaleReference::Child {
                    child: pair.0.clone(),
                    parent: pair.1.clone(),
                });
            }
        }

        stale
    }
}

/// Optional name filters from client page state.
///
/// An absent or empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_name_filter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child_name_filter: Option<String>,
}

impl FilterCriteria {
    /// Criteria that let every object through.
    pub fn match_all() -> Self {
        Self::default()
    }

    pub fn with_parent_filter(mut self, filter: impl Into<String>) -> Self {
        self.parent_name_filter = Some(filter.into());
        self
    }

    pub fn with_child_filter(mut self, filter: impl Into<String>) -> Self {
        self.child_name_filter = Some(filter.into());
        self
    }
}
