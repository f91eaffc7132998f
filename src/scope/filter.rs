//! Name filtering for parents and children

use super::model::ScopeObject;

/// Label prefix for parent name filters.
pub const PARENT_PREFIX: &str = "parent";
/// Label prefix for child name filters.
pub const CHILD_PREFIX: &str = "child";

/// Matches objects whose name is exactly `prefix + filter`.
///
/// Without a filter (or with an empty one) every name matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameFilter {
    target: Option<String>,
}

impl NameFilter {
    pub fn new(prefix: &str, filter: Option<&str>) -> Self {
        let target = filter
            .filter(|f| !f.is_empty())
            .map(|f| format!("{}{}", prefix, f));
        Self { target }
    }

    pub fn parents(filter: Option<&str>) -> Self {
        Self::new(PARENT_PREFIX, filter)
    }

    pub fn children(filter: Option<&str>) -> Self {
        Self::new(CHILD_PREFIX, filter)
    }

    pub fn matches(&self, name: &str) -> bool {
        self.target.as_deref().is_none_or(|target| target == name)
    }

    /// Keep the matching items, preserving their order.
    pub fn apply<'a, T: ScopeObject>(&self, items: &'a [T]) -> Vec<&'a T> {
        items.iter().filter(|item| self.matches(item.name())).collect()
    }
}
