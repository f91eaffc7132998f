//! Expected-output checks for scope tables
//!
//! A [`CheckCase`] bundles a computed scope, selections, optional filter
//! criteria, a symbol mode and the lines a table should render to.
//! [`CheckRunner`] runs cases and collects a [`CaseOutcome`] per case with a
//! line-level diff of any mismatch.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::Result;
use crate::input::load_json;
use crate::scope::{FilterCriteria, ParentNode, Selections, SymbolMode, format_lines};

/// One differing line between expected and received output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineDiff {
    /// Zero-based line index
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received: Option<String>,
}

/// Result of checking one case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseOutcome {
    pub name: String,
    pub passed: bool,
    pub received: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub diff: Vec<LineDiff>,
    /// Set when the table could not be rendered at all
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A named check, as stored in a case file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckCase {
    pub name: String,
    pub computed: Vec<ParentNode>,
    #[serde(default)]
    pub selections: Selections,
    #[serde(default)]
    pub filter: Option<FilterCriteria>,
    #[serde(default)]
    pub three_state: bool,
    pub expected: Vec<String>,
}

impl CheckCase {
    pub fn mode(&self) -> SymbolMode {
        SymbolMode::from_three_state(self.three_state)
    }

    pub fn run(&self) -> CaseOutcome {
        let mut outcome = check_case(
            &self.computed,
            &self.selections,
            self.filter.as_ref(),
            &self.expected,
            self.mode(),
        );
        outcome.name = self.name.clone();
        outcome
    }
}

/// Render a table and compare it against `expected`, line by line.
pub fn check_case(
    computed: &[ParentNode],
    selections: &Selections,
    filter: Option<&FilterCriteria>,
    expected: &[String],
    mode: SymbolMode,
) -> CaseOutcome {
    match format_lines(computed, selections, filter, mode) {
        Ok(received) => {
            let diff = diff_lines(expected, &received);
            CaseOutcome {
                name: String::new(),
                passed: diff.is_empty(),
                received,
                diff,
                error: None,
            }
        }
        Err(e) => CaseOutcome {
            name: String::new(),
            passed: false,
            received: Vec::new(),
            diff: Vec::new(),
            error: Some(e.to_string()),
        },
    }
}

/// Pair up lines by index and keep the ones that differ.
pub fn diff_lines(expected: &[String], received: &[String]) -> Vec<LineDiff> {
    let len = expected.len().max(received.len());
    (0..len)
        .filter_map(|index| {
            let e = expected.get(index);
            let r = received.get(index);
            if e == r {
                None
            } else {
                Some(LineDiff {
                    index,
                    expected: e.cloned(),
                    received: r.cloned(),
                })
            }
        })
        .collect()
}

/// Load a JSON array of [`CheckCase`] from disk.
pub fn load_cases(path: &Path) -> Result<Vec<CheckCase>> {
    load_json(path)
}

/// Runs cases and keeps their outcomes in order.
#[derive(Debug, Default)]
pub struct CheckRunner {
    outcomes: Vec<CaseOutcome>,
}

impl CheckRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn run(&mut self, case: &CheckCase) {
        let outcome = case.run();
        if outcome.passed {
            debug!(case = %outcome.name, "case passed");
        } else {
            warn!(case = %outcome.name, differing = outcome.diff.len(), "case failed");
        }
        self.outcomes.push(outcome);
    }

    pub fn run_all<'a>(&mut self, cases: impl IntoIterator<Item = &'a CheckCase>) {
        for case in cases {
            self.run(case);
        }
    }

    pub fn outcomes(&self) -> &[CaseOutcome] {
        &self.outcomes
    }

    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }

    pub fn summary(&self) -> String {
        format!("{} passed, {} failed", self.passed(), self.failed())
    }
}
