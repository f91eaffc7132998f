//! Integration tests for scopetable

mod harness;

use harness::{TestInputs, run_scopetable};
use scopetable::test_utils::{expected_lines_three_state, expected_lines_two_state};

fn stdout_lines(stdout: &str) -> Vec<String> {
    stdout.lines().map(|l| l.to_string()).collect()
}

#[test]
fn test_two_state_table() {
    let inputs = TestInputs::new();
    inputs.add_fixture("computed.json");
    inputs.add_fixture("selections.json");

    let (stdout, stderr, success) = run_scopetable(
        inputs.path(),
        &["computed.json", "--selections", "selections.json"],
    );
    assert!(success, "scopetable should succeed: {}", stderr);
    assert_eq!(stdout_lines(&stdout), expected_lines_two_state());
}

#[test]
fn test_three_state_table() {
    let inputs = TestInputs::new();
    inputs.add_fixture("computed.json");
    inputs.add_fixture("selections.json");

    let (stdout, _stderr, success) = run_scopetable(
        inputs.path(),
        &["computed.json", "-s", "selections.json", "--mode", "three-state"],
    );
    assert!(success);
    assert_eq!(stdout_lines(&stdout), expected_lines_three_state());

    let (shorthand, _stderr, success) = run_scopetable(
        inputs.path(),
        &["computed.json", "-s", "selections.json", "--three-state"],
    );
    assert!(success);
    assert_eq!(shorthand, stdout);
}

#[test]
fn test_parent_and_child_filters() {
    let inputs = TestInputs::new();
    inputs.add_fixture("computed.json");
    inputs.add_fixture("selections.json");

    let (stdout, _stderr, success) = run_scopetable(
        inputs.path(),
        &[
            "computed.json",
            "-s",
            "selections.json",
            "-3",
            "--parent-filter",
            "A",
            "--child-filter",
            "C",
        ],
    );
    assert!(success);
    assert_eq!(
        stdout_lines(&stdout),
        vec![
            "37e37fbe aria-level=1 aria-posinset=1 aria-setsize=3 * - parentA",
            "0b129f86 aria-level=2 aria-posinset=3 aria-setsize=0 - - childC",
        ]
    );
}

#[test]
fn test_unknown_parent_filter_prints_nothing() {
    let inputs = TestInputs::new();
    inputs.add_fixture("computed.json");

    let (stdout, _stderr, success) =
        run_scopetable(inputs.path(), &["computed.json", "-p", "whatever"]);
    assert!(success);
    assert!(stdout.is_empty(), "expected no rows: {}", stdout);
}

#[test]
fn test_unknown_child_filter_prints_parents_only() {
    let inputs = TestInputs::new();
    inputs.add_fixture("computed.json");
    inputs.add_fixture("selections.json");

    let (stdout, _stderr, success) = run_scopetable(
        inputs.path(),
        &["computed.json", "-s", "selections.json", "-3", "-c", "whatever"],
    );
    assert!(success);
    assert_eq!(
        stdout_lines(&stdout),
        vec![
            "37e37fbe aria-level=1 aria-posinset=1 aria-setsize=3 * - parentA",
            "37e37fbc aria-level=1 aria-posinset=2 aria-setsize=1 - - parentB",
            "37e37fba aria-level=1 aria-posinset=3 aria-setsize=2 + + parentC",
        ]
    );
}

#[test]
fn test_without_selections_nothing_is_selected() {
    let inputs = TestInputs::new();
    inputs.add_fixture("computed.json");

    let (stdout, _stderr, success) = run_scopetable(inputs.path(), &["computed.json"]);
    assert!(success);
    assert_eq!(stdout.lines().count(), 9);
    for line in stdout.lines() {
        let fields: Vec<&str> = line.split(' ').collect();
        assert_eq!(fields[5], "-", "row should not be selected: {}", line);
    }
}

#[test]
fn test_json_output() {
    let inputs = TestInputs::new();
    inputs.add_fixture("computed.json");
    inputs.add_fixture("selections.json");

    let (stdout, _stderr, success) = run_scopetable(
        inputs.path(),
        &["computed.json", "-s", "selections.json", "--json", "-3"],
    );
    assert!(success);
    let rows: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    let rows = rows.as_array().expect("JSON array");
    assert_eq!(rows.len(), 9);
    assert_eq!(rows[2]["name"], "childB");
    assert_eq!(rows[2]["level"], 2);
    assert_eq!(rows[2]["positionInSet"], 2);
    assert_eq!(rows[2]["selectedSymbol"], "+");
    assert_eq!(rows[8]["includedSymbol"], "*");
}

#[test]
fn test_check_mode_passes_reference_cases() {
    let inputs = TestInputs::new();
    inputs.add_fixture("cases.json");

    let (stdout, stderr, success) = run_scopetable(inputs.path(), &["--check", "cases.json"]);
    assert!(success, "all reference cases should pass: {}{}", stdout, stderr);
    assert!(stdout.contains("PASS two-state, no filter"));
    assert!(stdout.contains("PASS unknown child filter"));
    assert!(stdout.contains("5 passed, 0 failed"));
}

#[test]
fn test_report_stale_selections() {
    let inputs = TestInputs::new();
    inputs.add_fixture("computed.json");
    inputs.add_fixture("selections.json");

    let (_stdout, stderr, success) = run_scopetable(
        inputs.path(),
        &["computed.json", "-s", "selections.json", "--report-stale"],
    );
    assert!(success);
    assert!(stderr.contains("selection 'parentD' matches nothing"), "{}", stderr);
    assert!(
        stderr.contains("selection 'childB (under parentB)' matches nothing"),
        "{}",
        stderr
    );
    assert!(!stderr.contains("parentC"));
}

#[test]
fn test_report_stale_accepts_reversed_child_pair() {
    let inputs = TestInputs::new();
    inputs.add_file(
        "computed.json",
        r#"[{"id": "p1", "name": "parentA", "state": "HIERARCHICALLY_INCLUDED",
             "children": [{"id": "c1", "name": "childB", "state": "INCLUDED"}]}]"#,
    );
    inputs.add_file(
        "selections.json",
        r#"{"selectedChildren": [["parentA", "childB"]]}"#,
    );

    let (stdout, stderr, success) = run_scopetable(
        inputs.path(),
        &["computed.json", "-s", "selections.json", "--report-stale"],
    );
    assert!(success);
    assert!(!stderr.contains("matches nothing"), "{}", stderr);
    assert_eq!(
        stdout_lines(&stdout),
        vec![
            "p1 aria-level=1 aria-posinset=1 aria-setsize=1 + - parentA",
            "c1 aria-level=2 aria-posinset=1 aria-setsize=0 + + childB",
        ]
    );
}
