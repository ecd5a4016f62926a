//! Tests for truth table generation.
use larder::prelude::*;
use std::collections::HashSet;

#[test]
fn test_and_table_exact_rows() {
    let table = truth_table("A and B").unwrap();
    assert_eq!(table.variables, vec!["A", "B"]);

    let expected = vec![
        (vec![false, false], false),
        (vec![false, true], false),
        (vec![true, false], false),
        (vec![true, true], true),
    ];
    let actual: Vec<(Vec<bool>, bool)> = table
        .rows
        .iter()
        .map(|row| (row.assignment.clone(), row.result))
        .collect();
    assert_eq!(actual, expected);
}

#[test]
fn test_first_variable_is_most_significant_bit() {
    // First variable varies slowest: all A=false rows precede all A=true rows.
    let table = truth_table("A or B").unwrap();
    assert_eq!(
        table.rows.iter().map(|r| r.assignment[0]).collect::<Vec<_>>(),
        vec![false, false, true, true]
    );
    assert_eq!(
        table.rows.iter().map(|r| r.assignment[1]).collect::<Vec<_>>(),
        vec![false, true, false, true]
    );
}

#[test]
fn test_row_count_and_uniqueness_for_three_variables() {
    let table = truth_table("(a or b) and not c").unwrap();
    assert_eq!(table.variables.len(), 3);
    assert_eq!(table.rows.len(), 8);

    let distinct: HashSet<Vec<bool>> =
        table.rows.iter().map(|r| r.assignment.clone()).collect();
    assert_eq!(distinct.len(), 8);

    for row in &table.rows {
        assert_eq!(row.assignment.len(), 3);
    }
}

#[test]
fn test_variables_ordered_by_first_occurrence() {
    let table = truth_table("B or A and B").unwrap();
    assert_eq!(table.variables, vec!["B", "A"]);
}

#[test]
fn test_single_variable_table() {
    let table = truth_table("not x").unwrap();
    assert_eq!(table.variables, vec!["x"]);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0].result, true);
    assert_eq!(table.rows[1].result, false);
}

#[test]
fn test_tautology_and_contradiction() {
    let tautology = truth_table("p or not p").unwrap();
    assert_eq!(tautology.rows.len(), 2);
    assert!(tautology.rows.iter().all(|r| r.result));

    let contradiction = truth_table("p and not p").unwrap();
    assert!(contradiction.rows.iter().all(|r| !r.result));
}

#[test]
fn test_deterministic_across_calls() {
    let first = truth_table("(a and b) or not c").unwrap();
    let second = truth_table("(a and b) or not c").unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_malformed_expression_reports_parse_error() {
    let result = truth_table("a and (b or");
    assert!(matches!(result, Err(EvalError::Parse(_))));
}

#[test]
fn test_display_renders_all_rows() {
    let table = truth_table("A and B").unwrap();
    let rendered = table.to_string();
    assert!(rendered.contains("A"));
    assert!(rendered.contains("B"));
    assert!(rendered.contains("result"));
    // Header + rule + 4 rows.
    assert_eq!(rendered.lines().count(), 6);
}
