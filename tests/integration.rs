//! End-to-end tests: CSV load, boolean filtering, and sorted views together.
mod common;
use common::*;
use larder::prelude::*;

fn price_cents(r: &Recipe) -> u64 {
    (r.price * 100.0).round() as u64
}

#[test]
fn test_filter_then_sort_pipeline() {
    let book = sample_book();
    let predicates = PredicateSet::from_thresholds(Thresholds::default());

    let picks: Vec<Recipe> = book
        .filter_expr("(cheap or quick) and healthy", &predicates)
        .unwrap()
        .into_iter()
        .cloned()
        .collect();

    for algorithm in [Algorithm::Bubble, Algorithm::Merge] {
        let ordered = algorithm.sort_by_key(&picks, price_cents);
        let names: Vec<&str> = ordered.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Fruit Bowl", "Lentil Soup", "Chicken Salad"]);
    }
}

#[test]
fn test_persisted_book_supports_the_full_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("recipes.csv");
    sample_book().save_csv(&path).unwrap();

    let book = RecipeBook::load_csv(&path).unwrap();
    let predicates = PredicateSet::from_thresholds(Thresholds::default())
        .with_ingredient("chicken");

    let picks = book
        .filter_expr("contains_chicken or (cheap and easy)", &predicates)
        .unwrap();
    let names: Vec<&str> = picks.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Chicken Salad", "Lentil Soup", "Fruit Bowl"]);
}

#[test]
fn test_truth_table_documents_a_filter() {
    // The table for the filter expression enumerates exactly the
    // environments filter_expr would build per recipe.
    let table = truth_table("(cheap or quick) and healthy").unwrap();
    assert_eq!(table.variables, vec!["cheap", "quick", "healthy"]);
    assert_eq!(table.rows.len(), 8);

    let predicates = PredicateSet::from_thresholds(Thresholds::default());
    let salad = recipe("Salad", "main", 5.50, 15, 350, Difficulty::Easy);
    let env = predicates.environment(&salad);

    // Locate the row matching the salad's environment and cross-check it
    // against direct evaluation.
    let assignment: Vec<bool> = table
        .variables
        .iter()
        .map(|v| *env.get(v.as_str()).unwrap())
        .collect();
    let row = table
        .rows
        .iter()
        .find(|r| r.assignment == assignment)
        .unwrap();
    assert_eq!(
        Some(row.result),
        evaluate("(cheap or quick) and healthy", &env).ok()
    );
}

#[test]
fn test_sorted_views_do_not_mutate_the_book() {
    let book = sample_book();
    let original: Vec<String> = book.iter().map(|r| r.name.clone()).collect();

    let _ = book.sorted_by(Algorithm::Bubble, |r| r.time_minutes);
    let _ = book.sorted_by(Algorithm::Merge, |r| r.calories);

    let after: Vec<String> = book.iter().map(|r| r.name.clone()).collect();
    assert_eq!(original, after);
}
