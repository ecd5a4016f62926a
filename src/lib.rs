//! # Larder - Recipe Collection Engine
//!
//! **Larder** stores a personal recipe collection and lets you search, sort,
//! and filter it with small boolean expressions like
//! `(cheap or quick) and healthy`.
//!
//! ## Core pieces
//!
//! 1. **Expression core** ([`logic`]): a lexer, recursive-descent parser, and
//!    evaluator for a fixed propositional grammar (variables, `not`/`and`/`or`,
//!    parentheses), plus full truth-table generation. The evaluator interprets
//!    only this grammar; it can never run anything else.
//! 2. **Sorting engine** ([`sort`]): two interchangeable stable strategies
//!    behind one capability trait — a quadratic adjacent-swap variant and an
//!    O(n log n) merge variant — keyed by any caller-supplied ordering.
//! 3. **Record store** ([`recipe`]): validated [`recipe::Recipe`] values, a
//!    [`recipe::RecipeBook`] persisted as flat CSV, and
//!    [`recipe::PredicateSet`] which turns each recipe into the boolean
//!    environment the evaluator consumes.
//!
//! ## Quick Start
//!
//! ```rust
//! use larder::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut book = RecipeBook::new();
//!     book.add(Recipe::new(
//!         "Chicken Salad",
//!         "main",
//!         5.50,
//!         15,
//!         vec!["chicken".into(), "lettuce".into(), "dressing".into()],
//!         vec!["Combine everything".into()],
//!         350,
//!         Difficulty::Easy,
//!     )?);
//!     book.add(Recipe::new(
//!         "Lentil Soup",
//!         "soup",
//!         2.80,
//!         25,
//!         vec!["lentils".into(), "carrot".into(), "onion".into()],
//!         vec!["Simmer until soft".into()],
//!         320,
//!         Difficulty::Easy,
//!     )?);
//!
//!     // Named predicates supply the variables; the thresholds are caller
//!     // configuration, not evaluator semantics.
//!     let predicates = PredicateSet::from_thresholds(Thresholds::default());
//!     let picks = book.filter_expr("cheap and healthy", &predicates)?;
//!     assert_eq!(picks.len(), 1);
//!     assert_eq!(picks[0].name, "Lentil Soup");
//!
//!     // Sorted views never mutate the book; both algorithms agree.
//!     let by_price = book.sorted_by(Algorithm::Merge, |r| {
//!         (r.price * 100.0) as u64
//!     });
//!     assert_eq!(by_price[0].name, "Lentil Soup");
//!
//!     // Truth tables for any expression over named variables.
//!     let table = truth_table("cheap and healthy")?;
//!     assert_eq!(table.rows.len(), 4);
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod logic;
pub mod prelude;
pub mod recipe;
pub mod sort;
