//! Prelude module for convenient imports
//!
//! Re-exports the types and functions most callers need, so one `use`
//! brings in the whole working surface.
//!
//! # Example
//!
//! ```rust,no_run
//! use larder::prelude::*;
//!
//! # fn run_example() -> Result<(), Box<dyn std::error::Error>> {
//! let book = RecipeBook::load_csv("recipes.csv")?;
//! let predicates = PredicateSet::from_thresholds(Thresholds::default());
//!
//! let picks = book.filter_expr("(cheap or quick) and healthy", &predicates)?;
//! for recipe in picks {
//!     println!("{}", recipe);
//! }
//! # Ok(())
//! # }
//! ```

// Expression core
pub use crate::logic::{Environment, Expression, TruthRow, TruthTable, evaluate, truth_table};

// Sorting engine
pub use crate::sort::{Algorithm, BubbleSort, MergeSort, SortAlgorithm};

// Record store
pub use crate::recipe::{Difficulty, PredicateSet, Recipe, RecipeBook, Thresholds};

// Error types
pub use crate::error::{EvalError, ParseError, StoreError, ValidationError};
