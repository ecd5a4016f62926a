//! The record store: recipe values, the flat-file collection, and the named
//! predicates that bridge recipes to the boolean expression core.

pub mod book;
pub mod predicate;
pub mod record;

pub use book::RecipeBook;
pub use predicate::{PredicateSet, RecipePredicate, Thresholds};
pub use record::{Difficulty, Recipe};
