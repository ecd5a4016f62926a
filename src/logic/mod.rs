//! Boolean expression core: lexer, recursive-descent parser, evaluator, and
//! truth table generation.
//!
//! The grammar is fixed and tiny: named variables, `not`/`and`/`or` (any
//! case, or the symbols `¬`/`∧`/`∨`), and parentheses. Nothing else is
//! interpreted, so an expression can never execute arbitrary logic beyond
//! boolean combination of the environment the caller supplies.

pub mod expression;
pub mod parser;
pub mod table;
pub mod token;

pub use expression::{Environment, Expression};
pub use table::{TruthRow, TruthTable};

use crate::error::EvalError;

/// Parses and evaluates an expression string in one call.
///
/// Useful for one-shot evaluation; callers evaluating the same expression
/// against many environments should parse once with [`Expression::parse`]
/// and reuse the AST.
///
/// # Example
///
/// ```
/// use larder::logic::{Environment, evaluate};
///
/// let mut env = Environment::new();
/// env.insert("cheap".to_string(), true);
/// env.insert("quick".to_string(), false);
/// env.insert("healthy".to_string(), true);
///
/// assert_eq!(evaluate("(cheap or quick) and healthy", &env), Ok(true));
/// ```
pub fn evaluate(input: &str, env: &Environment) -> Result<bool, EvalError> {
    let expr = Expression::parse(input)?;
    expr.eval(env)
}

/// Parses an expression string and generates its complete truth table.
pub fn truth_table(input: &str) -> Result<TruthTable, EvalError> {
    let expr = Expression::parse(input)?;
    TruthTable::for_expression(&expr)
}
