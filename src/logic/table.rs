use crate::error::EvalError;
use crate::logic::expression::{Environment, Expression};
use itertools::Itertools;
use serde::Serialize;
use std::fmt;

/// One row of a truth table: a complete variable assignment and the result
/// the expression produced for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TruthRow {
    pub assignment: Vec<bool>,
    pub result: bool,
}

/// A complete truth table for an expression over `n` variables.
///
/// Variables appear in first-occurrence order. Rows enumerate all `2^n`
/// assignments by counting from zero, with the first variable as the
/// most-significant bit, so the earliest variable varies slowest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TruthTable {
    pub variables: Vec<String>,
    pub rows: Vec<TruthRow>,
}

impl TruthTable {
    /// Builds the full table for an already-parsed expression.
    pub fn for_expression(expr: &Expression) -> Result<Self, EvalError> {
        let variables = expr.variables();
        let n = variables.len() as u32;

        let mut rows = Vec::with_capacity(1 << n);
        for mask in 0..(1u64 << n) {
            let mut env = Environment::with_capacity(variables.len());
            let mut assignment = Vec::with_capacity(variables.len());
            for (i, name) in variables.iter().enumerate() {
                let bit = (mask >> (n as usize - i - 1)) & 1 == 1;
                env.insert(name.clone(), bit);
                assignment.push(bit);
            }
            let result = expr.eval(&env)?;
            rows.push(TruthRow { assignment, result });
        }

        Ok(Self { variables, rows })
    }
}

impl fmt::Display for TruthTable {
    /// Renders an aligned text table with T/F cells, expression last:
    ///
    /// ```text
    ///  A | B | A and B
    /// ---+---+--------
    ///  F | F | F
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = self.variables.iter().map(|v| format!(" {} ", v)).join("|");
        writeln!(f, "{}| result", header)?;

        let rule = self
            .variables
            .iter()
            .map(|v| "-".repeat(v.chars().count() + 2))
            .join("+");
        writeln!(f, "{}+-------", rule)?;

        for row in &self.rows {
            let cells = self
                .variables
                .iter()
                .zip(&row.assignment)
                .map(|(v, &bit)| {
                    let label = if bit { "T" } else { "F" };
                    format!(" {:^width$} ", label, width = v.chars().count())
                })
                .join("|");
            writeln!(f, "{}| {}", cells, if row.result { "T" } else { "F" })?;
        }
        Ok(())
    }
}
