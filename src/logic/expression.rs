use crate::error::{EvalError, ParseError};
use crate::logic::parser::Parser;
use crate::logic::token::tokenize;
use ahash::AHashMap;
use std::fmt;
use std::str::FromStr;

/// The environment a single evaluation runs against: variable name to value.
///
/// The environment is caller-owned and transient; the expression never stores
/// or mutates it.
pub type Environment = AHashMap<String, bool>;

/// An immutable parsed boolean formula over named variables.
///
/// Built once from a source string, evaluated any number of times against
/// different environments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expression {
    Var(String),
    Not(Box<Expression>),
    And(Box<Expression>, Box<Expression>),
    Or(Box<Expression>, Box<Expression>),
}

impl Expression {
    /// Parses an expression string into an AST.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let tokens = tokenize(input)?;
        Parser::new(input, tokens).parse()
    }

    /// Evaluates the expression against an environment.
    ///
    /// Pure and side-effect free. AND and OR short-circuit, which is
    /// observationally identical to full evaluation over booleans.
    pub fn eval(&self, env: &Environment) -> Result<bool, EvalError> {
        match self {
            Expression::Var(name) => env
                .get(name)
                .copied()
                .ok_or_else(|| EvalError::UnboundVariable(name.clone())),
            Expression::Not(inner) => Ok(!inner.eval(env)?),
            Expression::And(left, right) => {
                if !left.eval(env)? {
                    return Ok(false);
                }
                right.eval(env)
            }
            Expression::Or(left, right) => {
                if left.eval(env)? {
                    return Ok(true);
                }
                right.eval(env)
            }
        }
    }

    /// Returns the distinct variable names in first-occurrence order.
    pub fn variables(&self) -> Vec<String> {
        let mut found = Vec::new();
        self.collect_variables(&mut found);
        found
    }

    fn collect_variables(&self, found: &mut Vec<String>) {
        match self {
            Expression::Var(name) => {
                if !found.iter().any(|v| v == name) {
                    found.push(name.clone());
                }
            }
            Expression::Not(inner) => inner.collect_variables(found),
            Expression::And(left, right) | Expression::Or(left, right) => {
                left.collect_variables(found);
                right.collect_variables(found);
            }
        }
    }

    /// Binding strength, used by `Display` to emit only necessary parentheses.
    fn precedence(&self) -> u8 {
        match self {
            Expression::Or(..) => 1,
            Expression::And(..) => 2,
            Expression::Not(..) => 3,
            Expression::Var(..) => 4,
        }
    }

    fn fmt_with_precedence(&self, f: &mut fmt::Formatter<'_>, parent: u8) -> fmt::Result {
        let current = self.precedence();
        let needs_parens = current < parent;
        if needs_parens {
            write!(f, "(")?;
        }
        match self {
            Expression::Var(name) => write!(f, "{}", name)?,
            Expression::Not(inner) => {
                write!(f, "not ")?;
                inner.fmt_with_precedence(f, current)?;
            }
            Expression::And(left, right) => {
                left.fmt_with_precedence(f, current)?;
                write!(f, " and ")?;
                right.fmt_with_precedence(f, current)?;
            }
            Expression::Or(left, right) => {
                left.fmt_with_precedence(f, current)?;
                write!(f, " or ")?;
                right.fmt_with_precedence(f, current)?;
            }
        }
        if needs_parens {
            write!(f, ")")?;
        }
        Ok(())
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_with_precedence(f, 0)
    }
}

impl FromStr for Expression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Expression::parse(s)
    }
}
