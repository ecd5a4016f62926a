use thiserror::Error;

/// Errors that can occur while parsing a boolean expression string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expression is empty")]
    EmptyExpression,

    #[error("unknown token '{found}' at position {position}")]
    UnknownToken { found: String, position: usize },

    #[error("expected an operand at position {position}, found {found}")]
    ExpectedOperand { position: usize, found: String },

    #[error(
        "unbalanced parentheses: expected ')' for the group opened at position {open_position}"
    )]
    UnbalancedParens { open_position: usize },

    #[error("unexpected trailing input '{found}' at position {position}")]
    TrailingInput { found: String, position: usize },
}

/// Errors that can occur while evaluating an expression against an environment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("variable '{0}' is not bound in the environment")]
    UnboundVariable(String),
}

/// Errors that can occur when constructing a `Recipe` from raw field values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("recipe name must not be empty")]
    EmptyName,

    #[error("recipe '{name}' has a negative price: {price}")]
    NegativePrice { name: String, price: f64 },

    #[error("recipe '{name}' has a non-finite price")]
    NonFinitePrice { name: String },

    #[error("'{0}' is not a recognized difficulty (expected Easy, Medium, or Hard)")]
    UnknownDifficulty(String),
}

/// Errors that can occur while loading or saving a recipe book.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to read or write the recipe file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed recipe CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
