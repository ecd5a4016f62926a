use crate::error::ParseError;
use crate::logic::expression::Expression;
use crate::logic::token::{Token, TokenKind};

/// Recursive-descent parser for the fixed boolean grammar:
///
/// ```text
/// expr   := term ('or' term)*
/// term   := factor ('and' factor)*
/// factor := 'not' factor | '(' expr ')' | IDENT
/// ```
///
/// NOT binds tightest, then AND, then OR; AND/OR chains associate left.
pub struct Parser {
    tokens: Vec<Token>,
    cursor: usize,
    input_len: usize,
}

impl Parser {
    pub fn new(input: &str, tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            cursor: 0,
            input_len: input.len(),
        }
    }

    /// Consumes the token stream and produces the AST, rejecting any
    /// leftover tokens.
    pub fn parse(mut self) -> Result<Expression, ParseError> {
        if self.tokens.is_empty() {
            return Err(ParseError::EmptyExpression);
        }
        let expr = self.parse_expr()?;
        if let Some(token) = self.peek() {
            return Err(ParseError::TrailingInput {
                found: token.describe(),
                position: token.position,
            });
        }
        Ok(expr)
    }

    fn parse_expr(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.parse_term()?;
        while self.consume_if(|k| matches!(k, TokenKind::Or)) {
            let right = self.parse_term()?;
            left = Expression::Or(Box::new(left), Box::new(right));
        }
        Ok(left)
    }

    fn parse_term(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.parse_factor()?;
        while self.consume_if(|k| matches!(k, TokenKind::And)) {
            let right = self.parse_factor()?;
            left = Expression::And(Box::new(left), Box::new(right));
        }
        Ok(left)
    }

    fn parse_factor(&mut self) -> Result<Expression, ParseError> {
        let token = match self.advance() {
            Some(token) => token,
            None => {
                return Err(ParseError::ExpectedOperand {
                    position: self.input_len,
                    found: "end of input".to_string(),
                });
            }
        };
        match token.kind {
            TokenKind::Not => {
                let inner = self.parse_factor()?;
                Ok(Expression::Not(Box::new(inner)))
            }
            TokenKind::LParen => {
                let open_position = token.position;
                let inner = self.parse_expr()?;
                if !self.consume_if(|k| matches!(k, TokenKind::RParen)) {
                    return Err(ParseError::UnbalancedParens { open_position });
                }
                Ok(inner)
            }
            TokenKind::Ident(name) => Ok(Expression::Var(name)),
            TokenKind::And | TokenKind::Or | TokenKind::RParen => {
                Err(ParseError::ExpectedOperand {
                    position: token.position,
                    found: token.describe(),
                })
            }
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.cursor)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.cursor).cloned();
        if token.is_some() {
            self.cursor += 1;
        }
        token
    }

    fn consume_if(&mut self, matches: impl Fn(&TokenKind) -> bool) -> bool {
        if let Some(token) = self.peek() {
            if matches(&token.kind) {
                self.cursor += 1;
                return true;
            }
        }
        false
    }
}
