use crate::error::ParseError;

/// A single lexical unit of the expression grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Ident(String),
    And,
    Or,
    Not,
    LParen,
    RParen,
}

/// A token together with its byte position in the source string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: usize,
}

impl Token {
    /// Human-readable description used in error messages.
    pub fn describe(&self) -> String {
        match &self.kind {
            TokenKind::Ident(name) => format!("identifier '{}'", name),
            TokenKind::And => "'and'".to_string(),
            TokenKind::Or => "'or'".to_string(),
            TokenKind::Not => "'not'".to_string(),
            TokenKind::LParen => "'('".to_string(),
            TokenKind::RParen => "')'".to_string(),
        }
    }
}

/// Splits an expression string into tokens.
///
/// Keywords (`and`, `or`, `not`) are matched case-insensitively and may also
/// be written as the symbols `∧`, `∨`, and `¬`. Identifiers start with a
/// letter or underscore. Anything else is an `UnknownToken` error.
pub fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(position, ch)) = chars.peek() {
        match ch {
            c if c.is_whitespace() => {
                chars.next();
            }
            '(' => {
                chars.next();
                tokens.push(Token {
                    kind: TokenKind::LParen,
                    position,
                });
            }
            ')' => {
                chars.next();
                tokens.push(Token {
                    kind: TokenKind::RParen,
                    position,
                });
            }
            '∧' => {
                chars.next();
                tokens.push(Token {
                    kind: TokenKind::And,
                    position,
                });
            }
            '∨' => {
                chars.next();
                tokens.push(Token {
                    kind: TokenKind::Or,
                    position,
                });
            }
            '¬' => {
                chars.next();
                tokens.push(Token {
                    kind: TokenKind::Not,
                    position,
                });
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                let mut word = String::new();
                while let Some(&(_, c)) = chars.peek() {
                    if c.is_ascii_alphanumeric() || c == '_' {
                        word.push(c);
                        chars.next();
                    } else {
                        break;
                    }
                }
                let kind = match word.to_ascii_lowercase().as_str() {
                    "and" => TokenKind::And,
                    "or" => TokenKind::Or,
                    "not" => TokenKind::Not,
                    _ => TokenKind::Ident(word),
                };
                tokens.push(Token { kind, position });
            }
            other => {
                return Err(ParseError::UnknownToken {
                    found: other.to_string(),
                    position,
                });
            }
        }
    }

    Ok(tokens)
}
