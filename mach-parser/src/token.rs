//! Token types for the Mach lexer.
use std::fmt;

/// A single whitespace-delimited token.
#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    Integer(i64),
    Float(f64),
    /// Content between the surrounding quotes. No escapes are processed.
    Str(String),
    /// Command names, operator names, variables and labels.
    Symbol(String),
}

impl Token {
    /// Classify a raw token: integer, then float, then quoted string, else symbol.
    pub fn atomize(raw: &str) -> Token {
        if let Ok(n) = raw.parse::<i64>() {
            return Token::Integer(n);
        }
        if let Ok(x) = raw.parse::<f64>() {
            return Token::Float(x);
        }
        if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
            return Token::Str(raw[1..raw.len() - 1].to_string());
        }
        Token::Symbol(raw.to_string())
    }

    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Token::Symbol(name) => Some(name),
            _ => None,
        }
    }

    pub fn is_literal(&self) -> bool {
        !matches!(self, Token::Symbol(_))
    }

    /// Short description of the token kind, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Token::Integer(_) => "integer",
            Token::Float(_) => "float",
            Token::Str(_) => "string",
            Token::Symbol(_) => "symbol",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Integer(n) => write!(f, "{}", n),
            Token::Float(x) => write!(f, "{:?}", x),
            Token::Str(s) => write!(f, "\"{}\"", s),
            Token::Symbol(name) => write!(f, "{}", name),
        }
    }
}

/// A non-empty, non-comment source line.
#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    /// 1-based line number in the source text.
    pub number: usize,
    pub tokens: Vec<Token>,
}

impl Line {
    /// The leading token when it is a symbol (the command or `label` keyword).
    pub fn head(&self) -> Option<&str> {
        self.tokens.first().and_then(Token::as_symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atomize_numbers() {
        assert_eq!(Token::atomize("42"), Token::Integer(42));
        assert_eq!(Token::atomize("-7"), Token::Integer(-7));
        assert_eq!(Token::atomize("+3"), Token::Integer(3));
        assert_eq!(Token::atomize("3.5"), Token::Float(3.5));
        assert_eq!(Token::atomize("1e3"), Token::Float(1000.0));
    }

    #[test]
    fn test_integer_wins_over_float() {
        assert!(matches!(Token::atomize("10"), Token::Integer(10)));
    }

    #[test]
    fn test_out_of_range_integer_becomes_float() {
        match Token::atomize("99999999999999999999") {
            Token::Float(x) => assert!(x > 9.9e19),
            other => panic!("expected float, got {other:?}"),
        }
    }

    #[test]
    fn test_atomize_strings() {
        assert_eq!(Token::atomize("\"hi\""), Token::Str("hi".into()));
        assert_eq!(Token::atomize("\"\""), Token::Str(String::new()));
        // a lone quote is too short to be a string literal
        assert_eq!(Token::atomize("\""), Token::Symbol("\"".into()));
        assert_eq!(Token::atomize("\"open"), Token::Symbol("\"open".into()));
    }

    #[test]
    fn test_atomize_symbols() {
        assert_eq!(Token::atomize("loop"), Token::Symbol("loop".into()));
        assert_eq!(Token::atomize("exec_1"), Token::Symbol("exec_1".into()));
    }

    #[test]
    fn test_display_round_trips_source_form() {
        assert_eq!(Token::Float(1.0).to_string(), "1.0");
        assert_eq!(Token::Str("a".into()).to_string(), "\"a\"");
        assert_eq!(Token::Integer(-2).to_string(), "-2");
    }
}
