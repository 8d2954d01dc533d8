//! Lazy line lexer for Mach source code.
//!
//! Each non-blank, non-comment line becomes a [`Line`] of whitespace-separated
//! tokens. The lexer never fails: anything that is not a number or a quoted
//! string is a symbol, and later passes decide whether it makes sense.
use crate::token::{Line, Token};
use std::iter::Enumerate;
use std::str;

pub struct Lexer<'a> {
    lines: Enumerate<str::Lines<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            lines: source.lines().enumerate(),
        }
    }

    /// Tokenize the whole source eagerly.
    pub fn tokenize(source: &str) -> Vec<Line> {
        Lexer::new(source).collect()
    }
}

impl Iterator for Lexer<'_> {
    type Item = Line;

    fn next(&mut self) -> Option<Line> {
        for (idx, raw) in self.lines.by_ref() {
            let text = raw.trim();
            if text.is_empty() || text.starts_with('#') {
                continue;
            }
            return Some(Line {
                number: idx + 1,
                tokens: text.split_whitespace().map(Token::atomize).collect(),
            });
        }
        None
    }
}
