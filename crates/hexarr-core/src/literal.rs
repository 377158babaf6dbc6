use core::fmt;

use crate::token::{Token, render_token, tokenize};

/// Parsed input line, ready to be rendered as `= {0x.., 0x..}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArrayLiteral<'a> {
    tokens: Vec<Token<'a>>,
}

/// Owned result of formatting a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatted {
    /// The `= {...}` initializer.
    pub rendered: String,
    /// Number of elements between the braces.
    pub count: usize,
}

impl<'a> ArrayLiteral<'a> {
    pub fn parse(line: &'a str) -> Self {
        Self {
            tokens: tokenize(line),
        }
    }

    pub fn tokens(&self) -> &[Token<'a>] {
        &self.tokens
    }

    pub fn count(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// `= {0xAB, 0xCD}`; `= {}` when there are no tokens.
    pub fn rendered(&self) -> String {
        self.to_string()
    }

    pub fn into_formatted(self) -> Formatted {
        Formatted {
            rendered: self.rendered(),
            count: self.count(),
        }
    }
}

impl fmt::Display for ArrayLiteral<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = self
            .tokens
            .iter()
            .map(|t| render_token(t))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "= {{{body}}}")
    }
}

impl Formatted {
    /// Second output line, e.g. `Length of the array: 3`.
    pub fn length_line(&self) -> String {
        format!("Length of the array: {}", self.count)
    }
}
