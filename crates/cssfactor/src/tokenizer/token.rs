//! Token definitions.

use std::fmt;

/// The kind of a lexical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Run of spaces, tabs and newlines. Kept because it is the descendant combinator.
    Whitespace,
    /// `/* ... */`. Recognized by the tokenizer but never emitted.
    Comment,
    /// `@name`
    AtKeyword,
    /// `url(...)` including its argument.
    Uri,
    /// `name(` including the opening paren.
    Function,
    /// Identifier, including custom property names such as `--x`.
    Ident,
    /// `#name`, used both for ID selectors and hex colours.
    Hash,
    /// Quoted string, lexeme includes the quotes.
    String,
    /// `!important`, with optional whitespace after the `!`.
    Important,
    /// Number with an `em` suffix.
    Ems,
    /// Number with an `ex` suffix.
    Exs,
    /// Number with an absolute, relative or unknown length suffix.
    Length,
    /// Number with a `deg`, `grad`, `rad` or `turn` suffix.
    Angle,
    /// Number with a `ms` or `s` suffix.
    Time,
    /// Number with a `hz` or `khz` suffix.
    Freq,
    /// Number followed by `%`.
    Percentage,
    /// Bare number.
    Number,
    LeftBrace,
    RightBrace,
    LeftParen,
    RightParen,
    LeftBracket,
    RightBracket,
    Colon,
    Semicolon,
    Comma,
    Dot,
    Star,
    Slash,
    /// `+` adjacent sibling combinator.
    Plus,
    /// `>` child combinator.
    Greater,
    /// `~` general sibling combinator.
    Tilde,
    /// `=`
    Equals,
    /// `~=`
    Includes,
    /// `|=`
    DashMatch,
    /// Any single character no other rule matched.
    Delim,
}

/// A single token: its kind, the exact source text, and where it starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token kind.
    pub kind: TokenKind,
    /// The matched source text.
    pub lexeme: String,
    /// Line of the first character (1-indexed).
    pub line: u32,
    /// Column of the first character (1-indexed, in chars).
    pub column: u32,
}

impl Token {
    /// Create a token positioned at 1:1.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line: 1,
            column: 1,
        }
    }

    /// Set the source position.
    pub fn at(mut self, line: u32, column: u32) -> Self {
        self.line = line;
        self.column = column;
        self
    }

    /// Check the kind.
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// Case-insensitive comparison of the lexeme.
    pub fn lexeme_eq(&self, text: &str) -> bool {
        self.lexeme.eq_ignore_ascii_case(text)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Whitespace => write!(f, "whitespace"),
            _ => write!(f, "'{}'", self.lexeme),
        }
    }
}
