//! CSS tokenizer.
//!
//! The tokenizer is an ordered table of `(kind, pattern)` rules. At each scan
//! position every rule is tried; the longest match wins and ties go to the
//! rule listed first. The numeric-suffix rules (`Ems` through `Percentage`)
//! are listed before the bare `Number` rule, so `10px` is a single length
//! and `10` a plain number.
//!
//! Tokenizing never fails. Input no rule recognizes is emitted as a
//! one-character [`TokenKind::Delim`] and left for the parser to reject.
//! Comments are matched but dropped; whitespace is kept since it is the
//! descendant combinator inside selectors.

mod token;

pub use token::{Token, TokenKind};

use std::sync::OnceLock;

use regex::Regex;

use crate::logging::targets;
use crate::progress::ProgressReporter;

const NUM: &str = r"[+-]?(?:[0-9]*\.[0-9]+|[0-9]+)(?:[eE][+-]?[0-9]+)?";
const IDENT: &str = r"-{0,2}(?:[_a-zA-Z]|[^\x00-\x7F]|\\[^\n])(?:[_a-zA-Z0-9-]|[^\x00-\x7F]|\\[^\n])*";

struct Rule {
    kind: TokenKind,
    pattern: Regex,
}

fn rules() -> &'static [Rule] {
    static RULES: OnceLock<Vec<Rule>> = OnceLock::new();
    RULES.get_or_init(|| {
        let table: Vec<(TokenKind, String)> = vec![
            (TokenKind::Whitespace, r"\s+".into()),
            (TokenKind::Comment, r"/\*(?s:.*?)(?:\*/|\z)".into()),
            (TokenKind::AtKeyword, format!("@{IDENT}")),
            (
                TokenKind::Uri,
                r#"(?i)url\(\s*(?:"(?:[^"\\\n]|\\.)*"|'(?:[^'\\\n]|\\.)*'|[^)\s"']*)\s*\)"#.into(),
            ),
            (TokenKind::Function, format!(r"{IDENT}\(")),
            (TokenKind::Ident, IDENT.into()),
            (
                TokenKind::Hash,
                r"#(?:[_a-zA-Z0-9-]|[^\x00-\x7F]|\\[^\n])+".into(),
            ),
            (
                TokenKind::String,
                r#""(?:[^"\\\n]|\\(?s:.))*"|'(?:[^'\\\n]|\\(?s:.))*'"#.into(),
            ),
            (TokenKind::Important, r"(?i)!\s*important\b".into()),
            (TokenKind::Ems, format!("(?i){NUM}em")),
            (TokenKind::Exs, format!("(?i){NUM}ex")),
            (
                TokenKind::Length,
                format!("(?i){NUM}(?:px|cm|mm|in|pt|pc|q|rem|ch|vw|vh|vmin|vmax)"),
            ),
            (TokenKind::Angle, format!("(?i){NUM}(?:deg|grad|rad|turn)")),
            (TokenKind::Time, format!("(?i){NUM}(?:ms|s)")),
            (TokenKind::Freq, format!("(?i){NUM}(?:khz|hz)")),
            (TokenKind::Percentage, format!("{NUM}%")),
            // Unknown units (dppx, fr, ...) still read as one dimension.
            (TokenKind::Length, format!("{NUM}[a-zA-Z]+")),
            (TokenKind::Number, NUM.into()),
            (TokenKind::Includes, r"~=".into()),
            (TokenKind::DashMatch, r"\|=".into()),
            (TokenKind::LeftBrace, r"\{".into()),
            (TokenKind::RightBrace, r"\}".into()),
            (TokenKind::LeftParen, r"\(".into()),
            (TokenKind::RightParen, r"\)".into()),
            (TokenKind::LeftBracket, r"\[".into()),
            (TokenKind::RightBracket, r"\]".into()),
            (TokenKind::Colon, r":".into()),
            (TokenKind::Semicolon, r";".into()),
            (TokenKind::Comma, r",".into()),
            (TokenKind::Dot, r"\.".into()),
            (TokenKind::Star, r"\*".into()),
            (TokenKind::Slash, r"/".into()),
            (TokenKind::Plus, r"\+".into()),
            (TokenKind::Greater, r">".into()),
            (TokenKind::Tilde, r"~".into()),
            (TokenKind::Equals, r"=".into()),
            (TokenKind::Delim, r"(?s:.)".into()),
        ];

        table
            .into_iter()
            .map(|(kind, pattern)| Rule {
                kind,
                pattern: Regex::new(&format!("^(?:{pattern})"))
                    .expect("tokenizer patterns are valid"),
            })
            .collect()
    })
}

/// Tokenize CSS source text.
pub fn tokenize(source: &str) -> Vec<Token> {
    scan(source, &mut ProgressReporter::silent())
}

/// Tokenize CSS source text, reporting percent-complete after each token.
///
/// The percentage is the scan position over the input length and never
/// decreases. The last report is always 100.
pub fn tokenize_with_progress(source: &str, on_progress: impl FnMut(u8)) -> Vec<Token> {
    scan(source, &mut ProgressReporter::new(on_progress))
}

fn scan(source: &str, progress: &mut ProgressReporter<'_>) -> Vec<Token> {
    let rules = rules();
    let mut tokens = vec![];
    let mut pos = 0;
    let mut line = 1u32;
    let mut column = 1u32;

    while pos < source.len() {
        let rest = &source[pos..];

        let mut best: Option<(TokenKind, usize)> = None;
        for rule in rules {
            if let Some(m) = rule.pattern.find(rest) {
                let len = m.end();
                if len > 0 && best.is_none_or(|(_, best_len)| len > best_len) {
                    best = Some((rule.kind, len));
                }
            }
        }

        // The Delim rule matches any char, so this only guards empty input.
        let Some((kind, len)) = best else {
            break;
        };

        let lexeme = &rest[..len];
        if kind != TokenKind::Comment {
            tokens.push(Token::new(kind, lexeme).at(line, column));
        }

        for ch in lexeme.chars() {
            if ch == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        pos += len;

        if kind != TokenKind::Comment {
            progress.report(pos, source.len());
        }
    }

    progress.finish();

    tracing::debug!(
        target: targets::TOKENIZER,
        tokens = tokens.len(),
        bytes = source.len(),
        "tokenized stylesheet"
    );

    tokens
}
