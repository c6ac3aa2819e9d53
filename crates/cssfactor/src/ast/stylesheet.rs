//! Stylesheet and statement definitions.

use super::{Declaration, Selector};

/// The root of a parsed stylesheet.
///
/// The tree has no back-references: every node is owned by its parent and
/// transformations consume one tree and return a new one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Stylesheet {
    /// Value of `@charset`, unquoted.
    pub charset: Option<String>,
    /// `@import` rules in source order.
    pub imports: Vec<Import>,
    /// Top-level statements in source order.
    pub statements: Vec<Statement>,
}

impl Stylesheet {
    /// Create an empty stylesheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a stylesheet holding only `statements`.
    pub fn from_statements(statements: Vec<Statement>) -> Self {
        Self {
            statements,
            ..Self::default()
        }
    }

    /// Check if the stylesheet has no content at all.
    pub fn is_empty(&self) -> bool {
        self.charset.is_none() && self.imports.is_empty() && self.statements.is_empty()
    }

    /// Iterate over every ruleset, descending into `@media` blocks.
    pub fn rulesets(&self) -> impl Iterator<Item = &Ruleset> {
        let mut stack: Vec<&Statement> = self.statements.iter().rev().collect();
        std::iter::from_fn(move || {
            while let Some(statement) = stack.pop() {
                match statement {
                    Statement::Ruleset(ruleset) => return Some(ruleset),
                    Statement::Media(media) => stack.extend(media.statements.iter().rev()),
                    Statement::Page(_) => {}
                }
            }
            None
        })
    }
}

/// An `@import` rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    /// The import target as written: a quoted string or `url(...)`.
    pub url: String,
    /// Media list, possibly empty.
    pub media: Vec<String>,
}

/// A top-level or `@media`-nested statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Ruleset(Ruleset),
    Media(Media),
    Page(Page),
}

/// A selector list with its declaration block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ruleset {
    /// Never empty for rulesets produced by the parser.
    pub selectors: Vec<Selector>,
    /// Declarations in source order.
    pub declarations: Vec<Declaration>,
}

impl Ruleset {
    /// Create a ruleset.
    pub fn new(selectors: Vec<Selector>, declarations: Vec<Declaration>) -> Self {
        Self {
            selectors,
            declarations,
        }
    }
}

/// An `@media` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Media {
    /// Media query list entries, whitespace-normalized.
    pub media: Vec<String>,
    /// The nested statements.
    pub statements: Vec<Statement>,
}

/// An `@page` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Pseudo page name without the colon (`first`, `left`, ...).
    pub pseudo_page: Option<String>,
    /// The page declarations.
    pub declarations: Vec<Declaration>,
}
