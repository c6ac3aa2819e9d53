//! Stylesheet rewrites.
//!
//! Both passes consume a [`Stylesheet`] and return a new one:
//!
//! - [`factor`] groups selectors that share declarations, so
//!   `a { color: red } b { color: red }` becomes `a, b { color: red }`
//! - [`explode`] splits every ruleset into one-selector, one-declaration
//!   rulesets, in source order
//!
//! Each pass works on one statement list at a time and recurses into
//! `@media` blocks. `@page` statements pass through untouched.
//!
//! # Ordering
//!
//! Factoring sorts by rendered selector and declaration text, so its output
//! does not follow document order. When the same property is set for the
//! same selector by two rulesets, this can change which value wins the
//! cascade. Set [`FactorOptions::preserve_overrides`] to leave such
//! statement lists alone and get a [`Conflict`] report instead.

mod explode;
mod factor;

pub use explode::{explode, explode_with_progress};
pub use factor::{factor, factor_with_options, factor_with_progress};

use std::fmt;

use serde::Deserialize;

use crate::ast::Stylesheet;

/// How [`factor`] groups selectors and declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactorGrouping {
    /// Fold declarations per selector, then merge selectors whose
    /// declaration blocks are identical.
    #[default]
    Selector,
    /// Collect the selectors carrying each declaration, then merge
    /// declarations that end up with the same selector list.
    Declaration,
}

/// Options for [`factor_with_options`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct FactorOptions {
    /// Grouping strategy.
    pub grouping: FactorGrouping,
    /// Leave a statement list unfactored when factoring could reorder two
    /// different values of one property on one selector.
    pub preserve_overrides: bool,
}

impl FactorOptions {
    /// Create options with the default grouping and no override check.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the grouping strategy.
    pub fn grouping(mut self, grouping: FactorGrouping) -> Self {
        self.grouping = grouping;
        self
    }

    /// Enable or disable the override check.
    pub fn preserve_overrides(mut self, enabled: bool) -> Self {
        self.preserve_overrides = enabled;
        self
    }
}

/// A selector that receives one property from two rulesets with different
/// values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Conflict {
    /// Rendered selector.
    pub selector: String,
    /// Property name.
    pub property: String,
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' is set more than once for '{}' with different values",
            self.property, self.selector
        )
    }
}

/// Result of [`factor_with_options`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FactorOutcome {
    /// The factored stylesheet.
    pub stylesheet: Stylesheet,
    /// Conflicts that kept statement lists unfactored.
    pub conflicts: Vec<Conflict>,
}

impl FactorOutcome {
    /// Whether every statement list was factored.
    pub fn is_clean(&self) -> bool {
        self.conflicts.is_empty()
    }
}
