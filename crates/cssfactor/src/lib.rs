//! CSS stylesheet factoring and exploding.
//!
//! This crate reads a stylesheet, rewrites it and writes it back out:
//!
//! - **Tokenizer**: ordered longest-match rules, never fails
//! - **Parser**: recursive descent with statement and declaration level
//!   error recovery, positioned errors and an optional diagnostic sink
//! - **AST**: closed enums for statements, selector details and values
//! - **Transforms**: `factor` groups selectors sharing declarations,
//!   `explode` splits rulesets into single-declaration units
//! - **Renderer**: `Display` for every node
//!
//! # Example
//!
//! ```ignore
//! use cssfactor::prelude::*;
//!
//! let processed = process("a { color: red; }\nb { color: red; }", &Config::default());
//! assert_eq!(processed.css, "a, b { color: red }");
//!
//! // Or drive the stages yourself
//! let (sheet, errors) = parse_css("a { color: red; font-size: 12px; }");
//! let exploded = explode(sheet);
//! assert_eq!(render(&exploded), "a { color: red }\na { font-size: 12px }");
//! ```

pub mod ast;
pub mod config;
pub mod logging;
pub mod parser;
pub mod pipeline;
pub mod progress;
pub mod render;
pub mod tokenizer;
pub mod transform;

mod error;

pub use config::Config;
pub use error::{Error, Result};
pub use pipeline::{Mode, Pipeline, Processed, process};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::ast::{
        Combinator, Declaration, Detail, Import, Media, Page, Ruleset, Selector, SimpleSelector,
        Statement, Stylesheet, Value,
    };
    pub use crate::config::Config;
    pub use crate::parser::{Diagnostic, DiagnosticLog, DiagnosticSink, ParseError, Parser, parse_css};
    pub use crate::pipeline::{Mode, Pipeline, Processed, ProgressEvent, Stage, process};
    pub use crate::progress::ProgressReporter;
    pub use crate::render::render;
    pub use crate::tokenizer::{Token, TokenKind, tokenize, tokenize_with_progress};
    pub use crate::transform::{
        Conflict, FactorGrouping, FactorOptions, FactorOutcome, explode, explode_with_progress,
        factor, factor_with_options, factor_with_progress,
    };
}
