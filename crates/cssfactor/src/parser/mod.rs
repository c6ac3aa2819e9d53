//! CSS parsing module.
//!
//! [`Parser`] turns tokens into a [`Stylesheet`](crate::ast::Stylesheet),
//! recording a [`ParseError`] for every malformed construct instead of
//! failing. [`parse_css`] is the one-call entry point.

mod css_parser;
mod diagnostics;
mod error;

pub use css_parser::{MAX_DEPTH, Parser, parse_css};
pub use diagnostics::{Diagnostic, DiagnosticLog, DiagnosticSink};
pub use error::ParseError;
