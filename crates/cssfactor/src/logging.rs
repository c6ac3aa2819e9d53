//! Logging facilities.
//!
//! cssfactor uses the `tracing` crate for instrumentation and never installs
//! a subscriber itself. To see logs, install one in the host application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt::init();
//!
//!     let processed = cssfactor::process(css, &cssfactor::Config::default());
//! }
//! ```
//!
//! The parser additionally accepts an explicit
//! [`DiagnosticSink`](crate::parser::DiagnosticSink) for callers that want
//! recovery events as values rather than log lines.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by stage, e.g.
/// `RUST_LOG=cssfactor::parser=debug`.
pub mod targets {
    /// Crate-wide target.
    pub const CRATE: &str = "cssfactor";
    /// Tokenizer target.
    pub const TOKENIZER: &str = "cssfactor::tokenizer";
    /// Parser and error recovery target.
    pub const PARSER: &str = "cssfactor::parser";
    /// Factor/explode passes target.
    pub const TRANSFORM: &str = "cssfactor::transform";
    /// End-to-end pipeline target.
    pub const PIPELINE: &str = "cssfactor::pipeline";
}
