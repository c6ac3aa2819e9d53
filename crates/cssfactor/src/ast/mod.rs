//! Abstract syntax tree for stylesheets.
//!
//! Node kinds that vary (statements, selector details, values) are closed
//! enums, so the renderer and the transformation passes match on them
//! exhaustively.

mod selector;
mod stylesheet;
mod value;

pub use selector::{Combinator, Detail, Selector, SimpleSelector};
pub use stylesheet::{Import, Media, Page, Ruleset, Statement, Stylesheet};
pub use value::{Declaration, Value};
