//! One selector, one declaration per ruleset.

use crate::ast::{Media, Ruleset, Statement, Stylesheet};
use crate::logging::targets;
use crate::progress::ProgressReporter;

/// Split every ruleset into single-selector, single-declaration rulesets.
///
/// Rulesets are emitted selector-major in source order, so
/// `a, b { x: 1; y: 2 }` becomes `a { x: 1 }`, `a { y: 2 }`, `b { x: 1 }`,
/// `b { y: 2 }`. Rulesets without declarations disappear.
pub fn explode(stylesheet: Stylesheet) -> Stylesheet {
    explode_inner(stylesheet, &mut ProgressReporter::silent())
}

/// [`explode`], reporting percent-complete after each top-level statement.
pub fn explode_with_progress(stylesheet: Stylesheet, on_progress: impl FnMut(u8)) -> Stylesheet {
    explode_inner(stylesheet, &mut ProgressReporter::new(on_progress))
}

fn explode_inner(stylesheet: Stylesheet, progress: &mut ProgressReporter<'_>) -> Stylesheet {
    let Stylesheet {
        charset,
        imports,
        statements,
    } = stylesheet;

    let total = statements.len();
    let mut out = Vec::with_capacity(total);
    for (done, statement) in statements.into_iter().enumerate() {
        explode_statement(statement, &mut out);
        progress.report(done + 1, total);
    }
    progress.finish();

    tracing::debug!(
        target: targets::TRANSFORM,
        before = total,
        after = out.len(),
        "exploded stylesheet"
    );

    Stylesheet {
        charset,
        imports,
        statements: out,
    }
}

fn explode_statement(statement: Statement, out: &mut Vec<Statement>) {
    match statement {
        Statement::Ruleset(ruleset) => {
            for selector in &ruleset.selectors {
                for declaration in &ruleset.declarations {
                    out.push(Statement::Ruleset(Ruleset::new(
                        vec![selector.clone()],
                        vec![declaration.clone()],
                    )));
                }
            }
        }
        Statement::Media(media) => {
            let mut statements = vec![];
            for statement in media.statements {
                explode_statement(statement, &mut statements);
            }
            out.push(Statement::Media(Media {
                media: media.media,
                statements,
            }));
        }
        page @ Statement::Page(_) => out.push(page),
    }
}
