//! Selector grouping.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::ast::{Declaration, Media, Ruleset, Selector, Statement, Stylesheet};
use crate::logging::targets;
use crate::progress::ProgressReporter;

use super::{Conflict, FactorGrouping, FactorOptions, FactorOutcome};

/// Group selectors that share declarations, with default options.
///
/// Every ruleset is expanded into `(selector, declaration)` pairs, the pairs
/// are sorted by rendered selector then rendered declaration, adjacent pairs
/// with the same selector are folded into one ruleset, and selectors whose
/// folded declaration blocks are identical are merged into one selector
/// list.
///
/// # Example
///
/// ```ignore
/// let (sheet, _) = parse_css("a { color: red; }\nb { color: red; }");
/// assert_eq!(factor(sheet).to_string(), "a, b { color: red }");
/// ```
pub fn factor(stylesheet: Stylesheet) -> Stylesheet {
    factor_with_options(stylesheet, &FactorOptions::default(), &mut ProgressReporter::silent())
        .stylesheet
}

/// [`factor`], reporting percent-complete after each top-level statement.
pub fn factor_with_progress(stylesheet: Stylesheet, on_progress: impl FnMut(u8)) -> Stylesheet {
    let mut progress = ProgressReporter::new(on_progress);
    factor_with_options(stylesheet, &FactorOptions::default(), &mut progress).stylesheet
}

/// Factor with explicit options, collecting override conflicts.
pub fn factor_with_options(
    stylesheet: Stylesheet,
    options: &FactorOptions,
    progress: &mut ProgressReporter<'_>,
) -> FactorOutcome {
    let Stylesheet {
        charset,
        imports,
        statements,
    } = stylesheet;

    let before = statements.len();
    let mut conflicts = vec![];
    let statements = factor_statements(statements, options, &mut conflicts, progress);
    progress.finish();

    tracing::debug!(
        target: targets::TRANSFORM,
        before,
        after = statements.len(),
        conflicts = conflicts.len(),
        grouping = ?options.grouping,
        "factored stylesheet"
    );

    FactorOutcome {
        stylesheet: Stylesheet {
            charset,
            imports,
            statements,
        },
        conflicts,
    }
}

/// Where a statement list's non-ruleset statements sit relative to its
/// rulesets.
enum Slot {
    Rulesets,
    Other(Statement),
}

fn factor_statements(
    statements: Vec<Statement>,
    options: &FactorOptions,
    conflicts: &mut Vec<Conflict>,
    progress: &mut ProgressReporter<'_>,
) -> Vec<Statement> {
    let total = statements.len();
    let mut slots = vec![];
    let mut rulesets = vec![];

    for (done, statement) in statements.into_iter().enumerate() {
        match statement {
            Statement::Ruleset(ruleset) => {
                if rulesets.is_empty() {
                    slots.push(Slot::Rulesets);
                }
                rulesets.push(ruleset);
            }
            Statement::Media(media) => {
                let statements = factor_statements(
                    media.statements,
                    options,
                    conflicts,
                    &mut ProgressReporter::silent(),
                );
                slots.push(Slot::Other(Statement::Media(Media {
                    media: media.media,
                    statements,
                })));
            }
            page @ Statement::Page(_) => slots.push(Slot::Other(page)),
        }
        progress.report(done + 1, total);
    }

    let found = if options.preserve_overrides {
        find_conflicts(&rulesets)
    } else {
        vec![]
    };

    let grouped = if found.is_empty() {
        let pairs = expand(rulesets);
        match options.grouping {
            FactorGrouping::Selector => group_by_selector(pairs),
            FactorGrouping::Declaration => group_by_declaration(pairs),
        }
    } else {
        for conflict in &found {
            tracing::warn!(
                target: targets::TRANSFORM,
                selector = %conflict.selector,
                property = %conflict.property,
                "leaving statements unfactored: {}",
                conflict
            );
        }
        conflicts.extend(found);
        rulesets
    };

    let mut grouped = Some(grouped);
    let mut out = vec![];
    for slot in slots {
        match slot {
            Slot::Rulesets => {
                out.extend(grouped.take().into_iter().flatten().map(Statement::Ruleset));
            }
            Slot::Other(statement) => out.push(statement),
        }
    }
    out
}

/// Selector/property combinations set by two rulesets with different
/// declarations, in encounter order.
fn find_conflicts(rulesets: &[Ruleset]) -> Vec<Conflict> {
    let mut seen: HashMap<(String, String), Vec<(usize, String)>> = HashMap::new();
    let mut conflicts: Vec<Conflict> = vec![];

    for (origin, ruleset) in rulesets.iter().enumerate() {
        for selector in &ruleset.selectors {
            let selector_text = selector.to_string();
            for declaration in &ruleset.declarations {
                let text = declaration.to_string();
                let property = declaration.property.to_ascii_lowercase();
                let earlier = seen
                    .entry((selector_text.clone(), property.clone()))
                    .or_default();

                let clash = earlier
                    .iter()
                    .any(|(from, other)| *from != origin && *other != text);
                let reported = conflicts
                    .iter()
                    .any(|c| c.selector == selector_text && c.property == property);
                if clash && !reported {
                    conflicts.push(Conflict {
                        selector: selector_text.clone(),
                        property,
                    });
                }
                earlier.push((origin, text));
            }
        }
    }

    conflicts
}

/// One selector with one declaration, plus their rendered sort keys.
struct Pair {
    selector: Selector,
    declaration: Declaration,
    selector_text: String,
    declaration_text: String,
}

/// Expand rulesets into sorted, duplicate-free pairs.
fn expand(rulesets: Vec<Ruleset>) -> Vec<Pair> {
    let mut pairs = vec![];
    for ruleset in rulesets {
        for selector in &ruleset.selectors {
            let selector_text = selector.to_string();
            for declaration in &ruleset.declarations {
                pairs.push(Pair {
                    selector: selector.clone(),
                    declaration: declaration.clone(),
                    selector_text: selector_text.clone(),
                    declaration_text: declaration.to_string(),
                });
            }
        }
    }

    pairs.sort_by(|a, b| {
        a.selector_text
            .cmp(&b.selector_text)
            .then_with(|| a.declaration_text.cmp(&b.declaration_text))
    });
    pairs.dedup_by(|a, b| {
        a.selector_text == b.selector_text && a.declaration_text == b.declaration_text
    });
    pairs
}

fn group_by_selector(pairs: Vec<Pair>) -> Vec<Ruleset> {
    struct Folded {
        selector: Selector,
        selector_text: String,
        declarations: Vec<Declaration>,
        block: Vec<String>,
    }

    let mut folded: Vec<Folded> = vec![];
    for pair in pairs {
        match folded.last_mut() {
            Some(last) if last.selector_text == pair.selector_text => {
                last.declarations.push(pair.declaration);
                last.block.push(pair.declaration_text);
            }
            _ => folded.push(Folded {
                selector: pair.selector,
                selector_text: pair.selector_text,
                declarations: vec![pair.declaration],
                block: vec![pair.declaration_text],
            }),
        }
    }

    let mut rulesets: Vec<Ruleset> = vec![];
    let mut by_block: HashMap<String, usize> = HashMap::new();
    for entry in folded {
        match by_block.entry(entry.block.join("; ")) {
            Entry::Occupied(index) => rulesets[*index.get()].selectors.push(entry.selector),
            Entry::Vacant(slot) => {
                slot.insert(rulesets.len());
                rulesets.push(Ruleset::new(vec![entry.selector], entry.declarations));
            }
        }
    }
    rulesets
}

fn group_by_declaration(pairs: Vec<Pair>) -> Vec<Ruleset> {
    let mut groups: Vec<(Declaration, Vec<Selector>)> = vec![];
    let mut by_declaration: HashMap<String, usize> = HashMap::new();
    for pair in pairs {
        match by_declaration.entry(pair.declaration_text) {
            Entry::Occupied(index) => groups[*index.get()].1.push(pair.selector),
            Entry::Vacant(slot) => {
                slot.insert(groups.len());
                groups.push((pair.declaration, vec![pair.selector]));
            }
        }
    }

    let mut rulesets: Vec<Ruleset> = vec![];
    let mut by_selectors: HashMap<String, usize> = HashMap::new();
    for (declaration, selectors) in groups {
        let key = selectors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        match by_selectors.entry(key) {
            Entry::Occupied(index) => rulesets[*index.get()].declarations.push(declaration),
            Entry::Vacant(slot) => {
                slot.insert(rulesets.len());
                rulesets.push(Ruleset::new(selectors, vec![declaration]));
            }
        }
    }
    rulesets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_css;

    fn parse(css: &str) -> Stylesheet {
        let (sheet, errors) = parse_css(css);
        assert!(errors.is_empty(), "{:?}", errors);
        sheet
    }

    fn factored(css: &str) -> String {
        factor(parse(css)).to_string()
    }

    fn factored_with(css: &str, options: FactorOptions) -> FactorOutcome {
        factor_with_options(parse(css), &options, &mut ProgressReporter::silent())
    }

    #[test]
    fn shared_declaration_groups_selectors() {
        assert_eq!(
            factored("a { color: red; }\nb { color: red; }"),
            "a, b { color: red }"
        );
    }

    #[test]
    fn declarations_follow_sort_order() {
        assert_eq!(
            factored("b { top: 0; color: red } a { color: red }"),
            "a { color: red }\nb { color: red; top: 0 }"
        );
    }

    #[test]
    fn identical_blocks_merge() {
        assert_eq!(
            factored("a { x: 1; y: 2 } b { y: 2 } c { y: 2; x: 1 }"),
            "a, c { x: 1; y: 2 }\nb { y: 2 }"
        );
    }

    #[test]
    fn duplicate_pairs_collapse() {
        assert_eq!(factored("a { x: 1 } a { x: 1 }"), "a { x: 1 }");
    }

    #[test]
    fn important_is_part_of_the_declaration() {
        assert_eq!(
            factored("a { x: 1 !important } b { x: 1 }"),
            "a { x: 1 !important }\nb { x: 1 }"
        );
    }

    #[test]
    fn factoring_is_idempotent() {
        let css = "ul li, a { color: red; top: 0 } b { color: red } a { left: 2px }";
        let once = factor(parse(css));
        let twice = factor(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn rulesets_take_the_first_ruleset_position() {
        assert_eq!(
            factored(
                "@page { margin: 0 } b { x: 1 } @media print { a { x: 1 } c { x: 1 } } a { x: 1 }"
            ),
            "@page { margin: 0 }\na, b { x: 1 }\n@media print { a, c { x: 1 } }"
        );
    }

    #[test]
    fn empty_rulesets_disappear() {
        assert_eq!(factored("a { } b { x: 1 }"), "b { x: 1 }");
        assert_eq!(factored("a { }"), "");
    }

    #[test]
    fn declaration_grouping() {
        let outcome = factored_with(
            "a { color: red; top: 0 } b { color: red }",
            FactorOptions::new().grouping(FactorGrouping::Declaration),
        );
        assert_eq!(
            outcome.stylesheet.to_string(),
            "a, b { color: red }\na { top: 0 }"
        );
    }

    #[test]
    fn declaration_grouping_merges_shared_selector_lists() {
        let outcome = factored_with(
            "a { x: 1; y: 2 } b { x: 1; y: 2 }",
            FactorOptions::new().grouping(FactorGrouping::Declaration),
        );
        assert_eq!(outcome.stylesheet.to_string(), "a, b { x: 1; y: 2 }");
    }

    #[test]
    fn overrides_are_reordered_without_the_check() {
        assert_eq!(
            factored("a { color: red } a { color: blue }"),
            "a { color: blue; color: red }"
        );
    }

    #[test]
    fn override_check_leaves_statements_alone() {
        let outcome = factored_with(
            "a { color: red } a { color: blue }",
            FactorOptions::new().preserve_overrides(true),
        );

        assert!(!outcome.is_clean());
        assert_eq!(
            outcome.conflicts,
            vec![Conflict {
                selector: "a".into(),
                property: "color".into()
            }]
        );
        assert_eq!(
            outcome.stylesheet.to_string(),
            "a { color: red }\na { color: blue }"
        );
    }

    #[test]
    fn repeated_identical_values_are_not_conflicts() {
        let outcome = factored_with(
            "a { color: red } a, b { color: red }",
            FactorOptions::new().preserve_overrides(true),
        );
        assert!(outcome.is_clean());
        assert_eq!(outcome.stylesheet.to_string(), "a, b { color: red }");
    }

    #[test]
    fn conflicts_are_scoped_to_their_statement_list() {
        let outcome = factored_with(
            "a { x: 1 } b { x: 1 } @media print { a { x: 1 } a { x: 2 } }",
            FactorOptions::new().preserve_overrides(true),
        );
        assert_eq!(outcome.conflicts.len(), 1);
        assert_eq!(
            outcome.stylesheet.to_string(),
            "a, b { x: 1 }\n@media print { a { x: 1 } a { x: 2 } }"
        );
    }

    #[test]
    fn progress_counts_top_level_statements() {
        let mut reports = vec![];
        factor_with_progress(parse("a { x: 1 } b { x: 1 }"), |p| reports.push(p));
        assert_eq!(reports, vec![50, 100]);
    }
}
