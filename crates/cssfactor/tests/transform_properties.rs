//! Structural properties of factor and explode over a corpus of stylesheets.

use cssfactor::prelude::*;

const SAMPLES: &[&str] = &[
    "a { color: red; }\nb { color: red; }",
    "h1, h2 { margin: 0 auto; font: 12px/1.5 'Open Sans', serif } h1 { color: #333 }",
    "ul > li + li, a:hover::before { content: \"x\"; background: url(bg.png) no-repeat }",
    "input[type=\"text\"], a[rel~=nofollow], p[lang|=en] { border: 1px solid rgba(0, 0, 0, .5) }",
    "@media screen and (max-width: 600px) { .nav { display: none } .nav li { float: none } } p { line-height: 1.4em }",
    "li:nth-child(2n + 1) { color: red !important } @page :first { margin: 1in }",
    "div ~ p, #main .col { width: 50%; transition: opacity 200ms; transform: rotate(45deg) }",
    "a { x: 1; y: 2 } b { y: 2; x: 1 } c { x: 1 } d { z: 3 }",
];

fn parse(css: &str) -> Stylesheet {
    let (sheet, errors) = parse_css(css);
    assert!(errors.is_empty(), "{}: {:?}", css, errors);
    sheet
}

/// Sorted (selector, declaration) texts of every ruleset, media included.
fn pairs(sheet: &Stylesheet) -> Vec<(String, String)> {
    let mut pairs: Vec<(String, String)> = sheet
        .rulesets()
        .flat_map(|ruleset| {
            ruleset.selectors.iter().flat_map(move |selector| {
                ruleset
                    .declarations
                    .iter()
                    .map(move |declaration| (selector.to_string(), declaration.to_string()))
            })
        })
        .collect();
    pairs.sort();
    pairs
}

#[test]
fn test_explode_round_trips_through_text() {
    for css in SAMPLES {
        let original = parse(css);
        let exploded = render(&explode(original.clone()));
        let reparsed = parse(&exploded);

        for ruleset in reparsed.rulesets() {
            assert_eq!(ruleset.selectors.len(), 1, "{}", exploded);
            assert_eq!(ruleset.declarations.len(), 1, "{}", exploded);
        }
        assert_eq!(pairs(&reparsed), pairs(&original), "{}", css);
    }
}

#[test]
fn test_factor_is_idempotent() {
    for grouping in [FactorGrouping::Selector, FactorGrouping::Declaration] {
        let options = FactorOptions::new().grouping(grouping);
        let run = |sheet: Stylesheet| {
            factor_with_options(sheet, &options, &mut Default::default()).stylesheet
        };

        for css in SAMPLES {
            let once = run(parse(css));
            let twice = run(once.clone());
            assert_eq!(twice, once, "{:?}: {}", grouping, css);
        }
    }
}

#[test]
fn test_factor_after_explode_matches_factor() {
    for css in SAMPLES {
        let sheet = parse(css);
        let direct = factor(sheet.clone());
        let via_explode = factor(explode(sheet));
        assert_eq!(render(&via_explode), render(&direct), "{}", css);
    }
}

#[test]
fn test_factor_keeps_every_pair() {
    for css in SAMPLES {
        let sheet = parse(css);
        let mut expected = pairs(&sheet);
        expected.dedup();

        let factored = factor(sheet);
        assert_eq!(pairs(&factored), expected, "{}", css);
    }
}

#[test]
fn test_factored_output_reparses_cleanly() {
    for css in SAMPLES {
        let factored = render(&factor(parse(css)));
        let (reparsed, errors) = parse_css(&factored);
        assert!(errors.is_empty(), "{}: {:?}", factored, errors);
        assert_eq!(render(&reparsed), factored);
    }
}

#[test]
fn test_malformed_input_never_panics() {
    let malformed = [
        "a { color: red } b { color: blue",
        "a { color: }",
        "a { : red }",
        "a b > { x: 1 }",
        "@media { a { x: 1 } }",
        "@media print { a { x: 1 }",
        "{ } } {",
        "a { x: rgba(1, 2; } b { y: 1 }",
        "a[ { x: 1 }",
        "@import ; a { x: 1 }",
        "\u{0}\u{1}\u{7f} ☃ { x: 1 }",
    ];

    for css in malformed {
        let (sheet, errors) = parse_css(css);
        assert!(!errors.is_empty(), "expected errors for {:?}", css);

        for mode in [Mode::Factor, Mode::Explode, Mode::Identity] {
            let processed = process(css, &Config::new().mode(mode));
            assert_eq!(processed.errors, errors);
        }
        let _ = render(&factor(sheet.clone()));
        let _ = render(&explode(sheet));
    }
}

#[test]
fn test_unterminated_block_keeps_earlier_statements() {
    let (sheet, errors) = parse_css("a { color: red } b { x: 1 } c { color: blue");

    assert!(!errors.is_empty());
    assert_eq!(sheet.statements.len(), 2);
    assert_eq!(render(&sheet), "a { color: red }\nb { x: 1 }");
}

#[test]
fn test_identity_output_reparses_to_same_text() {
    let inputs = [
        r#"@charset "a\"b"; a { y: 1 }"#,
        r#"@charset 'a"b'; a { y: 1 }"#,
        r#"[x=a\"b] { y: 1 }"#,
        r#"[x='it\'s'], [y="q\\"] { y: 1 }"#,
        "a { b: 1e3; c: 1.5e-2px; d: -2E+1% }",
        "a { width: calc(100% - 10px); height: calc(2 * 3em + 1px) }",
    ];

    for css in inputs {
        let first = process(css, &Config::new().mode(Mode::Identity));
        assert!(first.errors.is_empty(), "{}: {:?}", css, first.error_messages());

        let second = process(&first.css, &Config::new().mode(Mode::Identity));
        assert!(second.errors.is_empty(), "{}: {:?}", first.css, second.error_messages());
        assert_eq!(second.css, first.css, "{}", css);
    }
}

#[test]
fn test_deep_nesting_is_reported_in_every_mode() {
    let inputs = [
        format!("a {{ b: {} }} c {{ d: 1 }}", "f(".repeat(5_000)),
        format!("{}a {{ x: 1 }}", "@media print { ".repeat(5_000)),
    ];

    for css in &inputs {
        for mode in [Mode::Factor, Mode::Explode, Mode::Identity] {
            let processed = process(css, &Config::new().mode(mode));
            assert!(!processed.errors.is_empty());
            assert!(processed.errors.iter().all(|e| !e.fatal));
        }
    }
}
