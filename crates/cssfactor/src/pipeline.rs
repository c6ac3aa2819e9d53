//! End-to-end processing: tokenize, parse, transform, render.
//!
//! [`process`] is the one-call entry point for hosts (a web handler, a CLI).
//! It never fails on malformed CSS: the caller always gets rendered output
//! together with every parse error.
//!
//! ```ignore
//! use cssfactor::{Config, Mode, process};
//!
//! let processed = process("a { color: red; }\nb { color: red; }", &Config::default());
//! assert_eq!(processed.css, "a, b { color: red }");
//! assert!(processed.errors.is_empty());
//! ```
//!
//! Use a [`Pipeline`] to observe progress across the stages.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::config::Config;
use crate::error::Error;
use crate::logging::targets;
use crate::parser::{ParseError, Parser};
use crate::progress::ProgressReporter;
use crate::render::render;
use crate::tokenizer::tokenize_with_progress;
use crate::transform::{Conflict, explode_with_progress, factor_with_options};

/// Rewrite applied between parsing and rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Group selectors that share declarations.
    #[default]
    Factor,
    /// Split rulesets into one selector and one declaration each.
    Explode,
    /// Re-render the parsed stylesheet unchanged.
    Identity,
}

impl Mode {
    /// Lowercase mode name.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Factor => "factor",
            Mode::Explode => "explode",
            Mode::Identity => "identity",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "factor" => Ok(Mode::Factor),
            "explode" => Ok(Mode::Explode),
            "identity" => Ok(Mode::Identity),
            _ => Err(Error::InvalidMode(s.to_string())),
        }
    }
}

/// A pipeline stage that reports progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Source text to tokens.
    Tokenize,
    /// Tokens to stylesheet.
    Parse,
    /// Factor or explode.
    Transform,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Tokenize => "tokenize",
            Stage::Parse => "parse",
            Stage::Transform => "transform",
        })
    }
}

/// Percent-complete of one stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressEvent {
    /// The reporting stage.
    pub stage: Stage,
    /// Percent complete, `0..=100`.
    pub percent: u8,
}

/// Output of a pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Processed {
    /// Rendered CSS.
    pub css: String,
    /// Parse errors, in source order.
    pub errors: Vec<ParseError>,
    /// Statement lists left unfactored by the override check.
    pub conflicts: Vec<Conflict>,
}

impl Processed {
    /// The parse errors as display strings.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Whether the run had no parse errors and no conflicts.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.conflicts.is_empty()
    }
}

type Observer<'a> = Option<Box<dyn FnMut(ProgressEvent) + 'a>>;

/// A configured pipeline with an optional progress observer.
///
/// # Example
///
/// ```ignore
/// let mut events = Vec::new();
/// let mut pipeline = Pipeline::new(Config::new().mode(Mode::Explode))
///     .on_progress(|event| events.push(event));
/// let processed = pipeline.run("a { color: red; font-size: 12px; }");
/// ```
pub struct Pipeline<'a> {
    config: Config,
    observer: Observer<'a>,
}

impl<'a> Pipeline<'a> {
    /// Create a pipeline with `config` and no observer.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            observer: None,
        }
    }

    /// Receive a [`ProgressEvent`] as each stage advances.
    ///
    /// Every stage reports at least once and finishes at 100, in the order
    /// tokenize, parse, transform.
    pub fn on_progress(mut self, observer: impl FnMut(ProgressEvent) + 'a) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// The pipeline configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Process one stylesheet.
    #[tracing::instrument(
        target = "cssfactor::pipeline",
        skip_all,
        fields(mode = %self.config.mode, bytes = css.len())
    )]
    pub fn run(&mut self, css: &str) -> Processed {
        let observer = &mut self.observer;

        let tokens = tokenize_with_progress(css, |percent| {
            notify(observer, Stage::Tokenize, percent)
        });

        let (stylesheet, errors) = {
            let mut parser = Parser::new(tokens);
            parser.set_progress_callback(|percent| notify(observer, Stage::Parse, percent));
            let stylesheet = parser.parse();
            (stylesheet, parser.into_errors())
        };

        let (stylesheet, conflicts) = match self.config.mode {
            Mode::Factor => {
                let mut progress =
                    ProgressReporter::new(|percent| notify(observer, Stage::Transform, percent));
                let outcome = factor_with_options(stylesheet, &self.config.factor, &mut progress);
                (outcome.stylesheet, outcome.conflicts)
            }
            Mode::Explode => {
                let stylesheet = explode_with_progress(stylesheet, |percent| {
                    notify(observer, Stage::Transform, percent)
                });
                (stylesheet, vec![])
            }
            Mode::Identity => {
                notify(observer, Stage::Transform, 100);
                (stylesheet, vec![])
            }
        };

        let processed = Processed {
            css: render(&stylesheet),
            errors,
            conflicts,
        };

        tracing::debug!(
            target: targets::PIPELINE,
            errors = processed.errors.len(),
            conflicts = processed.conflicts.len(),
            output_bytes = processed.css.len(),
            "processed stylesheet"
        );
        processed
    }
}

impl fmt::Debug for Pipeline<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("config", &self.config)
            .field("observed", &self.observer.is_some())
            .finish()
    }
}

/// Tokenize, parse, transform and render `css` according to `config`.
#[tracing::instrument(target = "cssfactor::pipeline", skip_all, fields(mode = %config.mode))]
pub fn process(css: &str, config: &Config) -> Processed {
    Pipeline::new(config.clone()).run(css)
}

fn notify(observer: &mut Observer<'_>, stage: Stage, percent: u8) {
    if let Some(observer) = observer.as_mut() {
        observer(ProgressEvent { stage, percent });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::FactorGrouping;

    #[test]
    fn mode_from_str() {
        assert_eq!("factor".parse::<Mode>().unwrap(), Mode::Factor);
        assert_eq!(" Explode ".parse::<Mode>().unwrap(), Mode::Explode);
        assert_eq!("IDENTITY".parse::<Mode>().unwrap(), Mode::Identity);

        let err = "minify".parse::<Mode>().unwrap_err();
        assert!(matches!(err, Error::InvalidMode(ref name) if name == "minify"));
    }

    #[test]
    fn mode_display_round_trips() {
        for mode in [Mode::Factor, Mode::Explode, Mode::Identity] {
            assert_eq!(mode.to_string().parse::<Mode>().unwrap(), mode);
        }
    }

    #[test]
    fn factor_mode() {
        let processed = process("a { color: red; }\nb { color: red; }", &Config::default());
        assert_eq!(processed.css, "a, b { color: red }");
        assert!(processed.is_clean());
    }

    #[test]
    fn explode_mode() {
        let processed = process(
            "a { color: red; font-size: 12px; }",
            &Config::new().mode(Mode::Explode),
        );
        assert_eq!(processed.css, "a { color: red }\na { font-size: 12px }");
    }

    #[test]
    fn identity_mode() {
        let processed = process(":root { --x: 1 !important; }", &Config::new().mode(Mode::Identity));
        assert_eq!(processed.css, ":root { --x: 1 !important }");
    }

    #[test]
    fn factor_options_are_applied() {
        let config = Config::new()
            .grouping(FactorGrouping::Declaration)
            .preserve_overrides(true);
        let processed = process("a { x: 1 } a { x: 2 }", &config);

        assert_eq!(processed.conflicts.len(), 1);
        assert_eq!(processed.css, "a { x: 1 }\na { x: 2 }");
        assert!(!processed.is_clean());
    }

    #[test]
    fn errors_are_returned_with_output() {
        let processed = process("a { color: }\nb { color: red; }", &Config::default());
        assert_eq!(processed.errors.len(), 1);
        assert_eq!(processed.css, "b { color: red }");
        assert!(processed.error_messages()[0].starts_with("CSS parse error at 1:12"));
    }

    #[test]
    fn stages_report_in_order_and_finish() {
        let mut events = vec![];
        {
            let mut pipeline =
                Pipeline::new(Config::default()).on_progress(|event| events.push(event));
            pipeline.run("a { x: 1 } b { x: 1 }");
        }

        let stages: Vec<Stage> = events.iter().map(|e| e.stage).collect();
        let mut deduped = stages.clone();
        deduped.dedup();
        assert_eq!(deduped, vec![Stage::Tokenize, Stage::Parse, Stage::Transform]);

        for stage in [Stage::Tokenize, Stage::Parse, Stage::Transform] {
            let percents: Vec<u8> = events
                .iter()
                .filter(|e| e.stage == stage)
                .map(|e| e.percent)
                .collect();
            assert!(percents.windows(2).all(|w| w[0] <= w[1]));
            assert_eq!(percents.last(), Some(&100));
        }
    }

    #[test]
    fn identity_still_reports_transform() {
        let mut events = vec![];
        {
            let mut pipeline = Pipeline::new(Config::new().mode(Mode::Identity))
                .on_progress(|event| events.push(event));
            pipeline.run("");
        }
        assert_eq!(
            events.last(),
            Some(&ProgressEvent {
                stage: Stage::Transform,
                percent: 100
            })
        );
    }
}
