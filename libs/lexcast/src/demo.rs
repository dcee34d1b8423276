//! The conversion demonstrator: both calling conventions, both directions.
//!
//! | # | call                               |
//! |---|------------------------------------|
//! | 1 | `lexical_cast::<i32>(text)`        |
//! | 2 | `convert::<i32>(text)`             |
//! | 3 | `convert_with::<i32>(text, cnv)`   |
//! | 4 | `lexical_cast::<String>(number)`   |
//! | 5 | `convert::<String>(number)`        |
//! | 6 | `convert_with::<String>(number, cnv)` |

use std::fmt;

use crate::convert::{convert, convert_with, lexical_cast};
use crate::converter::Converter;
use crate::lexical::{FromLexical, ToLexical};

/// How a step invoked the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Convention {
    /// `lexical_cast`, fails with `ConversionError`.
    Direct,
    /// `convert` with the default converter.
    Optional,
    /// `convert_with` an explicit converter.
    OptionalExplicit,
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Convention::Direct => f.write_str("lexical_cast"),
            Convention::Optional => f.write_str("convert"),
            Convention::OptionalExplicit => f.write_str("convert+cnv"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DemoStep {
    pub convention: Convention,
    /// Target type name.
    pub target: &'static str,
    /// Converted value rendered as text, or the error message.
    pub outcome: Result<String, String>,
}

/// Outcome of a demo run: three steps per target type, in run order.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoReport {
    steps: Vec<DemoStep>,
}

impl DemoReport {
    pub fn steps(&self) -> &[DemoStep] {
        &self.steps
    }

    /// Every step produced a value, and the three conventions agree for
    /// each target type.
    pub fn is_success(&self) -> bool {
        self.problems().next().is_none()
    }

    /// Steps that failed, or that disagree with the direct conversion of
    /// the same target type.
    pub fn problems(&self) -> impl Iterator<Item = &DemoStep> {
        self.steps.chunks(3).flat_map(|group| {
            let direct = &group[0].outcome;
            group.iter().filter(move |s| s.outcome.is_err() || &s.outcome != direct)
        })
    }

    pub fn failures(&self) -> impl Iterator<Item = &DemoStep> {
        self.steps.iter().filter(|s| s.outcome.is_err())
    }
}

/// Run the six canonical conversions: `"123"` → `i32` and `123` → `String`.
pub fn run(converter: &impl Converter) -> DemoReport {
    run_with("123", 123, converter)
}

/// Run the six conversions on caller-chosen inputs.
pub fn run_with(text: &str, number: i32, converter: &impl Converter) -> DemoReport {
    let mut steps = Vec::with_capacity(6);
    steps.extend(three_ways::<i32>(text, converter));
    steps.extend(three_ways::<String>(&number, converter));

    for step in &steps {
        match &step.outcome {
            Ok(value) => tracing::info!(
                convention = %step.convention,
                to = step.target,
                %value,
                "conversion succeeded"
            ),
            Err(error) => tracing::warn!(
                convention = %step.convention,
                to = step.target,
                %error,
                "conversion failed"
            ),
        }
    }
    DemoReport { steps }
}

fn three_ways<Out>(value: &(impl ToLexical + ?Sized), converter: &impl Converter) -> [DemoStep; 3]
where
    Out: FromLexical + ToLexical,
{
    let render = |v: Out| lexical_cast::<String>(&v).map_err(|e| e.to_string());
    let step = |convention, outcome: Result<String, String>| DemoStep {
        convention,
        target: Out::TYPE_NAME,
        outcome,
    };

    [
        step(
            Convention::Direct,
            lexical_cast::<Out>(value).map_err(|e| e.to_string()).and_then(render),
        ),
        step(
            Convention::Optional,
            convert::<Out>(value).value().map_err(|e| e.to_string()).and_then(render),
        ),
        step(
            Convention::OptionalExplicit,
            convert_with::<Out>(value, converter)
                .value()
                .map_err(|e| e.to_string())
                .and_then(render),
        ),
    ]
}
