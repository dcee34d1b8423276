use serde::{Deserialize, Serialize};

use crate::error::ConversionError;
use crate::lexical::{FromLexical, Notation, Radix, ToLexical};

/// Conversion strategy.
///
/// Solves one task: turn a value of one type into another, or say why not.
/// Every strategy goes through text: the source is written under the
/// strategy's notation and the target is read back under the same notation.
///
/// Converters are immutable and shared freely between calls.
pub trait Converter: Send + Sync {
    fn try_convert<In, Out>(&self, value: &In) -> Result<Out, ConversionError>
    where
        In: ToLexical + ?Sized,
        Out: FromLexical;

    /// Same as `try_convert`, with the failure reason dropped.
    fn convert<In, Out>(&self, value: &In) -> Option<Out>
    where
        In: ToLexical + ?Sized,
        Out: FromLexical,
    {
        self.try_convert(value).ok()
    }
}

/// Write `value` as text and read `Out` back, both under `notation`.
pub(crate) fn through_text<In, Out>(value: &In, notation: &Notation) -> Result<Out, ConversionError>
where
    In: ToLexical + ?Sized,
    Out: FromLexical,
{
    let text = value.to_lexical(notation);
    Out::read_lexical(&text, notation)
        .map_err(|failure| ConversionError::new(text, Out::TYPE_NAME, failure))
}

// ═══════════════════════════════════════════════════════════════
//  LexicalCast
// ═══════════════════════════════════════════════════════════════

/// The default strategy: strict decimal text, as `Display`/`FromStr` do it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LexicalCast;

impl Converter for LexicalCast {
    fn try_convert<In, Out>(&self, value: &In) -> Result<Out, ConversionError>
    where
        In: ToLexical + ?Sized,
        Out: FromLexical,
    {
        through_text(value, &Notation::LEXICAL)
    }
}

// ═══════════════════════════════════════════════════════════════
//  Stream
// ═══════════════════════════════════════════════════════════════

/// Formatted-stream strategy with configurable notation.
///
/// ```
/// use lexcast::{convert_with, Radix, Stream};
///
/// let cnv = Stream::new().radix(Radix::Hex).uppercase(true);
/// assert_eq!(convert_with::<String>(&255u32, &cnv).value().unwrap(), "FF");
/// assert_eq!(convert_with::<i32>("-7f", &cnv).value().unwrap(), -127);
/// ```
///
/// `Stream::default()` behaves exactly like `LexicalCast`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stream {
    notation: Notation,
}

impl Stream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn radix(mut self, radix: Radix) -> Self {
        self.notation.radix = radix;
        self
    }

    pub fn uppercase(mut self, uppercase: bool) -> Self {
        self.notation.uppercase = uppercase;
        self
    }

    pub fn skip_whitespace(mut self, skip: bool) -> Self {
        self.notation.skip_whitespace = skip;
        self
    }

    pub fn precision(mut self, precision: Option<usize>) -> Self {
        self.notation.precision = precision;
        self
    }

    pub fn notation(&self) -> &Notation {
        &self.notation
    }
}

impl From<Notation> for Stream {
    fn from(notation: Notation) -> Self {
        Self { notation }
    }
}

impl Converter for Stream {
    fn try_convert<In, Out>(&self, value: &In) -> Result<Out, ConversionError>
    where
        In: ToLexical + ?Sized,
        Out: FromLexical,
    {
        through_text(value, &self.notation)
    }
}

// ═══════════════════════════════════════════════════════════════
//  Strategy
// ═══════════════════════════════════════════════════════════════

/// Strategy picked at runtime (from config or command line).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Lexical(LexicalCast),
    Stream(Stream),
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::Lexical(LexicalCast)
    }
}

impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Lexical(_) => "lexical",
            Strategy::Stream(_) => "stream",
        }
    }
}

impl Converter for Strategy {
    fn try_convert<In, Out>(&self, value: &In) -> Result<Out, ConversionError>
    where
        In: ToLexical + ?Sized,
        Out: FromLexical,
    {
        match self {
            Strategy::Lexical(cnv) => cnv.try_convert(value),
            Strategy::Stream(cnv) => cnv.try_convert(value),
        }
    }
}
