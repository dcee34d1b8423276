/// Why a piece of text could not be read as the target type.
///
/// Mirrors `std::num::IntErrorKind` for integers and adds the cases that
/// only arise for the other lexical types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseFailure {
    #[error("empty input")]
    Empty,
    #[error("invalid digit")]
    InvalidDigit,
    #[error("number too large for target type")]
    PosOverflow,
    #[error("number too small for target type")]
    NegOverflow,
    /// Leading or trailing whitespace with a notation that does not skip it.
    #[error("surrounding whitespace")]
    Whitespace,
    #[error("invalid syntax")]
    Invalid,
    #[error("expected exactly one character")]
    NotSingleChar,
}

/// Direct conversion failed. Returned by `lexical_cast` and `Converter::try_convert`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot convert `{input}` to {target}: {failure}")]
pub struct ConversionError {
    input: String,
    target: &'static str,
    failure: ParseFailure,
}

impl ConversionError {
    pub fn new(input: impl Into<String>, target: &'static str, failure: ParseFailure) -> Self {
        Self {
            input: input.into(),
            target,
            failure,
        }
    }

    /// Textual form of the source value, as the converter rendered it.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Name of the requested target type (`"i32"`, `"string"`, ...).
    pub fn target(&self) -> &'static str {
        self.target
    }

    pub fn failure(&self) -> ParseFailure {
        self.failure
    }
}

/// `Converted::value()` was called on an absent result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("conversion to {target} produced no value")]
pub struct ValueAccessError {
    target: &'static str,
}

impl ValueAccessError {
    pub fn new(target: &'static str) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &'static str {
        self.target
    }
}

/// A name given at runtime (radix, target type) matched nothing known.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} `{name}`")]
pub struct UnknownName {
    kind: &'static str,
    name: String,
}

impl UnknownName {
    pub fn new(kind: &'static str, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
