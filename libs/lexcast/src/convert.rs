use crate::converter::{Converter, LexicalCast};
use crate::error::{ConversionError, ValueAccessError};
use crate::lexical::{FromLexical, ToLexical};

/// Result of an optional conversion: a value, or nothing.
///
/// Failure to convert is not an error at this level. It only becomes one
/// when the caller insists on a value through [`Converted::value`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct Converted<T> {
    value: Option<T>,
    /// Target type name, kept for the `ValueAccessError` message.
    target: &'static str,
}

impl<T: FromLexical> Converted<T> {
    pub fn present(value: T) -> Self {
        Self::with_target(Some(value), T::TYPE_NAME)
    }

    pub fn absent() -> Self {
        Self::with_target(None, T::TYPE_NAME)
    }
}

impl<T: FromLexical> From<Option<T>> for Converted<T> {
    fn from(value: Option<T>) -> Self {
        Self::with_target(value, T::TYPE_NAME)
    }
}

impl<T> Converted<T> {
    pub(crate) fn with_target(value: Option<T>, target: &'static str) -> Self {
        Self { value, target }
    }

    pub fn is_present(&self) -> bool {
        self.value.is_some()
    }

    pub fn is_absent(&self) -> bool {
        self.value.is_none()
    }

    /// The converted value, or `ValueAccessError` if there is none.
    pub fn value(self) -> Result<T, ValueAccessError> {
        self.value.ok_or(ValueAccessError::new(self.target))
    }

    pub fn value_or(self, fallback: T) -> T {
        self.value.unwrap_or(fallback)
    }

    pub fn value_or_else(self, fallback: impl FnOnce() -> T) -> T {
        self.value.unwrap_or_else(fallback)
    }

    pub fn as_ref(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn into_option(self) -> Option<T> {
        self.value
    }

    pub fn target(&self) -> &'static str {
        self.target
    }
}

// ═══════════════════════════════════════════════════════════════
//  Calling conventions
// ═══════════════════════════════════════════════════════════════

/// Direct conversion with the default strategy.
///
/// ```
/// assert_eq!(lexcast::lexical_cast::<i32>("123").unwrap(), 123);
/// assert_eq!(lexcast::lexical_cast::<String>(&123).unwrap(), "123");
/// assert!(lexcast::lexical_cast::<i32>("abc").is_err());
/// ```
pub fn lexical_cast<Out: FromLexical>(
    value: &(impl ToLexical + ?Sized),
) -> Result<Out, ConversionError> {
    LexicalCast.try_convert(value)
}

/// Optional conversion with the default strategy (`LexicalCast`).
pub fn convert<Out: FromLexical>(value: &(impl ToLexical + ?Sized)) -> Converted<Out> {
    convert_with(value, &LexicalCast)
}

/// Optional conversion with an explicit strategy.
///
/// ```
/// use lexcast::{convert_with, LexicalCast};
///
/// let cnv = LexicalCast;
/// assert_eq!(convert_with::<i32>("123", &cnv).value().unwrap(), 123);
/// assert_eq!(convert_with::<i32>("abc", &cnv).value_or(-1), -1);
/// ```
pub fn convert_with<Out: FromLexical>(
    value: &(impl ToLexical + ?Sized),
    converter: &impl Converter,
) -> Converted<Out> {
    match converter.try_convert(value) {
        Ok(v) => Converted::present(v),
        Err(e) => {
            tracing::debug!(to = Out::TYPE_NAME, error = %e, "conversion produced no value");
            Converted::absent()
        }
    }
}

/// Converter bound into a function object, for iterator adaptors.
///
/// ```
/// use lexcast::{apply, LexicalCast};
///
/// let cnv = LexicalCast;
/// let parsed: Vec<i32> = ["1", "x", "3"]
///     .into_iter()
///     .map(apply::<i32, str, _>(&cnv))
///     .map(|c| c.value_or(0))
///     .collect();
/// assert_eq!(parsed, [1, 0, 3]);
/// ```
pub fn apply<Out, In, C>(converter: &C) -> impl Fn(&In) -> Converted<Out> + '_
where
    Out: FromLexical,
    In: ToLexical + ?Sized,
    C: Converter,
{
    move |value: &In| convert_with::<Out>(value, converter)
}
