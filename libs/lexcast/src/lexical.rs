use std::borrow::Cow;
use std::fmt::{self, Write as _};
use std::num::{IntErrorKind, ParseIntError};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ParseFailure, UnknownName};

// ═══════════════════════════════════════════════════════════════
//  Notation
// ═══════════════════════════════════════════════════════════════

/// Numeric base used for integer text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Radix {
    Bin,
    Oct,
    #[default]
    Dec,
    Hex,
}

impl Radix {
    pub fn value(self) -> u32 {
        match self {
            Radix::Bin => 2,
            Radix::Oct => 8,
            Radix::Dec => 10,
            Radix::Hex => 16,
        }
    }
}

impl FromStr for Radix {
    type Err = UnknownName;

    /// Accepts the short name (`hex`) or the base itself (`16`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bin" | "2" => Ok(Radix::Bin),
            "oct" | "8" => Ok(Radix::Oct),
            "dec" | "10" => Ok(Radix::Dec),
            "hex" | "16" => Ok(Radix::Hex),
            _ => Err(UnknownName::new("radix", s)),
        }
    }
}

impl TryFrom<String> for Radix {
    type Error = UnknownName;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Radix::Bin => f.write_str("bin"),
            Radix::Oct => f.write_str("oct"),
            Radix::Dec => f.write_str("dec"),
            Radix::Hex => f.write_str("hex"),
        }
    }
}

/// Text layout applied on both sides of a conversion.
///
/// `Notation::LEXICAL` (also `Default`) is plain decimal with no whitespace
/// tolerance: the same text `Display` writes and `FromStr` reads.
///
/// Floats ignore the radix: they are written and read in decimal only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Notation {
    pub radix: Radix,
    /// Upper-case hex digits.
    pub uppercase: bool,
    /// Trim surrounding whitespace before parsing instead of rejecting it.
    pub skip_whitespace: bool,
    /// Fixed number of fractional digits when writing floats.
    pub precision: Option<usize>,
}

impl Notation {
    pub const LEXICAL: Notation = Notation {
        radix: Radix::Dec,
        uppercase: false,
        skip_whitespace: false,
        precision: None,
    };
}

impl Default for Notation {
    fn default() -> Self {
        Self::LEXICAL
    }
}

// ═══════════════════════════════════════════════════════════════
//  Traits
// ═══════════════════════════════════════════════════════════════

/// Source side of a conversion: the value can be written as text.
pub trait ToLexical {
    fn write_lexical(&self, notation: &Notation, out: &mut String);

    fn to_lexical(&self, notation: &Notation) -> String {
        let mut out = String::new();
        self.write_lexical(notation, &mut out);
        out
    }
}

/// Target side of a conversion: the value can be read back from text.
pub trait FromLexical: Sized {
    /// Short type name used in error messages.
    const TYPE_NAME: &'static str;

    fn read_lexical(text: &str, notation: &Notation) -> Result<Self, ParseFailure>;
}

impl<T: ToLexical + ?Sized> ToLexical for &T {
    fn write_lexical(&self, notation: &Notation, out: &mut String) {
        (**self).write_lexical(notation, out);
    }
}

/// Reject or trim surrounding whitespace, depending on the notation.
fn prepare<'a>(text: &'a str, notation: &Notation) -> Result<&'a str, ParseFailure> {
    let trimmed = text.trim();
    if notation.skip_whitespace {
        return Ok(trimmed);
    }
    if trimmed.len() != text.len() {
        return Err(ParseFailure::Whitespace);
    }
    Ok(text)
}

// ═══════════════════════════════════════════════════════════════
//  Integers
// ═══════════════════════════════════════════════════════════════

fn int_failure(err: &ParseIntError) -> ParseFailure {
    match err.kind() {
        IntErrorKind::Empty => ParseFailure::Empty,
        IntErrorKind::InvalidDigit => ParseFailure::InvalidDigit,
        IntErrorKind::PosOverflow => ParseFailure::PosOverflow,
        IntErrorKind::NegOverflow => ParseFailure::NegOverflow,
        _ => ParseFailure::Invalid,
    }
}

/// Sign and magnitude, never two's complement: `-255` in hex is `-ff`.
fn write_integer<M>(negative: bool, magnitude: M, notation: &Notation, out: &mut String)
where
    M: fmt::Display + fmt::Binary + fmt::Octal + fmt::LowerHex + fmt::UpperHex,
{
    if negative {
        out.push('-');
    }
    let _ = match (notation.radix, notation.uppercase) {
        (Radix::Bin, _) => write!(out, "{magnitude:b}"),
        (Radix::Oct, _) => write!(out, "{magnitude:o}"),
        (Radix::Dec, _) => write!(out, "{magnitude}"),
        (Radix::Hex, false) => write!(out, "{magnitude:x}"),
        (Radix::Hex, true) => write!(out, "{magnitude:X}"),
    };
}

macro_rules! read_integer {
    ($t:ty) => {
        impl FromLexical for $t {
            const TYPE_NAME: &'static str = stringify!($t);

            fn read_lexical(text: &str, notation: &Notation) -> Result<Self, ParseFailure> {
                let text = prepare(text, notation)?;
                <$t>::from_str_radix(text, notation.radix.value()).map_err(|e| int_failure(&e))
            }
        }
    };
}

macro_rules! lexical_signed {
    ($($t:ty),* $(,)?) => {$(
        impl ToLexical for $t {
            fn write_lexical(&self, notation: &Notation, out: &mut String) {
                write_integer(self.is_negative(), self.unsigned_abs(), notation, out);
            }
        }
        read_integer!($t);
    )*};
}

macro_rules! lexical_unsigned {
    ($($t:ty),* $(,)?) => {$(
        impl ToLexical for $t {
            fn write_lexical(&self, notation: &Notation, out: &mut String) {
                write_integer(false, *self, notation, out);
            }
        }
        read_integer!($t);
    )*};
}

lexical_signed!(i8, i16, i32, i64, i128, isize);
lexical_unsigned!(u8, u16, u32, u64, u128, usize);

// ═══════════════════════════════════════════════════════════════
//  Floats
// ═══════════════════════════════════════════════════════════════

macro_rules! lexical_float {
    ($($t:ty),* $(,)?) => {$(
        impl ToLexical for $t {
            fn write_lexical(&self, notation: &Notation, out: &mut String) {
                let _ = match notation.precision {
                    Some(precision) => write!(out, "{:.*}", precision, self),
                    None => write!(out, "{}", self),
                };
            }
        }

        impl FromLexical for $t {
            const TYPE_NAME: &'static str = stringify!($t);

            fn read_lexical(text: &str, notation: &Notation) -> Result<Self, ParseFailure> {
                let text = prepare(text, notation)?;
                if text.is_empty() {
                    return Err(ParseFailure::Empty);
                }
                text.parse::<$t>().map_err(|_| ParseFailure::Invalid)
            }
        }
    )*};
}

lexical_float!(f32, f64);

// ═══════════════════════════════════════════════════════════════
//  bool, char, strings
// ═══════════════════════════════════════════════════════════════

impl ToLexical for bool {
    fn write_lexical(&self, _notation: &Notation, out: &mut String) {
        out.push_str(if *self { "true" } else { "false" });
    }
}

impl FromLexical for bool {
    const TYPE_NAME: &'static str = "bool";

    /// `true`/`false` or `1`/`0`.
    fn read_lexical(text: &str, notation: &Notation) -> Result<Self, ParseFailure> {
        match prepare(text, notation)? {
            "" => Err(ParseFailure::Empty),
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err(ParseFailure::Invalid),
        }
    }
}

impl ToLexical for char {
    fn write_lexical(&self, _notation: &Notation, out: &mut String) {
        out.push(*self);
    }
}

impl FromLexical for char {
    const TYPE_NAME: &'static str = "char";

    fn read_lexical(text: &str, notation: &Notation) -> Result<Self, ParseFailure> {
        // A lone whitespace character is a value, not padding.
        let mut chars = text.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Ok(c);
        }
        let mut chars = prepare(text, notation)?.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Err(ParseFailure::Empty),
            (Some(c), None) => Ok(c),
            _ => Err(ParseFailure::NotSingleChar),
        }
    }
}

impl ToLexical for str {
    fn write_lexical(&self, _notation: &Notation, out: &mut String) {
        out.push_str(self);
    }
}

impl ToLexical for String {
    fn write_lexical(&self, _notation: &Notation, out: &mut String) {
        out.push_str(self);
    }
}

impl ToLexical for Cow<'_, str> {
    fn write_lexical(&self, _notation: &Notation, out: &mut String) {
        out.push_str(self);
    }
}

impl FromLexical for String {
    const TYPE_NAME: &'static str = "string";

    /// Text is taken verbatim, whitespace included.
    fn read_lexical(text: &str, _notation: &Notation) -> Result<Self, ParseFailure> {
        Ok(text.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex() -> Notation {
        Notation { radix: Radix::Hex, ..Notation::LEXICAL }
    }

    #[test]
    fn integers_write_like_display() {
        assert_eq!(123i32.to_lexical(&Notation::LEXICAL), "123");
        assert_eq!((-45i64).to_lexical(&Notation::LEXICAL), "-45");
        assert_eq!(u128::MAX.to_lexical(&Notation::LEXICAL), u128::MAX.to_string());
    }

    #[test]
    fn negative_integers_use_sign_and_magnitude() {
        assert_eq!((-255i32).to_lexical(&hex()), "-ff");
        assert_eq!(i8::MIN.to_lexical(&hex()), "-80");
        let upper = Notation { uppercase: true, ..hex() };
        assert_eq!(255u8.to_lexical(&upper), "FF");
        let bin = Notation { radix: Radix::Bin, ..Notation::LEXICAL };
        assert_eq!(5u8.to_lexical(&bin), "101");
    }

    #[test]
    fn integer_failures() {
        let n = Notation::LEXICAL;
        assert_eq!(i32::read_lexical("", &n), Err(ParseFailure::Empty));
        assert_eq!(i32::read_lexical("12a", &n), Err(ParseFailure::InvalidDigit));
        assert_eq!(u8::read_lexical("256", &n), Err(ParseFailure::PosOverflow));
        assert_eq!(i8::read_lexical("-129", &n), Err(ParseFailure::NegOverflow));
        assert_eq!(u8::read_lexical("-1", &n), Err(ParseFailure::InvalidDigit));
        assert_eq!(i32::read_lexical(" 1", &n), Err(ParseFailure::Whitespace));
        assert_eq!(i32::read_lexical("0x1f", &hex()), Err(ParseFailure::InvalidDigit));
    }

    #[test]
    fn integer_reads_accept_plus_sign_and_radix() {
        assert_eq!(i32::read_lexical("+7", &Notation::LEXICAL), Ok(7));
        assert_eq!(i32::read_lexical("-ff", &hex()), Ok(-255));
        assert_eq!(u16::read_lexical("FfFf", &hex()), Ok(u16::MAX));
    }

    #[test]
    fn skip_whitespace_trims() {
        let n = Notation { skip_whitespace: true, ..Notation::LEXICAL };
        assert_eq!(i32::read_lexical("  42\t", &n), Ok(42));
        assert_eq!(i32::read_lexical("   ", &n), Err(ParseFailure::Empty));
        assert_eq!(bool::read_lexical(" true ", &n), Ok(true));
    }

    #[test]
    fn floats() {
        let n = Notation::LEXICAL;
        assert_eq!(f64::read_lexical("1.5", &n), Ok(1.5));
        assert_eq!(f64::read_lexical("", &n), Err(ParseFailure::Empty));
        assert_eq!(f64::read_lexical("1.5.1", &n), Err(ParseFailure::Invalid));
        assert_eq!(f64::read_lexical("1.5", &hex()), Ok(1.5));
        assert_eq!(f64::read_lexical("ff", &hex()), Err(ParseFailure::Invalid));
        assert_eq!(0.1f64.to_lexical(&n), "0.1");
        let fixed = Notation { precision: Some(3), ..n };
        assert_eq!(2.0f32.to_lexical(&fixed), "2.000");
    }

    #[test]
    fn bool_and_char() {
        let n = Notation::LEXICAL;
        assert_eq!(bool::read_lexical("1", &n), Ok(true));
        assert_eq!(bool::read_lexical("false", &n), Ok(false));
        assert_eq!(bool::read_lexical("yes", &n), Err(ParseFailure::Invalid));
        assert_eq!(char::read_lexical("x", &n), Ok('x'));
        assert_eq!(char::read_lexical(" ", &n), Ok(' '));
        assert_eq!(char::read_lexical("xy", &n), Err(ParseFailure::NotSingleChar));
        assert_eq!(char::read_lexical("", &n), Err(ParseFailure::Empty));
        assert_eq!(true.to_lexical(&n), "true");
    }

    #[test]
    fn strings_are_identity() {
        let n = Notation { skip_whitespace: true, ..hex() };
        assert_eq!(String::read_lexical(" a b ", &n), Ok(" a b ".to_string()));
        assert_eq!("text".to_lexical(&n), "text");
        assert_eq!(Cow::Borrowed("cow").to_lexical(&n), "cow");
    }

    #[test]
    fn radix_names() {
        assert_eq!("HEX".parse::<Radix>(), Ok(Radix::Hex));
        assert_eq!("8".parse::<Radix>(), Ok(Radix::Oct));
        assert!("base3".parse::<Radix>().is_err());
        assert_eq!(Radix::Bin.to_string(), "bin");
    }

    #[test]
    fn notation_from_toml_fills_defaults() {
        let n: Notation = toml::from_str("radix = \"hex\"\nuppercase = true").unwrap();
        assert_eq!(n, Notation { radix: Radix::Hex, uppercase: true, ..Notation::LEXICAL });
        assert!(toml::from_str::<Notation>("base = 3").is_err());
        assert!(toml::from_str::<Notation>("radix = \"base3\"").is_err());
    }
}
