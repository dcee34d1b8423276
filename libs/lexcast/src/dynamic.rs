use std::fmt;
use std::str::FromStr;

use crate::convert::Converted;
use crate::converter::Converter;
use crate::error::{ConversionError, UnknownName};
use crate::lexical::{FromLexical, Notation, ToLexical};

/// Target type chosen at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetType {
    Bool,
    Char,
    I8,
    I16,
    I32,
    I64,
    I128,
    U8,
    U16,
    U32,
    U64,
    U128,
    F32,
    F64,
    String,
}

impl TargetType {
    pub const ALL: [TargetType; 15] = [
        TargetType::Bool,
        TargetType::Char,
        TargetType::I8,
        TargetType::I16,
        TargetType::I32,
        TargetType::I64,
        TargetType::I128,
        TargetType::U8,
        TargetType::U16,
        TargetType::U32,
        TargetType::U64,
        TargetType::U128,
        TargetType::F32,
        TargetType::F64,
        TargetType::String,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TargetType::Bool => "bool",
            TargetType::Char => "char",
            TargetType::I8 => "i8",
            TargetType::I16 => "i16",
            TargetType::I32 => "i32",
            TargetType::I64 => "i64",
            TargetType::I128 => "i128",
            TargetType::U8 => "u8",
            TargetType::U16 => "u16",
            TargetType::U32 => "u32",
            TargetType::U64 => "u64",
            TargetType::U128 => "u128",
            TargetType::F32 => "f32",
            TargetType::F64 => "f64",
            TargetType::String => "string",
        }
    }
}

impl FromStr for TargetType {
    type Err = UnknownName;

    /// Type names as printed by `name()`, plus `int` (i32) and `str`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        match lower.as_str() {
            "int" => return Ok(TargetType::I32),
            "str" => return Ok(TargetType::String),
            _ => {}
        }
        TargetType::ALL
            .into_iter()
            .find(|t| t.name() == lower)
            .ok_or_else(|| UnknownName::new("target type", s))
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A converted value whose type was picked at runtime.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Char(char),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    I128(i128),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
    F32(f32),
    F64(f64),
    String(String),
}

macro_rules! each_value {
    ($value:expr, $inner:ident => $body:expr) => {
        match $value {
            Value::Bool($inner) => $body,
            Value::Char($inner) => $body,
            Value::I8($inner) => $body,
            Value::I16($inner) => $body,
            Value::I32($inner) => $body,
            Value::I64($inner) => $body,
            Value::I128($inner) => $body,
            Value::U8($inner) => $body,
            Value::U16($inner) => $body,
            Value::U32($inner) => $body,
            Value::U64($inner) => $body,
            Value::U128($inner) => $body,
            Value::F32($inner) => $body,
            Value::F64($inner) => $body,
            Value::String($inner) => $body,
        }
    };
}

impl Value {
    pub fn target_type(&self) -> TargetType {
        match self {
            Value::Bool(_) => TargetType::Bool,
            Value::Char(_) => TargetType::Char,
            Value::I8(_) => TargetType::I8,
            Value::I16(_) => TargetType::I16,
            Value::I32(_) => TargetType::I32,
            Value::I64(_) => TargetType::I64,
            Value::I128(_) => TargetType::I128,
            Value::U8(_) => TargetType::U8,
            Value::U16(_) => TargetType::U16,
            Value::U32(_) => TargetType::U32,
            Value::U64(_) => TargetType::U64,
            Value::U128(_) => TargetType::U128,
            Value::F32(_) => TargetType::F32,
            Value::F64(_) => TargetType::F64,
            Value::String(_) => TargetType::String,
        }
    }
}

impl ToLexical for Value {
    fn write_lexical(&self, notation: &Notation, out: &mut String) {
        each_value!(self, v => v.write_lexical(notation, out))
    }
}

/// Rendered with the default (lexical cast) notation.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_lexical(&Notation::LEXICAL))
    }
}

/// Direct conversion into a runtime-chosen target type.
pub fn cast_dynamic(
    value: &(impl ToLexical + ?Sized),
    target: TargetType,
    converter: &impl Converter,
) -> Result<Value, ConversionError> {
    fn cast<Out: FromLexical>(
        value: &(impl ToLexical + ?Sized),
        converter: &impl Converter,
    ) -> Result<Out, ConversionError> {
        converter.try_convert(value)
    }

    Ok(match target {
        TargetType::Bool => Value::Bool(cast(value, converter)?),
        TargetType::Char => Value::Char(cast(value, converter)?),
        TargetType::I8 => Value::I8(cast(value, converter)?),
        TargetType::I16 => Value::I16(cast(value, converter)?),
        TargetType::I32 => Value::I32(cast(value, converter)?),
        TargetType::I64 => Value::I64(cast(value, converter)?),
        TargetType::I128 => Value::I128(cast(value, converter)?),
        TargetType::U8 => Value::U8(cast(value, converter)?),
        TargetType::U16 => Value::U16(cast(value, converter)?),
        TargetType::U32 => Value::U32(cast(value, converter)?),
        TargetType::U64 => Value::U64(cast(value, converter)?),
        TargetType::U128 => Value::U128(cast(value, converter)?),
        TargetType::F32 => Value::F32(cast(value, converter)?),
        TargetType::F64 => Value::F64(cast(value, converter)?),
        TargetType::String => Value::String(cast(value, converter)?),
    })
}

/// Optional conversion into a runtime-chosen target type.
pub fn convert_dynamic(
    value: &(impl ToLexical + ?Sized),
    target: TargetType,
    converter: &impl Converter,
) -> Converted<Value> {
    match cast_dynamic(value, target, converter) {
        Ok(v) => Converted::with_target(Some(v), target.name()),
        Err(e) => {
            tracing::debug!(to = target.name(), error = %e, "conversion produced no value");
            Converted::with_target(None, target.name())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::{LexicalCast, Stream};
    use crate::error::{ParseFailure, ValueAccessError};
    use crate::lexical::Radix;

    #[test]
    fn target_type_names_round_trip() {
        for t in TargetType::ALL {
            assert_eq!(t.name().parse::<TargetType>(), Ok(t));
        }
        assert_eq!("int".parse::<TargetType>(), Ok(TargetType::I32));
        assert_eq!("STR".parse::<TargetType>(), Ok(TargetType::String));
        assert!("i256".parse::<TargetType>().is_err());
    }

    #[test]
    fn cast_dynamic_dispatches() {
        let cnv = LexicalCast;
        assert_eq!(cast_dynamic("123", TargetType::I32, &cnv), Ok(Value::I32(123)));
        assert_eq!(cast_dynamic("x", TargetType::Char, &cnv), Ok(Value::Char('x')));
        assert_eq!(
            cast_dynamic(&123i32, TargetType::String, &cnv),
            Ok(Value::String("123".into()))
        );
        let err = cast_dynamic("abc", TargetType::U64, &cnv).unwrap_err();
        assert_eq!(err.target(), "u64");
        assert_eq!(err.failure(), ParseFailure::InvalidDigit);
    }

    #[test]
    fn value_is_a_conversion_source() {
        let hex = Stream::new().radix(Radix::Hex);
        let v = Value::U16(255);
        assert_eq!(cast_dynamic(&v, TargetType::String, &hex), Ok(Value::String("ff".into())));
        assert_eq!(v.to_string(), "255");
        assert_eq!(v.target_type(), TargetType::U16);
    }

    #[test]
    fn convert_dynamic_absent_carries_target_name() {
        let got = convert_dynamic("nope", TargetType::F64, &LexicalCast);
        assert_eq!(got.value(), Err(ValueAccessError::new("f64")));
    }

    #[test]
    fn typed_and_runtime_target_names_agree() {
        use crate::convert::convert;

        assert_eq!(TargetType::String.name(), String::TYPE_NAME);
        assert_eq!(TargetType::I32.name(), i32::TYPE_NAME);
        assert_eq!(TargetType::F64.name(), f64::TYPE_NAME);
        assert_eq!(TargetType::Char.name(), char::TYPE_NAME);
        assert_eq!(TargetType::Bool.name(), bool::TYPE_NAME);

        let typed = convert::<String>(&1).target();
        let runtime = convert_dynamic(&1, TargetType::String, &LexicalCast).target();
        assert_eq!(typed, runtime);
    }

    #[test]
    fn values_serialize_untagged() {
        let values = [Value::I32(1), Value::String("a".into()), Value::Bool(true)];
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, r#"[1,"a",true]"#);
    }
}
