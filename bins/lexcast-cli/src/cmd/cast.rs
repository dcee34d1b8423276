use lexcast::{cast_dynamic, convert_dynamic, LexicalCast, Strategy, Value};

use crate::config::{CastArgs, ConvertArgs};
use crate::error::CliError;

/// `lexcast cast`: the converted value, or the `ConversionError`.
pub fn run(args: &CastArgs, strategy: &Strategy) -> Result<Value, CliError> {
    let source = source_value(args)?;
    Ok(cast_dynamic(&source, args.to, strategy)?)
}

/// `lexcast convert`: the converted value, the fallback, or `ValueAccessError`.
pub fn run_optional(args: &ConvertArgs, strategy: &Strategy) -> Result<Value, CliError> {
    let fallback = args
        .fallback
        .as_deref()
        .map(|text| cast_dynamic(text, args.cast.to, &LexicalCast))
        .transpose()
        .map_err(CliError::Fallback)?;

    let source = source_value(&args.cast)?;
    let converted = convert_dynamic(&source, args.cast.to, strategy);
    match fallback {
        Some(fallback) => Ok(converted.value_or(fallback)),
        None => Ok(converted.value()?),
    }
}

/// VALUE read as plain text into the `--from` type.
fn source_value(args: &CastArgs) -> Result<Value, CliError> {
    Ok(cast_dynamic(args.value.as_str(), args.from, &LexicalCast)?)
}

#[cfg(test)]
mod tests {
    use lexcast::{ParseFailure, Radix, Stream, TargetType};

    use super::*;

    fn cast_args(value: &str, from: TargetType, to: TargetType) -> CastArgs {
        CastArgs { value: value.into(), to, from }
    }

    #[test]
    fn cast_string_to_int() {
        let got = run(&cast_args("123", TargetType::String, TargetType::I32), &Strategy::default());
        assert_eq!(got.unwrap(), Value::I32(123));
    }

    #[test]
    fn cast_int_to_hex_string() {
        let hex = Strategy::Stream(Stream::new().radix(Radix::Hex));
        let got = run(&cast_args("255", TargetType::U8, TargetType::String), &hex);
        assert_eq!(got.unwrap(), Value::String("ff".into()));
    }

    #[test]
    fn cast_failure_is_a_conversion_error() {
        let err = run(&cast_args("abc", TargetType::String, TargetType::I32), &Strategy::default())
            .unwrap_err();
        match err {
            CliError::Conversion(e) => assert_eq!(e.failure(), ParseFailure::InvalidDigit),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn bad_source_value_is_reported() {
        let err = run(&cast_args("300", TargetType::U8, TargetType::String), &Strategy::default())
            .unwrap_err();
        assert!(matches!(err, CliError::Conversion(_)));
    }

    #[test]
    fn convert_absent_without_fallback_is_an_access_error() {
        let args = ConvertArgs {
            cast: cast_args("abc", TargetType::String, TargetType::I32),
            fallback: None,
        };
        let err = run_optional(&args, &Strategy::default()).unwrap_err();
        assert_eq!(err.to_string(), "conversion to i32 produced no value");
    }

    #[test]
    fn convert_absent_with_fallback() {
        let args = ConvertArgs {
            cast: cast_args("abc", TargetType::String, TargetType::I32),
            fallback: Some("-1".into()),
        };
        assert_eq!(run_optional(&args, &Strategy::default()).unwrap(), Value::I32(-1));
    }

    #[test]
    fn invalid_fallback_is_rejected_up_front() {
        let args = ConvertArgs {
            cast: cast_args("5", TargetType::String, TargetType::I32),
            fallback: Some("none".into()),
        };
        let err = run_optional(&args, &Strategy::default()).unwrap_err();
        assert!(matches!(err, CliError::Fallback(_)));
    }
}
