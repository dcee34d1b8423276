//! Value conversion through text, in two calling conventions.
//!
//! - [`lexical_cast`]: direct, returns `Result<B, ConversionError>`.
//! - [`convert`] / [`convert_with`]: optional, returns [`Converted<B>`]
//!   whose [`Converted::value`] fails with `ValueAccessError` when absent.
//!
//! The strategy is always an explicit argument; [`convert`] uses
//! [`LexicalCast`].
//!
//! ```
//! use lexcast::{convert, convert_with, lexical_cast, LexicalCast};
//!
//! let cnv = LexicalCast;
//!
//! let i1: i32 = lexical_cast("123").unwrap();
//! let i2: i32 = convert("123").value().unwrap();
//! let i3: i32 = convert_with("123", &cnv).value().unwrap();
//! let s1: String = lexical_cast(&123).unwrap();
//! let s2: String = convert(&123).value().unwrap();
//! let s3: String = convert_with(&123, &cnv).value().unwrap();
//!
//! assert!(i1 == 123 && i2 == 123 && i3 == 123);
//! assert!(s1 == "123" && s2 == "123" && s3 == "123");
//! ```

pub mod convert;
pub mod converter;
pub mod demo;
pub mod dynamic;
pub mod error;
pub mod lexical;

pub use convert::{apply, convert, convert_with, lexical_cast, Converted};
pub use converter::{Converter, LexicalCast, Stream, Strategy};
pub use dynamic::{cast_dynamic, convert_dynamic, TargetType, Value};
pub use error::{ConversionError, ParseFailure, UnknownName, ValueAccessError};
pub use lexical::{FromLexical, Notation, Radix, ToLexical};
