//! Culture data and the pattern grammars used to render numbers, dates and
//! time spans as text.
//!
//! Patterns follow the .NET format-string grammar (`"N0"`, `"#,##0.00"`,
//! `"yyyy/MM/dd"`, `"hh\\:mm"`, …). Every pattern is parsed once into a
//! formatter bound to a [`Culture`]; formatting a value afterwards cannot fail.

pub mod culture;
mod data;
pub mod datetime;
pub mod error;
mod number;
pub mod numeric;
pub mod timespan;

pub use culture::{BuiltinCultures, Culture, CultureProvider, DateTimeFormatInfo, NumberFormatInfo};
pub use datetime::DateTimeFormatter;
pub use error::FormatError;
pub use numeric::{NumberFormatter, NumericKind};
pub use timespan::TimeSpanFormatter;
