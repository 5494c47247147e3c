use std::fmt::Write as _;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Canonical value representation.
///
/// Integers of every width are widened to `Int64`, `Float` and `Double`
/// both travel as `Float64`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int64(i64),
    Float64(f64),
    /// `(unscaled, scale)`: `Decimal(1250, 2)` is `12.50`.
    Decimal(i128, u8),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Time(NaiveTime),
    String(String),
    /// Opaque binary data (blob, spatial object).
    Bytes(Vec<u8>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Natural text form of the value, independent of any pattern or culture.
    ///
    /// `None` for `Null`. `Float64` uses Rust's shortest form (`inf`, no
    /// exponent); pattern-aware callers render doubles themselves.
    pub fn to_default_string(&self) -> Option<String> {
        let s = match self {
            Value::Null => return None,
            Value::Bool(true) => "True".to_string(),
            Value::Bool(false) => "False".to_string(),
            Value::Int64(v) => v.to_string(),
            Value::Float64(v) => v.to_string(),
            Value::Decimal(v, scale) => decimal_to_string(*v, *scale),
            Value::Date(d) => d.format("%Y-%m-%d").to_string(),
            Value::DateTime(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
            Value::Time(t) => t.format("%H:%M:%S").to_string(),
            Value::String(s) => s.clone(),
            Value::Bytes(b) => {
                let mut hex = String::with_capacity(b.len() * 2);
                for byte in b {
                    let _ = write!(hex, "{byte:02x}");
                }
                hex
            }
        };
        Some(s)
    }
}

/// `1250, 2` → `"12.50"`.
pub fn decimal_to_string(unscaled: i128, scale: u8) -> String {
    let digits = unscaled.unsigned_abs().to_string();
    let scale = scale as usize;
    let sign = if unscaled < 0 { "-" } else { "" };
    if scale == 0 {
        return format!("{sign}{digits}");
    }
    let padded = if digits.len() <= scale {
        format!("{}{digits}", "0".repeat(scale + 1 - digits.len()))
    } else {
        digits
    };
    let (int_part, frac_part) = padded.split_at(padded.len() - scale);
    format!("{sign}{int_part}.{frac_part}")
}

/// Positional array of values. Order matches `Schema.fields`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row(pub Vec<Value>);

impl Row {
    /// All-null row with `len` slots.
    pub fn nulls(len: usize) -> Self {
        Row(vec![Value::Null; len])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Out-of-range indexes read as `Null`.
    pub fn get(&self, index: usize) -> &Value {
        self.0.get(index).unwrap_or(&Value::Null)
    }

    pub fn set(&mut self, index: usize, value: Value) {
        if let Some(slot) = self.0.get_mut(index) {
            *slot = value;
        }
    }
}
