use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};

use crate::error::PluginError;
use crate::schema::{Field, FieldType, Schema};
use crate::value::{Row, Value};

/// Typed read access to one column of rows conforming to a schema.
///
/// Getters convert between compatible representations the way the host
/// does (`Int16` reads as `i64`, `Date` reads as a midnight datetime, …).
/// `None` means the value is null or has no meaningful conversion.
#[derive(Debug, Clone)]
pub struct FieldAccessor {
    pub index: usize,
    pub field: Field,
}

impl FieldAccessor {
    /// Bind to the field called `name`. `None` if the schema has no such field.
    pub fn bind(schema: &Schema, name: &str) -> Option<Self> {
        let index = schema.index_of(name)?;
        Some(Self { index, field: schema.fields[index].clone() })
    }

    pub fn field_type(&self) -> FieldType {
        self.field.field_type
    }

    pub fn value<'r>(&self, row: &'r Row) -> &'r Value {
        row.get(self.index)
    }

    pub fn get_as_string(&self, row: &Row) -> Option<String> {
        self.value(row).to_default_string()
    }

    pub fn get_as_bool(&self, row: &Row) -> Option<bool> {
        match self.value(row) {
            Value::Bool(b) => Some(*b),
            Value::Int64(v) => Some(*v != 0),
            Value::String(s) => match s.trim() {
                t if t.eq_ignore_ascii_case("true") => Some(true),
                t if t.eq_ignore_ascii_case("false") => Some(false),
                _ => None,
            },
            _ => None,
        }
    }

    pub fn get_as_i64(&self, row: &Row) -> Option<i64> {
        match self.value(row) {
            Value::Int64(v) => Some(*v),
            Value::Bool(b) => Some(i64::from(*b)),
            Value::Float64(v) if v.is_finite() => Some(v.trunc() as i64),
            Value::Decimal(v, scale) => i64::try_from(*v / 10i128.pow(u32::from(*scale))).ok(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn get_as_f64(&self, row: &Row) -> Option<f64> {
        match self.value(row) {
            Value::Float64(v) => Some(*v),
            Value::Int64(v) => Some(*v as f64),
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Value::Decimal(v, scale) => Some(*v as f64 / 10f64.powi(i32::from(*scale))),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn get_as_datetime(&self, row: &Row) -> Option<NaiveDateTime> {
        match self.value(row) {
            Value::DateTime(dt) => Some(*dt),
            Value::Date(d) => d.and_hms_opt(0, 0, 0),
            Value::String(s) => parse_datetime(s.trim()),
            _ => None,
        }
    }

    /// Elapsed time since midnight.
    pub fn get_as_time_span(&self, row: &Row) -> Option<TimeDelta> {
        let time = match self.value(row) {
            Value::Time(t) => *t,
            Value::DateTime(dt) => dt.time(),
            Value::String(s) => NaiveTime::parse_from_str(s.trim(), "%H:%M:%S%.f").ok()?,
            _ => return None,
        };
        Some(
            TimeDelta::seconds(i64::from(time.num_seconds_from_midnight()))
                + TimeDelta::nanoseconds(i64::from(time.nanosecond())),
        )
    }
}

fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// What a text field does with a value longer than its max length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Keep the first `size` characters.
    #[default]
    Truncate,
    /// Refuse the write; the row fails.
    Reject,
}

impl FromStr for OverflowPolicy {
    type Err = PluginError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "truncate" => Ok(Self::Truncate),
            "reject" => Ok(Self::Reject),
            other => Err(PluginError::config(format!(
                "overflow must be \"truncate\" or \"reject\", got {other:?}"
            ))),
        }
    }
}

/// Write access to a text column, enforcing its max length.
#[derive(Debug)]
pub struct FieldWriter {
    index: usize,
    name: String,
    max_len: usize,
    policy: OverflowPolicy,
    truncations: u64,
}

impl FieldWriter {
    pub fn bind(schema: &Schema, name: &str, policy: OverflowPolicy) -> Option<Self> {
        let index = schema.index_of(name)?;
        let field = &schema.fields[index];
        Some(Self {
            index,
            name: field.name.clone(),
            max_len: field.size,
            policy,
            truncations: 0,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of values cut to fit so far.
    pub fn truncations(&self) -> u64 {
        self.truncations
    }

    /// Store `text`, applying the overflow policy. A `size` of 0 means unbounded.
    pub fn set_from_str(&mut self, row: &mut Row, text: String) -> Result<(), PluginError> {
        if self.max_len == 0 {
            row.set(self.index, Value::String(text));
            return Ok(());
        }
        let Some((cut, _)) = text.char_indices().nth(self.max_len) else {
            row.set(self.index, Value::String(text));
            return Ok(());
        };
        match self.policy {
            OverflowPolicy::Truncate => {
                if self.truncations == 0 {
                    tracing::warn!(
                        field = %self.name,
                        max_len = self.max_len,
                        "formatted value exceeds field length, truncating"
                    );
                }
                self.truncations += 1;
                let mut text = text;
                text.truncate(cut);
                row.set(self.index, Value::String(text));
                Ok(())
            }
            OverflowPolicy::Reject => Err(PluginError::data(format!(
                "value of {} characters does not fit field '{}' (max {})",
                text.chars().count(),
                self.name,
                self.max_len
            ))),
        }
    }

    pub fn set_null(&self, row: &mut Row) {
        row.set(self.index, Value::Null);
    }
}
