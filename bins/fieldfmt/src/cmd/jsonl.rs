//! JSON-lines source and sink: one JSON object per row, keyed by field name.

use std::io::{BufRead, Write};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use fieldfmt_api::error::PluginError;
use fieldfmt_api::schema::{Field, FieldType, Schema};
use fieldfmt_api::stream::{RecordSink, RecordSource};
use fieldfmt_api::value::{Row, Value};

// ═══════════════════════════════════════════════════════════════
//  Source
// ═══════════════════════════════════════════════════════════════

/// Reads rows typed by `schema`. Blank lines are skipped; keys missing from
/// an object are null, keys not in the schema are ignored.
pub struct JsonLinesSource<R> {
    schema: Schema,
    reader: R,
    line: String,
    consumed: u64,
    total: Option<u64>,
}

impl<R: BufRead> JsonLinesSource<R> {
    /// `total` is the input size in bytes, when known, for progress.
    pub fn new(schema: Schema, reader: R, total: Option<u64>) -> Self {
        Self { schema, reader, line: String::new(), consumed: 0, total }
    }

    fn parse_line(&self) -> Result<Row, PluginError> {
        let object: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&self.line)?;
        let mut row = Row::nulls(self.schema.len());
        for (name, json) in &object {
            if let Some(index) = self.schema.index_of(name) {
                row.set(index, from_json(&self.schema.fields[index], json)?);
            }
        }
        Ok(row)
    }
}

impl<R: BufRead> RecordSource for JsonLinesSource<R> {
    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn next_row(&mut self) -> Option<Result<Row, PluginError>> {
        loop {
            self.line.clear();
            match self.reader.read_line(&mut self.line) {
                Ok(0) => return None,
                Ok(n) => {
                    self.consumed += n as u64;
                    if self.line.trim().is_empty() {
                        continue;
                    }
                    return Some(self.parse_line());
                }
                Err(e) => return Some(Err(e.into())),
            }
        }
    }

    fn progress(&self) -> Option<f64> {
        match self.total {
            Some(total) if total > 0 => Some(self.consumed as f64 / total as f64),
            _ => None,
        }
    }
}

fn from_json(field: &Field, json: &serde_json::Value) -> Result<Value, PluginError> {
    use serde_json::Value as Json;

    let mismatch = || {
        PluginError::data(format!(
            "field '{}': cannot read {json} as {}",
            field.name, field.field_type
        ))
    };
    let text = || match json {
        Json::String(s) => Some(s.clone()),
        Json::Number(n) => Some(n.to_string()),
        _ => None,
    };

    if json.is_null() {
        return Ok(Value::Null);
    }
    let value = match field.field_type {
        FieldType::Bool => json.as_bool().map(Value::Bool),
        t if t.is_integer() => json
            .as_i64()
            .or_else(|| json.as_str().and_then(|s| s.trim().parse().ok()))
            .map(Value::Int64),
        FieldType::FixedDecimal => {
            text().and_then(|s| parse_decimal(&s, field.scale)).map(|v| Value::Decimal(v, field.scale))
        }
        FieldType::Float | FieldType::Double => json
            .as_f64()
            .or_else(|| json.as_str().and_then(|s| s.trim().parse().ok()))
            .map(Value::Float64),
        t if t.is_text() => {
            let s = if let Json::Bool(b) = json { Some(b.to_string()) } else { text() };
            s.map(Value::String)
        }
        FieldType::Date => json
            .as_str()
            .and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok())
            .map(Value::Date),
        FieldType::DateTime => json
            .as_str()
            .and_then(|s| {
                ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"]
                    .iter()
                    .find_map(|f| NaiveDateTime::parse_from_str(s.trim(), f).ok())
            })
            .map(Value::DateTime),
        FieldType::Time => json
            .as_str()
            .and_then(|s| NaiveTime::parse_from_str(s.trim(), "%H:%M:%S%.f").ok())
            .map(Value::Time),
        _ => json.as_str().and_then(decode_hex).map(Value::Bytes),
    };
    value.ok_or_else(mismatch)
}

/// `"12.5"` at scale 2 → `1250`. Extra fraction digits are cut.
fn parse_decimal(text: &str, scale: u8) -> Option<i128> {
    let text = text.trim();
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let (int, frac) = digits.split_once('.').unwrap_or((digits, ""));
    if int.is_empty() && frac.is_empty() {
        return None;
    }
    if !int.bytes().chain(frac.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }
    let mut unscaled: i128 = 0;
    let frac = frac.bytes().chain(std::iter::repeat(b'0')).take(scale as usize);
    for b in int.bytes().chain(frac) {
        unscaled = unscaled.checked_mul(10)?.checked_add(i128::from(b - b'0'))?;
    }
    Some(if negative { -unscaled } else { unscaled })
}

fn decode_hex(s: &str) -> Option<Vec<u8>> {
    let s = s.trim();
    if s.len() % 2 != 0 {
        return None;
    }
    (0..s.len())
        .step_by(2)
        .map(|i| s.get(i..i + 2).and_then(|pair| u8::from_str_radix(pair, 16).ok()))
        .collect()
}

// ═══════════════════════════════════════════════════════════════
//  Sink
// ═══════════════════════════════════════════════════════════════

/// Writes rows as JSON objects with keys in output-schema order.
pub struct JsonLinesSink<W> {
    writer: W,
    names: Vec<String>,
}

impl<W: Write + Send> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, names: Vec::new() }
    }

    fn write_row(&mut self, row: &Row) -> Result<(), PluginError> {
        self.writer.write_all(b"{")?;
        for (i, name) in self.names.iter().enumerate() {
            if i > 0 {
                self.writer.write_all(b",")?;
            }
            serde_json::to_writer(&mut self.writer, name)?;
            self.writer.write_all(b":")?;
            serde_json::to_writer(&mut self.writer, &to_json(row.get(i)))?;
        }
        self.writer.write_all(b"}\n")?;
        Ok(())
    }
}

impl<W: Write + Send> RecordSink for JsonLinesSink<W> {
    fn init(&mut self, schema: &Schema) -> Result<(), PluginError> {
        self.names = schema.fields.iter().map(|f| f.name.clone()).collect();
        Ok(())
    }

    fn push(&mut self, row: Row) -> Result<(), PluginError> {
        self.write_row(&row)
    }

    fn update_progress(&mut self, fraction: f64) {
        tracing::debug!(progress = fraction, "input progress");
    }

    fn close(&mut self) -> Result<(), PluginError> {
        self.writer.flush()?;
        Ok(())
    }
}

fn to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Int64(v) => serde_json::Value::from(*v),
        Value::Float64(v) => serde_json::Number::from_f64(*v)
            .map_or(serde_json::Value::Null, serde_json::Value::Number),
        other => other.to_default_string().map_or(serde_json::Value::Null, serde_json::Value::String),
    }
}
