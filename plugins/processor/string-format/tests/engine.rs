//! End-to-end behaviour of the string formatter over in-memory streams.

use std::sync::{Arc, LazyLock};

use chrono::NaiveDate;
use fieldfmt_api::config::validate_and_build;
use fieldfmt_api::error::ErrorKind;
use fieldfmt_api::record::OverflowPolicy;
use fieldfmt_api::schema::{Field, FieldType, Schema};
use fieldfmt_api::stream::{MemorySink, RecordHandler, VecSource, drive};
use fieldfmt_api::value::{Row, Value};
use fieldfmt_culture::{Culture, CultureProvider, NumberFormatInfo};
use fieldfmt_processor_string_format::{FormatterConfig, OUTPUT_SOURCE, StringFormatter};
use serde_json::json;

fn orders() -> Schema {
    Schema::new(vec![
        Field::new("id", FieldType::Int64),
        Field::text("customer", FieldType::VWString, 40),
        Field::new("qty", FieldType::Int32),
        Field::new("price", FieldType::Double),
        Field::new("placed", FieldType::Date),
        Field::new("photo", FieldType::Blob),
    ])
}

fn order(id: i64, qty: Option<i64>) -> Row {
    Row(vec![
        Value::Int64(id),
        Value::String(format!("customer {id}")),
        qty.map_or(Value::Null, Value::Int64),
        Value::Float64(id as f64 * 1.5),
        Value::Date(NaiveDate::from_ymd_opt(2024, 3, id as u32).unwrap()),
        Value::Bytes(vec![id as u8]),
    ])
}

fn run(config: FormatterConfig, rows: Vec<Row>) -> (Result<u64, fieldfmt_api::error::PluginError>, MemorySink) {
    let sink = MemorySink::new();
    let mut formatter = StringFormatter::new(config, Box::new(sink.clone()));
    let mut source = VecSource::new(orders(), rows);
    (drive(&mut source, &mut formatter), sink)
}

fn output_texts(sink: &MemorySink) -> Vec<Value> {
    sink.inspect(|s| s.rows.iter().map(|r| r.0.last().cloned().unwrap()).collect())
}

#[test]
fn formats_integers_with_culture() {
    let config = FormatterConfig::new("qty", "N0").with_culture("en-US");
    let (result, sink) = run(config, vec![order(1, Some(1234)), order(2, Some(-5))]);
    assert_eq!(result.unwrap(), 2);
    assert_eq!(
        output_texts(&sink),
        vec![Value::String("1,234".into()), Value::String("-5".into())]
    );
}

#[test]
fn output_schema_has_appended_text_field() {
    let config = FormatterConfig::new("placed", "yyyy/MM/dd").with_output("placed_text", 10);
    let (result, sink) = run(config, vec![order(5, None)]);
    result.unwrap();
    sink.inspect(|s| {
        let schema = s.schema.as_ref().unwrap();
        assert_eq!(schema.len(), orders().len() + 1);
        let out = schema.fields.last().unwrap();
        assert_eq!(out.name, "placed_text");
        assert_eq!(out.field_type, FieldType::VWString);
        assert_eq!(out.size, 10);
        assert_eq!(out.source, OUTPUT_SOURCE);
        assert_eq!(s.rows[0].0.last(), Some(&Value::String("2024/03/05".into())));
    });
}

#[test]
fn carried_fields_are_copied_unchanged() {
    let rows = vec![order(1, Some(3)), order(2, None), order(3, Some(9))];
    let (result, sink) = run(FormatterConfig::new("price", "F2"), rows.clone());
    result.unwrap();
    sink.inspect(|s| {
        assert_eq!(s.rows.len(), rows.len());
        for (out, input) in s.rows.iter().zip(&rows) {
            assert_eq!(out.0[..input.len()], input.0[..]);
        }
    });
}

#[test]
fn null_input_gives_null_output() {
    let (result, sink) = run(FormatterConfig::new("qty", "N0"), vec![order(1, None)]);
    result.unwrap();
    assert_eq!(output_texts(&sink), vec![Value::Null]);
}

#[test]
fn empty_pattern_uses_default_text() {
    let (result, sink) = run(FormatterConfig::new("qty", ""), vec![order(1, Some(42))]);
    result.unwrap();
    assert_eq!(output_texts(&sink), vec![Value::String("42".into())]);
}

#[test]
fn blob_with_pattern_fails_at_open() {
    let (result, sink) = run(FormatterConfig::new("photo", "X"), vec![order(1, Some(1))]);
    assert_eq!(result.unwrap_err().kind, ErrorKind::Schema);
    sink.inspect(|s| {
        assert!(s.schema.is_none());
        assert!(s.rows.is_empty());
        assert_eq!(s.closes, 0);
    });
}

#[test]
fn missing_input_field_fails_at_open() {
    let (result, sink) = run(FormatterConfig::new("discount", "N2"), vec![order(1, Some(1))]);
    let err = result.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Schema);
    assert!(err.message.contains("discount"));
    sink.inspect(|s| assert!(s.rows.is_empty()));
}

#[test]
fn invalid_pattern_fails_at_open() {
    let (result, sink) = run(FormatterConfig::new("price", "D2"), vec![order(1, Some(1))]);
    assert_eq!(result.unwrap_err().kind, ErrorKind::Format);
    sink.inspect(|s| assert!(s.rows.is_empty()));
}

#[test]
fn close_reaches_downstream_once() {
    let sink = MemorySink::new();
    let mut formatter = StringFormatter::new(FormatterConfig::new("qty", "N0"), Box::new(sink.clone()));
    let mut source = VecSource::new(orders(), Vec::new());
    assert_eq!(drive(&mut source, &mut formatter).unwrap(), 0);
    formatter.on_close().unwrap();
    sink.inspect(|s| {
        assert!(s.rows.is_empty());
        assert_eq!(s.closes, 1);
    });
}

#[test]
fn progress_is_forwarded() {
    let rows = (1..=4).map(|i| order(i, Some(i))).collect();
    let (result, sink) = run(FormatterConfig::new("id", "D3"), rows);
    result.unwrap();
    sink.inspect(|s| assert_eq!(s.progress, vec![0.25, 0.5, 0.75, 1.0]));
}

#[test]
fn long_values_are_truncated_by_default() {
    let config = FormatterConfig::new("customer", "").with_output("short", 4);
    let (result, sink) = run(config, vec![order(7, None)]);
    result.unwrap();
    assert_eq!(output_texts(&sink), vec![Value::String("cust".into())]);
}

#[test]
fn reject_policy_aborts_the_stream() {
    let config = FormatterConfig::new("customer", "")
        .with_output("short", 4)
        .with_overflow(OverflowPolicy::Reject);
    let (result, sink) = run(config, vec![order(7, None)]);
    let err = result.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Data);
    assert!(err.message.starts_with("row 1"));
    sink.inspect(|s| assert!(s.rows.is_empty()));
}

#[test]
fn built_from_validated_settings() {
    let values = validate_and_build(
        Some(&json!({"input_field": "price", "format": "C", "culture": "en-GB"})),
        &FormatterConfig::config_params(),
    )
    .unwrap();
    let sink = MemorySink::new();
    let mut formatter = StringFormatter::from_values(&values, Box::new(sink.clone())).unwrap();
    let mut source = VecSource::new(orders(), vec![order(2, None)]);
    drive(&mut source, &mut formatter).unwrap();
    assert_eq!(formatter.rows(), 1);
    assert_eq!(formatter.output_schema().map(Schema::len), Some(orders().len() + 1));
    assert_eq!(output_texts(&sink), vec![Value::String("£3.00".into())]);
}

#[test]
fn second_open_is_rejected() {
    let mut formatter =
        StringFormatter::new(FormatterConfig::new("qty", ""), Box::new(MemorySink::new()));
    formatter.on_open(&orders()).unwrap();
    assert_eq!(formatter.on_open(&orders()).unwrap_err().kind, ErrorKind::Logic);
}

/// Swiss German grouping, which the built-in table does not carry.
static DE_CH: LazyLock<Culture> = LazyLock::new(|| {
    let base = Culture::invariant();
    Culture {
        name: "de-CH",
        display_name: "German (Switzerland)",
        number: NumberFormatInfo { group_separator: "'", ..base.number.clone() },
        date_time: base.date_time.clone(),
        true_string: base.true_string,
        false_string: base.false_string,
    }
});

struct SwissCultures;

impl CultureProvider for SwissCultures {
    fn lookup(&self, id: &str) -> Option<&'static Culture> {
        id.eq_ignore_ascii_case("de-CH").then(|| &*DE_CH)
    }
}

#[test]
fn injected_culture_provider_is_used() {
    let sink = MemorySink::new();
    let mut formatter =
        StringFormatter::new(FormatterConfig::new("qty", "N0").with_culture("de-CH"), Box::new(sink.clone()))
            .with_cultures(Arc::new(SwissCultures));
    let mut source = VecSource::new(orders(), vec![order(1, Some(1234567))]);
    drive(&mut source, &mut formatter).unwrap();
    assert_eq!(output_texts(&sink), vec![Value::String("1'234'567".into())]);
}
