//! Property tests over arbitrary patterns, types and values.

use chrono::{NaiveDate, NaiveTime};
use fieldfmt_api::record::FieldAccessor;
use fieldfmt_api::schema::{Field, FieldType, Schema};
use fieldfmt_api::stream::{MemorySink, VecSource, drive};
use fieldfmt_api::value::{Row, Value};
use fieldfmt_culture::{BuiltinCultures, CultureProvider};
use fieldfmt_processor_string_format::{FormatterConfig, StringFormatter, resolve};
use proptest::prelude::*;

const TYPES: [FieldType; 17] = [
    FieldType::Bool,
    FieldType::Byte,
    FieldType::Int16,
    FieldType::Int32,
    FieldType::Int64,
    FieldType::FixedDecimal,
    FieldType::Float,
    FieldType::Double,
    FieldType::String,
    FieldType::WString,
    FieldType::VString,
    FieldType::VWString,
    FieldType::Date,
    FieldType::Time,
    FieldType::DateTime,
    FieldType::Blob,
    FieldType::SpatialObj,
];

fn field_type() -> impl Strategy<Value = FieldType> {
    (0..TYPES.len()).prop_map(|i| TYPES[i])
}

fn culture_name() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["", "en-US", "en-GB", "de-DE", "fr-FR", "ru-RU", "ja-JP", "zz"])
}

/// A value of the representation rows of `t` carry.
fn value_for(t: FieldType) -> BoxedStrategy<Value> {
    match t {
        FieldType::Bool => any::<bool>().prop_map(Value::Bool).boxed(),
        t if t.is_integer() => any::<i64>().prop_map(Value::Int64).boxed(),
        FieldType::FixedDecimal => {
            (any::<i64>(), 0u8..6).prop_map(|(v, s)| Value::Decimal(i128::from(v), s)).boxed()
        }
        FieldType::Float | FieldType::Double => any::<f64>().prop_map(Value::Float64).boxed(),
        FieldType::Date => (1i32..9999, 1u32..366)
            .prop_filter_map("valid ordinal", |(y, d)| NaiveDate::from_yo_opt(y, d))
            .prop_map(Value::Date)
            .boxed(),
        FieldType::DateTime => (1i32..9999, 1u32..366, 0u32..86_400)
            .prop_filter_map("valid ordinal", |(y, d, s)| {
                NaiveDate::from_yo_opt(y, d)?.and_hms_opt(s / 3600, s / 60 % 60, s % 60)
            })
            .prop_map(Value::DateTime)
            .boxed(),
        FieldType::Time => (0u32..86_400)
            .prop_filter_map("valid time", |s| {
                NaiveTime::from_num_seconds_from_midnight_opt(s, 0)
            })
            .prop_map(Value::Time)
            .boxed(),
        t if t.is_text() => ".{0,20}".prop_map(Value::String).boxed(),
        _ => prop::collection::vec(any::<u8>(), 0..8).prop_map(Value::Bytes).boxed(),
    }
}

fn typed_value() -> impl Strategy<Value = (FieldType, Value)> {
    field_type().prop_flat_map(|t| value_for(t).prop_map(move |v| (t, v)))
}

fn accessor(t: FieldType) -> FieldAccessor {
    FieldAccessor::bind(&Schema::new(vec![Field::new("x", t)]), "x").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1_000))]

    #[test]
    fn resolving_never_panics(
        (t, v) in typed_value(),
        pattern in "[0#.,;%Ee+\\-'\\\\A-Za-z:/ ]{0,10}",
        culture in culture_name(),
    ) {
        let culture = BuiltinCultures.resolve(culture);
        if let Ok(f) = resolve(&accessor(t), &pattern, culture) {
            let _ = f(&Row(vec![v]));
        }
    }

    #[test]
    fn null_maps_to_null(t in field_type(), pattern in "[0#.A-Za-z]{0,6}") {
        if let Ok(f) = resolve(&accessor(t), &pattern, BuiltinCultures.resolve("en-US")) {
            prop_assert_eq!(f(&Row(vec![Value::Null])), None);
        }
    }

    #[test]
    fn resolution_is_idempotent(
        (t, v) in typed_value(),
        pattern in prop::sample::select(vec!["", "N2", "G", "0.00", "yyyy-MM-dd", "c", "X"]),
        culture in culture_name(),
    ) {
        let culture = BuiltinCultures.resolve(culture);
        let row = Row(vec![v]);
        match (resolve(&accessor(t), pattern, culture), resolve(&accessor(t), pattern, culture)) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a(&row), b(&row)),
            (Err(a), Err(b)) => prop_assert_eq!(a.kind, b.kind),
            _ => prop_assert!(false, "resolution differs between calls"),
        }
    }

    #[test]
    fn every_row_is_copied_and_extended(values in prop::collection::vec(any::<i64>(), 0..20)) {
        let schema = Schema::new(vec![
            Field::new("n", FieldType::Int64),
            Field::new("flag", FieldType::Bool),
        ]);
        let rows: Vec<Row> = values
            .iter()
            .map(|&v| Row(vec![Value::Int64(v), Value::Bool(v % 2 == 0)]))
            .collect();
        let sink = MemorySink::new();
        let mut formatter = StringFormatter::new(FormatterConfig::new("n", "D"), Box::new(sink.clone()));
        let mut source = VecSource::new(schema, rows.clone());

        prop_assert_eq!(drive(&mut source, &mut formatter).unwrap(), rows.len() as u64);
        sink.inspect(|s| {
            assert_eq!(s.closes, 1);
            assert_eq!(s.rows.len(), rows.len());
            for (out, input) in s.rows.iter().zip(&rows) {
                assert_eq!(out.len(), 3);
                assert_eq!(out.0[..2], input.0[..]);
                let Value::Int64(n) = input.0[0] else { unreachable!() };
                assert_eq!(out.0[2], Value::String(n.to_string()));
            }
        });
    }
}
