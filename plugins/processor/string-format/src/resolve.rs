use fieldfmt_api::error::PluginError;
use fieldfmt_api::record::FieldAccessor;
use fieldfmt_api::schema::FieldType;
use fieldfmt_api::value::Row;
use fieldfmt_culture::{
    Culture, DateTimeFormatter, FormatError, NumberFormatter, NumericKind, TimeSpanFormatter,
};

/// Text of the bound field for one row; `None` when the field is null.
pub type Formatter = Box<dyn Fn(&Row) -> Option<String> + Send + Sync>;

/// Build the formatter for `field`, parsing `pattern` once.
///
/// A blank pattern renders the field's default text whatever its type.
/// Otherwise the field type picks the grammar: integral and floating
/// numbers, date/time, time of day as a time span. Booleans ignore the
/// pattern. Other types cannot be formatted.
pub fn resolve(
    field: &FieldAccessor,
    pattern: &str,
    culture: &'static Culture,
) -> Result<Formatter, PluginError> {
    let accessor = field.clone();
    let invalid = |e: FormatError| {
        PluginError::format(e.to_string()).with_context(format!("field '{}'", field.field.name))
    };
    if pattern.trim().is_empty() {
        return default_text(accessor).map_err(invalid);
    }
    let formatter: Formatter = match field.field_type() {
        FieldType::Bool => {
            Box::new(move |row| accessor.get_as_bool(row).map(|b| culture.format_bool(b).to_string()))
        }
        t if t.is_integer() => {
            let number =
                NumberFormatter::new(pattern, NumericKind::Integral, culture).map_err(invalid)?;
            Box::new(move |row| accessor.get_as_i64(row).map(|v| number.format_i64(v)))
        }
        t if t.is_floating() => {
            let number =
                NumberFormatter::new(pattern, NumericKind::Floating, culture).map_err(invalid)?;
            Box::new(move |row| accessor.get_as_f64(row).map(|v| number.format_f64(v)))
        }
        FieldType::Date | FieldType::DateTime => {
            let date = DateTimeFormatter::new(pattern, culture).map_err(invalid)?;
            Box::new(move |row| accessor.get_as_datetime(row).map(|v| date.format(&v)))
        }
        FieldType::Time => {
            let span = TimeSpanFormatter::new(pattern, culture).map_err(invalid)?;
            Box::new(move |row| accessor.get_as_time_span(row).map(|v| span.format(v)))
        }
        other => {
            return Err(PluginError::schema(format!(
                "unsupported field type {other} for field '{}'",
                field.field.name
            )));
        }
    };
    Ok(formatter)
}

/// Default text for a blank pattern. Doubles render as invariant `G`
/// (`1E+21`, `Infinity`), everything else as the field's own string form.
fn default_text(accessor: FieldAccessor) -> Result<Formatter, FormatError> {
    Ok(match accessor.field_type() {
        FieldType::Float | FieldType::Double => {
            let general = NumberFormatter::new("G", NumericKind::Floating, Culture::invariant())?;
            Box::new(move |row| accessor.get_as_f64(row).map(|v| general.format_f64(v)))
        }
        _ => Box::new(move |row| accessor.get_as_string(row)),
    })
}
