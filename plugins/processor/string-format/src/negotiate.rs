use fieldfmt_api::copier::RecordCopier;
use fieldfmt_api::error::PluginError;
use fieldfmt_api::record::{FieldAccessor, FieldWriter};
use fieldfmt_api::schema::{Field, FieldType, Schema};

use crate::config::FormatterConfig;

/// `source` tag of the appended field.
pub const OUTPUT_SOURCE: &str = "StringFormatter";

/// Everything derived from the input schema at stream-open.
#[derive(Debug)]
pub struct Negotiated {
    pub output_schema: Schema,
    pub copier: RecordCopier,
    pub input: FieldAccessor,
    pub output: FieldWriter,
}

/// Bind the input field, append the output field and pair up the carried fields.
pub fn negotiate(input: &Schema, config: &FormatterConfig) -> Result<Negotiated, PluginError> {
    let accessor = FieldAccessor::bind(input, &config.input_field).ok_or_else(|| {
        PluginError::schema(format!("missing field '{}' in input schema", config.input_field))
    })?;

    let output_field = Field::text(&config.output_field, FieldType::VWString, config.output_length)
        .with_source(OUTPUT_SOURCE)
        .with_description(format!("'{}' formatted as text", accessor.field.name));
    let output_schema = input.with_appended(output_field)?;

    let copier = RecordCopier::new(input, &output_schema, &[config.output_field.as_str()]);
    let output = FieldWriter::bind(&output_schema, &config.output_field, config.overflow)
        .ok_or_else(|| PluginError::logic("appended field not found in output schema"))?;

    Ok(Negotiated { output_schema, copier, input: accessor, output })
}
