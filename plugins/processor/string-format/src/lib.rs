//! Formats one field of every row as text into a new appended field.

pub mod config;
pub mod negotiate;
pub mod resolve;

use std::sync::Arc;

use fieldfmt_api::config::ConfigValues;
use fieldfmt_api::copier::RecordCopier;
use fieldfmt_api::error::PluginError;
use fieldfmt_api::record::{FieldAccessor, FieldWriter};
use fieldfmt_api::schema::Schema;
use fieldfmt_api::stream::{OutputStream, RecordHandler, RecordSink};
use fieldfmt_api::value::Row;
use fieldfmt_culture::{BuiltinCultures, CultureProvider};

pub use config::FormatterConfig;
pub use negotiate::{Negotiated, OUTPUT_SOURCE, negotiate};
pub use resolve::{Formatter, resolve};

// ═══════════════════════════════════════════════════════════════
//  Per-stream state
// ═══════════════════════════════════════════════════════════════

/// Fixed at stream-open, reused for every row.
struct OpenStream {
    copier: RecordCopier,
    input: FieldAccessor,
    writer: FieldWriter,
    formatter: Formatter,
}

// ═══════════════════════════════════════════════════════════════
//  StringFormatter — RecordHandler impl
// ═══════════════════════════════════════════════════════════════

/// Reads `input_field`, renders it with the configured pattern and culture
/// and forwards each row with the text appended as `output_field`.
pub struct StringFormatter {
    config: FormatterConfig,
    cultures: Arc<dyn CultureProvider>,
    output: OutputStream,
    open: Option<OpenStream>,
    rows: u64,
}

impl StringFormatter {
    pub fn new(config: FormatterConfig, sink: Box<dyn RecordSink>) -> Self {
        Self {
            config,
            cultures: Arc::new(BuiltinCultures),
            output: OutputStream::new(sink),
            open: None,
            rows: 0,
        }
    }

    /// Build from host-validated values (see [`FormatterConfig::config_params`]).
    pub fn from_values(values: &ConfigValues, sink: Box<dyn RecordSink>) -> Result<Self, PluginError> {
        Ok(Self::new(FormatterConfig::from_values(values)?, sink))
    }

    /// Look cultures up in `cultures` instead of the built-in table.
    pub fn with_cultures(mut self, cultures: Arc<dyn CultureProvider>) -> Self {
        self.cultures = cultures;
        self
    }

    /// Output schema, once the stream is open.
    pub fn output_schema(&self) -> Option<&Schema> {
        self.output.schema()
    }

    /// Rows pushed downstream so far.
    pub fn rows(&self) -> u64 {
        self.rows
    }
}

impl RecordHandler for StringFormatter {
    fn on_open(&mut self, schema: &Schema) -> Result<(), PluginError> {
        if self.open.is_some() {
            return Err(PluginError::logic("stream already open"));
        }
        let Negotiated { output_schema, copier, input, output } = negotiate(schema, &self.config)?;
        let culture = self.cultures.resolve(&self.config.culture);
        let formatter = resolve(&input, &self.config.format, culture)?;
        self.output.init(output_schema)?;

        tracing::info!(
            input = %input.field.name,
            input_type = %input.field_type(),
            output = %self.config.output_field,
            format = %self.config.format,
            culture = %culture.name,
            "string formatter opened"
        );
        self.open = Some(OpenStream { copier, input, writer: output, formatter });
        Ok(())
    }

    fn on_row(&mut self, row: &Row) -> Result<(), PluginError> {
        let open = self
            .open
            .as_mut()
            .ok_or_else(|| PluginError::logic("row received before stream open"))?;
        let mut record = self.output.record()?;
        open.copier.copy(&mut record, row);
        match (open.formatter)(row) {
            Some(text) => open.writer.set_from_str(&mut record, text)?,
            None => open.writer.set_null(&mut record),
        }
        self.output.push(record)?;
        self.rows += 1;
        Ok(())
    }

    fn on_progress(&mut self, fraction: f64) {
        self.output.update_progress(fraction);
    }

    fn on_close(&mut self) -> Result<(), PluginError> {
        if self.output.is_closed() {
            return Ok(());
        }
        let truncated = self.open.as_ref().map_or(0, |o| o.writer.truncations());
        tracing::info!(
            input = %self.open.as_ref().map_or("", |o| o.input.field.name.as_str()),
            rows = self.rows,
            truncated,
            "string formatter closed"
        );
        self.output.close()
    }
}
