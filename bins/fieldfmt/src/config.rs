use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use fieldfmt_api::config::{ConfigValues, validate_and_build};
use fieldfmt_api::schema::{Field, Schema};
use fieldfmt_processor_string_format::FormatterConfig;
use serde::Deserialize;

use crate::error::CliError;

#[derive(Parser)]
#[command(name = "fieldfmt", about = "Formats one field of a record stream as text")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Format JSON-lines rows
    Run(RunArgs),
    /// Check that a stream would open with the configured schema
    Check(CheckArgs),
    /// List the built-in cultures
    Cultures,
}

#[derive(Args, Clone, Debug)]
pub struct RunArgs {
    /// Path to the TOML config file
    #[arg(long, default_value = "fieldfmt.toml", env = "FIELDFMT_CONFIG")]
    pub config: String,

    /// JSON-lines input (stdin when absent)
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// JSON-lines output (stdout when absent)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Clone, Debug)]
pub struct CheckArgs {
    /// Path to the TOML config file
    #[arg(long, default_value = "fieldfmt.toml", env = "FIELDFMT_CONFIG")]
    pub config: String,
}

// ---- TOML Config ----

#[derive(Debug, Deserialize)]
pub struct FileConfig {
    /// Formatter parameters, validated against `FormatterConfig::config_params`.
    pub formatter: toml::Table,
    pub input: InputConfig,
}

#[derive(Debug, Deserialize)]
pub struct InputConfig {
    pub fields: Vec<Field>,
}

impl FileConfig {
    pub fn load(path: &str) -> Result<Self, CliError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CliError::Config { context: "read", detail: format!("'{path}': {e}") })?;
        Self::parse(&content)
            .map_err(|e| CliError::Config { context: "parse", detail: format!("'{path}': {e}") })
    }

    fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// `[formatter]` checked against the declared parameters.
    pub fn formatter_values(&self) -> Result<ConfigValues, CliError> {
        let settings = serde_json::to_value(&self.formatter).map_err(|e| CliError::Config {
            context: "formatter",
            detail: e.to_string(),
        })?;
        Ok(validate_and_build(Some(&settings), &FormatterConfig::config_params())?)
    }

    pub fn input_schema(&self) -> Result<Schema, CliError> {
        if self.input.fields.is_empty() {
            return Err(CliError::Config {
                context: "input",
                detail: "no [[input.fields]] configured".into(),
            });
        }
        Ok(Schema::new(self.input.fields.clone()))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const SAMPLE: &str = r#"
[formatter]
input_field = "amount"
format = "N2"
culture = "de-DE"
output_length = 20

[[input.fields]]
name = "id"
type = "int64"

[[input.fields]]
name = "amount"
type = "fixeddecimal"
size = 19
scale = 2
"#;

    #[test]
    fn loads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let config = FileConfig::load(file.path().to_str().unwrap()).unwrap();

        let schema = config.input_schema().unwrap();
        assert_eq!(schema.len(), 2);
        assert_eq!(schema.fields[1], Field::decimal("amount", 19, 2));

        let values = config.formatter_values().unwrap();
        let formatter = FormatterConfig::from_values(&values).unwrap();
        assert_eq!(formatter.culture, "de-DE");
        assert_eq!(formatter.output_length, 20);
        assert_eq!(formatter.output_field, "FormattedValue");
    }

    #[test]
    fn unknown_formatter_key_is_rejected() {
        let config = FileConfig::parse(&SAMPLE.replace("format =", "pattern =")).unwrap();
        assert!(matches!(config.formatter_values(), Err(CliError::Plugin(_))));
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = FileConfig::load(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, CliError::Config { context: "read", .. }));
    }

    #[test]
    fn empty_schema_is_rejected() {
        let config = FileConfig::parse("[formatter]\ninput_field = \"x\"\n[input]\nfields = []\n").unwrap();
        assert!(config.input_schema().is_err());
    }
}
