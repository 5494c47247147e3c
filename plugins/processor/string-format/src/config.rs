use fieldfmt_api::config::{ConfigParam, ConfigValues, ParamType, ParamValue};
use fieldfmt_api::error::PluginError;
use fieldfmt_api::record::OverflowPolicy;

pub const DEFAULT_OUTPUT_FIELD: &str = "FormattedValue";
pub const DEFAULT_OUTPUT_LENGTH: u64 = 64;

/// Settings of one formatter instance, fixed for the lifetime of a stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatterConfig {
    pub input_field: String,
    pub output_field: String,
    /// Max characters of the output field.
    pub output_length: usize,
    /// Empty means the field's default text.
    pub format: String,
    /// Culture identifier; empty means invariant.
    pub culture: String,
    pub overflow: OverflowPolicy,
}

impl FormatterConfig {
    pub fn new(input_field: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            input_field: input_field.into(),
            output_field: DEFAULT_OUTPUT_FIELD.to_string(),
            output_length: DEFAULT_OUTPUT_LENGTH as usize,
            format: format.into(),
            culture: String::new(),
            overflow: OverflowPolicy::Truncate,
        }
    }

    pub fn with_culture(mut self, culture: impl Into<String>) -> Self {
        self.culture = culture.into();
        self
    }

    pub fn with_output(mut self, name: impl Into<String>, length: usize) -> Self {
        self.output_field = name.into();
        self.output_length = length;
        self
    }

    pub fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }

    /// Parameters a host must validate before calling [`from_values`](Self::from_values).
    pub fn config_params() -> Vec<ConfigParam> {
        vec![
            ConfigParam::required("input_field", ParamType::Str, "field to format"),
            ConfigParam::optional(
                "output_field",
                ParamValue::Str(DEFAULT_OUTPUT_FIELD.to_string()),
                "name of the appended text field",
            ),
            ConfigParam::optional(
                "output_length",
                ParamValue::U64(DEFAULT_OUTPUT_LENGTH),
                "max characters of the appended field",
            ),
            ConfigParam::optional("format", ParamValue::Str(String::new()), "format pattern"),
            ConfigParam::optional("culture", ParamValue::Str(String::new()), "culture name"),
            ConfigParam::optional(
                "overflow",
                ParamValue::Str("truncate".to_string()),
                "\"truncate\" or \"reject\" values longer than output_length",
            ),
        ]
    }

    pub fn from_values(values: &ConfigValues) -> Result<Self, PluginError> {
        let input_field = values
            .get_str("input_field")
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| PluginError::config("input_field is required"))?;
        let output_field = values
            .get_str("output_field")
            .map(str::trim)
            .unwrap_or(DEFAULT_OUTPUT_FIELD);
        if output_field.is_empty() {
            return Err(PluginError::config("output_field must not be empty"));
        }
        let output_length = values.get_u64("output_length").unwrap_or(DEFAULT_OUTPUT_LENGTH);
        if output_length == 0 {
            return Err(PluginError::config("output_length must be greater than 0"));
        }
        let output_length = usize::try_from(output_length)
            .map_err(|_| PluginError::config("output_length is too large"))?;

        Ok(Self {
            input_field: input_field.to_string(),
            output_field: output_field.to_string(),
            output_length,
            format: values.get_str("format").unwrap_or_default().to_string(),
            culture: values.get_str("culture").unwrap_or_default().trim().to_string(),
            overflow: values.get_str("overflow").unwrap_or_default().parse()?,
        })
    }
}
