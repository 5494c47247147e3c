use std::collections::HashSet;

use crate::error::PluginError;

/// Parameter type for processor configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    Bool,
    I64,
    U64,
    Str,
}

/// Declaration of a single config parameter.
///
/// Processors publish these so a host can validate settings before the
/// processor is created.
#[derive(Debug, Clone)]
pub struct ConfigParam {
    pub name: String,
    pub param_type: ParamType,
    pub required: bool,
    pub default: Option<ParamValue>,
    pub description: String,
}

impl ConfigParam {
    pub fn required(name: &str, param_type: ParamType, description: &str) -> Self {
        Self {
            name: name.to_string(),
            param_type,
            required: true,
            default: None,
            description: description.to_string(),
        }
    }

    pub fn optional(name: &str, default: ParamValue, description: &str) -> Self {
        Self {
            name: name.to_string(),
            param_type: default.param_type(),
            required: false,
            default: Some(default),
            description: description.to_string(),
        }
    }
}

/// Typed config value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Bool(bool),
    I64(i64),
    U64(u64),
    Str(String),
}

impl ParamValue {
    pub fn param_type(&self) -> ParamType {
        match self {
            ParamValue::Bool(_) => ParamType::Bool,
            ParamValue::I64(_) => ParamType::I64,
            ParamValue::U64(_) => ParamType::U64,
            ParamValue::Str(_) => ParamType::Str,
        }
    }
}

/// Validated config values handed to a processor at creation time.
#[derive(Debug, Clone, Default)]
pub struct ConfigValues {
    entries: Vec<(String, ParamValue)>,
}

impl ConfigValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: ParamValue) {
        let name = name.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| k == &name) {
            entry.1 = value;
        } else {
            self.entries.push((name, value));
        }
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.entries.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    pub fn get_u64(&self, name: &str) -> Option<u64> {
        match self.get(name) {
            Some(ParamValue::U64(v)) => Some(*v),
            Some(ParamValue::I64(v)) if *v >= 0 => Some(*v as u64),
            _ => None,
        }
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some(ParamValue::Str(v)) => Some(v),
            _ => None,
        }
    }
}

/// Build `ConfigValues` from a settings object (already deserialized from
/// TOML, JSON, …) against the declared `params`.
///
/// - unknown keys are rejected;
/// - values are converted to the declared type;
/// - absent keys take their default, or fail if required.
pub fn validate_and_build(
    settings: Option<&serde_json::Value>,
    params: &[ConfigParam],
) -> Result<ConfigValues, PluginError> {
    let empty = serde_json::Map::new();
    let obj = match settings {
        Some(serde_json::Value::Object(map)) => map,
        Some(_) => return Err(PluginError::config("settings must be a table/object")),
        None => &empty,
    };

    let known: HashSet<&str> = params.iter().map(|p| p.name.as_str()).collect();
    if let Some(key) = obj.keys().find(|k| !known.contains(k.as_str())) {
        return Err(PluginError::config(format!("unknown parameter '{key}'")));
    }

    let mut values = ConfigValues::new();
    for param in params {
        match obj.get(&param.name) {
            Some(v) => values.set(&param.name, to_param_value(v, param)?),
            None => match &param.default {
                Some(default) => values.set(&param.name, default.clone()),
                None if param.required => {
                    return Err(PluginError::config(format!(
                        "missing required parameter '{}'",
                        param.name
                    )));
                }
                None => {}
            },
        }
    }
    Ok(values)
}

fn to_param_value(val: &serde_json::Value, param: &ConfigParam) -> Result<ParamValue, PluginError> {
    let mismatch = |expected: &str| {
        PluginError::config(format!("parameter '{}': expected {expected}", param.name))
    };
    match param.param_type {
        ParamType::Bool => val.as_bool().map(ParamValue::Bool).ok_or_else(|| mismatch("bool")),
        ParamType::I64 => val.as_i64().map(ParamValue::I64).ok_or_else(|| mismatch("integer")),
        ParamType::U64 => val
            .as_u64()
            .map(ParamValue::U64)
            .ok_or_else(|| mismatch("non-negative integer")),
        ParamType::Str => match val {
            serde_json::Value::String(s) => Ok(ParamValue::Str(s.clone())),
            serde_json::Value::Number(n) => Ok(ParamValue::Str(n.to_string())),
            serde_json::Value::Bool(b) => Ok(ParamValue::Str(b.to_string())),
            _ => Err(mismatch("string")),
        },
    }
}
