use std::fmt;

use crate::error::PluginError;

/// Declared column type.
///
/// Integer widths and the text variants are kept distinct because the
/// host distinguishes them; consumers mostly care about the type class
/// (see the `is_*` helpers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Bool,
    Byte,
    Int16,
    Int32,
    Int64,
    /// Fixed precision decimal: `size` = precision, `scale` = digits after the point.
    FixedDecimal,
    Float,
    Double,
    /// Fixed-length narrow text.
    String,
    /// Fixed-length wide text.
    WString,
    /// Variable-length narrow text.
    VString,
    /// Variable-length wide text.
    VWString,
    Date,
    /// Time of day.
    Time,
    DateTime,
    Blob,
    SpatialObj,
}

impl FieldType {
    pub fn is_integer(self) -> bool {
        matches!(self, Self::Byte | Self::Int16 | Self::Int32 | Self::Int64)
    }

    pub fn is_floating(self) -> bool {
        matches!(self, Self::Float | Self::Double | Self::FixedDecimal)
    }

    pub fn is_text(self) -> bool {
        matches!(self, Self::String | Self::WString | Self::VString | Self::VWString)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bool => "Bool",
            Self::Byte => "Byte",
            Self::Int16 => "Int16",
            Self::Int32 => "Int32",
            Self::Int64 => "Int64",
            Self::FixedDecimal => "FixedDecimal",
            Self::Float => "Float",
            Self::Double => "Double",
            Self::String => "String",
            Self::WString => "WString",
            Self::VString => "V_String",
            Self::VWString => "V_WString",
            Self::Date => "Date",
            Self::Time => "Time",
            Self::DateTime => "DateTime",
            Self::Blob => "Blob",
            Self::SpatialObj => "SpatialObj",
        };
        f.write_str(name)
    }
}

/// A single column of a [`Schema`].
///
/// Immutable once the schema for a stream is fixed.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Max length in characters for text types, precision for `FixedDecimal`.
    /// Ignored for other types.
    #[serde(default)]
    pub size: usize,
    /// Digits after the decimal point for `FixedDecimal`.
    #[serde(default)]
    pub scale: u8,
    /// Which component created the field.
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub description: String,
}

impl Field {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            size: 0,
            scale: 0,
            source: String::new(),
            description: String::new(),
        }
    }

    /// Text field with a maximum length in characters.
    pub fn text(name: impl Into<String>, field_type: FieldType, size: usize) -> Self {
        Self { size, ..Self::new(name, field_type) }
    }

    pub fn decimal(name: impl Into<String>, precision: usize, scale: u8) -> Self {
        Self { size: precision, scale, ..Self::new(name, FieldType::FixedDecimal) }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Field names compare case-insensitively.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

/// Ordered set of fields describing a row.
///
/// A field's position in `fields` is its index in [`crate::value::Row`].
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Schema {
    pub fields: Vec<Field>,
}

impl Schema {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.is_named(name))
    }

    /// New schema = `self ++ [field]`.
    ///
    /// Fails if a field with the same name already exists.
    pub fn with_appended(&self, field: Field) -> Result<Schema, PluginError> {
        if self.index_of(&field.name).is_some() {
            return Err(PluginError::schema(format!(
                "field '{}' already exists in the input schema",
                field.name
            )));
        }
        let mut fields = Vec::with_capacity(self.fields.len() + 1);
        fields.extend(self.fields.iter().cloned());
        fields.push(field);
        Ok(Schema { fields })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn orders() -> Schema {
        Schema::new(vec![
            Field::new("id", FieldType::Int64),
            Field::text("customer", FieldType::VWString, 100),
            Field::new("placed", FieldType::Date),
        ])
    }

    #[test]
    fn lookup_ignores_case() {
        let schema = orders();
        assert_eq!(schema.index_of("Customer"), Some(1));
        assert_eq!(schema.index_of("PLACED"), Some(2));
        assert!(schema.index_of("missing").is_none());
    }

    #[test]
    fn append_adds_one_field_at_the_end() {
        let schema = orders();
        let out = schema
            .with_appended(Field::text("label", FieldType::VWString, 32))
            .unwrap();
        assert_eq!(out.len(), schema.len() + 1);
        assert_eq!(out.fields[..3], schema.fields[..]);
        assert_eq!(out.fields[3].name, "label");
    }

    #[test]
    fn append_rejects_name_collision() {
        let err = orders()
            .with_appended(Field::text("ID", FieldType::VWString, 32))
            .unwrap_err();
        assert_eq!(err.kind, crate::error::ErrorKind::Schema);
    }

    #[test]
    fn type_classes() {
        assert!(FieldType::Int16.is_integer());
        assert!(FieldType::FixedDecimal.is_floating());
        assert!(FieldType::VString.is_text());
        assert!(!FieldType::Blob.is_text());
        assert!(!FieldType::Time.is_integer());
    }

    #[test]
    fn field_deserializes_from_config_shape() {
        let field: Field =
            serde_json::from_str(r#"{"name":"amount","type":"fixeddecimal","size":19,"scale":2}"#)
                .unwrap();
        assert_eq!(field, Field::decimal("amount", 19, 2));
    }
}
