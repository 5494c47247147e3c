/// A pattern the grammar cannot interpret.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("'{0}' is not a recognised standard format")]
    UnknownSpecifier(String),

    #[error("format '{0}' is only valid for integral values")]
    IntegralOnly(String),

    #[error("precision in '{0}' is out of range (0-999)")]
    Precision(String),

    #[error("unterminated quoted literal in '{0}'")]
    UnterminatedQuote(String),

    #[error("escape at end of '{0}'")]
    DanglingEscape(String),

    #[error("invalid format '{pattern}': {reason}")]
    Invalid { pattern: String, reason: String },
}

impl FormatError {
    pub(crate) fn invalid(pattern: &str, reason: impl Into<String>) -> Self {
        Self::Invalid { pattern: pattern.to_string(), reason: reason.into() }
    }
}
