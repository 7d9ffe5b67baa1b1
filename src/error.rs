use crate::fault::Fault;
use crate::messages::MessageCatalog;

/// Failures raised by the date core.
///
/// Every variant is synchronous and final: nothing here is transient, so
/// callers decide whether to abort or substitute a default.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// A required input is missing, or a pattern/format name is not recognised.
    #[error("Invalid argument '{param}': {reason}")]
    InvalidArgument { param: &'static str, reason: String },

    /// Text does not follow the grammar of the requested pattern.
    #[error("Cannot parse '{input}' with pattern '{pattern}': {reason}")]
    Parse {
        input: String,
        pattern: String,
        reason: String,
    },

    /// A component failed a numeric or calendar precondition.
    #[error("Invalid {field} '{value}': {reason}")]
    Validation {
        field: &'static str,
        value: String,
        reason: String,
    },
}

impl DateError {
    pub const INVALID_ARGUMENT_CODE: &'static str = "DATE_INVALID_ARGUMENT";
    pub const PARSE_CODE: &'static str = "DATE_PARSE";
    pub const VALIDATION_CODE: &'static str = "DATE_VALIDATION";

    pub(crate) fn invalid_argument(param: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            param,
            reason: reason.into(),
        }
    }

    pub(crate) fn parse(input: &str, pattern: &str, reason: impl Into<String>) -> Self {
        Self::Parse {
            input: input.to_owned(),
            pattern: pattern.to_owned(),
            reason: reason.into(),
        }
    }

    pub(crate) fn validation(
        field: &'static str,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        Self::Validation {
            field,
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Machine-readable code used to look up the message template.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => Self::INVALID_ARGUMENT_CODE,
            Self::Parse { .. } => Self::PARSE_CODE,
            Self::Validation { .. } => Self::VALIDATION_CODE,
        }
    }

    /// Named substitution values for the message template of [`Self::code`].
    pub fn args(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::InvalidArgument { param, reason } => {
                vec![("param", (*param).to_owned()), ("reason", reason.clone())]
            }
            Self::Parse {
                input,
                pattern,
                reason,
            } => vec![
                ("input", input.clone()),
                ("pattern", pattern.clone()),
                ("reason", reason.clone()),
            ],
            Self::Validation {
                field,
                value,
                reason,
            } => vec![
                ("field", (*field).to_owned()),
                ("value", value.clone()),
                ("reason", reason.clone()),
            ],
        }
    }

    /// Renders this error through `catalog` into a structured [`Fault`]
    /// caused by this error.
    pub fn to_fault(&self, catalog: &MessageCatalog) -> Fault {
        catalog.raise(self.code(), &self.args()).caused_by(self.clone())
    }
}

/// Unwraps a value that the caller may not have, naming the parameter on failure.
///
/// # Errors
/// Returns `DateError::InvalidArgument` carrying `param` when `value` is `None`.
pub fn require<T>(value: Option<T>, param: &'static str) -> Result<T, DateError> {
    value.ok_or_else(|| DateError::invalid_argument(param, "value is absent"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_distinct() {
        let errors = [
            DateError::invalid_argument("format", "unknown"),
            DateError::parse("x", "yyyy", "bad"),
            DateError::validation("year", "x", "bad"),
        ];
        let codes: Vec<_> = errors.iter().map(DateError::code).collect();
        assert_eq!(
            codes,
            ["DATE_INVALID_ARGUMENT", "DATE_PARSE", "DATE_VALIDATION"]
        );
    }

    #[test]
    fn test_invalid_argument_names_parameter() {
        let err = require::<u8>(None, "c1").unwrap_err();
        assert!(matches!(err, DateError::InvalidArgument { param: "c1", .. }));
        assert!(err.to_string().contains("'c1'"));
        assert_eq!(require(Some(3), "c1").unwrap(), 3);
    }

    #[test]
    fn test_args_carry_fields() {
        let err = DateError::parse("2024-13-01", "yyyy-MM-dd", "month out of range");
        let args = err.args();
        assert!(args.contains(&("input", "2024-13-01".to_owned())));
        assert!(args.contains(&("pattern", "yyyy-MM-dd".to_owned())));
    }
}
