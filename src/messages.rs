//! Code to human-message lookup.
//!
//! Templates name their substitutions in braces, e.g. `Invalid {field}`.
//! A catalog deserialises from a plain string map, so it can be supplied in
//! any serde format.

use crate::DateError;
use crate::correlation::CorrelationId;
use crate::fault::Fault;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Text returned for a code the catalog has no template for.
pub const MISSING_MESSAGE: &str = "no message registered for this code";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageCatalog {
    templates: HashMap<String, String>,
}

impl MessageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Templates for every [`DateError`] code.
    pub fn builtin() -> Self {
        [
            (
                DateError::INVALID_ARGUMENT_CODE,
                "Invalid argument '{param}': {reason}",
            ),
            (
                DateError::PARSE_CODE,
                "Cannot parse '{input}' with pattern '{pattern}': {reason}",
            ),
            (
                DateError::VALIDATION_CODE,
                "Invalid {field} '{value}': {reason}",
            ),
        ]
        .into_iter()
        .collect()
    }

    /// Adds or replaces the template for `code`.
    pub fn insert(&mut self, code: impl Into<String>, template: impl Into<String>) {
        self.templates.insert(code.into(), template.into());
    }

    pub fn template(&self, code: &str) -> Option<&str> {
        self.templates.get(code).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Fills the template for `code` from `args`.
    ///
    /// Placeholders without a matching argument are left as written. An
    /// unknown code yields [`MISSING_MESSAGE`].
    pub fn render<S: AsRef<str>>(&self, code: &str, args: &[(&str, S)]) -> String {
        self.template(code)
            .map_or_else(|| MISSING_MESSAGE.to_owned(), |t| substitute(t, args))
    }

    /// Renders `code`, logs it at error level and returns it as a [`Fault`].
    pub fn raise<S: AsRef<str>>(&self, code: &str, args: &[(&str, S)]) -> Fault {
        self.raise_in(code, args, CorrelationId::random())
    }

    /// Like [`Self::raise`] but within an existing call chain.
    pub fn raise_in<S: AsRef<str>>(
        &self,
        code: &str,
        args: &[(&str, S)],
        correlation_id: CorrelationId,
    ) -> Fault {
        let message = self.render(code, args);
        tracing::error!(code, correlation_id = %correlation_id, "[{code}] {message}");
        Fault::new(code, message).with_correlation_id(correlation_id)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MessageCatalog {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            templates: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

fn substitute<S: AsRef<str>>(template: &str, args: &[(&str, S)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            rest = &rest[open..];
            break;
        };
        let name = &after[..close];
        match args.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => out.push_str(value.as_ref()),
            None => out.push_str(&rest[open..open + close + 2]),
        }
        rest = &after[close + 1..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DateFormat, DateStamp};

    #[test]
    fn test_render_fills_placeholders() {
        let catalog: MessageCatalog = [("GREET", "Hello {name}, you are {age}")]
            .into_iter()
            .collect();
        assert_eq!(
            catalog.render("GREET", &[("name", "Ada"), ("age", "36")]),
            "Hello Ada, you are 36"
        );
    }

    #[test]
    fn test_render_keeps_unknown_placeholders() {
        let catalog: MessageCatalog = [("C", "{a} and {b} {unterminated")].into_iter().collect();
        assert_eq!(catalog.render("C", &[("a", "x")]), "x and {b} {unterminated");
    }

    #[test]
    fn test_unknown_code_uses_fallback() {
        let catalog = MessageCatalog::new();
        assert!(catalog.is_empty());
        assert_eq!(
            catalog.render::<&str>("NOPE", &[]),
            "no message registered for this code"
        );
    }

    #[test]
    fn test_catalog_from_json() {
        let catalog: MessageCatalog =
            serde_json::from_str(r#"{"DATE_PARSE": "bad date {input}"}"#).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.render("DATE_PARSE", &[("input", "x")]), "bad date x");
    }

    #[test]
    fn test_builtin_matches_error_display() {
        let catalog = MessageCatalog::builtin();
        let err = DateStamp::parse("2024-13-01", DateFormat::IsoDate).unwrap_err();
        let fault = err.to_fault(&catalog);
        assert_eq!(fault.code, "DATE_PARSE");
        assert_eq!(fault.message, err.to_string());
        assert_eq!(fault.to_string(), format!("[DATE_PARSE] {err}"));
        let cause = std::error::Error::source(&fault).unwrap();
        assert_eq!(cause.downcast_ref::<DateError>(), Some(&err));
        assert_eq!(fault.status_hint(), 500);
    }

    #[test]
    fn test_raise_in_keeps_chain_id() {
        let id = CorrelationId::random();
        let catalog = MessageCatalog::builtin();
        let fault = catalog.raise_in(
            DateError::VALIDATION_CODE,
            &[("field", "month"), ("value", "13"), ("reason", "out of range")],
            id,
        );
        assert_eq!(fault.correlation_id, id);
        assert_eq!(fault.message, "Invalid month '13': out of range");
    }
}
