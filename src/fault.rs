use crate::correlation::CorrelationId;
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::error::Error;

/// How bad a reported failure is.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
pub enum Severity {
    Info,
    Warning,
    #[default]
    Error,
    Fatal,
}

/// Status answered for a fault whose code names an access refusal.
pub const FORBIDDEN_STATUS: u16 = 403;
/// Status answered for every other fault.
pub const INTERNAL_ERROR_STATUS: u16 = 500;

const FORBIDDEN_MARKER: &str = "403";

/// A failure rendered for reporting: a code, its human message, and the id
/// of the call chain it belongs to.
///
/// The underlying cause, if any, is reachable through
/// [`std::error::Error::source`] but is never serialised, so the serde form
/// is safe to hand to a client as is.
#[derive(Debug, thiserror::Error, Serialize, Deserialize)]
#[error("[{code}] {message}")]
pub struct Fault {
    pub code: String,
    pub message: String,
    #[serde(default)]
    pub severity: Severity,
    pub correlation_id: CorrelationId,
    #[serde(skip)]
    pub source: Option<Box<dyn Error + Send + Sync + 'static>>,
}

impl Fault {
    /// A fault at [`Severity::Error`] with a fresh correlation id.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            severity: Severity::default(),
            correlation_id: CorrelationId::random(),
            source: None,
        }
    }

    #[must_use]
    pub const fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Ties this fault to an existing chain instead of its own fresh id.
    #[must_use]
    pub const fn with_correlation_id(mut self, id: CorrelationId) -> Self {
        self.correlation_id = id;
        self
    }

    /// Records the error this fault was raised from.
    #[must_use]
    pub fn caused_by(mut self, cause: impl Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(cause));
        self
    }

    /// HTTP status a transport should answer with: [`FORBIDDEN_STATUS`] when
    /// the code contains `403`, [`INTERNAL_ERROR_STATUS`] otherwise.
    pub fn status_hint(&self) -> u16 {
        if self.code.contains(FORBIDDEN_MARKER) {
            FORBIDDEN_STATUS
        } else {
            INTERNAL_ERROR_STATUS
        }
    }
}

/// Compares what a fault reports; the cause is not part of it.
impl PartialEq for Fault {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
            && self.message == other.message
            && self.severity == other.severity
            && self.correlation_id == other.correlation_id
    }
}

impl Eq for Fault {}
