//! Validation findings collected while turning a YAML document into a run plan.
//!
//! The validator never aborts on bad input. It records what it had to skip as
//! [`Diagnostic`] values so callers can count, assert on, or emit them.

use tracing::{error, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Something was dropped or ignored, but the job itself survives.
    Warning,
    /// A job (or the whole document) was rejected.
    Error,
}

/// One finding about the configuration document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

impl Diagnostic {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    /// Forward this finding to the tracing subscriber at its severity.
    pub fn emit(&self) {
        match self.severity {
            Severity::Warning => warn!("{}", self.message),
            Severity::Error => error!("{}", self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_severity() {
        let w = Diagnostic::warning("dropped an exclusion");
        assert_eq!(w.severity, Severity::Warning);
        assert_eq!(w.message, "dropped an exclusion");

        let e = Diagnostic::error("job skipped");
        assert_eq!(e.severity, Severity::Error);
    }
}
