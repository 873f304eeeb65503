//! Validation error values.
//!
//! Checks never panic and never throw — a failed check is an ordinary value
//! so outcomes compose. There are exactly three kinds of failure, one per
//! check, each carrying a fixed human-readable message.

use thiserror::Error;

/// Result type for every template check.
pub type ValidationResult = Result<(), ValidationError>;

/// Why a template failed validation.
///
/// Failures are all-or-nothing and unattributed: a variant says *which
/// check* failed, not which names were missing. Callers wanting full
/// diagnostics re-run the individual checks on
/// [`TemplateValidator`](super::TemplateValidator).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more required methods have no definition in the template.
    #[error("required methods are missing")]
    MissingMethods,

    /// A required method lacks its private `_name` counterpart.
    #[error("required associated endpoints are missing")]
    MissingDualEndpoints,

    /// No `if __name__ == "__main__":` guard anywhere in the template.
    #[error("the entrypoint is missing")]
    MissingEntrypoint,
}

impl ValidationError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingMethods => vec![
                "Define every method passed via --method (or check.methods in the config)".into(),
                "Method names are case-sensitive and must match exactly".into(),
            ],
            Self::MissingDualEndpoints => vec![
                "Each required method needs a private counterpart".into(),
                "Example: 'deploy' requires a definition named '_deploy'".into(),
            ],
            Self::MissingEntrypoint => vec![
                "Add an entrypoint guard at column zero:".into(),
                "  if __name__ == \"__main__\":".into(),
                "Indented guards are not recognised".into(),
            ],
        }
    }

    /// Machine-readable identifier for JSON reports.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingMethods => "missing-methods",
            Self::MissingDualEndpoints => "missing-dual-endpoints",
            Self::MissingEntrypoint => "missing-entrypoint",
        }
    }
}
