//! Comprehensive error handling for Cutter CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Proper error chaining
//! - Exit code mapping

use std::error::Error;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

use cutter_core::domain::ValidationError;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Comprehensive CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid user input (validation failed).
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// A single template failed validation.
    ///
    /// Carries the core reason so the suggestion machinery can explain the
    /// exact failing check rather than a generic "template invalid".
    #[error("Template '{path}' is invalid: {reason}")]
    TemplateInvalid {
        path: PathBuf,
        #[source]
        reason: ValidationError,
    },

    /// Several templates failed validation in one run.
    #[error("{failed} of {total} templates failed validation")]
    ValidationFailed { failed: usize, total: usize },

    // ── Config errors ──────────────────────────────────────────────────────
    /// A configuration file could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── System errors ──────────────────────────────────────────────────────
    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { message } => vec![
                format!("Check your input: {}", message),
                "Use --help for usage information".into(),
            ],

            Self::TemplateInvalid { reason, .. } => reason.suggestions(),

            Self::ValidationFailed { failed, .. } => vec![
                format!("{} template(s) did not pass the pre-flight checks", failed),
                "Each failing file is listed above with its first failing check".into(),
                "Re-run against a single file for focused suggestions".into(),
            ],

            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {}", message),
                "Check your config file at ~/.config/cutter/config.toml".into(),
                "Use 'cutter init' to create a default config".into(),
            ],

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Check that the file exists and is readable".into(),
                "Check file permissions".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } => ErrorCategory::UserError,
            Self::TemplateInvalid { .. } => ErrorCategory::TemplateInvalid,
            Self::ValidationFailed { .. } => ErrorCategory::TemplateInvalid,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category         | Code |
    /// |------------------|------|
    /// | User error       |  2   |
    /// | Template invalid |  3   |
    /// | Configuration    |  4   |
    /// | Internal         |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::TemplateInvalid => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        // Error header
        output.push_str(&format!(
            "\n{} {}\n\n",
            "\u{2717}".red().bold(),
            "Error:".red().bold()
        ));

        // Main error message
        output.push_str(&format!("  {}\n", self.to_string().red()));

        // Error chain (if verbose)
        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "\u{2192}".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        // Suggestions
        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {}\n", suggestion));
            }
        }

        // Hint to re-run with -v
        if !verbose {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`] — no ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {}\n", self));

        if verbose {
            let mut src = std::error::Error::source(self);
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::TemplateInvalid => tracing::warn!("Template invalid: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, invalid arguments).
    UserError,
    /// A template failed the pre-flight checks.
    TemplateInvalid,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    // ── suggestions ───────────────────────────────────────────────────────

    #[test]
    fn template_invalid_suggestions_come_from_core_reason() {
        let err = CliError::TemplateInvalid {
            path: "t.py".into(),
            reason: ValidationError::MissingEntrypoint,
        };
        let suggestions = err.suggestions();
        assert!(suggestions.iter().any(|s| s.contains("__main__")));
    }

    #[test]
    fn io_error_suggestions_mention_permissions() {
        let err: CliError = io::Error::new(io::ErrorKind::NotFound, "no such file").into();
        assert!(err.suggestions().iter().any(|s| s.contains("permissions")));
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn exit_codes_follow_category_table() {
        let invalid = CliError::InvalidInput {
            message: "bad".into(),
        };
        assert_eq!(invalid.exit_code(), 2);

        let failed = CliError::ValidationFailed {
            failed: 1,
            total: 2,
        };
        assert_eq!(failed.exit_code(), 3);

        let config = CliError::ConfigError {
            message: "broken".into(),
            source: None,
        };
        assert_eq!(config.exit_code(), 4);

        let io: CliError = io::Error::other("boom").into();
        assert_eq!(io.exit_code(), 1);
    }

    // ── formatting ────────────────────────────────────────────────────────

    #[test]
    fn plain_format_includes_message_and_suggestions() {
        let err = CliError::TemplateInvalid {
            path: "t.py".into(),
            reason: ValidationError::MissingMethods,
        };
        let text = err.format_plain(false);
        assert!(text.contains("required methods are missing"));
        assert!(text.contains("Suggestions:"));
        assert!(text.contains("--verbose"));
    }

    #[test]
    fn plain_format_verbose_walks_source_chain() {
        let err = CliError::TemplateInvalid {
            path: "t.py".into(),
            reason: ValidationError::MissingDualEndpoints,
        };
        let text = err.format_plain(true);
        assert!(text.contains("Caused by: required associated endpoints are missing"));
    }
}
