//! Implementation of the `cutter check` command.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info};

use cutter_core::domain::{TemplateValidator, ValidationError};

use crate::{
    cli::{CheckArgs, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// One template's outcome, for machine-readable output.
#[derive(Debug, Serialize)]
struct FileReport {
    path: PathBuf,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorReport>,
}

#[derive(Debug, Serialize)]
struct ErrorReport {
    code: &'static str,
    message: String,
}

pub fn execute(
    args: CheckArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // --method flags take precedence; the config list is the fallback.
    let methods = if args.methods.is_empty() {
        config.check.methods.clone()
    } else {
        args.methods.clone()
    };
    debug!(files = args.files.len(), methods = ?methods, "running checks");

    let mut reports = Vec::with_capacity(args.files.len());
    let mut failures: Vec<(PathBuf, ValidationError)> = Vec::new();

    for path in &args.files {
        let source = std::fs::read_to_string(path).map_err(|e| CliError::IoError {
            message: format!("Failed to read template '{}'", path.display()),
            source: e,
        })?;

        match TemplateValidator::validate(&source, &methods) {
            Ok(()) => {
                info!(path = %path.display(), "template is valid");
                reports.push(FileReport {
                    path: path.clone(),
                    valid: true,
                    error: None,
                });
            }
            Err(reason) => {
                info!(path = %path.display(), %reason, "template is invalid");
                reports.push(FileReport {
                    path: path.clone(),
                    valid: false,
                    error: Some(ErrorReport {
                        code: reason.code(),
                        message: reason.to_string(),
                    }),
                });
                failures.push((path.clone(), reason));
            }
        }
    }

    render(&reports, &output)?;

    // One failing file keeps its precise reason; several collapse into a
    // count (each file's reason was already rendered above).
    match failures.len() {
        0 => Ok(()),
        1 => {
            let (path, reason) = failures.remove(0);
            Err(CliError::TemplateInvalid { path, reason })
        }
        failed => Err(CliError::ValidationFailed {
            failed,
            total: args.files.len(),
        }),
    }
}

fn render(reports: &[FileReport], output: &OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        // Serialise to stdout directly (bypasses OutputManager because JSON
        // output must be parseable even in non-TTY pipes and quiet mode).
        let json = serde_json::to_string_pretty(reports).map_err(|e| CliError::InvalidInput {
            message: format!("failed to serialise report: {e}"),
        })?;
        println!("{json}");
        return Ok(());
    }

    if reports.len() > 1 {
        output.header("Checked templates:")?;
    }
    for report in reports {
        match &report.error {
            None => output.success(&format!("{}", report.path.display()))?,
            Some(err) => output.error(&format!("{}: {}", report.path.display(), err.message))?,
        }
    }
    Ok(())
}
