//! Centralized template validation.
//!
//! Three independent checks and the fold that combines them. Each check is
//! a pure function of its inputs and returns a value, never panics; the
//! aggregator short-circuits on the first failure in a fixed order.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use super::error::{ValidationError, ValidationResult};
use super::extractor::extract_definitions;

lazy_static! {
    /// The `__main__` guard, anchored at line start with no leading
    /// whitespace permitted: indented guards are rejected. Whitespace
    /// around `==` is flexible; single and double quotes both match.
    static ref ENTRYPOINT: Regex =
        Regex::new(r#"(?m)^if\s+__name__\s*==\s*("__main__"|'__main__'):$"#).unwrap();
}

/// Name of the private counterpart expected alongside a public method.
fn assoc_endpoint_name(name: &str) -> String {
    format!("_{name}")
}

/// Centralized template validation.
///
/// All checks live here, not scattered across the extraction types.
pub struct TemplateValidator;

impl TemplateValidator {
    /// Validate a template end to end.
    ///
    /// Checks run in a fixed order — required methods, dual endpoints,
    /// entrypoint — and stop at the first failure, so the returned error is
    /// always the *first* failing check's reason, never a collection.
    pub fn validate(source: &str, methods: &[String]) -> ValidationResult {
        Self::check_needed_methods(source, methods)?;
        Self::check_dual_endpoints(source, methods)?;

        // An empty template has nothing to guard; the entrypoint
        // requirement only applies once the template has content.
        if !source.is_empty() {
            Self::check_entrypoint(source)?;
        }

        debug!(methods = methods.len(), "template is valid");
        Ok(())
    }

    /// Succeeds iff every name in `methods` is defined in the template.
    ///
    /// All-or-nothing: the failure does not say which names are absent.
    pub fn check_needed_methods(source: &str, methods: &[String]) -> ValidationResult {
        let defined = extract_definitions(source);
        if methods.iter().all(|method| defined.contains(method)) {
            Ok(())
        } else {
            debug!("required-methods check failed");
            Err(ValidationError::MissingMethods)
        }
    }

    /// Succeeds iff every name in `methods` has a `_name` counterpart
    /// defined in the template.
    pub fn check_dual_endpoints(source: &str, methods: &[String]) -> ValidationResult {
        let defined = extract_definitions(source);
        if methods
            .iter()
            .all(|method| defined.contains(&assoc_endpoint_name(method)))
        {
            Ok(())
        } else {
            debug!("dual-endpoints check failed");
            Err(ValidationError::MissingDualEndpoints)
        }
    }

    /// Succeeds iff a `__main__` guard exists anywhere in the template,
    /// anchored at the start of its line.
    pub fn check_entrypoint(source: &str) -> ValidationResult {
        if ENTRYPOINT.is_match(source) {
            Ok(())
        } else {
            debug!("entrypoint check failed");
            Err(ValidationError::MissingEntrypoint)
        }
    }
}
