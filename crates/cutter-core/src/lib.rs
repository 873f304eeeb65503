//! Cutter Core - static template inspection.
//!
//! This crate holds the pure domain logic of the Cutter pre-flight checker:
//! given the source text of a code template, verify that the pieces a
//! deployable artifact needs are actually present *before* the template is
//! used to scaffold anything.
//!
//! Three independent checks are run and folded into one outcome:
//!
//! 1. every required method is defined,
//! 2. every required method has its private counterpart (`_name`),
//! 3. the `__main__` entrypoint guard exists.
//!
//! The crate performs **no I/O** — callers hand it the template text as a
//! plain string and get a value-typed result back. Reading files, loading
//! configuration, and rendering results all live in `cutter-cli`.
//!
//! ## Usage
//!
//! ```rust
//! use cutter_core::domain::TemplateValidator;
//!
//! let source = "def deploy():\n    pass\n\ndef _deploy():\n    pass\n\nif __name__ == \"__main__\":\n    pass\n";
//! let methods = vec!["deploy".to_string()];
//!
//! assert!(TemplateValidator::validate(source, &methods).is_ok());
//! ```

// Domain layer - the entirety of the checker
pub mod domain;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::domain::{
        DefinitionIndex, MethodSignature, TemplateValidator, ValidationError, ValidationResult,
        extract_definitions,
    };
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
