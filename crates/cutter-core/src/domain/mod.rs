//! Core domain layer for Cutter.
//!
//! Pure business logic with no I/O: pattern extraction of function
//! signatures, three independent template checks, and the aggregation that
//! folds them into a single outcome.
//!
//! - **No async**: every operation runs to completion synchronously
//! - **No I/O**: the caller supplies the template text as a string
//! - **Immutable inputs**: source text is never mutated; the only run-time
//!   state is the extraction cache in [`extractor`]

pub mod error;
pub mod extractor;
pub mod signature;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use error::{ValidationError, ValidationResult};
pub use extractor::extract_definitions;
pub use signature::{DefinitionIndex, MethodSignature};
pub use validation::TemplateValidator;
