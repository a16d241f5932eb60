#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! busgen marshalling-code generator core.
//!
//! Given a [`signature::SignatureCursor`] positioned at a signature element,
//! [`generate`] recursively emits target-language serialization code, an
//! ordered list of input variables the caller must supply, and an ordered
//! list of local variables the emitted code declares. See `spec.md` and
//! `SPEC_FULL.md` at the workspace root for the full contract.

pub mod error;
pub mod generators;
pub mod text;

pub use error::{GeneratorError, Result};
pub use generators::{generate, DefaultFieldNamer, FieldNamer};
pub use signature::{SignatureCursor, TypeTag, VariableList, VariableRecord};
