//! Errors raised by the code generator.

use signature::TypeTag;
use thiserror::Error;

/// Errors raised while generating marshalling code.
///
/// `spec.md` §7 names a single recoverable error kind in the source
/// (allocation failure) plus one fatal/contract-violation condition. Rust's
/// `String`/`Vec` allocation failure aborts the process rather than
/// surfacing as a value, so the only case this enum carries is the
/// contract violation: a cursor positioned on a type tag that is neither
/// basic, array, struct, nor dict-entry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    /// The dispatcher was handed a cursor whose current tag it has no
    /// specialist generator for. Callers guarantee a well-formed signature
    /// (`spec.md` §1 Non-goals); encountering this means that guarantee was
    /// violated.
    #[error("type tag {0:?} has no generator (expected a basic, array, struct, or dict-entry tag)")]
    UnexpectedTag(TypeTag),
}

/// Result alias for generator operations.
pub type Result<T> = std::result::Result<T, GeneratorError>;
