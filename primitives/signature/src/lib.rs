#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! busgen signature primitives
//!
//! This crate defines the data model the code generator walks: a read-only
//! cursor into a signature tree, the closed set of type tags a signature
//! element can carry, and the `{type, name}` variable records the generator
//! accumulates as it recurses.

pub mod cursor;
pub mod tag;
pub mod tree;
pub mod variable;

pub use cursor::SignatureCursor;
pub use tag::TypeTag;
pub use tree::{Node, TreeCursor};
pub use variable::{VariableList, VariableRecord};
