//! The signature cursor: a read-only positional pointer into a signature
//! tree. Parsing signature text into a cursor is an external collaborator
//! (see `spec.md` §1) — this trait is the interface such a parser would
//! implement; `crate::tree::TreeCursor` is a small in-memory implementation
//! used to drive the generator in this crate's own tests.

use crate::tag::TypeTag;

/// A read-only positional pointer into a typed signature tree.
///
/// Implementations are cheap to clone: a cursor only ever moves forward
/// (`next`) or down (`recurse`), never mutates shared state.
pub trait SignatureCursor: Clone {
    /// The type tag of the element currently under the cursor.
    fn current_tag(&self) -> TypeTag;

    /// Recurse into the current container element, yielding a cursor
    /// positioned at its first member.
    ///
    /// Panics (or returns an implementation-defined cursor with no members)
    /// if the current element is not a container; callers only invoke this
    /// after checking `current_tag` is `Array`, `Struct`, or `DictEntry`.
    fn recurse(&self) -> Self;

    /// Advance to the next sibling in place, returning whether one exists.
    fn next(&mut self) -> bool;

    /// The textual sub-signature rooted at the current cursor.
    fn subtree_text(&self) -> String;
}
