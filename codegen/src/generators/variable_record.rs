//! Variable-record helper.
//!
//! Constructs the `{type, name}` records generators append to the inputs
//! and locals lists. Kept as its own module — small as it is — because
//! every other generator calls through it rather than constructing
//! [`VariableRecord`] values directly, which is where the "first input is
//! always exactly `name`" and "suffix preservation" invariants
//! (`spec.md` §3) are enforced in one place.

use signature::{VariableList, VariableRecord};

/// Append the record that names a call's base value directly (no suffix).
/// The first call in any generator chain contributes exactly one of these.
pub fn push_root(list: &mut VariableList, ty: impl Into<String>, base_name: impl Into<String>) {
    list.push(VariableRecord::root(ty, base_name));
}

/// Append a record named `base_name` + `suffix`.
pub fn push_suffixed(list: &mut VariableList, ty: impl Into<String>, base_name: &str, suffix: impl Into<String>) {
    list.push(VariableRecord::suffixed(ty, base_name, suffix));
}

/// Re-home an inner-call record under an outer base name and a new type,
/// preserving its suffix, and append it to `list`. This is how the array
/// and struct generators promote or rewrite a recursive call's records.
pub fn push_rebased(list: &mut VariableList, record: &VariableRecord, ty: impl Into<String>, new_base_name: &str) {
    list.push(record.rebased(ty, new_base_name));
}
