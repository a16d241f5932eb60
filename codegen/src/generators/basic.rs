//! Basic generator: emits a single append call for scalars and strings.
//!
//! Grounded on `compiler/codegen/src/generators/doc_comment.rs`'s pattern of
//! a small, single-purpose generator module with one public entry point.

use signature::{SignatureCursor, VariableList};

use crate::error::{GeneratorError, Result};
use crate::generators::variable_record::push_root;
use crate::text::Writer;

/// Emit an `append_basic` call for the scalar or string at `cursor`.
///
/// Appends exactly one input record (`spec.md` §4.2): the resolved type,
/// read-only qualified, named `value_name`. Appends no locals.
pub fn generate<C: SignatureCursor>(
    cursor: &C,
    iter_name: &str,
    value_name: &str,
    oom_block: &str,
    inputs: &mut VariableList,
    _locals: &mut VariableList,
) -> Result<String> {
    let tag = cursor.current_tag();
    if !tag.is_basic() {
        return Err(GeneratorError::UnexpectedTag(tag));
    }

    let mut w = Writer::new();
    w.line(&format!("/* {} */", tag.display_name()));
    w.checked_call(
        &format!("append_basic({iter_name}, {}, &{value_name})", tag.type_constant_name()),
        oom_block,
    );

    push_root(inputs, format!("const {}", tag.target_type()), value_name);

    Ok(w.into_string())
}
