//! Dispatcher: inspects the current signature element and routes to one of
//! the three specialist generators (`spec.md` §4.1).

use signature::{SignatureCursor, TypeTag};

use crate::error::{GeneratorError, Result};
use crate::generators::struct_gen::FieldNamer;
use crate::generators::{array, basic, struct_gen};

/// Generate marshalling code for whatever is under `cursor`, routing to
/// the basic, array, or struct/dict-entry generator.
///
/// Any other tag is a contract violation by the caller — the signature was
/// assumed pre-validated (`spec.md` §1 Non-goals) — and is reported as
/// [`GeneratorError::UnexpectedTag`] rather than panicking, so a caller
/// driving many independent generations doesn't lose the others.
#[allow(clippy::too_many_arguments)]
pub fn generate<C: SignatureCursor>(
    cursor: &C,
    iter_name: &str,
    value_name: &str,
    oom_block: &str,
    inputs: &mut signature::VariableList,
    locals: &mut signature::VariableList,
    namer: &dyn FieldNamer,
) -> Result<String> {
    let tag = cursor.current_tag();
    logging::trace("dispatcher", &format!("tag={tag:?} value_name={value_name}"));

    if tag.is_basic() {
        basic::generate(cursor, iter_name, value_name, oom_block, inputs, locals)
    } else if tag == TypeTag::Array {
        array::generate(cursor, iter_name, value_name, oom_block, inputs, locals, namer)
    } else if matches!(tag, TypeTag::Struct | TypeTag::DictEntry) {
        struct_gen::generate(cursor, iter_name, value_name, oom_block, inputs, locals, namer)
    } else {
        Err(GeneratorError::UnexpectedTag(tag))
    }
}
