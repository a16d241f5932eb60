//! Array generator: container open, a length-driven or sentinel-driven
//! loop, recursive element marshalling with pointer-indirected inputs,
//! container close. The most intricate of the three generators
//! (`spec.md` §4.3) — see module-level tests for the full golden-table
//! coverage (`spec.md` §8).

use signature::{SignatureCursor, VariableList, VariableRecord};

use crate::error::{GeneratorError, Result};
use crate::generators::dispatcher;
use crate::generators::struct_gen::FieldNamer;
use crate::generators::variable_record::push_root;
use crate::text::Writer;

/// Which of the two outer-input-rewrite shapes `spec.md` §4.3 step 5
/// applies. Both converge once a pointer already exists (the "already a
/// pointer" case inserts `const` before the existing trailing `*` and
/// appends a bare new one); they differ only in how the *first* pointer
/// level is introduced — confirmed against the golden table in `spec.md`
/// §8 rows 3, 4, and 6. See `DESIGN.md` for the depth-3 length-type
/// extrapolation (an open question per `spec.md` §9).
#[derive(Clone, Copy)]
enum PointerKind {
    /// The element-value pointer itself.
    Data,
    /// A propagated `_len` co-argument.
    Length,
}

fn bump_pointer(inner: &str, kind: PointerKind) -> String {
    if inner.ends_with('*') {
        format!("{inner} const *")
    } else {
        match kind {
            PointerKind::Data => format!("{inner} * const"),
            PointerKind::Length => format!("const {inner} *"),
        }
    }
}

fn pointer_kind_of(record: &VariableRecord) -> PointerKind {
    if record.suffix.ends_with("_len") {
        PointerKind::Length
    } else {
        PointerKind::Data
    }
}

/// Emit the container-open/loop/container-close code for the array at
/// `cursor`.
#[allow(clippy::too_many_arguments)]
pub fn generate<C: SignatureCursor>(
    cursor: &C,
    iter_name: &str,
    value_name: &str,
    oom_block: &str,
    inputs: &mut VariableList,
    locals: &mut VariableList,
    namer: &dyn FieldNamer,
) -> Result<String> {
    let tag = cursor.current_tag();
    if tag != signature::TypeTag::Array {
        return Err(GeneratorError::UnexpectedTag(tag));
    }

    let element_cursor = cursor.recurse();
    let element_tag = element_cursor.current_tag();
    let array_iter = format!("{value_name}_iter");
    let element_value_name = format!("{value_name}_element");

    let mut w = Writer::new();
    w.line(&format!("/* array of {} */", element_cursor.subtree_text()));
    w.checked_call(
        &format!(
            "open_container({iter_name}, DBUS_TYPE_ARRAY, \"{}\", &{array_iter})",
            element_cursor.subtree_text()
        ),
        oom_block,
    );
    push_root(locals, "DBusMessageIter", array_iter.clone());

    let mut elem_inputs = VariableList::new();
    let mut elem_locals = VariableList::new();
    let element_block = dispatcher::generate(
        &element_cursor,
        &array_iter,
        &element_value_name,
        oom_block,
        &mut elem_inputs,
        &mut elem_locals,
        namer,
    )?;

    let is_fixed = element_tag.is_fixed();
    let loop_var = format!("{value_name}_i");
    push_root(locals, "size_t", loop_var.clone());

    if is_fixed {
        w.line(&format!("for ({loop_var} = 0; {loop_var} < {value_name}_len; {loop_var}++) {{"));
    } else {
        w.line(&format!("for ({loop_var} = 0; {value_name}[{loop_var}] != NULL; {loop_var}++) {{"));
    }

    w.indented(|w| {
        // Reclassify every inner-input as a loop-body local, declared and
        // reassigned once per iteration, and rewrite it into this array
        // generator's own outer input (spec.md §4.3 step 5).
        let mut assignments = Vec::new();
        for record in elem_inputs.as_slice() {
            let outer_name = format!("{value_name}{}", record.suffix);
            let outer_ty = bump_pointer(&record.ty, pointer_kind_of(record));
            inputs.push(record.rebased(outer_ty, value_name));
            assignments.push((record.clone(), outer_name));
        }

        for (record, _) in &assignments {
            w.line(&format!("{} {};", record.ty, record.name));
        }
        for record in elem_locals.as_slice() {
            w.line(&format!("{} {};", record.ty, record.name));
        }
        for (record, outer_name) in &assignments {
            w.line(&format!("{} = {}[{loop_var}];", record.name, outer_name));
        }

        w.splice(&element_block);
    });
    w.line("}");

    w.checked_call(&format!("close_container({iter_name}, &{array_iter})"), oom_block);

    if is_fixed {
        inputs.push(VariableRecord::suffixed("size_t", value_name, "_len"));
    }

    Ok(w.into_string())
}

#[cfg(test)]
mod tests {
    use signature::{Node, TreeCursor, TypeTag};

    use super::*;
    use crate::generators::struct_gen::DefaultFieldNamer;

    fn gen(tree: signature::Node) -> (String, VariableList, VariableList) {
        let cursor = TreeCursor::new(tree);
        let mut inputs = VariableList::new();
        let mut locals = VariableList::new();
        let namer = DefaultFieldNamer;
        let code = generate(&cursor, "iter", "value", "return -1;\n", &mut inputs, &mut locals, &namer)
            .expect("well-formed array generates");
        (code, inputs, locals)
    }

    #[test]
    fn array_of_int_matches_golden_table_row_3() {
        let (code, inputs, _locals) = gen(Node::array(Node::Scalar(TypeTag::Int32)));

        assert_eq!(code.matches("open_container(iter, DBUS_TYPE_ARRAY, \"i\", &value_iter)").count(), 1);
        assert_eq!(code.matches("for (value_i = 0; value_i < value_len; value_i++) {").count(), 1);
        assert_eq!(code.matches("append_basic(value_iter, DBUS_TYPE_INT32, &value_element)").count(), 1);
        assert_eq!(code.matches("close_container(iter, &value_iter)").count(), 1);

        assert_eq!(inputs.as_slice().len(), 2);
        assert_eq!(inputs.as_slice()[0].name, "value");
        assert_eq!(inputs.as_slice()[0].ty, "const int32_t * const");
        assert_eq!(inputs.as_slice()[1].name, "value_len");
        assert_eq!(inputs.as_slice()[1].ty, "size_t");
    }

    #[test]
    fn array_of_string_matches_golden_table_row_4() {
        let (code, inputs, _locals) = gen(Node::array(Node::Scalar(TypeTag::String)));

        assert!(code.contains("for (value_i = 0; value[value_i] != NULL; value_i++) {"));
        assert_eq!(inputs.as_slice().len(), 1);
        assert_eq!(inputs.as_slice()[0].name, "value");
        assert_eq!(inputs.as_slice()[0].ty, "const char * const *");
    }

    #[test]
    fn array_of_array_of_int_matches_golden_table_row_6() {
        let (code, inputs, _locals) = gen(Node::array(Node::array(Node::Scalar(TypeTag::Int32))));

        assert_eq!(code.matches("open_container").count(), 2);
        assert_eq!(code.matches("close_container").count(), 2);

        assert_eq!(inputs.as_slice().len(), 2);
        assert_eq!(inputs.as_slice()[0].name, "value");
        assert_eq!(inputs.as_slice()[0].ty, "const int32_t * const * const");
        assert_eq!(inputs.as_slice()[1].name, "value_len");
        assert_eq!(inputs.as_slice()[1].ty, "const size_t *");
    }

    #[test]
    fn array_of_array_of_array_of_int_depth_three() {
        let (_code, inputs, _locals) =
            gen(Node::array(Node::array(Node::array(Node::Scalar(TypeTag::Int32)))));

        assert_eq!(inputs.as_slice()[0].ty, "const int32_t * const * const * const");
        assert_eq!(inputs.as_slice()[1].ty, "const size_t * const *");
    }

    #[test]
    fn container_balance_holds_for_nested_arrays() {
        let (code, ..) = gen(Node::array(Node::array(Node::Scalar(TypeTag::String))));
        let mut depth = 0i32;
        for token_is_open in code.split_whitespace().filter_map(|tok| {
            if tok.starts_with("open_container") {
                Some(true)
            } else if tok.starts_with("close_container") {
                Some(false)
            } else {
                None
            }
        }) {
            depth += if token_is_open { 1 } else { -1 };
            assert!(depth >= 0);
        }
        assert_eq!(depth, 0);
    }

    #[test]
    fn oom_block_appears_once_per_fallible_call() {
        let (code, ..) = gen(Node::array(Node::Scalar(TypeTag::Int32)));
        // one open_container + one close_container + one append_basic
        assert_eq!(code.matches("return -1;").count(), 3);
    }
}
