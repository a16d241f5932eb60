//! Drives the public `codegen` API against the six signatures scenario
//! table (string, int32, array-of-int, array-of-string, struct-of-int-
//! string, array-of-array-of-int), the way a reference client would,
//! asserting on the emitted text and variable lists this crate alone is
//! responsible for. The mock bus runtime and reference bus client
//! themselves are out of scope here, same as for the generator core.

use codegen::{generate, DefaultFieldNamer, VariableList, VariableRecord};
use signature::{Node, TreeCursor, TypeTag};

const ITER: &str = "iter";
const VALUE: &str = "value";
const OOM: &str = "return -1;\n";

fn run(tree: Node) -> (String, VariableList, VariableList) {
    let cursor = TreeCursor::new(tree);
    let mut inputs = VariableList::new();
    let mut locals = VariableList::new();
    let namer = DefaultFieldNamer;
    let code = generate(&cursor, ITER, VALUE, OOM, &mut inputs, &mut locals, &namer).unwrap();
    (code, inputs, locals)
}

#[test]
fn string_scalar_emits_a_single_append_basic_call() {
    let (code, inputs, _) = run(Node::Scalar(TypeTag::String));
    assert!(code.contains("append_basic(iter, DBUS_TYPE_STRING, &value)"));
    assert_eq!(inputs.as_slice(), [VariableRecord::root("const char *", "value")]);
}

#[test]
fn int32_scalar_emits_a_single_append_basic_call() {
    let (code, inputs, _) = run(Node::Scalar(TypeTag::Int32));
    assert!(code.contains("append_basic(iter, DBUS_TYPE_INT32, &value)"));
    assert_eq!(inputs.as_slice(), [VariableRecord::root("const int32_t", "value")]);
}

#[test]
fn array_of_fixed_width_int_takes_a_data_pointer_and_a_length() {
    let (code, inputs, _) = run(Node::array(Node::Scalar(TypeTag::Int32)));
    assert!(code.contains("open_container(iter, DBUS_TYPE_ARRAY, \"i\", &value_iter)"));
    assert!(code.contains("for (value_i = 0; value_i < value_len; value_i++)"));
    assert!(code.contains("close_container(iter, &value_iter)"));
    assert_eq!(
        inputs.as_slice(),
        [
            VariableRecord::root("const int32_t * const", "value"),
            VariableRecord::suffixed("size_t", "value", "_len"),
        ]
    );
}

#[test]
fn array_of_string_is_sentinel_terminated_with_no_explicit_length() {
    let (code, inputs, _) = run(Node::array(Node::Scalar(TypeTag::String)));
    assert!(code.contains("value[value_i] != NULL"));
    assert_eq!(inputs.as_slice(), [VariableRecord::root("const char * const *", "value")]);
}

#[test]
fn struct_of_int_and_string_assigns_each_member_from_a_named_field() {
    let (code, inputs, _) = run(Node::strct(vec![Node::Scalar(TypeTag::Int32), Node::Scalar(TypeTag::String)]));
    assert!(code.contains("open_container(iter, DBUS_TYPE_STRUCT, NULL, &value_iter)"));
    assert!(code.contains("value_item0 = value->item0;"));
    assert!(code.contains("value_item1 = value->item1;"));
    assert!(code.contains("close_container(iter, &value_iter)"));
    assert_eq!(inputs.as_slice(), [VariableRecord::root("const Struct *", "value")]);
}

#[test]
fn array_of_array_of_int_nests_containers_and_bumps_the_length_pointer() {
    let (code, inputs, _) = run(Node::array(Node::array(Node::Scalar(TypeTag::Int32))));
    assert_eq!(code.matches("open_container").count(), 2);
    assert_eq!(code.matches("close_container").count(), 2);
    assert_eq!(
        inputs.as_slice(),
        [
            VariableRecord::root("const int32_t * const * const", "value"),
            VariableRecord::suffixed("const size_t *", "value", "_len"),
        ]
    );
}
