//! Struct / dict-entry generator: container open, sequential recursive
//! member marshalling with field projection, container close
//! (`spec.md` §4.4).

use signature::{SignatureCursor, TypeTag, VariableList};

use crate::error::{GeneratorError, Result};
use crate::generators::dispatcher;
use crate::generators::variable_record::push_root;
use crate::text::Writer;

/// Projects a struct member index to the field name used in the generated
/// `value->fieldN` access expression.
///
/// `spec.md` §9 DESIGN NOTES flags the source's hardcoded `item${index}`
/// token with a `FIXME` asking for an out-of-band override mechanism; this
/// trait is that hook. [`DefaultFieldNamer`] reproduces the source's
/// `item{index}` convention.
pub trait FieldNamer {
    /// The field name for the member at `index`.
    fn field_name(&self, index: usize) -> String;
}

/// The convention the companion structure-definition generator emits:
/// members named `item0`, `item1`, ...
pub struct DefaultFieldNamer;

impl FieldNamer for DefaultFieldNamer {
    fn field_name(&self, index: usize) -> String {
        format!("item{index}")
    }
}

/// Emit the container-open/members/container-close code for the struct or
/// dict-entry at `cursor`.
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
    let container_const = match tag {
        TypeTag::Struct => "DBUS_TYPE_STRUCT",
        TypeTag::DictEntry => "DBUS_TYPE_DICT_ENTRY",
        other => return Err(GeneratorError::UnexpectedTag(other)),
    };

    let struct_iter = format!("{value_name}_iter");
    let mut w = Writer::new();
    w.line(&format!("/* {} */", tag.display_name()));
    w.checked_call(
        &format!("open_container({iter_name}, {container_const}, NULL, &{struct_iter})"),
        oom_block,
    );
    push_root(locals, "DBusMessageIter", struct_iter.clone());

    let mut member_cursor = cursor.recurse();
    let mut index = 0usize;
    loop {
        let field = namer.field_name(index);
        let member_value_name = format!("{value_name}_{field}");

        let mut member_inputs = VariableList::new();
        let mut member_locals = VariableList::new();
        let member_block = dispatcher::generate(
            &member_cursor,
            &struct_iter,
            &member_value_name,
            oom_block,
            &mut member_inputs,
            &mut member_locals,
            namer,
        )?;

        locals.extend(member_locals);
        for record in member_inputs.as_slice() {
            w.line(&format!("{} = {}->{}{};", record.name, value_name, field, record.suffix));
        }
        for record in member_inputs {
            locals.push(record);
        }

        w.splice(&member_block);

        if !member_cursor.next() {
            break;
        }
        index += 1;
    }

    w.checked_call(&format!("close_container({iter_name}, &{struct_iter})"), oom_block);

    push_root(inputs, format!("const {} *", tag.target_type()), value_name);

    Ok(w.into_string())
}
