//! Type tags: the closed set of signature element kinds the generator can
//! encounter, plus the two orthogonal predicates the generators dispatch on.

/// A discriminated type tag drawn from the bus protocol's closed type set.
///
/// `is_basic` and `is_fixed` are deliberately separate predicates: strings
/// are basic (serialized by a single append call) but not fixed-size, while
/// every numeric scalar is both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// 8-bit unsigned byte.
    Byte,
    /// Boolean, wire-encoded as a 32-bit value.
    Boolean,
    /// Signed 16-bit integer.
    Int16,
    /// Unsigned 16-bit integer.
    UInt16,
    /// Signed 32-bit integer.
    Int32,
    /// Unsigned 32-bit integer.
    UInt32,
    /// Signed 64-bit integer.
    Int64,
    /// Unsigned 64-bit integer.
    UInt64,
    /// IEEE-754 double.
    Double,
    /// Unix file descriptor, wire-encoded as an index.
    UnixFd,
    /// UTF-8 string.
    String,
    /// Object path string.
    ObjectPath,
    /// Nested type signature string.
    Signature,
    /// Array of a single element type.
    Array,
    /// Fixed-arity struct of heterogeneous members.
    Struct,
    /// Dict-entry: a two-member struct appearing only inside an array.
    DictEntry,
    /// Variant: a self-describing value. Grammar-legal but unreachable by
    /// this generator (see [`TypeTag::is_basic`]).
    Variant,
}

impl TypeTag {
    /// Scalars and strings: serialized by a single append call.
    pub fn is_basic(self) -> bool {
        matches!(
            self,
            TypeTag::Byte
                | TypeTag::Boolean
                | TypeTag::Int16
                | TypeTag::UInt16
                | TypeTag::Int32
                | TypeTag::UInt32
                | TypeTag::Int64
                | TypeTag::UInt64
                | TypeTag::Double
                | TypeTag::UnixFd
                | TypeTag::String
                | TypeTag::ObjectPath
                | TypeTag::Signature
        )
    }

    /// Scalars of statically known width. Strings are basic but not fixed.
    pub fn is_fixed(self) -> bool {
        matches!(
            self,
            TypeTag::Byte
                | TypeTag::Boolean
                | TypeTag::Int16
                | TypeTag::UInt16
                | TypeTag::Int32
                | TypeTag::UInt32
                | TypeTag::Int64
                | TypeTag::UInt64
                | TypeTag::Double
                | TypeTag::UnixFd
        )
    }

    /// The target-language C type backing this tag, without qualifiers.
    pub fn target_type(self) -> &'static str {
        match self {
            TypeTag::Byte => "uint8_t",
            TypeTag::Boolean => "int",
            TypeTag::Int16 => "int16_t",
            TypeTag::UInt16 => "uint16_t",
            TypeTag::Int32 => "int32_t",
            TypeTag::UInt32 => "uint32_t",
            TypeTag::Int64 => "int64_t",
            TypeTag::UInt64 => "uint64_t",
            TypeTag::Double => "double",
            TypeTag::UnixFd => "int",
            TypeTag::String | TypeTag::ObjectPath | TypeTag::Signature => "char *",
            TypeTag::Array => "Array",
            TypeTag::Struct => "Struct",
            TypeTag::DictEntry => "DictEntry",
            TypeTag::Variant => "Variant",
        }
    }

    /// Whether this tag's target type is itself a pointer (strings are;
    /// numeric scalars are not). Used to decide whether a read-only
    /// qualifier applies to the bare type or needs inserting before the
    /// trailing `*`.
    pub fn is_pointer_valued(self) -> bool {
        matches!(self, TypeTag::String | TypeTag::ObjectPath | TypeTag::Signature)
    }

    /// A short human-readable name for use in generated comments, e.g.
    /// `"int32"` or `"string"`.
    pub fn display_name(self) -> &'static str {
        match self {
            TypeTag::Byte => "byte",
            TypeTag::Boolean => "boolean",
            TypeTag::Int16 => "int16",
            TypeTag::UInt16 => "uint16",
            TypeTag::Int32 => "int32",
            TypeTag::UInt32 => "uint32",
            TypeTag::Int64 => "int64",
            TypeTag::UInt64 => "uint64",
            TypeTag::Double => "double",
            TypeTag::UnixFd => "unix fd",
            TypeTag::String => "string",
            TypeTag::ObjectPath => "object path",
            TypeTag::Signature => "signature",
            TypeTag::Array => "array",
            TypeTag::Struct => "struct",
            TypeTag::DictEntry => "dict entry",
            TypeTag::Variant => "variant",
        }
    }

    /// The bus-runtime constant naming this tag, e.g. `DBUS_TYPE_INT32`.
    pub fn type_constant_name(self) -> &'static str {
        match self {
            TypeTag::Byte => "DBUS_TYPE_BYTE",
            TypeTag::Boolean => "DBUS_TYPE_BOOLEAN",
            TypeTag::Int16 => "DBUS_TYPE_INT16",
            TypeTag::UInt16 => "DBUS_TYPE_UINT16",
            TypeTag::Int32 => "DBUS_TYPE_INT32",
            TypeTag::UInt32 => "DBUS_TYPE_UINT32",
            TypeTag::Int64 => "DBUS_TYPE_INT64",
            TypeTag::UInt64 => "DBUS_TYPE_UINT64",
            TypeTag::Double => "DBUS_TYPE_DOUBLE",
            TypeTag::UnixFd => "DBUS_TYPE_UNIX_FD",
            TypeTag::String => "DBUS_TYPE_STRING",
            TypeTag::ObjectPath => "DBUS_TYPE_OBJECT_PATH",
            TypeTag::Signature => "DBUS_TYPE_SIGNATURE",
            TypeTag::Array => "DBUS_TYPE_ARRAY",
            TypeTag::Struct => "DBUS_TYPE_STRUCT",
            TypeTag::DictEntry => "DBUS_TYPE_DICT_ENTRY",
            TypeTag::Variant => "DBUS_TYPE_VARIANT",
        }
    }
}
