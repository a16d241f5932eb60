//! An in-memory signature tree and cursor over it.
//!
//! Signature *parsing* (turning wire-format text into a tree) is an external
//! collaborator the real generator would receive from a lexer crate
//! (`spec.md` §1's "lexical utilities"); this module instead lets callers —
//! and this workspace's own tests — build a tree directly and walk it with
//! the same [`SignatureCursor`] contract a parser-backed cursor would
//! satisfy.

use std::rc::Rc;

use crate::cursor::SignatureCursor;
use crate::tag::TypeTag;

/// One node of a signature tree.
#[derive(Debug, Clone)]
pub enum Node {
    /// A basic (scalar or string) leaf.
    Scalar(TypeTag),
    /// An array of a single element type.
    Array(Box<Node>),
    /// A struct of one or more members.
    Struct(Vec<Node>),
    /// A dict-entry: exactly a key and a value.
    DictEntry(Box<Node>, Box<Node>),
}

impl Node {
    /// Convenience constructor for an array node.
    pub fn array(element: Node) -> Node {
        Node::Array(Box::new(element))
    }

    /// Convenience constructor for a struct node. Panics if `members` is
    /// empty — the grammar disallows a zero-member struct (`spec.md` §4.4
    /// termination invariant).
    pub fn strct(members: Vec<Node>) -> Node {
        assert!(!members.is_empty(), "a struct must have at least one member");
        Node::Struct(members)
    }

    /// Convenience constructor for a dict-entry node.
    pub fn dict_entry(key: Node, value: Node) -> Node {
        Node::DictEntry(Box::new(key), Box::new(value))
    }

    fn tag_char(tag: TypeTag) -> char {
        match tag {
            TypeTag::Byte => 'y',
            TypeTag::Boolean => 'b',
            TypeTag::Int16 => 'n',
            TypeTag::UInt16 => 'q',
            TypeTag::Int32 => 'i',
            TypeTag::UInt32 => 'u',
            TypeTag::Int64 => 'x',
            TypeTag::UInt64 => 't',
            TypeTag::Double => 'd',
            TypeTag::UnixFd => 'h',
            TypeTag::String => 's',
            TypeTag::ObjectPath => 'o',
            TypeTag::Signature => 'g',
            TypeTag::Variant => 'v',
            TypeTag::Array | TypeTag::Struct | TypeTag::DictEntry => {
                unreachable!("container tags render structurally, not as a single char")
            }
        }
    }

    fn render(&self, out: &mut String) {
        match self {
            Node::Scalar(tag) => out.push(Self::tag_char(*tag)),
            Node::Array(element) => {
                out.push('a');
                element.render(out);
            }
            Node::Struct(members) => {
                out.push('(');
                for member in members {
                    member.render(out);
                }
                out.push(')');
            }
            Node::DictEntry(key, value) => {
                out.push('{');
                key.render(out);
                value.render(out);
                out.push('}');
            }
        }
    }
}

/// A [`SignatureCursor`] over an in-memory [`Node`] tree.
#[derive(Debug, Clone)]
pub struct TreeCursor {
    siblings: Rc<Vec<Node>>,
    index: usize,
}

impl TreeCursor {
    /// Build a cursor positioned at the root of `tree`.
    pub fn new(tree: Node) -> Self {
        TreeCursor { siblings: Rc::new(vec![tree]), index: 0 }
    }

    fn current(&self) -> &Node {
        &self.siblings[self.index]
    }
}

impl SignatureCursor for TreeCursor {
    fn current_tag(&self) -> TypeTag {
        match self.current() {
            Node::Scalar(tag) => *tag,
            Node::Array(_) => TypeTag::Array,
            Node::Struct(_) => TypeTag::Struct,
            Node::DictEntry(..) => TypeTag::DictEntry,
        }
    }

    fn recurse(&self) -> Self {
        match self.current() {
            Node::Array(element) => TreeCursor { siblings: Rc::new(vec![(**element).clone()]), index: 0 },
            Node::Struct(members) => TreeCursor { siblings: Rc::new(members.clone()), index: 0 },
            Node::DictEntry(key, value) => {
                TreeCursor { siblings: Rc::new(vec![(**key).clone(), (**value).clone()]), index: 0 }
            }
            Node::Scalar(_) => panic!("cannot recurse into a basic type"),
        }
    }

    fn next(&mut self) -> bool {
        if self.index + 1 < self.siblings.len() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    fn subtree_text(&self) -> String {
        let mut out = String::new();
        self.current().render(&mut out);
        out
    }
}
