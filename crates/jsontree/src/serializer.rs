//! Tree to text.
//!
//! The serializer walks the tree through its `parent`/`first_child`/
//! `next_sibling` links instead of recursing, so its stack use is constant no
//! matter how deep the document is. Output is compact: no whitespace is
//! written between tokens.
//!
//! String and number text is written verbatim. Text produced by the parser is
//! the raw source form, so parsing and serializing a compact document gives
//! back the same text. Callers building string nodes by hand should pass their
//! text through [`escape_str`](crate::escape_str) first.
use alloc::string::String;

use crate::{
    error::TreeError,
    node::{NodeId, NodeKind, NodeRef, Tree},
    text_buffer::TextBuffer,
};

/// Serializes the subtree rooted at `root`.
///
/// A `String` root that holds a value is written as a label with its value,
/// `"name":value`. Siblings of `root` are not written.
///
/// ```
/// use jsontree::{NodeKind, Tree};
///
/// let mut tree = Tree::new();
/// let array = tree.new_node(NodeKind::Array).unwrap();
/// let one = tree.new_number("1").unwrap();
/// let null = tree.new_node(NodeKind::Null).unwrap();
/// tree.append_child(array, one).unwrap();
/// tree.append_child(array, null).unwrap();
///
/// assert_eq!(jsontree::serialize(&tree, array).unwrap(), "[1,null]");
/// ```
///
/// # Errors
///
/// - [`TreeError::UnknownNode`] if `root` is not live.
/// - [`TreeError::LabelWithoutValue`] or [`TreeError::LabelAlreadyHasValue`]
///   if a label does not hold exactly one value.
/// - [`TreeError::InvalidChild`] if an object holds something other than a
///   label.
/// - [`TreeError::Memory`] if the output cannot grow.
pub fn serialize(tree: &Tree, root: NodeId) -> Result<String, TreeError> {
    let mut out = TextBuffer::new();
    let root = tree.get(root).ok_or(TreeError::UnknownNode)?;
    let mut current = root;

    'walk: loop {
        // Open `current`, descending into its first child if it has one.
        if current.id() != root.id() && current.prev_sibling().is_some() {
            put(&mut out, ",")?;
        }
        check_object_child(current)?;
        match current.kind() {
            NodeKind::String => {
                put(&mut out, "\"")?;
                put(&mut out, current.text().unwrap_or_default())?;
                put(&mut out, "\"")?;
                if let Some(value) = label_value(current, root)? {
                    put(&mut out, ":")?;
                    current = value;
                    continue 'walk;
                }
            }
            NodeKind::Number => put(&mut out, current.text().unwrap_or_default())?,
            NodeKind::True => put(&mut out, "true")?,
            NodeKind::False => put(&mut out, "false")?,
            NodeKind::Null => put(&mut out, "null")?,
            NodeKind::Object | NodeKind::Array => {
                put(&mut out, open_token(current.kind()))?;
                if let Some(child) = current.first_child() {
                    current = child;
                    continue 'walk;
                }
                put(&mut out, close_token(current.kind()))?;
            }
        }

        // `current` is closed: move to its next sibling, or close parents
        // until one has a next sibling.
        loop {
            if current.id() == root.id() {
                break 'walk;
            }
            if let Some(next) = current.next_sibling() {
                current = next;
                continue 'walk;
            }
            let parent = current.parent().ok_or(TreeError::UnknownNode)?;
            put(&mut out, close_token(parent.kind()))?;
            current = parent;
        }
    }

    Ok(out.into_string())
}

impl Tree {
    /// Serializes the subtree rooted at `root`; see [`serialize`].
    ///
    /// # Errors
    ///
    /// See [`serialize`].
    pub fn to_json_string(&self, root: NodeId) -> Result<String, TreeError> {
        serialize(self, root)
    }
}

/// The value of `node` if it is a label. A string is a label when its parent
/// is an object, or when it is the root and holds a value.
fn label_value<'t>(node: NodeRef<'t>, root: NodeRef<'t>) -> Result<Option<NodeRef<'t>>, TreeError> {
    let in_object = node.parent().is_some_and(|p| p.kind() == NodeKind::Object);
    let is_label = if node.id() == root.id() {
        in_object || node.first_child().is_some()
    } else {
        in_object
    };
    if !is_label {
        return Ok(None);
    }
    let value = node.first_child().ok_or(TreeError::LabelWithoutValue)?;
    if value.next_sibling().is_some() {
        return Err(TreeError::LabelAlreadyHasValue);
    }
    Ok(Some(value))
}

fn check_object_child(node: NodeRef<'_>) -> Result<(), TreeError> {
    match node.parent() {
        Some(parent) if parent.kind() == NodeKind::Object && node.kind() != NodeKind::String => {
            Err(TreeError::InvalidChild {
                parent: parent.kind(),
                child: node.kind(),
            })
        }
        _ => Ok(()),
    }
}

fn open_token(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Object => "{",
        NodeKind::Array => "[",
        _ => "",
    }
}

/// Labels close with their value, so only containers write a token.
fn close_token(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Object => "}",
        NodeKind::Array => "]",
        _ => "",
    }
}

#[inline]
fn put(out: &mut TextBuffer, s: &str) -> Result<(), TreeError> {
    out.try_push_str(s).map_err(|_| TreeError::Memory)
}
