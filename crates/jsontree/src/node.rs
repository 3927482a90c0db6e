//! Arena-backed document tree.
//!
//! Every node lives in a [`Tree`] and is addressed by a [`NodeId`]. Links
//! between nodes (`parent`, `first_child`, `last_child`, `prev_sibling`,
//! `next_sibling`) are stored as handles, and [`Tree::append_child`] is the
//! only operation that creates them. Ownership is top-down: destroying a node
//! frees its whole subtree.
//!
//! Shape rules enforced on every link:
//!
//! 1. `Object` children are `String` labels, and a label holds exactly one
//!    value child.
//! 2. A `String` inside an `Array` has no children.
//! 3. `Number`, `True`, `False` and `Null` never have children.
//!
//! # Examples
//!
//! ```
//! use jsontree::{NodeKind, Tree};
//!
//! let mut tree = Tree::new();
//! let obj = tree.new_node(NodeKind::Object).unwrap();
//! let label = tree.new_string("answer").unwrap();
//! let value = tree.new_number("42").unwrap();
//! tree.append_child(obj, label).unwrap();
//! tree.append_child(label, value).unwrap();
//!
//! assert_eq!(tree.to_json_string(obj).unwrap(), r#"{"answer":42}"#);
//! ```
use alloc::{string::String, vec::Vec};
use core::fmt;

use crate::error::TreeError;

/// The closed set of node kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A string value, or an object label when its parent is an object.
    String,
    /// A number, kept as its literal text.
    Number,
    /// `{ ... }`
    Object,
    /// `[ ... ]`
    Array,
    /// `true`
    True,
    /// `false`
    False,
    /// `null`
    Null,
}

impl NodeKind {
    /// Returns `true` for the kinds that carry text.
    #[must_use]
    pub fn has_text(self) -> bool {
        matches!(self, NodeKind::String | NodeKind::Number)
    }

    /// Returns `true` for `Object` and `Array`.
    #[must_use]
    pub fn is_container(self) -> bool {
        matches!(self, NodeKind::Object | NodeKind::Array)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NodeKind::String => "string",
            NodeKind::Number => "number",
            NodeKind::Object => "object",
            NodeKind::Array => "array",
            NodeKind::True => "true",
            NodeKind::False => "false",
            NodeKind::Null => "null",
        })
    }
}

/// Handle to a node inside a [`Tree`].
///
/// A handle names one slot and the generation of that slot it was issued
/// for. Freeing a node bumps the slot's generation, so handles to freed nodes
/// stay dead even after the slot is reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    index: u32,
    generation: u32,
}

impl NodeId {
    fn index(self) -> usize {
        self.index as usize
    }
}

#[derive(Debug)]
struct Slot {
    generation: u32,
    data: Option<NodeData>,
}

#[derive(Debug)]
struct NodeData {
    kind: NodeKind,
    text: Option<String>,
    parent: Option<NodeId>,
    first_child: Option<NodeId>,
    last_child: Option<NodeId>,
    prev_sibling: Option<NodeId>,
    next_sibling: Option<NodeId>,
}

impl NodeData {
    fn new(kind: NodeKind, text: Option<String>) -> Self {
        Self {
            kind,
            text,
            parent: None,
            first_child: None,
            last_child: None,
            prev_sibling: None,
            next_sibling: None,
        }
    }
}

/// Node arena. A tree may hold several detached roots at once; each is freed
/// with [`Tree::destroy`].
#[derive(Debug, Default)]
pub struct Tree {
    slots: Vec<Slot>,
    free: Vec<u32>,
    live: usize,
}

impl Tree {
    /// Creates an empty arena.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            live: 0,
        }
    }

    /// Number of live nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live
    }

    /// Returns `true` if no node is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Creates a detached node of `kind`. `String` and `Number` nodes start
    /// with empty text.
    ///
    /// # Errors
    ///
    /// [`TreeError::Memory`] if the arena cannot grow.
    pub fn new_node(&mut self, kind: NodeKind) -> Result<NodeId, TreeError> {
        let text = kind.has_text().then(String::new);
        self.alloc(NodeData::new(kind, text))
    }

    /// Creates a detached `String` node.
    ///
    /// The text is emitted verbatim by the serializer; use
    /// [`escape_str`](crate::escape_str) first if it may contain quotes,
    /// backslashes or control characters.
    ///
    /// # Errors
    ///
    /// [`TreeError::Memory`] if the arena or the text cannot be allocated.
    pub fn new_string(&mut self, text: &str) -> Result<NodeId, TreeError> {
        let text = copy_text(text)?;
        self.alloc(NodeData::new(NodeKind::String, Some(text)))
    }

    /// Creates a detached `Number` node holding `text` as its literal.
    ///
    /// # Errors
    ///
    /// [`TreeError::Memory`] if the arena or the text cannot be allocated.
    pub fn new_number(&mut self, text: &str) -> Result<NodeId, TreeError> {
        let text = copy_text(text)?;
        self.alloc(NodeData::new(NodeKind::Number, Some(text)))
    }

    /// Creates a detached text node taking ownership of `text`.
    pub(crate) fn new_text_node(
        &mut self,
        kind: NodeKind,
        text: String,
    ) -> Result<NodeId, TreeError> {
        debug_assert!(kind.has_text());
        self.alloc(NodeData::new(kind, Some(text)))
    }

    fn alloc(&mut self, data: NodeData) -> Result<NodeId, TreeError> {
        let id = if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.data = Some(data);
            NodeId {
                index,
                generation: slot.generation,
            }
        } else {
            let index = u32::try_from(self.slots.len()).map_err(|_| TreeError::Memory)?;
            self.slots.try_reserve(1).map_err(|_| TreeError::Memory)?;
            self.slots.push(Slot {
                generation: 0,
                data: Some(data),
            });
            NodeId {
                index,
                generation: 0,
            }
        };
        self.live += 1;
        Ok(id)
    }

    /// Returns a read-only view of `id`, or `None` if it is not live.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<NodeRef<'_>> {
        self.data(id).map(|_| NodeRef { tree: self, id })
    }

    /// Returns `true` if `id` refers to a live node.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.data(id).is_some()
    }

    fn data(&self, id: NodeId) -> Option<&NodeData> {
        self.slots
            .get(id.index())
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.data.as_ref())
    }

    fn data_mut(&mut self, id: NodeId) -> Option<&mut NodeData> {
        self.slots
            .get_mut(id.index())
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.data.as_mut())
    }

    fn live_data(&self, id: NodeId) -> Result<&NodeData, TreeError> {
        self.data(id).ok_or(TreeError::UnknownNode)
    }

    pub(crate) fn kind(&self, id: NodeId) -> Result<NodeKind, TreeError> {
        self.live_data(id).map(|d| d.kind)
    }

    pub(crate) fn parent(&self, id: NodeId) -> Result<Option<NodeId>, TreeError> {
        self.live_data(id).map(|d| d.parent)
    }

    pub(crate) fn first_child(&self, id: NodeId) -> Result<Option<NodeId>, TreeError> {
        self.live_data(id).map(|d| d.first_child)
    }

    /// Appends `child` to the end of `parent`'s child list.
    ///
    /// This is the only way to link nodes, so every shape rule and the cycle
    /// check live here. On error nothing is modified.
    ///
    /// # Errors
    ///
    /// - [`TreeError::SelfAttachment`] if `parent == child`.
    /// - [`TreeError::UnknownNode`] if either handle is not live.
    /// - [`TreeError::AlreadyAttached`] if `child` has a parent.
    /// - [`TreeError::Cycle`] if `child` is an ancestor of `parent`.
    /// - [`TreeError::InvalidChild`] or [`TreeError::LabelAlreadyHasValue`]
    ///   if the link would break the object/label/array rules.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        if parent == child {
            return Err(TreeError::SelfAttachment);
        }
        let p = self.live_data(parent)?;
        let c = self.live_data(child)?;
        if c.parent.is_some() {
            return Err(TreeError::AlreadyAttached);
        }
        let (parent_kind, child_kind) = (p.kind, c.kind);
        let invalid = TreeError::InvalidChild {
            parent: parent_kind,
            child: child_kind,
        };
        match parent_kind {
            NodeKind::Object if child_kind != NodeKind::String => return Err(invalid),
            NodeKind::Array if child_kind == NodeKind::String && c.first_child.is_some() => {
                return Err(invalid);
            }
            NodeKind::String => {
                if p.first_child.is_some() {
                    return Err(TreeError::LabelAlreadyHasValue);
                }
                // A string holds a value only while it acts as a label.
                if let Some(grandparent) = p.parent {
                    if self.kind(grandparent)? != NodeKind::Object {
                        return Err(invalid);
                    }
                }
            }
            NodeKind::Number | NodeKind::True | NodeKind::False | NodeKind::Null => {
                return Err(invalid);
            }
            NodeKind::Object | NodeKind::Array => {}
        }

        // A detached leaf cannot be anyone's ancestor.
        let mut ancestor = if c.first_child.is_some() { p.parent } else { None };
        while let Some(id) = ancestor {
            if id == child {
                return Err(TreeError::Cycle);
            }
            ancestor = self.parent(id)?;
        }

        let prev = self.live_data(parent)?.last_child;
        if let Some(prev) = prev {
            self.data_mut(prev).ok_or(TreeError::UnknownNode)?.next_sibling = Some(child);
        }
        let c = self.data_mut(child).ok_or(TreeError::UnknownNode)?;
        c.parent = Some(parent);
        c.prev_sibling = prev;
        c.next_sibling = None;
        let p = self.data_mut(parent).ok_or(TreeError::UnknownNode)?;
        if p.first_child.is_none() {
            p.first_child = Some(child);
        }
        p.last_child = Some(child);
        Ok(())
    }

    /// Frees `node` and all of its descendants, then unlinks it from its
    /// parent and siblings. Returns the number of nodes freed.
    ///
    /// The walk is iterative (post-order over the child links), so deeply
    /// nested trees do not grow the call stack.
    ///
    /// # Errors
    ///
    /// [`TreeError::UnknownNode`] if `node` is not live.
    pub fn destroy(&mut self, node: NodeId) -> Result<usize, TreeError> {
        let data = self.live_data(node)?;
        let (parent, prev, next) = (data.parent, data.prev_sibling, data.next_sibling);

        // Splice the subtree out first so the walk below never leaves it.
        if let Some(prev) = prev {
            self.data_mut(prev).ok_or(TreeError::UnknownNode)?.next_sibling = next;
        }
        if let Some(next) = next {
            self.data_mut(next).ok_or(TreeError::UnknownNode)?.prev_sibling = prev;
        }
        if let Some(parent) = parent {
            let p = self.data_mut(parent).ok_or(TreeError::UnknownNode)?;
            if p.first_child == Some(node) {
                p.first_child = next;
            }
            if p.last_child == Some(node) {
                p.last_child = prev;
            }
        }

        let mut freed = 0;
        let mut current = node;
        loop {
            // Descend to the deepest first child.
            while let Some(child) = self.first_child(current)? {
                current = child;
            }
            let data = self.release(current)?;
            freed += 1;
            if current == node {
                break;
            }
            match data.next_sibling {
                Some(next) => current = next,
                None => {
                    current = data.parent.ok_or(TreeError::UnknownNode)?;
                    // Every child of `current` is gone.
                    self.data_mut(current).ok_or(TreeError::UnknownNode)?.first_child = None;
                }
            }
        }
        Ok(freed)
    }

    fn release(&mut self, id: NodeId) -> Result<NodeData, TreeError> {
        let slot = self
            .slots
            .get_mut(id.index())
            .filter(|slot| slot.generation == id.generation)
            .ok_or(TreeError::UnknownNode)?;
        let data = slot.data.take().ok_or(TreeError::UnknownNode)?;
        slot.generation = slot.generation.wrapping_add(1);
        self.live -= 1;
        // A slot that cannot be queued is simply never reused.
        if self.free.try_reserve(1).is_ok() {
            self.free.push(id.index);
        }
        Ok(data)
    }

    /// Walks up from `id` and returns the node without a parent.
    ///
    /// # Errors
    ///
    /// [`TreeError::UnknownNode`] if `id` is not live.
    pub fn root_of(&self, id: NodeId) -> Result<NodeId, TreeError> {
        let mut current = id;
        while let Some(parent) = self.parent(current)? {
            current = parent;
        }
        Ok(current)
    }

    /// Checks that every live node's links agree with its neighbours' and
    /// that the live count matches the arena.
    ///
    /// # Errors
    ///
    /// [`TreeError::UnknownNode`] on the first inconsistent or dangling link.
    #[cfg(any(test, feature = "fuzzing"))]
    pub fn check_links(&self) -> Result<(), TreeError> {
        let mut live = 0;
        for (index, slot) in self.slots.iter().enumerate() {
            let Some(data) = &slot.data else { continue };
            live += 1;
            let id = NodeId {
                index: u32::try_from(index).map_err(|_| TreeError::UnknownNode)?,
                generation: slot.generation,
            };
            let consistent = data.parent.is_none_or(|p| self.data(p).is_some())
                && data.next_sibling.is_none_or(|n| {
                    self.data(n)
                        .is_some_and(|n| n.prev_sibling == Some(id) && n.parent == data.parent)
                })
                && data.prev_sibling.is_none_or(|p| {
                    self.data(p).is_some_and(|p| p.next_sibling == Some(id))
                })
                && data.first_child.is_none_or(|c| {
                    self.data(c)
                        .is_some_and(|c| c.parent == Some(id) && c.prev_sibling.is_none())
                })
                && data.last_child.is_none_or(|c| {
                    self.data(c)
                        .is_some_and(|c| c.parent == Some(id) && c.next_sibling.is_none())
                })
                && data.first_child.is_some() == data.last_child.is_some();
            if !consistent {
                return Err(TreeError::UnknownNode);
            }
        }
        if live == self.live {
            Ok(())
        } else {
            Err(TreeError::UnknownNode)
        }
    }
}

fn copy_text(text: &str) -> Result<String, TreeError> {
    let mut owned = String::new();
    owned.try_reserve(text.len()).map_err(|_| TreeError::Memory)?;
    owned.push_str(text);
    Ok(owned)
}

/// Read-only view of a live node.
#[derive(Clone, Copy)]
pub struct NodeRef<'t> {
    tree: &'t Tree,
    id: NodeId,
}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("kind", &self.kind())
            .field("text", &self.text())
            .finish()
    }
}

impl<'t> NodeRef<'t> {
    fn data(&self) -> &'t NodeData {
        // A `NodeRef` is only handed out for live nodes, and the shared borrow
        // of the tree keeps them live.
        match self.tree.data(self.id) {
            Some(data) => data,
            None => unreachable!("NodeRef outlived its node"),
        }
    }

    fn wrap(&self, id: Option<NodeId>) -> Option<NodeRef<'t>> {
        id.map(|id| NodeRef {
            tree: self.tree,
            id,
        })
    }

    /// The node's handle.
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The node's kind.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        self.data().kind
    }

    /// Text of a `String` or `Number` node; `None` for every other kind.
    #[must_use]
    pub fn text(&self) -> Option<&'t str> {
        self.data().text.as_deref()
    }

    /// The parent node.
    #[must_use]
    pub fn parent(&self) -> Option<NodeRef<'t>> {
        self.wrap(self.data().parent)
    }

    /// Head of the child list.
    #[must_use]
    pub fn first_child(&self) -> Option<NodeRef<'t>> {
        self.wrap(self.data().first_child)
    }

    /// Tail of the child list.
    #[must_use]
    pub fn last_child(&self) -> Option<NodeRef<'t>> {
        self.wrap(self.data().last_child)
    }

    /// Previous node in the parent's child list.
    #[must_use]
    pub fn prev_sibling(&self) -> Option<NodeRef<'t>> {
        self.wrap(self.data().prev_sibling)
    }

    /// Next node in the parent's child list.
    #[must_use]
    pub fn next_sibling(&self) -> Option<NodeRef<'t>> {
        self.wrap(self.data().next_sibling)
    }

    /// Children in document order.
    #[must_use]
    pub fn children(&self) -> Children<'t> {
        Children {
            next: self.first_child(),
        }
    }

    /// Returns `true` if this is a `String` acting as an object label.
    #[must_use]
    pub fn is_label(&self) -> bool {
        self.kind() == NodeKind::String
            && self
                .parent()
                .map_or(self.first_child().is_some(), |p| p.kind() == NodeKind::Object)
    }
}

/// Iterator over a node's children, see [`NodeRef::children`].
#[derive(Debug, Clone)]
pub struct Children<'t> {
    next: Option<NodeRef<'t>>,
}

impl<'t> Iterator for Children<'t> {
    type Item = NodeRef<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.next_sibling();
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use rstest::rstest;

    use super::*;

    fn child_ids(tree: &Tree, id: NodeId) -> Vec<NodeId> {
        tree.get(id).unwrap().children().map(|c| c.id()).collect()
    }

    fn assert_links_consistent(tree: &Tree, parent: NodeId) {
        let p = tree.get(parent).unwrap();
        let ids = child_ids(tree, parent);
        assert_eq!(p.first_child().map(|c| c.id()), ids.first().copied());
        assert_eq!(p.last_child().map(|c| c.id()), ids.last().copied());
        if let Some(first) = p.first_child() {
            assert!(first.prev_sibling().is_none());
        }
        if let Some(last) = p.last_child() {
            assert!(last.next_sibling().is_none());
        }
        for pair in ids.windows(2) {
            let a = tree.get(pair[0]).unwrap();
            let b = tree.get(pair[1]).unwrap();
            assert_eq!(a.next_sibling().unwrap().id(), b.id());
            assert_eq!(b.prev_sibling().unwrap().id(), a.id());
            assert_eq!(b.parent().unwrap().id(), parent);
        }
    }

    #[test]
    fn append_keeps_document_order() {
        let mut tree = Tree::new();
        let arr = tree.new_node(NodeKind::Array).unwrap();
        let a = tree.new_number("1").unwrap();
        let b = tree.new_node(NodeKind::True).unwrap();
        let c = tree.new_string("x").unwrap();
        tree.append_child(arr, a).unwrap();
        tree.append_child(arr, b).unwrap();
        tree.append_child(arr, c).unwrap();
        assert_eq!(child_ids(&tree, arr), [a, b, c]);
        assert_links_consistent(&tree, arr);
        assert_eq!(tree.len(), 4);
    }

    #[rstest]
    #[case(NodeKind::Object, NodeKind::Number)]
    #[case(NodeKind::Object, NodeKind::Array)]
    #[case(NodeKind::Object, NodeKind::Null)]
    #[case(NodeKind::Number, NodeKind::Null)]
    #[case(NodeKind::True, NodeKind::False)]
    #[case(NodeKind::False, NodeKind::Array)]
    #[case(NodeKind::Null, NodeKind::String)]
    fn rejects_invalid_children(#[case] parent: NodeKind, #[case] child: NodeKind) {
        let mut tree = Tree::new();
        let p = tree.new_node(parent).unwrap();
        let c = tree.new_node(child).unwrap();
        assert_eq!(
            tree.append_child(p, c),
            Err(TreeError::InvalidChild { parent, child })
        );
        assert!(tree.get(p).unwrap().first_child().is_none());
        assert!(tree.get(c).unwrap().parent().is_none());
    }

    #[test]
    fn label_holds_exactly_one_value() {
        let mut tree = Tree::new();
        let obj = tree.new_node(NodeKind::Object).unwrap();
        let label = tree.new_string("k").unwrap();
        tree.append_child(obj, label).unwrap();
        let v1 = tree.new_node(NodeKind::Null).unwrap();
        let v2 = tree.new_node(NodeKind::Null).unwrap();
        tree.append_child(label, v1).unwrap();
        assert_eq!(
            tree.append_child(label, v2),
            Err(TreeError::LabelAlreadyHasValue)
        );
        assert!(tree.get(label).unwrap().is_label());
    }

    #[test]
    fn string_in_array_cannot_hold_a_value() {
        let mut tree = Tree::new();
        let arr = tree.new_node(NodeKind::Array).unwrap();
        let s = tree.new_string("plain").unwrap();
        tree.append_child(arr, s).unwrap();
        let v = tree.new_node(NodeKind::True).unwrap();
        assert_eq!(
            tree.append_child(s, v),
            Err(TreeError::InvalidChild {
                parent: NodeKind::String,
                child: NodeKind::True
            })
        );
        assert!(!tree.get(s).unwrap().is_label());

        // ...and a label that already carries a value cannot join an array.
        let label = tree.new_string("k").unwrap();
        let value = tree.new_node(NodeKind::Null).unwrap();
        tree.append_child(label, value).unwrap();
        assert_eq!(
            tree.append_child(arr, label),
            Err(TreeError::InvalidChild {
                parent: NodeKind::Array,
                child: NodeKind::String
            })
        );
    }

    #[test]
    fn rejects_self_and_cycles() {
        let mut tree = Tree::new();
        let outer = tree.new_node(NodeKind::Array).unwrap();
        let inner = tree.new_node(NodeKind::Array).unwrap();
        assert_eq!(
            tree.append_child(outer, outer),
            Err(TreeError::SelfAttachment)
        );
        tree.append_child(outer, inner).unwrap();

        let deeper = tree.new_node(NodeKind::Array).unwrap();
        tree.append_child(inner, deeper).unwrap();
        assert_eq!(tree.append_child(deeper, outer), Err(TreeError::Cycle));
        assert_eq!(
            tree.append_child(deeper, inner),
            Err(TreeError::AlreadyAttached)
        );
    }

    #[test]
    fn destroy_frees_subtree_and_splices_siblings() {
        let mut tree = Tree::new();
        let arr = tree.new_node(NodeKind::Array).unwrap();
        let a = tree.new_number("1").unwrap();
        let mid = tree.new_node(NodeKind::Object).unwrap();
        let c = tree.new_number("3").unwrap();
        for id in [a, mid, c] {
            tree.append_child(arr, id).unwrap();
        }
        let label = tree.new_string("k").unwrap();
        let value = tree.new_node(NodeKind::Array).unwrap();
        tree.append_child(mid, label).unwrap();
        tree.append_child(label, value).unwrap();
        assert_eq!(tree.len(), 6);

        assert_eq!(tree.destroy(mid), Ok(3));
        assert_eq!(tree.len(), 3);
        assert!(!tree.contains(label));
        assert_eq!(child_ids(&tree, arr), [a, c]);
        assert_links_consistent(&tree, arr);

        assert_eq!(tree.destroy(a), Ok(1));
        assert_eq!(child_ids(&tree, arr), [c]);
        assert_links_consistent(&tree, arr);

        assert_eq!(tree.destroy(arr), Ok(2));
        assert!(tree.is_empty());
        assert_eq!(tree.destroy(arr), Err(TreeError::UnknownNode));
    }

    #[test]
    fn destroy_deep_chain_without_recursion() {
        let mut tree = Tree::new();
        let root = tree.new_node(NodeKind::Array).unwrap();
        let mut parent = root;
        for _ in 0..100_000 {
            let child = tree.new_node(NodeKind::Array).unwrap();
            tree.append_child(parent, child).unwrap();
            parent = child;
        }
        assert_eq!(tree.root_of(parent), Ok(root));
        assert_eq!(tree.destroy(root), Ok(100_001));
        assert!(tree.is_empty());
    }

    #[test]
    fn slots_are_reused_after_destroy() {
        let mut tree = Tree::new();
        let a = tree.new_node(NodeKind::Null).unwrap();
        tree.destroy(a).unwrap();
        let b = tree.new_string("again").unwrap();
        assert_eq!(a.index, b.index);
        assert_eq!(tree.get(b).unwrap().text(), Some("again"));
        tree.check_links().unwrap();
    }

    #[test]
    fn stale_handles_stay_dead_after_reuse() {
        let mut tree = Tree::new();
        let old = tree.new_node(NodeKind::Array).unwrap();
        tree.destroy(old).unwrap();
        let new = tree.new_node(NodeKind::Object).unwrap();
        assert_ne!(old, new);

        assert!(!tree.contains(old));
        assert!(tree.get(old).is_none());
        assert_eq!(tree.root_of(old), Err(TreeError::UnknownNode));
        assert_eq!(tree.destroy(old), Err(TreeError::UnknownNode));
        let label = tree.new_string("k").unwrap();
        assert_eq!(tree.append_child(old, label), Err(TreeError::UnknownNode));

        assert!(tree.contains(new));
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn text_only_on_string_and_number() {
        let mut tree = Tree::new();
        for kind in [
            NodeKind::Object,
            NodeKind::Array,
            NodeKind::True,
            NodeKind::False,
            NodeKind::Null,
        ] {
            let id = tree.new_node(kind).unwrap();
            assert_eq!(tree.get(id).unwrap().text(), None);
        }
        let s = tree.new_node(NodeKind::String).unwrap();
        assert_eq!(tree.get(s).unwrap().text(), Some(""));
    }
}
