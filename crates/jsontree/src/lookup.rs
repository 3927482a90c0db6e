//! Label lookup on objects.
use crate::node::{NodeId, NodeKind, NodeRef, Tree};

impl Tree {
    /// Returns the first label of `object` whose text equals `name`.
    ///
    /// Labels are compared as stored, so a label written with escapes in the
    /// source (`"caf\u00e9"`) only matches the same escaped `name`. Decode
    /// with [`unescape_str`](crate::unescape_str) to compare by value.
    /// Duplicate labels are allowed; later ones are never returned.
    ///
    /// Returns `None` if `object` is not a live `Object` node.
    ///
    /// ```
    /// let (tree, root) = jsontree::parse(r#"{"a":1,"b":2,"a":3}"#, Default::default()).unwrap();
    /// let label = tree.find_first_label(root, "a").unwrap();
    /// let value = tree.get(label).unwrap().first_child().unwrap();
    /// assert_eq!(value.text(), Some("1"));
    /// ```
    #[must_use]
    pub fn find_first_label(&self, object: NodeId, name: &str) -> Option<NodeId> {
        self.get(object)?.find_first_label(name).map(|label| label.id())
    }
}

impl<'t> NodeRef<'t> {
    /// See [`Tree::find_first_label`].
    #[must_use]
    pub fn find_first_label(&self, name: &str) -> Option<NodeRef<'t>> {
        if self.kind() != NodeKind::Object {
            return None;
        }
        self.children().find(|label| label.text() == Some(name))
    }

    /// The value held by the first label named `name`.
    #[must_use]
    pub fn get_value(&self, name: &str) -> Option<NodeRef<'t>> {
        self.find_first_label(name)?.first_child()
    }
}
