
use alloc::{string::String, vec::Vec};

use crate::{NodeKind, NodeRef, unescape_str};

/// Rebuilds a subtree as a `serde_json::Value`, decoding string escapes.
pub(crate) fn to_value(node: NodeRef<'_>) -> serde_json::Value {
    use serde_json::Value;

    match node.kind() {
        NodeKind::Null => Value::Null,
        NodeKind::True => Value::Bool(true),
        NodeKind::False => Value::Bool(false),
        NodeKind::Number => serde_json::from_str(node.text().unwrap()).unwrap(),
        NodeKind::String => Value::String(unescape_str(node.text().unwrap()).unwrap()),
        NodeKind::Array => Value::Array(node.children().map(to_value).collect()),
        NodeKind::Object => Value::Object(
            node.children()
                .map(|label| {
                    let key: String = unescape_str(label.text().unwrap()).unwrap();
                    let values: Vec<_> = label.children().collect();
                    assert_eq!(values.len(), 1, "label {key:?} must hold one value");
                    (key, to_value(values[0]))
                })
                .collect(),
        ),
    }
}
