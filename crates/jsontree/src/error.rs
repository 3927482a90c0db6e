use thiserror::Error;

use crate::node::NodeKind;

/// Structural violations of the tree invariants.
///
/// Returned by [`Tree::append_child`](crate::Tree::append_child) when a link
/// would break the object/label/array rules, and by the serializer when it
/// meets a tree that was assembled in an invalid shape.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// A node cannot be attached to itself.
    #[error("cannot attach a node to itself")]
    SelfAttachment,
    /// The child is an ancestor of the parent.
    #[error("attaching this node would create a cycle")]
    Cycle,
    /// The child already has a parent.
    #[error("node is already attached to a parent")]
    AlreadyAttached,
    /// The parent kind does not accept a child of this kind here.
    #[error("{parent} node cannot hold a {child} child")]
    InvalidChild {
        /// Kind of the would-be parent.
        parent: NodeKind,
        /// Kind of the rejected child.
        child: NodeKind,
    },
    /// A label holds exactly one value.
    #[error("label already has a value")]
    LabelAlreadyHasValue,
    /// A label was found without its value.
    #[error("label has no value")]
    LabelWithoutValue,
    /// A label is not inside an object.
    #[error("label is not attached to an object")]
    DetachedLabel,
    /// The handle does not refer to a live node of this tree.
    #[error("unknown or destroyed node")]
    UnknownNode,
    /// The arena or an output buffer could not grow.
    #[error("out of memory")]
    Memory,
}

/// Errors produced while parsing.
///
/// Running out of input is not an error from
/// [`parse_chunk`](crate::ParseState::parse_chunk): it reports
/// [`Status::Incomplete`](crate::Status::Incomplete) and the state can be
/// resumed. Everything here except [`ParseError::IncompleteDocument`] is fatal
/// to the current document; the partial tree has already been freed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input does not match the grammar at this position. `found` is
    /// `None` when the input ended where more was required.
    #[error("illegal character {} at {line}:{column}", DisplayFound(.found))]
    IllegalCharacter {
        /// The offending character.
        found: Option<char>,
        /// 1-based line.
        line: usize,
        /// 1-based column.
        column: usize,
    },
    /// [`finish`](crate::ParseState::finish) was called before the document
    /// was complete. The state is preserved and more input may be fed.
    #[error("incomplete document at {line}:{column}")]
    IncompleteDocument {
        /// 1-based line.
        line: usize,
        /// 1-based column.
        column: usize,
    },
    /// An allocation failed.
    #[error("out of memory")]
    Memory,
    /// The automaton produced a tree that violates the tree invariants.
    #[error("bad tree structure: {0}")]
    BadTreeStructure(TreeError),
    /// Containers are nested deeper than the configured limit.
    #[error("nesting depth exceeds {limit} at {line}:{column}")]
    DepthLimitExceeded {
        /// The configured limit.
        limit: usize,
        /// 1-based line.
        line: usize,
        /// 1-based column.
        column: usize,
    },
}

impl From<TreeError> for ParseError {
    fn from(err: TreeError) -> Self {
        match err {
            TreeError::Memory => ParseError::Memory,
            other => ParseError::BadTreeStructure(other),
        }
    }
}

struct DisplayFound<'a>(&'a Option<char>);

impl core::fmt::Display for DisplayFound<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match *self.0 {
            None => f.write_str("<end of input>"),
            Some(c) if c.is_control() => write!(f, "'\\u{{{:04X}}}'", c as u32),
            Some(c) => write!(f, "'{c}'"),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn display_messages() {
        let err = ParseError::IllegalCharacter {
            found: Some('}'),
            line: 1,
            column: 6,
        };
        assert_eq!(err.to_string(), "illegal character '}' at 1:6");

        let err = ParseError::IllegalCharacter {
            found: None,
            line: 2,
            column: 1,
        };
        assert_eq!(err.to_string(), "illegal character <end of input> at 2:1");

        let err = ParseError::IllegalCharacter {
            found: Some('\n'),
            line: 1,
            column: 2,
        };
        assert_eq!(err.to_string(), "illegal character '\\u{000A}' at 1:2");
    }

    #[test]
    fn tree_memory_maps_to_parse_memory() {
        assert_eq!(ParseError::from(TreeError::Memory), ParseError::Memory);
        assert_eq!(
            ParseError::from(TreeError::Cycle),
            ParseError::BadTreeStructure(TreeError::Cycle)
        );
        assert_eq!(
            TreeError::InvalidChild {
                parent: NodeKind::Object,
                child: NodeKind::Number
            }
            .to_string(),
            "object node cannot hold a number child"
        );
    }
}
