//! A resumable JSON tree parser and stack-free serializer.
//!
//! Input may arrive in chunks of any size, split at any character. The parser
//! builds an arena-backed [`Tree`] as it goes and reports
//! [`Status::Incomplete`] until the top-level value closes. The serializer
//! walks a tree back into compact text without recursion.
//!
//! ```rust
//! use jsontree::{ParserOptions, Status, StreamingParser};
//!
//! let mut parser = StreamingParser::new(ParserOptions::default());
//! for chunk in [r#"{"na"#, r#"me":"tr"#, r#"ee","tags":[tr"#, "ue]}"] {
//!     let _ = parser.parse_chunk(chunk).unwrap();
//! }
//! let root = parser.finish().unwrap();
//!
//! let tree = parser.tree();
//! let name = tree.find_first_label(root, "name").unwrap();
//! assert_eq!(tree.get(name).unwrap().first_child().unwrap().text(), Some("tree"));
//! assert_eq!(
//!     tree.to_json_string(root).unwrap(),
//!     r#"{"name":"tree","tags":[true]}"#
//! );
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod escape;
mod lookup;
mod node;
mod options;
mod parser;
mod serializer;
mod text_buffer;

pub mod chunk_utils;

#[cfg(test)]
mod tests;

pub use error::{ParseError, TreeError};
pub use escape::{UnescapeError, escape_str, unescape_str, write_escaped_str};
pub use node::{Children, NodeId, NodeKind, NodeRef, Tree};
pub use options::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_LITERAL_LEN, ParserOptions};
pub use parser::{ParseState, Status, StreamingParser, parse};
pub use serializer::serialize;
pub use text_buffer::TextBuffer;
