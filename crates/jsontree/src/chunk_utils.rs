//! Helpers for feeding one document as several chunks.
use alloc::vec::Vec;

use crate::{
    error::ParseError,
    node::{NodeId, Tree},
    options::ParserOptions,
    parser::StreamingParser,
};

/// Split `payload` into approximately equal-sized chunks without
/// breaking UTF-8 code points.
///
/// # Panics
///
/// Panics if `parts` is zero.
#[must_use]
pub fn produce_chunks(payload: &str, parts: usize) -> Vec<&str> {
    assert!(parts > 0);
    let len = payload.len();
    let chunk_size = len.div_ceil(parts);
    let mut chunks = Vec::new();
    let mut start = 0;
    while start < len {
        let mut end = core::cmp::min(start + chunk_size, len);
        while end < len && !payload.is_char_boundary(end) {
            end += 1;
        }
        chunks.push(&payload[start..end]);
        start = end;
    }
    chunks
}

/// Split `payload` before each of the given character offsets.
///
/// Offsets are counted in `char`s, may come in any order, and are clamped to
/// the payload; duplicates and offsets at either end produce no empty chunks.
#[must_use]
pub fn split_at_chars<'a>(payload: &'a str, offsets: &[usize]) -> Vec<&'a str> {
    let mut cuts: Vec<usize> = offsets
        .iter()
        .filter_map(|&offset| payload.char_indices().nth(offset).map(|(byte, _)| byte))
        .filter(|&byte| byte > 0)
        .collect();
    cuts.sort_unstable();
    cuts.dedup();

    let mut chunks = Vec::with_capacity(cuts.len() + 1);
    let mut start = 0;
    for cut in cuts {
        chunks.push(&payload[start..cut]);
        start = cut;
    }
    if start < payload.len() {
        chunks.push(&payload[start..]);
    }
    chunks
}

/// Feeds `chunks` in order to a fresh parser and finishes the document.
///
/// # Errors
///
/// The first [`ParseError`] returned by any chunk or by the final
/// [`finish`](StreamingParser::finish).
pub fn parse_chunks<'a, I>(chunks: I, options: ParserOptions) -> Result<(Tree, NodeId), ParseError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut parser = StreamingParser::new(options);
    for chunk in chunks {
        let _ = parser.parse_chunk(chunk)?;
    }
    let root = parser.finish()?;
    let (tree, _) = parser.into_tree();
    Ok((tree, root))
}
