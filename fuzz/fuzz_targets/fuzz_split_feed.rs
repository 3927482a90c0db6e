#![no_main]
use std::cell::RefCell;

use arbitrary::Arbitrary;
use jsontree::{ParserOptions, StreamingParser, chunk_utils::parse_chunks, parse};
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
use serde_json::{Map, Value};

const HEADER: usize = 5; // 1 flag + 4-byte seed

thread_local! {
    static RNG: RefCell<SmallRng> = RefCell::new(SmallRng::from_os_rng());
}

fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

/// Mostly well-formed documents, with an occasional libFuzzer mutation on top
/// so the error paths are reached too.
fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if max_size <= HEADER || !(size < HEADER || seed.is_multiple_of(10)) {
        return fuzzer_mutate(data, size, max_size);
    }
    data[0] = with_rng(|rng| rng.next_u32() as u8 & 0x07);
    data[1..HEADER].copy_from_slice(&with_rng(|rng| rng.next_u32().to_le_bytes()));

    let limit = max_size - HEADER;
    let value = loop {
        let len = with_rng(|rng| rng.random_range(0..=limit.max(1) * 2));
        let bytes: Vec<u8> = with_rng(|rng| (0..len).map(|_| rng.random::<u8>()).collect());
        if let Ok(value) = ArbitraryValue::arbitrary(&mut arbitrary::Unstructured::new(&bytes)) {
            break value;
        }
    };
    let serialized = serde_json::to_vec_pretty(&value.0).unwrap_or_default();
    let len = serialized.len().min(limit);
    data[HEADER..HEADER + len].copy_from_slice(&serialized[..len]);
    HEADER + len
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

#[derive(Debug)]
struct ArbitraryValue(Value);

impl<'a> Arbitrary<'a> for ArbitraryValue {
    fn arbitrary(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<Self> {
        let value = match u.choose_index(21)? {
            0 => Value::Null,
            1 => Value::Bool(u.arbitrary()?),
            2 => {
                let n: f64 = u.arbitrary()?;
                Value::Number(
                    serde_json::Number::from_f64(n).ok_or(arbitrary::Error::IncorrectFormat)?,
                )
            }
            3..=10 => Value::String(u.arbitrary()?),
            11..=15 => {
                let elems: Vec<ArbitraryValue> = u.arbitrary()?;
                Value::Array(elems.into_iter().map(|v| v.0).collect())
            }
            _ => {
                let members: Vec<(String, ArbitraryValue)> = u.arbitrary()?;
                Value::Object(Map::from_iter(members.into_iter().map(|(k, v)| (k, v.0))))
            }
        };
        Ok(ArbitraryValue(value))
    }
}

fn options(flags: u8) -> ParserOptions {
    ParserOptions {
        max_literal_len: if flags & 1 != 0 { 8 } else { jsontree::DEFAULT_MAX_LITERAL_LEN },
        max_depth: if flags & 2 != 0 { Some(16) } else { Some(jsontree::DEFAULT_MAX_DEPTH) },
        allow_unicode_whitespace: flags & 4 != 0,
    }
}

fn split_feed(data: &[u8]) {
    if data.len() < HEADER {
        return;
    }
    let flags = data[0];
    let split_seed = u32::from_le_bytes([data[1], data[2], data[3], data[4]]) as u64;
    let text = String::from_utf8_lossy(&data[HEADER..]).into_owned();
    let options = options(flags);

    let whole = parse(&text, options).map(|(tree, root)| {
        tree.check_links().unwrap();
        tree.to_json_string(root).unwrap()
    });

    let chunks = split_into_safe_chunks(&text, split_seed);
    let split = parse_chunks(chunks.iter().copied(), options).map(|(tree, root)| {
        tree.check_links().unwrap();
        tree.to_json_string(root).unwrap()
    });
    // Positions are counted in characters, so errors match exactly too.
    assert_eq!(whole, split);

    // A failed document never leaves nodes behind.
    let mut parser = StreamingParser::new(options);
    for chunk in &chunks {
        if parser.parse_chunk(chunk).is_err() {
            assert!(parser.tree().is_empty());
            break;
        }
    }

    // Compact output is a fixed point, unless the cap cut a number short.
    if let (Ok(compact), false) = (whole, flags & 1 != 0) {
        let (tree, root) = parse(&compact, options).unwrap();
        assert_eq!(tree.to_json_string(root).unwrap(), compact);
    }
}

fuzz_target!(|data: &[u8]| split_feed(data));

/// Split a UTF-8 `&str` into boundary-safe chunks using a deterministic random
/// value to generate splits.
fn split_into_safe_chunks(text: &str, split_seed: u64) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut start = 0;
    let len = text.len();

    while start < len {
        let remaining = len - start;
        let mut size = (split_seed as usize % remaining) + 1;
        while start + size < len && !text.is_char_boundary(start + size) {
            size += 1;
        }
        chunks.push(&text[start..start + size]);
        start += size;
    }

    chunks
}
