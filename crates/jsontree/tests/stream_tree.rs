#![expect(missing_docs)]
#![allow(clippy::needless_raw_string_hashes)]

mod common;

use jsontree::{
    NodeKind, NodeRef, ParserOptions, Status, StreamingParser, chunk_utils::produce_chunks, parse,
    unescape_str,
};

use crate::common::{ORIGINAL, STREAM};

/// One line per node, indented by depth.
fn render(node: NodeRef<'_>) -> String {
    fn walk(node: NodeRef<'_>, depth: usize, lines: &mut Vec<String>) {
        let mut line = "  ".repeat(depth);
        line.push_str(&node.kind().to_string());
        if let Some(text) = node.text() {
            line.push(' ');
            line.push_str(text);
        }
        lines.push(line);
        for child in node.children() {
            walk(child, depth + 1, lines);
        }
    }
    let mut lines = Vec::new();
    walk(node, 0, &mut lines);
    lines.join("\n")
}

#[test]
fn streamed_chunks_build_the_whole_document() {
    let mut parser = StreamingParser::new(ParserOptions::default());
    let (last, rest) = STREAM.split_last().unwrap();
    for chunk in rest {
        assert_eq!(parser.parse_chunk(chunk), Ok(Status::Incomplete), "{chunk}");
    }
    assert_eq!(parser.parse_chunk(last), Ok(Status::Complete));

    let root = parser.finish().unwrap();
    let tree = parser.tree();
    assert_eq!(tree.to_json_string(root).unwrap(), STREAM.concat());

    let (whole, whole_root) = parse(ORIGINAL, ParserOptions::default()).unwrap();
    assert_eq!(render(whole.get(whole_root).unwrap()), render(tree.get(root).unwrap()));
}

#[test]
fn pretty_and_compact_forms_serialize_identically() {
    let (tree, root) = parse(ORIGINAL, ParserOptions::default()).unwrap();
    assert_eq!(tree.to_json_string(root).unwrap(), STREAM.concat());
}

#[test]
fn lookups_on_the_streamed_document() {
    let (tree, root) = parse(&STREAM.concat(), ParserOptions::default()).unwrap();
    let root = tree.get(root).unwrap();

    let service = root.get_value("service").unwrap();
    assert_eq!(service.get_value("replicas").unwrap().text(), Some("3"));
    assert_eq!(service.get_value("enabled").unwrap().kind(), NodeKind::True);

    let listen = root.get_value("listen").unwrap();
    let second = listen.children().nth(1).unwrap();
    assert_eq!(second.get_value("tls").unwrap().kind(), NodeKind::Null);
    assert!(listen.children().next().unwrap().get_value("tls").is_none());

    let banner = root.get_value("banner").unwrap();
    assert_eq!(banner.text(), Some(r#"caf\u00e9 \"open\"\n"#));
    assert_eq!(unescape_str(banner.text().unwrap()).unwrap(), "café \"open\"\n");

    let paths: Vec<_> = root
        .get_value("paths")
        .unwrap()
        .children()
        .map(|p| unescape_str(p.text().unwrap()).unwrap())
        .collect();
    assert_eq!(paths, ["/var/lib/tree", r"C:\data\tree"]);
}

#[test]
fn agrees_with_serde_json_for_every_chunk_count() {
    let expected: serde_json::Value = serde_json::from_str(ORIGINAL).unwrap();
    for parts in [1, 2, 3, 7, 64, ORIGINAL.len()] {
        let mut parser = StreamingParser::new(ParserOptions::default());
        for chunk in produce_chunks(ORIGINAL, parts) {
            let _ = parser.parse_chunk(chunk).unwrap();
        }
        let root = parser.finish().unwrap();
        let text = parser.tree().to_json_string(root).unwrap();
        let actual: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(actual, expected, "{parts} parts");
    }
}

#[test]
fn snapshot_tree_shape() {
    let (tree, root) = parse(
        r#"{"a":[1,"x",{"b":null}],"c":true}"#,
        ParserOptions::default(),
    )
    .unwrap();
    insta::assert_snapshot!(render(tree.get(root).unwrap()), @r"
    object
      string a
        array
          number 1
          string x
          object
            string b
              null
      string c
        true
    ");
}
