#![allow(missing_docs, dead_code)]
#![expect(clippy::needless_raw_string_hashes)]

pub const ORIGINAL: &str = r#"
{
    "service": {
        "name": "tree-indexer",
        "replicas": 3,
        "enabled": true
    },
    "listen": [
        {
            "host": "0.0.0.0",
            "port": 8080
        },
        {
            "host": "::1",
            "port": 8443,
            "tls": null
        }
    ],
    "limits": {
        "ratio": 0.75,
        "burst": 1.5e3,
        "floor": -12
    },
    "paths": [
        "/var/lib/tree",
        "C:\\data\\tree"
    ],
    "banner": "caf\u00e9 \"open\"\n",
    "matrix": [
        [
            1,
            2
        ],
        [],
        [
            [
                false
            ]
        ]
    ],
    "empty": {}
}"#;

// The same document in compact form, cut on seams that leave the parser in
// the middle of a label, a keyword, a number, an escape and a unicode escape.
#[rustfmt::skip]
pub const STREAM: [&str; 17] = [
    r#"{"serv"#,                                                  // inside a label
    r#"ice":{"name":"tree-indexer","replicas":3"#,                // number waiting for its delimiter
    r#","enabled":tr"#,                                           // inside a keyword
    r#"ue},"listen":[{"host":"0.0.0.0","port":80"#,               // inside a number
    r#"80},{"host":"::1","port":8443,"tls":nul"#,                 // inside a keyword
    r#"l}],"limits":{"ratio":0."#,                                // after a decimal point
    r#"75,"burst":1.5e"#,                                         // after an exponent marker
    r#"3,"floor":-"#,                                             // after a sign
    r#"12},"paths":["/var/lib/tree","C:\"#,                       // inside an escape
    r#"\data\\tree"],"banner":"caf\u00"#,                         // inside a unicode escape
    r#"e9 \"open\"\n","#,                                         // ends after a comma
    r#""matrix":["#,                                              // array just opened
    r#"[1,2],"#,
    r#"[],[["#,
    r#"false]]]"#,
    r#","empty":{"#,                                              // object just opened
    r#"}}"#,                                                      // closes both objects
];

#[test]
fn assert_stream_example() {
    let streamed = STREAM.join("");

    let value: serde_json::Value = serde_json::from_str(ORIGINAL).unwrap();
    let original = serde_json::to_string(&value).unwrap();
    let reparsed: serde_json::Value = serde_json::from_str(&streamed).unwrap();

    assert_eq!(reparsed, value);
    assert_eq!(serde_json::to_string(&reparsed).unwrap(), original);
}
