//! End-to-end tests: markdown text to Slack block JSON.

use md2slack::{Config, Error, JsonOptions, UnsupportedInline, markdown_to_blocks};
use serde_json::{Value, json};

fn to_json(markdown: &str) -> Value {
    let blocks = markdown_to_blocks(markdown).unwrap();
    serde_json::to_value(blocks).unwrap()
}

fn section(elements: Value) -> Value {
    json!({"type": "rich_text_section", "elements": elements})
}

#[test]
fn heading_and_paragraph() {
    assert_eq!(
        to_json("# **Title**\n\nHello *there*."),
        json!([
            {"type": "header", "text": {"type": "plain_text", "text": "Title", "emoji": true}},
            {"type": "rich_text", "elements": [section(json!([
                {"type": "text", "text": "Hello "},
                {"type": "text", "text": "there", "style": {"italic": true}},
                {"type": "text", "text": "."}
            ]))]}
        ])
    );
}

#[test]
fn hard_breaks_split_sections() {
    assert_eq!(
        to_json("a  \nb\\\nc"),
        json!([{"type": "rich_text", "elements": [
            section(json!([{"type": "text", "text": "a"}])),
            section(json!([{"type": "text", "text": "b"}])),
            section(json!([{"type": "text", "text": "c"}]))
        ]}])
    );
}

#[test]
fn link_with_bold_label() {
    assert_eq!(
        to_json("[**go**](https://x) ~~old~~"),
        json!([{"type": "rich_text", "elements": [section(json!([
            {"type": "link", "text": "go", "url": "https://x"},
            {"type": "text", "text": " "},
            {"type": "text", "text": "old", "style": {"strike": true}}
        ]))]}])
    );
}

#[test]
fn flat_list_is_one_row() {
    assert_eq!(
        to_json("- one\n- two\n- three"),
        json!([{"type": "rich_text", "elements": [{
            "type": "rich_text_list",
            "style": "bullet",
            "indent": 0,
            "elements": [
                section(json!([{"type": "text", "text": "one"}])),
                section(json!([{"type": "text", "text": "two"}])),
                section(json!([{"type": "text", "text": "three"}]))
            ]
        }]}])
    );
}

#[test]
fn nested_list_rows_become_blocks() {
    let markdown = "1. one\n2. two\n   - a\n   - b\n3. three\n";
    let blocks = to_json(markdown);
    let rows: Vec<(String, u64, usize)> = blocks
        .as_array()
        .unwrap()
        .iter()
        .map(|block| {
            assert_eq!(block["type"], "rich_text");
            let row = &block["elements"][0];
            assert_eq!(row["type"], "rich_text_list");
            (
                row["style"].as_str().unwrap().to_string(),
                row["indent"].as_u64().unwrap(),
                row["elements"].as_array().unwrap().len(),
            )
        })
        .collect();
    assert_eq!(
        rows,
        vec![
            ("ordered".to_string(), 0, 2),
            ("bullet".to_string(), 1, 2),
            ("ordered".to_string(), 0, 1),
        ]
    );
}

#[test]
fn unsupported_blocks_are_skipped() {
    let blocks = to_json("first\n\n```\ncode\n```\n\n> quote\n\n---\n\nsecond");
    let blocks = blocks.as_array().unwrap();
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0]["elements"][0]["elements"][0]["text"], "first");
    assert_eq!(blocks[1]["elements"][0]["elements"][0]["text"], "second");
}

#[test]
fn inline_code_fails_by_default() {
    let err = markdown_to_blocks("use `x` here").unwrap_err();
    assert!(matches!(err, Error::UnsupportedInline("inline_code")));
    assert_eq!(err.to_string(), "Unexpected child type: inline_code");
}

#[test]
fn inline_code_skipped_with_config() {
    let config = Config::parse("[inline]\nunsupported = \"skip\"").unwrap();
    let json =
        md2slack::markdown_to_json("- use `x` here", &config, JsonOptions::default()).unwrap();
    let value: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(
        value[0]["elements"][0]["elements"][0]["elements"],
        json!([{"type": "text", "text": "use "}, {"type": "text", "text": " here"}])
    );
}

#[test]
fn payload_wraps_blocks() {
    let config = Config {
        inline: md2slack::InlineConfig {
            unsupported: UnsupportedInline::Error,
        },
        ..Config::default()
    };
    let options = JsonOptions {
        payload: true,
        pretty: false,
    };
    let json = md2slack::markdown_to_json("# Hi", &config, options).unwrap();
    assert_eq!(
        json,
        r#"{"blocks":[{"type":"header","text":{"type":"plain_text","text":"Hi","emoji":true}}]}"#
    );
}

#[test]
fn same_input_same_output() {
    let markdown = "# T\n\n- a\n  - b\n- c\n\nx  \ny";
    assert_eq!(to_json(markdown), to_json(markdown));
}

#[test]
fn leading_rule_keeps_following_content() {
    let blocks = to_json("---\n\nHello\n\n---\n\nWorld");
    let blocks = blocks.as_array().unwrap();
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0]["elements"][0]["elements"][0]["text"], "Hello");
    assert_eq!(blocks[1]["elements"][0]["elements"][0]["text"], "World");
}
