use content_reader::{
    markdown_to_document, ContentReader, ItemParagraph, Options, ReaderError,
};
use rstest::rstest;
use serde_json::{json, Value};

fn read(markdown: &str) -> Value {
    let doc = markdown_to_document(markdown).unwrap();
    serde_json::to_value(doc).unwrap()
}

fn read_with(markdown: &str, options: Options) -> Value {
    let doc = ContentReader::with_options(options).read(markdown).unwrap();
    serde_json::to_value(doc).unwrap()
}

fn paragraph(content: Value) -> Value {
    json!({ "type": "paragraph", "content": content })
}

fn text(text: &str) -> Value {
    json!({ "type": "text", "text": text })
}

fn item(content: Value) -> Value {
    json!({ "type": "listItem", "content": content })
}

mod inline {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_text_keeps_special_characters() {
        let markdown = r#"text with 'single', "double", & specials – — © ® ™"#;
        assert_eq!(
            read(markdown),
            json!({ "type": "doc", "content": [paragraph(json!([text(markdown)]))] })
        );
    }

    #[test]
    fn test_accidental_html_stays_literal() {
        assert_eq!(
            read("Some <tag looking> text"),
            json!({
                "type": "doc",
                "content": [paragraph(json!([
                    text("Some "),
                    text("<tag looking>"),
                    text(" text"),
                ]))]
            })
        );
    }

    #[test]
    fn test_basic_formatting() {
        assert_eq!(
            read("Some **bold** and *italic* text"),
            json!({
                "type": "doc",
                "content": [paragraph(json!([
                    text("Some "),
                    { "type": "text", "text": "bold", "marks": [{ "type": "bold" }] },
                    text(" and "),
                    { "type": "text", "text": "italic", "marks": [{ "type": "italic" }] },
                    text(" text"),
                ]))]
            })
        );
    }

    #[test]
    fn test_nested_formatting_stacks_outermost_last() {
        let markdown =
            "**_bold italic_** text with **bold *then italic*** and *italic **then bold***";
        assert_eq!(
            read(markdown),
            json!({
                "type": "doc",
                "content": [paragraph(json!([
                    {
                        "type": "text",
                        "text": "bold italic",
                        "marks": [{ "type": "italic" }, { "type": "bold" }]
                    },
                    text(" text with "),
                    { "type": "text", "text": "bold ", "marks": [{ "type": "bold" }] },
                    {
                        "type": "text",
                        "text": "then italic",
                        "marks": [{ "type": "italic" }, { "type": "bold" }]
                    },
                    text(" and "),
                    { "type": "text", "text": "italic ", "marks": [{ "type": "italic" }] },
                    {
                        "type": "text",
                        "text": "then bold",
                        "marks": [{ "type": "bold" }, { "type": "italic" }]
                    },
                ]))]
            })
        );
    }

    #[test]
    fn test_triple_emphasis() {
        assert_eq!(
            read("***bold italic both***"),
            json!({
                "type": "doc",
                "content": [paragraph(json!([{
                    "type": "text",
                    "text": "bold italic both",
                    "marks": [{ "type": "bold" }, { "type": "italic" }]
                }]))]
            })
        );
    }

    #[test]
    fn test_entity_references_stay_as_written() {
        assert_eq!(
            read("Tom &amp; Jerry"),
            json!({ "type": "doc", "content": [paragraph(json!([text("Tom &amp; Jerry")]))] })
        );
    }

    #[test]
    fn test_backslash_escapes_stay_as_written() {
        assert_eq!(
            read(r"not \*emphasis\* here"),
            json!({
                "type": "doc",
                "content": [paragraph(json!([text(r"not \*emphasis\* here")]))]
            })
        );
    }

    #[test]
    fn test_inline_code_decodes_quotes() {
        assert_eq!(
            read("Use the `console.log('test')` function."),
            json!({
                "type": "doc",
                "content": [paragraph(json!([
                    text("Use the "),
                    {
                        "type": "text",
                        "text": "console.log('test')",
                        "marks": [{ "type": "code" }]
                    },
                    text(" function."),
                ]))]
            })
        );
    }
}

mod blocks {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_headings() {
        assert_eq!(
            read("# Main Title\n## Subtitle"),
            json!({
                "type": "doc",
                "content": [
                    {
                        "type": "heading",
                        "attrs": { "level": 1, "id": null },
                        "content": [text("Main Title")]
                    },
                    {
                        "type": "heading",
                        "attrs": { "level": 2, "id": null },
                        "content": [text("Subtitle")]
                    }
                ]
            })
        );
    }

    #[test]
    fn test_eyebrow_headings_when_enabled() {
        let options = Options {
            eyebrow_headings: true,
            ..Default::default()
        };
        assert_eq!(
            read_with("### Eyebrow\n# Main Title", options),
            json!({
                "type": "doc",
                "content": [
                    { "type": "eyebrowHeading", "content": [text("Eyebrow")] },
                    {
                        "type": "heading",
                        "attrs": { "level": 1, "id": null },
                        "content": [text("Main Title")]
                    }
                ]
            })
        );
    }

    #[test]
    fn test_dividers() {
        assert_eq!(
            read("Text\n\n---\n\nMore text"),
            json!({
                "type": "doc",
                "content": [
                    paragraph(json!([text("Text")])),
                    { "type": "divider", "attrs": { "style": "line", "size": "normal" } },
                    paragraph(json!([text("More text")])),
                ]
            })
        );
    }

    #[rstest]
    #[case("<!-- Comment -->")]
    #[case("<!-- Comment -->\nText\n<!-- Another comment -->")]
    fn test_html_comments_are_dropped(#[case] markdown: &str) {
        let doc = read(markdown);
        let expected: Vec<Value> = if markdown.contains("Text") {
            vec![paragraph(json!([text("Text")]))]
        } else {
            vec![]
        };
        assert_eq!(doc, json!({ "type": "doc", "content": expected }));
    }

    #[test]
    fn test_blockquote() {
        assert_eq!(
            read("> Quoted **words**"),
            json!({
                "type": "doc",
                "content": [{
                    "type": "blockquote",
                    "content": [paragraph(json!([
                        text("Quoted "),
                        { "type": "text", "text": "words", "marks": [{ "type": "bold" }] },
                    ]))]
                }]
            })
        );
    }
}

mod links_and_images {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_link_with_title() {
        assert_eq!(
            read(r#"[Link text](https://example.com "Title")"#),
            json!({
                "type": "doc",
                "content": [paragraph(json!([{
                    "type": "text",
                    "text": "Link text",
                    "marks": [{
                        "type": "link",
                        "attrs": { "href": "https://example.com", "title": "Title" }
                    }]
                }]))]
            })
        );
    }

    #[test]
    fn test_button_link() {
        assert_eq!(
            read("[Button Text](button:https://example.com)"),
            json!({
                "type": "doc",
                "content": [paragraph(json!([{
                    "type": "text",
                    "text": "Button Text",
                    "marks": [{
                        "type": "button",
                        "attrs": {
                            "href": "https://example.com",
                            "title": null,
                            "variant": "primary"
                        }
                    }]
                }]))]
            })
        );
    }

    #[rstest]
    #[case("![Title](path/to/image.svg)", "path/to/image.svg", "content", json!("Title"), json!(null))]
    #[case(
        r#"![Alt](icon:path/to/image.svg "Caption")"#,
        "path/to/image.svg",
        "icon",
        json!("Alt"),
        json!("Caption")
    )]
    #[case("![](https://test.com)", "https://test.com", "content", json!(null), json!(null))]
    fn test_standalone_images(
        #[case] markdown: &str,
        #[case] src: &str,
        #[case] role: &str,
        #[case] alt: Value,
        #[case] title: Value,
    ) {
        assert_eq!(
            read(markdown),
            json!({
                "type": "doc",
                "content": [{
                    "type": "image",
                    "attrs": { "src": src, "alt": alt, "title": title, "role": role }
                }]
            })
        );
    }

    #[test]
    fn test_images_split_paragraphs() {
        assert_eq!(
            read("Before ![a](a.png) after"),
            json!({
                "type": "doc",
                "content": [
                    paragraph(json!([text("Before ")])),
                    {
                        "type": "image",
                        "attrs": { "src": "a.png", "alt": "a", "title": null, "role": "content" }
                    },
                    paragraph(json!([text(" after")])),
                ]
            })
        );
    }

    #[test]
    fn test_image_in_link_label_becomes_alt_text() {
        assert_eq!(
            read("[![a](x.png)](http://y)"),
            json!({
                "type": "doc",
                "content": [paragraph(json!([{
                    "type": "text",
                    "text": "a",
                    "marks": [{ "type": "link", "attrs": { "href": "http://y", "title": null } }]
                }]))]
            })
        );
    }

    #[test]
    fn test_configured_default_role() {
        let options = Options {
            default_image_role: "image".to_string(),
            ..Default::default()
        };
        let doc = read_with("![x](pic.png)", options);
        assert_eq!(doc["content"][0]["attrs"]["role"], json!("image"));
    }
}

mod code {
    use super::*;
    use pretty_assertions::assert_eq;

    fn code_block(language: Value, filename: Value, code: &str) -> Value {
        json!({
            "type": "doc",
            "content": [{
                "type": "codeBlock",
                "attrs": { "language": language, "filename": filename },
                "content": [text(code)]
            }]
        })
    }

    #[test]
    fn test_fenced_code_keeps_quotes() {
        assert_eq!(
            read("```javascript\nconst x = 1;\nconsole.log('x:', x);\n```"),
            code_block(
                json!("javascript"),
                json!(null),
                "const x = 1;\nconsole.log('x:', x);"
            )
        );
    }

    #[test]
    fn test_fenced_code_with_filename() {
        assert_eq!(
            read("```javascript:example.js\nconst x = 1;\n```"),
            code_block(json!("javascript"), json!("example.js"), "const x = 1;")
        );
    }

    #[test]
    fn test_indented_code() {
        assert_eq!(
            read("    const x = 1;\n    console.log(x);"),
            code_block(json!(null), json!(null), "const x = 1;\nconsole.log(x);")
        );
    }

    #[test]
    fn test_empty_lines_are_preserved() {
        assert_eq!(
            read("```\nline 1\n\nline 2\n```"),
            code_block(json!(null), json!(null), "line 1\n\nline 2")
        );
    }
}

mod lists {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bullet_list() {
        assert_eq!(
            read("- Item 1\n- Item 2"),
            json!({
                "type": "doc",
                "content": [{
                    "type": "bulletList",
                    "content": [
                        item(json!([paragraph(json!([text("Item 1")]))])),
                        item(json!([paragraph(json!([text("Item 2")]))])),
                    ]
                }]
            })
        );
    }

    #[test]
    fn test_ordered_list_start() {
        let doc = read("3. Third\n4. Fourth");
        assert_eq!(doc["content"][0]["type"], json!("orderedList"));
        assert_eq!(doc["content"][0]["attrs"], json!({ "start": 3 }));
    }

    #[test]
    fn test_ordered_list_zero_start_becomes_one() {
        let doc = read("0. zero\n1. one");
        assert_eq!(doc["content"][0]["attrs"], json!({ "start": 1 }));
    }

    #[test]
    fn test_nested_lists() {
        let markdown = "
- First item
  - Nested item 1
  - Nested item 2
- Second item
  1. Nested ordered 1
  2. Nested ordered 2";
        assert_eq!(
            read(markdown),
            json!({
                "type": "doc",
                "content": [{
                    "type": "bulletList",
                    "content": [
                        item(json!([
                            paragraph(json!([text("First item")])),
                            {
                                "type": "bulletList",
                                "content": [
                                    item(json!([paragraph(json!([text("Nested item 1")]))])),
                                    item(json!([paragraph(json!([text("Nested item 2")]))])),
                                ]
                            }
                        ])),
                        item(json!([
                            paragraph(json!([text("Second item")])),
                            {
                                "type": "orderedList",
                                "attrs": { "start": 1 },
                                "content": [
                                    item(json!([paragraph(json!([text("Nested ordered 1")]))])),
                                    item(json!([paragraph(json!([text("Nested ordered 2")]))])),
                                ]
                            }
                        ])),
                    ]
                }]
            })
        );
    }

    #[test]
    fn test_formatted_items() {
        let doc = read("- Item with **bold** text");
        assert_eq!(
            doc["content"][0]["content"][0]["content"][0]["content"][1],
            json!({ "type": "text", "text": "bold", "marks": [{ "type": "bold" }] })
        );
    }

    #[rstest]
    #[case(ItemParagraph::Synthesize, json!(["paragraph", "bulletList"]))]
    #[case(ItemParagraph::Omit, json!(["bulletList"]))]
    fn test_item_with_only_nested_list(#[case] policy: ItemParagraph, #[case] expected: Value) {
        let options = Options {
            item_paragraph: policy,
            ..Default::default()
        };
        let doc = read_with("- - Deep", options);
        let types: Vec<Value> = doc["content"][0]["content"][0]["content"]
            .as_array()
            .unwrap()
            .iter()
            .map(|node| node["type"].clone())
            .collect();
        assert_eq!(Value::Array(types), expected);
    }
}

mod tables {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cell(content: Value, align: Value, header: bool) -> Value {
        json!({
            "type": "tableCell",
            "attrs": { "colspan": 1, "rowspan": 1, "align": align, "header": header },
            "content": [paragraph(content)]
        })
    }

    #[test]
    fn test_basic_table() {
        let markdown = "
| Header 1 | Header 2 |
|----------|----------|
| Cell 1   | Cell 2   |";
        assert_eq!(
            read(markdown),
            json!({
                "type": "doc",
                "content": [{
                    "type": "table",
                    "content": [
                        {
                            "type": "tableRow",
                            "content": [
                                cell(json!([text("Header 1")]), json!(null), true),
                                cell(json!([text("Header 2")]), json!(null), true),
                            ]
                        },
                        {
                            "type": "tableRow",
                            "content": [
                                cell(json!([text("Cell 1")]), json!(null), false),
                                cell(json!([text("Cell 2")]), json!(null), false),
                            ]
                        }
                    ]
                }]
            })
        );
    }

    #[test]
    fn test_alignment_applies_to_every_row() {
        let markdown = "
| Left | Center | Right |
|:-----|:------:|------:|
| 1    | 2      | 3     |
| 4    | 5      | 6     |";
        let doc = read(markdown);
        let rows = doc["content"][0]["content"].as_array().unwrap();
        assert_eq!(rows.len(), 3);
        for row in rows {
            let aligns: Vec<Value> = row["content"]
                .as_array()
                .unwrap()
                .iter()
                .map(|cell| cell["attrs"]["align"].clone())
                .collect();
            assert_eq!(aligns, vec![json!("left"), json!("center"), json!("right")]);
        }
    }

    #[test]
    fn test_formatted_cells() {
        let markdown = "
| Style | Example |
|-------|---------|
| Bold | **text** |
| Link | [link](https://example.com) |";
        let doc = read(markdown);
        let rows = &doc["content"][0]["content"];
        assert_eq!(
            rows[1]["content"][1],
            cell(
                json!([{ "type": "text", "text": "text", "marks": [{ "type": "bold" }] }]),
                json!(null),
                false
            )
        );
        assert_eq!(
            rows[2]["content"][1]["content"][0]["content"][0]["marks"],
            json!([{ "type": "link", "attrs": { "href": "https://example.com", "title": null } }])
        );
    }
}

mod errors {
    use super::*;

    #[test]
    fn test_deep_nesting_fails_with_depth_error() {
        let markdown = ">".repeat(30) + " deep";
        let options = Options {
            max_depth: 10,
            ..Default::default()
        };
        let err = ContentReader::with_options(options).read(&markdown).unwrap_err();
        assert!(matches!(err, ReaderError::DepthExceeded { limit: 10, .. }));
        assert!(err.to_string().starts_with("Nesting too deep: limit of 10 levels"));
    }

    #[test]
    fn test_default_ceiling_accepts_ordinary_nesting() {
        let markdown = ">".repeat(30) + " deep";
        assert!(markdown_to_document(&markdown).is_ok());
    }
}
