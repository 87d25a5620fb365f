//! Integration tests for Markdown to HTML conversion.

use mdsite::parser::{block, inline};
use mdsite::{
    extract_title, markdown_to_html, markdown_to_html_node, markdown_to_html_node_with_stats,
    BlockType, Error, HtmlNode, SpanKind, TextSpan,
};

const DOCUMENT: &str = "
# Tolkien Fan Club

**I like Tolkien**. Read my [first post here](/majesty)

> All that is gold does not glitter

## Reasons I like Tolkien

* You can spend years studying the legendarium and still not understand its depths
* It can be enjoyed by children and adults alike
- Disney *didn't ruin it*

## My favorite characters (in order)

1. Gandalf
2. Bilbo
3. Sam

![JRR Tolkien sitting](/images/tolkien.png)

```
func main(){
    fmt.Println(\"Hello, World!\")
}
```
";

#[test]
fn test_full_document_html() {
    let html = markdown_to_html(DOCUMENT).unwrap();
    let expected = concat!(
        "<div>",
        "<h1>Tolkien Fan Club</h1>",
        r#"<p><b>I like Tolkien</b>. Read my <a href="/majesty">first post here</a></p>"#,
        "<blockquote>All that is gold does not glitter</blockquote>",
        "<h2>Reasons I like Tolkien</h2>",
        "<ul>",
        "<li>You can spend years studying the legendarium and still not understand its depths</li>",
        "<li>It can be enjoyed by children and adults alike</li>",
        "<li>Disney <i>didn't ruin it</i></li>",
        "</ul>",
        "<h2>My favorite characters (in order)</h2>",
        "<ol><li>Gandalf</li><li>Bilbo</li><li>Sam</li></ol>",
        r#"<p><img src="/images/tolkien.png" alt="JRR Tolkien sitting"></img></p>"#,
        "<pre><code>func main(){\n    fmt.Println(\"Hello, World!\")\n}</code></pre>",
        "</div>",
    );
    assert_eq!(html, expected);
}

#[test]
fn test_full_document_title() {
    assert_eq!(extract_title(DOCUMENT).unwrap(), "Tolkien Fan Club");
}

#[test]
fn test_full_document_stats() {
    let (_, stats) = markdown_to_html_node_with_stats(DOCUMENT).unwrap();
    assert_eq!(stats.heading_count, 3);
    assert_eq!(stats.list_item_count, 6);
    assert_eq!(stats.link_count, 1);
    assert_eq!(stats.image_count, 1);
    assert_eq!(stats.code_block_count, 1);
}

#[test]
fn test_root_children_follow_block_order() {
    let root = markdown_to_html_node("# a\n\npara\n\n- x\n\n> q").unwrap();
    let tags: Vec<_> = root.children().iter().map(HtmlNode::tag).collect();
    assert_eq!(tags, vec![Some("h1"), Some("p"), Some("ul"), Some("blockquote")]);
}

#[test]
fn test_segment_and_classify_pipeline() {
    let blocks = block::segment("# Heading\n\nParagraph one\n\nParagraph two");
    assert_eq!(blocks, vec!["# Heading", "Paragraph one", "Paragraph two"]);

    let types: Vec<_> = blocks.iter().map(|b| block::classify(b)).collect();
    assert_eq!(
        types,
        vec![BlockType::Heading(1), BlockType::Paragraph, BlockType::Paragraph]
    );
}

#[test]
fn test_classification_edge_cases() {
    assert_eq!(block::classify("####### too many"), BlockType::Paragraph);
    assert_eq!(block::classify("1. a\n2. b\n3. c"), BlockType::OrderedList);
    assert_eq!(block::classify("2. a\n3. b"), BlockType::Paragraph);
    assert_eq!(block::classify("* a\n- b"), BlockType::UnorderedList);
}

#[test]
fn test_odd_delimiters_fail() {
    for text in ["a * b", "a ** b", "a ` b", "`a` `b", "**a** **b"] {
        let result = inline::resolve(text);
        assert!(
            matches!(result, Err(Error::MalformedMarkup { .. })),
            "expected failure for {text:?}"
        );
    }
}

#[test]
fn test_resolved_text_drops_syntax() {
    let cases = [
        ("plain", "plain"),
        ("**b** then *i*", "b then i"),
        ("`x` and [y](z)", "x and y"),
        ("![alt](u) tail", "alt tail"),
    ];
    for (input, text) in cases {
        let spans = inline::resolve(input).unwrap();
        let joined: String = spans.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(joined, text);
        assert!(spans.iter().all(|s| !s.text.is_empty()));
    }
}

#[test]
fn test_link_spans_carry_targets() {
    let spans = inline::resolve("[a](u) ![b](v)").unwrap();
    assert_eq!(
        spans,
        vec![
            TextSpan::link("a", "u"),
            TextSpan::normal(" "),
            TextSpan::image("b", "v"),
        ]
    );
    assert!(spans
        .iter()
        .filter(|s| s.kind == SpanKind::Normal)
        .all(|s| s.target.is_none()));
}

#[test]
fn test_malformed_document_has_no_partial_output() {
    let result = markdown_to_html("# fine\n\nstill fine\n\nbroken `here");
    assert!(matches!(result, Err(Error::MalformedMarkup { .. })));
}
