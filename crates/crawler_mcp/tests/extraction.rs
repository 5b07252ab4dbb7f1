use mcp_server_web_crawler::extract::{
    Denylist, Document, Extractor, html_to_text,
    dom::{ElementNode, Node},
    normalize::normalize,
    preprocess::DEFAULT_DENYLIST,
    walker,
};
use proptest::prelude::*;

fn text(html: &str) -> String {
    html_to_text(html, &Denylist::default())
}

#[test]
fn test_inline_tags_are_transparent_and_div_is_block() {
    let document = Document::parse("<div>Hello <b>world</b></div>");

    assert_eq!(walker::extract(document.content_root().unwrap()), "\nHello world");
}

#[test]
fn test_anchor_becomes_link_token() {
    assert_eq!(
        text(r#"<a href="http://x.com">Link</a>"#),
        "[Link](http://x.com)"
    );
}

#[test]
fn test_blank_line_runs_collapse_to_one() {
    let html = "<p>one</p><br><br><br><p>two</p>";
    let raw = walker::extract(Document::parse(html).content_root().unwrap());
    assert!(raw.contains("one\n\n\n\ntwo"));

    assert_eq!(text(html), "one\n\ntwo");
}

#[test]
fn test_script_never_reaches_output() {
    assert_eq!(text("<script>evil()</script><p>Safe</p>"), "Safe");
}

#[test]
fn test_image_only_page() {
    assert_eq!(text(r#"<img alt="cat" src="/c.png">"#), "![cat](/c.png)");
}

#[test]
fn test_realistic_page() {
    let html = r#"<!DOCTYPE html>
<html>
  <head>
    <title>Release notes</title>
    <style>body { margin: 0 }</style>
  </head>
  <body>
    <header><a href="/">Logo</a></header>
    <nav><ul><li><a href="/docs">Docs</a></li></ul></nav>
    <main>
      <h1>Version 2.0</h1>
      <p>We shipped a <a href="https://example.com/blog">new   blog</a>.</p>
      <ul>
        <li>Faster</li>
        <li>Smaller <img src="/chart.png" alt="chart"></li>
      </ul>
    </main>
    <footer>&copy; Example</footer>
  </body>
</html>"#;

    let out = text(html);

    assert!(out.starts_with("Version 2.0"));
    assert!(out.contains("We shipped a [new blog](https://example.com/blog)."));
    assert!(out.contains("\nFaster"));
    assert!(out.contains("\nSmaller ![chart](/chart.png)"));
    assert!(!out.contains("Logo"));
    assert!(!out.contains("Docs"));
    assert!(!out.contains("Example"));
    assert!(!out.contains("Release notes"));
    assert!(!out.contains("\n\n\n"));
    assert_eq!(out, out.trim());
}

#[test]
fn test_extractor_runs_on_prebuilt_tree() {
    let body = ElementNode::new("body")
        .with_child(ElementNode::new("p").with_text("kept"))
        .with_child(ElementNode::new("aside").with_text("dropped"));

    let out = Extractor::default().extract_document(Document::from_root(body));

    assert_eq!(out, "kept");
}

const WORD: &str = "[a-y]{1,6}";

/// Random trees whose denylisted subtrees, and only those, contain the letter z
fn tree() -> impl Strategy<Value = Node> {
    let leaf = prop_oneof![
        "[a-y \n\t]{0,8}".prop_map(Node::text),
        (WORD, WORD).prop_map(|(alt, src)| {
            ElementNode::new("img")
                .with_attr("alt", alt)
                .with_attr("src", src)
                .into()
        }),
    ];

    leaf.prop_recursive(6, 96, 4, |inner| {
        prop_oneof![
            (
                prop::sample::select(vec!["div", "p", "li", "br", "span", "b", "section"]),
                prop::collection::vec(inner.clone(), 0..4),
            )
                .prop_map(|(tag, children)| with_children(ElementNode::new(tag), children)),
            (WORD, prop::collection::vec(inner.clone(), 0..3)).prop_map(|(href, children)| {
                with_children(ElementNode::new("a").with_attr("href", href), children)
            }),
            (
                prop::sample::select(DEFAULT_DENYLIST.to_vec()),
                prop::collection::vec(inner, 0..3),
            )
                .prop_map(|(tag, children)| {
                    with_children(ElementNode::new(tag).with_text("zzz"), children)
                }),
        ]
    })
}

fn with_children(mut element: ElementNode, children: Vec<Node>) -> Node {
    element.children.extend(children);
    element.into()
}

proptest! {
    #[test]
    fn denylisted_text_never_appears(children in prop::collection::vec(tree(), 0..6)) {
        let body = with_children(ElementNode::new("body"), children);
        let out = Extractor::default().extract_document(Document::from_root(body));

        prop_assert!(!out.contains('z'));
        prop_assert!(!out.contains("\n\n\n"));
        prop_assert_eq!(out.trim(), out.as_str());
    }

    #[test]
    fn normalized_output_is_stable(children in prop::collection::vec(tree(), 0..6)) {
        let body = with_children(ElementNode::new("body"), children);
        let out = Extractor::default().extract_document(Document::from_root(body));

        prop_assert_eq!(normalize(&out), out);
    }
}
