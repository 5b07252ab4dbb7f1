use std::sync::LazyLock;

use regex::Regex;

use super::dom::{ElementNode, Node};

/// Elements that start on a fresh line
pub const BLOCK_TAGS: &[&str] = &["br", "p", "div", "li"];

/// Stands in for the `href` of an anchor that has none
pub const MISSING_HREF: &str = "";

// `\s` plus U+FEFF
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\x{FEFF}]+").expect("valid regex pattern"));

/// Pending work for the traversal. Anchors need their closing token emitted
/// after all of their descendants, so it waits on the stack as a literal.
enum Step<'a> {
    Visit(&'a Node),
    CloseLink(&'a str),
}

/// Collapse each whitespace run in a text node to a single space, without trimming
pub fn collapse_whitespace(text: &str) -> std::borrow::Cow<'_, str> {
    WHITESPACE_RUN.replace_all(text, " ")
}

/// Walk `node` depth-first in document order and render it as
/// markdown-flavored text.
///
/// | node                   | output                                |
/// |------------------------|---------------------------------------|
/// | text                   | text with whitespace runs collapsed   |
/// | `a`                    | `[children](href)`                    |
/// | `img`                  | `![alt](src)`, children ignored        |
/// | `br`, `p`, `div`, `li` | `\n` then children                    |
/// | anything else          | children                              |
///
/// Uses an explicit stack, so nesting depth is bounded by memory only.
pub fn extract(node: &Node) -> String {
    let mut out = String::new();
    let mut stack = vec![Step::Visit(node)];

    while let Some(step) = stack.pop() {
        match step {
            Step::CloseLink(href) => {
                out.push_str("](");
                out.push_str(href);
                out.push(')');
            }
            Step::Visit(Node::Text(text)) => out.push_str(&collapse_whitespace(&text.content)),
            Step::Visit(Node::Element(element)) => {
                visit_element(element, &mut out, &mut stack);
            }
        }
    }

    out
}

fn visit_element<'a>(element: &'a ElementNode, out: &mut String, stack: &mut Vec<Step<'a>>) {
    match element.tag_name() {
        "a" => {
            out.push('[');
            stack.push(Step::CloseLink(element.attr("href").unwrap_or(MISSING_HREF)));
        }
        "img" => {
            out.push_str("![");
            out.push_str(element.attr("alt").unwrap_or_default());
            out.push_str("](");
            out.push_str(element.attr("src").unwrap_or_default());
            out.push(')');
            return;
        }
        tag if BLOCK_TAGS.contains(&tag) => out.push('\n'),
        _ => {}
    }

    stack.extend(element.children.iter().rev().map(Step::Visit));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::dom::Document;
    use proptest::prelude::*;

    fn walk(html: &str) -> String {
        extract(Document::parse(html).content_root().unwrap())
    }

    #[test]
    fn test_block_and_transparent_tags() {
        assert_eq!(walk("<div>Hello <b>world</b></div>"), "\nHello world");
    }

    #[test]
    fn test_anchor() {
        assert_eq!(
            walk(r#"<a href="http://x.com">Link</a>"#),
            "[Link](http://x.com)"
        );
    }

    #[test]
    fn test_anchor_with_nested_markup() {
        assert_eq!(
            walk(r#"<a href="/a"><em>Read</em> <img alt="more" src="m.png"></a>"#),
            "[Read ![more](m.png)](/a)"
        );
    }

    #[test]
    fn test_anchor_without_href_keeps_token() {
        assert_eq!(walk("<a>orphan</a>"), "[orphan]()");
    }

    #[test]
    fn test_image_defaults_and_ignores_children() {
        let image = ElementNode::new("img")
            .with_attr("src", "/c.png")
            .with_text("fallback");

        assert_eq!(extract(&Node::Element(image)), "![](/c.png)");
        assert_eq!(walk("<img>"), "![]()");
        assert_eq!(walk(r#"<img alt="cat" src="/c.png">"#), "![cat](/c.png)");
    }

    #[test]
    fn test_block_tags_prefix_newline_only() {
        assert_eq!(walk("<p>a</p><p>b</p>"), "\na\nb");
        assert_eq!(walk("one<br>two"), "one\ntwo");
        assert_eq!(walk("<ul><li>x</li><li>y</li></ul>"), "\nx\ny");
    }

    #[test]
    fn test_byte_order_mark_counts_as_whitespace() {
        assert_eq!(collapse_whitespace("a\u{FEFF}\u{FEFF}b"), "a b");
        assert_eq!(collapse_whitespace("\u{FEFF}a \u{FEFF}\u{00A0}b"), " a b");
    }

    #[test]
    fn test_text_whitespace_collapses_without_trim() {
        let root = ElementNode::new("span")
            .with_text("  a\t\n b  ")
            .with_text("c");

        assert_eq!(extract(&Node::Element(root)), " a b c");
    }

    #[test]
    fn test_siblings_concatenate_in_order() {
        assert_eq!(walk("<span>1</span><span>2</span>3<i>4</i>"), "1234");
    }

    #[test]
    fn test_deep_nesting_does_not_overflow() {
        let mut node = Node::text("bottom");
        for _ in 0..100_000 {
            node = ElementNode::new("span").with_child(node).into();
        }
        assert_eq!(extract(&node), "bottom");

        // Dismantle iteratively so the test itself does not overflow on drop
        let mut pending = vec![node];
        while let Some(node) = pending.pop() {
            if let Node::Element(mut element) = node {
                pending.append(&mut element.children);
            }
        }
    }

    proptest! {
        #[test]
        fn text_nodes_never_emit_double_spaces(text in "[ \t\n\ra-z]{0,64}") {
            let out = collapse_whitespace(&text);
            prop_assert!(!out.contains("  "));
            prop_assert!(!out.contains('\n'));
        }

        #[test]
        fn anchors_render_text_and_href(text in "[a-z]{1,16}", href in "[a-z/:.]{1,24}") {
            let anchor = ElementNode::new("a").with_attr("href", href.clone()).with_text(text.clone());
            prop_assert_eq!(extract(&Node::Element(anchor)), format!("[{}]({})", text, href));
        }
    }
}
