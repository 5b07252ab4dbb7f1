use std::collections::HashMap;

use scraper::Html;

pub type ElementAttributes = HashMap<String, String>;
pub type ElementChildren = Vec<Node>;

/// A node of an owned document tree
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Element(ElementNode),
    Text(TextNode),
}

impl Node {
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(TextNode {
            content: content.into(),
        })
    }

    pub fn as_element(&self) -> Option<&ElementNode> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }
}

impl From<ElementNode> for Node {
    fn from(element: ElementNode) -> Self {
        Node::Element(element)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextNode {
    pub content: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementNode {
    tag_name: String,
    attributes: ElementAttributes,
    pub children: ElementChildren,
}

impl ElementNode {
    /// Tag names are kept lowercase so comparisons are case-insensitive
    pub fn new(tag_name: &str) -> Self {
        Self {
            tag_name: tag_name.to_ascii_lowercase(),
            attributes: ElementAttributes::new(),
            children: ElementChildren::new(),
        }
    }

    pub fn with_attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attributes
            .insert(name.to_ascii_lowercase(), value.into());
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_text(self, content: impl Into<String>) -> Self {
        self.with_child(Node::text(content))
    }

    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    fn from_parsed(element: &scraper::node::Element) -> Self {
        let mut node = Self::new(element.name());
        for (name, value) in element.attrs() {
            // html5ever keeps the first occurrence of a duplicated attribute
            node.attributes
                .entry(name.to_ascii_lowercase())
                .or_insert_with(|| value.to_string());
        }
        node
    }
}

impl From<TextNode> for Node {
    fn from(text: TextNode) -> Self {
        Node::Text(text)
    }
}

/// An owned, fully parsed HTML document
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    root: Node,
    /// Set when parsing produced a `body`, which every HTML document has
    has_body: bool,
}

impl Document {
    pub fn from_root(root: impl Into<Node>) -> Self {
        Self {
            root: root.into(),
            has_body: false,
        }
    }

    /// Parse HTML text into an owned tree.
    ///
    /// Malformed markup is recovered by html5ever the way a browser would, so
    /// the result always has an `html` root with `head` and `body` children.
    /// Comments, doctypes and processing instructions are dropped.
    pub fn parse(html: &str) -> Self {
        let parsed = Html::parse_document(html);
        let root = parsed.root_element();

        let mut stack = vec![(ElementNode::from_parsed(root.value()), root.children())];
        let mut finished_root = None;

        while let Some((element, children)) = stack.last_mut() {
            match children.next() {
                Some(child) => match child.value() {
                    scraper::Node::Text(text) => element.children.push(Node::text(&**text)),
                    scraper::Node::Element(child_element) => {
                        stack.push((ElementNode::from_parsed(child_element), child.children()));
                    }
                    _ => {}
                },
                None => {
                    if let Some((finished, _)) = stack.pop() {
                        match stack.last_mut() {
                            Some((parent, _)) => parent.children.push(Node::Element(finished)),
                            None => finished_root = Some(finished),
                        }
                    }
                }
            }
        }

        let mut document = Self::from_root(finished_root.unwrap_or_else(|| ElementNode::new("html")));
        document.has_body = document.find_body().is_some();
        document
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub(crate) fn root_mut(&mut self) -> &mut Node {
        &mut self.root
    }

    /// The subtree extraction starts from: the first `body` element in
    /// document order. A hand-built tree without one is used whole.
    ///
    /// A parsed document whose body has since been stripped has no content
    /// root; falling back to the root would surface `head` text.
    pub fn content_root(&self) -> Option<&Node> {
        match self.find_body() {
            Some(body) => Some(body),
            None if self.has_body => None,
            None => Some(&self.root),
        }
    }

    fn find_body(&self) -> Option<&Node> {
        let mut pending = vec![&self.root];
        while let Some(node) = pending.pop() {
            if let Node::Element(element) = node {
                if element.tag_name() == "body" {
                    return Some(node);
                }
                pending.extend(element.children.iter().rev());
            }
        }
        None
    }
}

impl Drop for Document {
    // Tear the tree down iteratively so pathological nesting cannot overflow the stack
    fn drop(&mut self) {
        let mut pending = match &mut self.root {
            Node::Element(element) => std::mem::take(&mut element.children),
            Node::Text(_) => return,
        };
        while let Some(node) = pending.pop() {
            if let Node::Element(mut element) = node {
                pending.append(&mut element.children);
            }
        }
    }
}
