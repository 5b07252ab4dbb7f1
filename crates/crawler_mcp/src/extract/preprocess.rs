use std::collections::BTreeSet;

use super::dom::{Document, Node};

/// Tags whose whole subtree never carries page content
pub const DEFAULT_DENYLIST: &[&str] = &[
    "script", "style", "nav", "header", "footer", "aside", "noscript",
];

/// Immutable set of tag names removed before extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Denylist {
    tags: BTreeSet<String>,
}

impl Denylist {
    /// The default denylist extended with caller-supplied tags
    pub fn with_extra<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tags: BTreeSet<String> = DEFAULT_DENYLIST.iter().map(|t| t.to_string()).collect();
        tags.extend(
            extra
                .into_iter()
                .map(|t| t.as_ref().trim().to_ascii_lowercase())
                .filter(|t| !t.is_empty()),
        );
        Self { tags }
    }

    pub fn contains(&self, tag_name: &str) -> bool {
        self.tags.contains(&tag_name.to_ascii_lowercase())
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }
}

impl Default for Denylist {
    fn default() -> Self {
        Self::with_extra(std::iter::empty::<&str>())
    }
}

/// Remove every denylisted element, nested ones included, together with its
/// whole subtree. Returns the number of subtrees removed.
pub fn strip(document: &mut Document, denylist: &Denylist) -> usize {
    let mut removed = 0;
    let root = document.root_mut();
    if let Node::Element(element) = root
        && denylist.contains(element.tag_name())
    {
        // The root cannot be detached, so only its content goes
        element.children.clear();
        removed += 1;
    }

    let mut pending = match root {
        Node::Element(element) => vec![&mut element.children],
        Node::Text(_) => return removed,
    };

    while let Some(children) = pending.pop() {
        let before = children.len();
        children.retain(|child| match child {
            Node::Element(element) => !denylist.contains(element.tag_name()),
            Node::Text(_) => true,
        });
        removed += before - children.len();

        for child in children {
            if let Node::Element(element) = child {
                pending.push(&mut element.children);
            }
        }
    }

    removed
}
