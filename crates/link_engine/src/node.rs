use ego_tree::NodeRef;
use scraper::{Html, Node};

/// Coarse classification of a document node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Document,
    Element,
    Text,
    Comment,
    Other,
}

/// Read-only view of a node in a parsed document tree.
///
/// Handles are cheap copies borrowing from a tree that outlives `'a`. All
/// sequences are in document order. Attribute keys are not assumed to be
/// unique.
pub trait DomNode<'a>: Copy + 'a {
    fn kind(self) -> NodeKind;

    /// Tag name for elements, `None` for every other kind.
    fn tag_name(self) -> Option<&'a str>;

    fn attributes(self) -> impl Iterator<Item = (&'a str, &'a str)> + 'a;

    /// Literal payload of text and comment nodes.
    fn text(self) -> Option<&'a str>;

    fn child_nodes(self) -> impl DoubleEndedIterator<Item = Self> + 'a;
}

impl<'a> DomNode<'a> for NodeRef<'a, Node> {
    fn kind(self) -> NodeKind {
        match self.value() {
            Node::Document | Node::Fragment => NodeKind::Document,
            Node::Element(_) => NodeKind::Element,
            Node::Text(_) => NodeKind::Text,
            Node::Comment(_) => NodeKind::Comment,
            _ => NodeKind::Other,
        }
    }

    fn tag_name(self) -> Option<&'a str> {
        self.value().as_element().map(|element| element.name())
    }

    fn attributes(self) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.value()
            .as_element()
            .into_iter()
            .flat_map(|element| element.attrs())
    }

    fn text(self) -> Option<&'a str> {
        match self.value() {
            Node::Text(text) => Some(&**text),
            Node::Comment(comment) => Some(&**comment),
            _ => None,
        }
    }

    fn child_nodes(self) -> impl DoubleEndedIterator<Item = Self> + 'a {
        NodeRef::children(&self)
    }
}

/// Document node of a parsed tree, the starting point for extraction.
pub fn document_root(html: &Html) -> NodeRef<'_, Node> {
    html.tree.root()
}
