//! The document tree: a minimal HTML-like node model backed by an arena.
//!
//! Nodes live in a flat arena and refer to each other through stable
//! [`NodeId`] indices. A container owns an ordered list of child ids, so
//! re-parenting during splicing is an id-list move with no dangling links,
//! and the finished tree is safely shareable for read-only traversal.

use serde::Serialize;

/// Stable index of a node inside its [`Document`] arena.
pub type NodeId = usize;

/// Tag carried by an element node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tag {
    /// Heading level, always in `1..=6`.
    Heading(u8),
    /// Generic container, the result of the block-parsing primitive.
    Container,
}

impl Tag {
    /// The HTML-like tag name used by the debug printer.
    pub fn name(&self) -> &'static str {
        match self {
            Tag::Heading(1) => "h1",
            Tag::Heading(2) => "h2",
            Tag::Heading(3) => "h3",
            Tag::Heading(4) => "h4",
            Tag::Heading(5) => "h5",
            // The parser never constructs levels outside 1..=6.
            Tag::Heading(_) => "h6",
            Tag::Container => "div",
        }
    }
}

/// A node of the output tree: a text leaf or a tagged element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Node {
    Text { content: String },
    Element { tag: Tag, children: Vec<NodeId> },
}

/// A parsed document: the node arena plus the id of the root container.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Document {
    pub(crate) fn empty() -> Self {
        Document {
            nodes: Vec::new(),
            root: 0,
        }
    }

    /// The root container produced by parsing.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Borrows a node by id.
    ///
    /// Ids are only ever produced by this arena; passing an id from another
    /// document panics, like out-of-range slice indexing.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    /// The ordered child ids of an element; empty for text leaves.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        match &self.nodes[id] {
            Node::Element { children, .. } => children,
            Node::Text { .. } => &[],
        }
    }

    /// The accumulated content of a text leaf, `None` for elements.
    pub fn text(&self, id: NodeId) -> Option<&str> {
        match &self.nodes[id] {
            Node::Text { content } => Some(content),
            Node::Element { .. } => None,
        }
    }

    pub(crate) fn new_text(&mut self) -> NodeId {
        self.push(Node::Text {
            content: String::new(),
        })
    }

    pub(crate) fn new_element(&mut self, tag: Tag) -> NodeId {
        self.push(Node::Element {
            tag,
            children: Vec::new(),
        })
    }

    pub(crate) fn set_root(&mut self, id: NodeId) {
        self.root = id;
    }

    pub(crate) fn push_child(&mut self, parent: NodeId, child: NodeId) {
        if let Node::Element { children, .. } = &mut self.nodes[parent] {
            children.push(child);
        }
    }

    pub(crate) fn append_text(&mut self, id: NodeId, text: &str) {
        if let Node::Text { content } = &mut self.nodes[id] {
            content.push_str(text);
        }
    }

    /// Appends one literal space unless the content already ends with one,
    /// so runs of whitespace collapse to a single separator.
    pub(crate) fn append_collapsed_space(&mut self, id: NodeId) {
        if let Node::Text { content } = &mut self.nodes[id] {
            if !content.ends_with(' ') {
                content.push(' ');
            }
        }
    }

    pub(crate) fn prepend_text(&mut self, id: NodeId, prefix: &str) {
        if let Node::Text { content } = &mut self.nodes[id] {
            content.insert_str(0, prefix);
        }
    }

    /// Moves every child of `from`, in order, onto `into` and leaves `from`
    /// empty. The donor id is simply never referenced again afterwards.
    pub(crate) fn splice(&mut self, from: NodeId, into: NodeId) {
        let moved = match &mut self.nodes[from] {
            Node::Element { children, .. } => std::mem::take(children),
            Node::Text { .. } => return,
        };
        if let Node::Element { children, .. } = &mut self.nodes[into] {
            children.extend(moved);
        }
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(node);
        id
    }

    /// Counts whitespace-separated words across every text node in the tree.
    pub fn word_count(&self) -> usize {
        self.count_words(self.root)
    }

    fn count_words(&self, id: NodeId) -> usize {
        match &self.nodes[id] {
            Node::Text { content } => content.split_whitespace().count(),
            Node::Element { children, .. } => {
                children.iter().map(|&child| self.count_words(child)).sum()
            }
        }
    }

    /// The first heading in document order, as its level and the
    /// concatenated content of its text descendants.
    pub fn first_heading(&self) -> Option<(u8, String)> {
        self.find_heading(self.root)
    }

    fn find_heading(&self, id: NodeId) -> Option<(u8, String)> {
        match &self.nodes[id] {
            Node::Element {
                tag: Tag::Heading(level),
                ..
            } => {
                let mut title = String::new();
                self.collect_text(id, &mut title);
                Some((*level, title))
            }
            Node::Element { children, .. } => children
                .iter()
                .find_map(|&child| self.find_heading(child)),
            Node::Text { .. } => None,
        }
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        match &self.nodes[id] {
            Node::Text { content } => out.push_str(content),
            Node::Element { children, .. } => {
                for &child in children {
                    self.collect_text(child, out);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document {
        // <div><h1>Title</h1>Body text</div>, built by hand.
        let mut doc = Document::empty();
        let root = doc.new_element(Tag::Container);
        let heading = doc.new_element(Tag::Heading(1));
        let title = doc.new_text();
        doc.append_text(title, "Title");
        doc.push_child(heading, title);
        let body = doc.new_text();
        doc.append_text(body, "Body text");
        doc.push_child(root, heading);
        doc.push_child(root, body);
        doc.set_root(root);
        doc
    }

    #[test]
    fn tag_names() {
        assert_eq!(Tag::Heading(1).name(), "h1");
        assert_eq!(Tag::Heading(6).name(), "h6");
        assert_eq!(Tag::Container.name(), "div");
    }

    #[test]
    fn children_are_ordered() {
        let doc = sample();
        let children = doc.children(doc.root());
        assert_eq!(children.len(), 2);
        assert!(matches!(
            doc.node(children[0]),
            Node::Element {
                tag: Tag::Heading(1),
                ..
            }
        ));
        assert_eq!(doc.text(children[1]), Some("Body text"));
    }

    #[test]
    fn splice_moves_children_in_order() {
        let mut doc = Document::empty();
        let donor = doc.new_element(Tag::Container);
        let a = doc.new_text();
        doc.append_text(a, "a");
        let b = doc.new_text();
        doc.append_text(b, "b");
        doc.push_child(donor, a);
        doc.push_child(donor, b);

        let target = doc.new_element(Tag::Heading(2));
        doc.splice(donor, target);

        assert_eq!(doc.children(target), &[a, b]);
        assert!(doc.children(donor).is_empty());
    }

    #[test]
    fn collapsed_space_never_doubles() {
        let mut doc = Document::empty();
        let text = doc.new_text();
        doc.append_collapsed_space(text);
        doc.append_collapsed_space(text);
        doc.append_text(text, "a");
        doc.append_collapsed_space(text);
        assert_eq!(doc.text(text), Some(" a "));
    }

    #[test]
    fn word_count_walks_the_tree() {
        let doc = sample();
        assert_eq!(doc.word_count(), 3); // Title + Body + text
    }

    #[test]
    fn first_heading_reports_level_and_title() {
        let doc = sample();
        assert_eq!(doc.first_heading(), Some((1, "Title".to_string())));
    }

    #[test]
    fn first_heading_is_none_without_headings() {
        let mut doc = Document::empty();
        let root = doc.new_element(Tag::Container);
        doc.set_root(root);
        assert_eq!(doc.first_heading(), None);
    }
}
