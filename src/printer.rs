//! Debug printer: renders the document tree depth-first, pre-order, one
//! line per node, for inspection and as the test oracle.

use crate::tree::{Document, Node, NodeId};

/// Renders the whole tree starting at the root.
///
/// Each line is `<tag-name> <text-content>` (the text is empty for
/// elements), terminated by a newline, with children indented two more
/// spaces than their parent. Text leaves print under the `#text` tag.
pub fn render(doc: &Document) -> String {
    let mut out = String::new();
    render_node(doc, doc.root(), 0, &mut out);
    out
}

fn render_node(doc: &Document, id: NodeId, depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str("  ");
    }
    match doc.node(id) {
        Node::Text { content } => {
            out.push_str("#text ");
            out.push_str(content);
            out.push('\n');
        }
        Node::Element { tag, children } => {
            out.push_str(tag.name());
            out.push_str(" \n");
            for &child in children {
                render_node(doc, child, depth + 1, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn renders_heading_and_paragraph() {
        let doc = parse("# Title\n\nBody");
        let expected = "div \n  h1 \n    #text Title\n  #text Body\n";
        assert_eq!(render(&doc), expected);
    }

    #[test]
    fn renders_empty_document() {
        let doc = parse("");
        assert_eq!(render(&doc), "div \n");
    }

    #[test]
    fn rendering_is_deterministic() {
        let input = "# One\n\ntwo three\n\n## Four";
        let first = render(&parse(input));
        let second = render(&parse(input));
        assert_eq!(first, second);
    }
}
