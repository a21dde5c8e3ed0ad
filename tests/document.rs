//! End-to-end tests for the lex → parse → print pipeline, using the debug
//! printer as the oracle, plus property tests over arbitrary inputs.

use proptest::prelude::*;

use runemark::{Lexer, Node, Tag, TokenKind, TokenTable, parse, printer};

fn rendered(input: &str) -> String {
    printer::render(&parse(input))
}

#[test]
fn tokens_partition_known_inputs() {
    let table = TokenTable::markdown();
    let inputs = [
        "# Title\n\nBody",
        "a   b",
        "\\--text",
        "12. item\n####### deep",
        "unicode: héllo 🌍\n",
    ];
    for input in inputs {
        let tokens = Lexer::new(input, &table).tokenize();
        let rebuilt: String = tokens.iter().map(|t| t.raw).collect();
        assert_eq!(rebuilt, input);
    }
}

#[test]
fn lone_hash_is_a_single_token() {
    let table = TokenTable::markdown();
    let tokens = Lexer::new("#", &table).tokenize();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Hash);
}

#[test]
fn ordering_classification() {
    let table = TokenTable::markdown();
    for (input, kind) in [
        ("12.", TokenKind::Ordering),
        ("12", TokenKind::Word),
        ("12x.", TokenKind::Word),
        (".", TokenKind::Word),
    ] {
        let tokens = Lexer::new(input, &table).tokenize();
        assert_eq!(tokens.len(), 1, "one token expected for {input:?}");
        assert_eq!(tokens[0].kind, kind, "wrong kind for {input:?}");
    }
}

#[test]
fn heading_basic() {
    assert_eq!(
        rendered("# Title\n\nBody"),
        "div \n  h1 \n    #text Title\n  #text Body\n"
    );
}

#[test]
fn heading_max_depth() {
    assert_eq!(rendered("###### Deep"), "div \n  h6 \n    #text Deep\n");
}

#[test]
fn non_heading_hash() {
    assert_eq!(rendered("#NoSpace"), "div \n  #text #NoSpace\n");
}

#[test]
fn paragraph_break() {
    assert_eq!(
        rendered("line one\n\nline two"),
        "div \n  #text line one\n  #text line two\n"
    );
}

#[test]
fn whitespace_collapse() {
    assert_eq!(rendered("a   b"), "div \n  #text a b\n");
}

#[test]
fn escape_greediness() {
    assert_eq!(rendered("\\--text"), "div \n  #text --text\n");
}

#[test]
fn printer_is_deterministic() {
    let input = "# One\n\n## Two\n\nthree four\n\n\\-- five";
    assert_eq!(rendered(input), rendered(input));
}

#[test]
fn nested_structure_shape() {
    let doc = parse("# Top\n\nmiddle\n\n### Low");
    let blocks = doc.children(doc.root());
    assert_eq!(blocks.len(), 3);
    assert!(matches!(
        doc.node(blocks[0]),
        Node::Element {
            tag: Tag::Heading(1),
            ..
        }
    ));
    assert!(matches!(doc.node(blocks[1]), Node::Text { .. }));
    assert!(matches!(
        doc.node(blocks[2]),
        Node::Element {
            tag: Tag::Heading(3),
            ..
        }
    ));
}

proptest! {
    /// Concatenating every token's raw text reproduces the input exactly,
    /// for any input.
    #[test]
    fn tokens_partition_arbitrary_inputs(input in ".*") {
        let table = TokenTable::markdown();
        let tokens = Lexer::new(&input, &table).tokenize();
        let rebuilt: String = tokens.iter().map(|t| t.raw).collect();
        prop_assert_eq!(rebuilt, input);
    }

    /// The parser is total: any input produces a tree without panicking,
    /// and printing that tree always succeeds.
    #[test]
    fn parsing_never_fails(input in ".*") {
        let doc = parse(&input);
        let _ = printer::render(&doc);
    }
}
