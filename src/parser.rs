//! Recursive-descent parsing of the token sequence into a document tree.
//!
//! The parser is total over any sequence the lexer can produce: every loop
//! iteration has a fallback branch, and constructs that fail their side
//! conditions (a hash run without a following space, a run deeper than six)
//! are reinterpreted as literal text instead of raising errors.

use log::{debug, trace};

use crate::lexer::{Lexer, Token, TokenCursor, TokenKind, TokenTable};
use crate::tree::{Document, NodeId, Tag};

/// Parses markdown text with the standard [`TokenTable::markdown`] mapping.
pub fn parse(input: &str) -> Document {
    parse_with_table(input, &TokenTable::markdown())
}

/// Parses markdown text with a caller-supplied character mapping.
pub fn parse_with_table(input: &str, table: &TokenTable) -> Document {
    let tokens = Lexer::new(input, table).tokenize();
    Parser::new(&tokens).parse()
}

/// Recursive-descent parser over a lexed token sequence.
pub struct Parser<'input, 'tokens> {
    cursor: TokenCursor<'input, 'tokens>,
    doc: Document,
}

impl<'input, 'tokens> Parser<'input, 'tokens> {
    pub fn new(tokens: &'tokens [Token<'input>]) -> Self {
        Parser {
            cursor: TokenCursor::new(tokens),
            doc: Document::empty(),
        }
    }

    /// Consumes the parser and builds the whole document, with the root
    /// container delimited by end-of-input.
    pub fn parse(mut self) -> Document {
        let root = self.parse_until(TokenKind::Eof);
        self.doc.set_root(root);
        self.doc
    }

    /// The block primitive: parses a maximal run of blocks, stopping at
    /// (and not consuming) `delimiter` or end-of-input, and returns a
    /// container holding the blocks in document order.
    fn parse_until(&mut self, delimiter: TokenKind) -> NodeId {
        let container = self.doc.new_element(Tag::Container);
        loop {
            let kind = self.cursor.current().kind;
            if kind == delimiter || kind == TokenKind::Eof {
                break;
            }
            if kind == TokenKind::Hash && self.at_line_start() {
                let child = self.parse_heading();
                self.doc.push_child(container, child);
            } else if kind != TokenKind::Newline {
                let child = self.parse_text_run();
                self.doc.push_child(container, child);
            } else {
                // Stray newline between blocks.
                self.cursor.advance();
            }
        }
        container
    }

    /// A hash token opens a heading only at the start of a line: the
    /// previously consumed token is a newline, or nothing has been consumed
    /// yet (the cursor hands back the end-of-input sentinel).
    fn at_line_start(&self) -> bool {
        matches!(
            self.cursor.peek(-1).kind,
            TokenKind::Eof | TokenKind::Newline
        )
    }

    /// Parses a heading from a run of hash tokens.
    ///
    /// A run that is not followed by a space, or that is deeper than six,
    /// was not a heading marker after all: the run is consumed, the rest of
    /// the text is parsed as a plain run, and the literal `#` characters are
    /// put back in front of it.
    fn parse_heading(&mut self) -> NodeId {
        let mut depth = 0usize;
        while self.cursor.peek(depth as isize).kind == TokenKind::Hash {
            depth += 1;
        }

        let marks_heading =
            depth <= 6 && self.cursor.peek(depth as isize).kind == TokenKind::Space;
        if !marks_heading {
            debug!("hash run of {depth} is not a heading marker, keeping it literal");
            for _ in 0..depth {
                self.cursor.advance();
            }
            let text = self.parse_text_run();
            self.doc.prepend_text(text, &"#".repeat(depth));
            return text;
        }

        // Consume the hash run and the following space.
        for _ in 0..=depth {
            self.cursor.advance();
        }

        trace!("heading level {depth}");
        let heading = self.doc.new_element(Tag::Heading(depth as u8));
        let content = self.parse_until(TokenKind::Newline);
        self.doc.splice(content, heading);
        heading
    }

    /// Accumulates one paragraph-like text node, stopping at a blank line
    /// (two consecutive newlines, neither consumed) or end-of-input.
    fn parse_text_run(&mut self) -> NodeId {
        let text = self.doc.new_text();
        loop {
            let current = self.cursor.current();
            match current.kind {
                TokenKind::Newline if self.cursor.peek(1).is_newline() => break,
                TokenKind::Space | TokenKind::Newline => {
                    self.doc.append_collapsed_space(text);
                    self.cursor.advance();
                }
                TokenKind::Backslash => {
                    let escaped = self.parse_escape();
                    self.doc.append_text(text, &escaped);
                }
                TokenKind::Eof => break,
                // Everything else is textual, bare punctuation included;
                // no inline syntax exists here.
                _ => {
                    self.doc.append_text(text, current.raw);
                    self.cursor.advance();
                }
            }
        }
        text
    }

    /// Escape parsing: past the backslash, absorbs the raw text of every
    /// token until a word, space, newline or end-of-input, which is left
    /// unconsumed. The multi-token absorption (`\--` escapes both dashes)
    /// is deliberate; see DESIGN.md.
    fn parse_escape(&mut self) -> String {
        self.cursor.advance();
        let mut escaped = String::new();
        loop {
            let current = self.cursor.current();
            match current.kind {
                TokenKind::Word | TokenKind::Space | TokenKind::Newline | TokenKind::Eof => break,
                _ => {
                    escaped.push_str(current.raw);
                    self.cursor.advance();
                }
            }
        }
        escaped
    }
}
