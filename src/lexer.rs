//! Lexical analysis: breaking raw markdown text into a flat token sequence.
//!
//! The lexer is a single left-to-right scan driven by an explicit
//! [`TokenTable`]. Every character either maps to a one-character special
//! token or extends a pending run; runs are cut when the next character is
//! mapped or the input ends, then classified as `Ordering` or `Word`. The
//! lexer is total: any input produces a token sequence, and concatenating
//! the tokens' raw text reproduces the input byte-for-byte.

mod cursor;
mod table;
mod token;

pub use cursor::TokenCursor;
pub use table::TokenTable;
pub use token::{Token, TokenKind};

use log::trace;

/// Character-level scanner producing the token sequence for one input.
pub struct Lexer<'input, 'table> {
    input: &'input str,
    table: &'table TokenTable,
}

impl<'input, 'table> Lexer<'input, 'table> {
    /// Creates a lexer over `input` using the given character mapping.
    pub fn new(input: &'input str, table: &'table TokenTable) -> Self {
        Lexer { input, table }
    }

    /// Scans the whole input into tokens.
    ///
    /// Mapped characters are emitted immediately as one-character tokens and
    /// reset the pending run; an unmapped character extends the pending run,
    /// which is cut when the *next* character is mapped or the current one is
    /// the last of the input.
    pub fn tokenize(&self) -> Vec<Token<'input>> {
        let mut tokens = Vec::new();
        let mut run_start = 0;
        let mut chars = self.input.char_indices().peekable();

        while let Some((offset, ch)) = chars.next() {
            let end = offset + ch.len_utf8();
            if let Some(kind) = self.table.kind_of(ch) {
                tokens.push(Token {
                    raw: &self.input[offset..end],
                    kind,
                });
                run_start = end;
                continue;
            }

            let cut = match chars.peek() {
                None => true,
                Some(&(_, next)) => self.table.kind_of(next).is_some(),
            };
            if cut {
                tokens.push(Token::classify_run(&self.input[run_start..end]));
                run_start = end;
            }
        }

        trace!(
            "lexed {} tokens from {} bytes",
            tokens.len(),
            self.input.len()
        );
        tokens
    }
}
