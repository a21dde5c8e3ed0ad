use super::token::Token;

/// Bounded-lookahead view over a lexed token sequence, and the parser's
/// only interface to tokens.
///
/// The cursor index is monotonically non-decreasing. `peek` at any offset is
/// side-effect free and returns the end-of-input sentinel instead of failing
/// when the offset lands outside the sequence; `peek(-1)` is permitted so the
/// parser can ask "are we at the start of a line".
pub struct TokenCursor<'input, 'tokens> {
    tokens: &'tokens [Token<'input>],
    current: usize,
}

impl<'input, 'tokens> TokenCursor<'input, 'tokens> {
    pub fn new(tokens: &'tokens [Token<'input>]) -> Self {
        TokenCursor { tokens, current: 0 }
    }

    /// Returns the token at `current + offset`, or the `Eof` sentinel when
    /// the offset is out of range on either side.
    pub fn peek(&self, offset: isize) -> &'tokens Token<'input> {
        let Some(index) = self.current.checked_add_signed(offset) else {
            return &Token::EOF;
        };
        self.tokens.get(index).unwrap_or(&Token::EOF)
    }

    /// The token under the cursor; equivalent to `peek(0)`.
    pub fn current(&self) -> &'tokens Token<'input> {
        self.peek(0)
    }

    /// Moves the cursor forward by one token. Advancing past the end is a
    /// no-op; the cursor then reports `Eof` forever.
    pub fn advance(&mut self) {
        if self.current < self.tokens.len() {
            self.current += 1;
        }
    }

    pub fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }
}
