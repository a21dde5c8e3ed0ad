/// Enumeration of every token kind the lexer can emit.
///
/// The set is closed on purpose: every consumption site matches on it
/// exhaustively, so an unrecognized kind is a compile error rather than a
/// silent fallthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Hash,
    Asterisk,
    Tilde,
    Dash,
    Backtick,
    Backslash,
    Caret,
    Pipe,
    Exclamation,
    Colon,
    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    Angle,
    Space,
    Newline,
    /// A run of one or more digits followed by a literal dot, e.g. `12.`,
    /// the shape of a numbered-list marker.
    Ordering,
    /// Any other run of unmapped characters.
    Word,
    /// Synthesized by the cursor for out-of-range positions; never present
    /// in a lexed token sequence.
    Eof,
}

/// Smallest lexical unit: the exact source substring it covers plus its kind.
///
/// Tokens partition the input: concatenating every token's `raw` text in
/// emission order reproduces the input byte-for-byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'input> {
    pub raw: &'input str,
    pub kind: TokenKind,
}

impl<'input> Token<'input> {
    /// The end-of-input sentinel handed out by the cursor.
    pub const EOF: Token<'static> = Token {
        raw: "",
        kind: TokenKind::Eof,
    };

    /// Classifies a pending run cut by the lexer.
    ///
    /// The ordering test is a whole-run test, not a prefix test: the run
    /// minus its final character must be all digits and the final character
    /// must be a dot. `12.` is ordering; `12`, `12x.` and `.` are words.
    pub(crate) fn classify_run(raw: &'input str) -> Self {
        let kind = match raw.strip_suffix('.') {
            Some(head) if !head.is_empty() && head.bytes().all(|b| b.is_ascii_digit()) => {
                TokenKind::Ordering
            }
            _ => TokenKind::Word,
        };
        Token { raw, kind }
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    pub fn is_newline(&self) -> bool {
        self.kind == TokenKind::Newline
    }
}
