use std::collections::HashMap;

use super::token::TokenKind;

/// The lexer's configuration: an explicit character-to-kind mapping.
///
/// The table is always passed into the lexer as a parameter and never held
/// as process-wide state, so tests can run concurrently with differing
/// mappings.
#[derive(Debug, Clone)]
pub struct TokenTable {
    mapping: HashMap<char, TokenKind>,
}

impl TokenTable {
    /// The standard markdown mapping used by [`crate::parser::parse`].
    pub fn markdown() -> Self {
        let mapping = HashMap::from([
            ('#', TokenKind::Hash),
            ('*', TokenKind::Asterisk),
            ('~', TokenKind::Tilde),
            ('-', TokenKind::Dash),
            ('`', TokenKind::Backtick),
            ('\\', TokenKind::Backslash),
            ('^', TokenKind::Caret),
            ('|', TokenKind::Pipe),
            ('!', TokenKind::Exclamation),
            (':', TokenKind::Colon),
            ('(', TokenKind::OpenParen),
            (')', TokenKind::CloseParen),
            ('[', TokenKind::OpenBracket),
            (']', TokenKind::CloseBracket),
            ('<', TokenKind::Angle),
            ('>', TokenKind::Angle),
            (' ', TokenKind::Space),
            ('\n', TokenKind::Newline),
        ]);
        TokenTable { mapping }
    }

    /// A table with no mapped characters; every input becomes word runs.
    pub fn empty() -> Self {
        TokenTable {
            mapping: HashMap::new(),
        }
    }

    /// Adds or replaces a single-character mapping, builder style.
    ///
    /// `Word`, `Ordering` and `Eof` are run/sentinel kinds, not character
    /// kinds; mapping a character to them has no meaning here.
    pub fn with_mapping(mut self, ch: char, kind: TokenKind) -> Self {
        debug_assert!(
            !matches!(kind, TokenKind::Word | TokenKind::Ordering | TokenKind::Eof),
            "run and sentinel kinds cannot be mapped from a character"
        );
        self.mapping.insert(ch, kind);
        self
    }

    /// Looks up the kind mapped for a character, if any.
    pub fn kind_of(&self, ch: char) -> Option<TokenKind> {
        self.mapping.get(&ch).copied()
    }
}

impl Default for TokenTable {
    fn default() -> Self {
        Self::markdown()
    }
}
