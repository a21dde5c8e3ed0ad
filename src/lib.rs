//! # runemark
//!
//! A hand-written Markdown-to-document-tree converter: a character-level
//! lexer plus a recursive-descent parser that build a tree of typed nodes
//! (a minimal HTML-like document model) directly from raw markdown text,
//! without delegating to an existing markdown library.
//!
//! ## Usage
//!
//! ```
//! use runemark::{parse, printer};
//!
//! let doc = parse("# Hello\n\nSome body text");
//! assert_eq!(doc.first_heading(), Some((1, "Hello".to_string())));
//! assert_eq!(doc.word_count(), 4);
//!
//! // The debug printer renders the tree depth-first, pre-order.
//! let rendered = printer::render(&doc);
//! assert!(rendered.contains("h1"));
//! ```
//!
//! The pipeline is `text → Lexer → tokens → TokenCursor → Parser →
//! Document → printer`. The character-to-kind mapping is an explicit
//! [`TokenTable`] parameter, so alternate mappings can be substituted:
//!
//! ```
//! use runemark::{parse_with_table, TokenTable, TokenKind};
//!
//! let table = TokenTable::markdown().with_mapping('@', TokenKind::Hash);
//! let doc = parse_with_table("@ Heading", &table);
//! assert!(doc.first_heading().is_some());
//! ```
//!
//! Supported constructs are deliberately small: headings (levels 1–6),
//! paragraph text runs, and backslash escapes. Everything else flows
//! through text runs untouched; the lexer and parser are total and never
//! fail. Front-matter headers, by contrast, are validated; see
//! [`frontmatter::FrontMatter`].

pub mod error;
pub mod frontmatter;
pub mod lexer;
pub mod parser;
pub mod printer;
pub mod tree;

pub use error::{DocumentError, Result};
pub use frontmatter::FrontMatter;
pub use lexer::{Lexer, Token, TokenCursor, TokenKind, TokenTable};
pub use parser::{Parser, parse, parse_with_table};
pub use printer::render;
pub use tree::{Document, Node, NodeId, Tag};
