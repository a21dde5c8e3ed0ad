//! Front-matter header parsing.
//!
//! Posts open with a key/value header enclosed by horizontal rules:
//!
//! ```text
//! ---
//! Title: Something
//! Date: Some date
//! ---
//! ```
//!
//! Keys are trimmed and lower-cased; values keep everything between the
//! colon and the line end, minus surrounding spaces. Unlike the lexer and
//! parser, this layer rejects malformed input with structured errors.

use std::collections::HashMap;

use log::debug;
use serde::Serialize;

use crate::error::{DocumentError, Result};

/// A parsed front-matter header and where the body starts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrontMatter {
    fields: HashMap<String, String>,
    /// Byte offset of the first character after the closing rule's line.
    pub content_start: usize,
}

impl FrontMatter {
    /// Parses the header at the top of `source`.
    ///
    /// Empty lines are ignored anywhere around the header. A line counts as
    /// a horizontal rule when it consists solely of dashes. Header lines
    /// must contain exactly one colon; body content before the opening rule
    /// means there is no header at all.
    pub fn parse(source: &str) -> Result<FrontMatter> {
        let mut fields = HashMap::new();
        let mut in_header = false;
        let mut offset = 0usize;

        for (index, line) in source.lines().enumerate() {
            // `lines` strips the terminator, so the next line starts one
            // byte past this one (capped for a final unterminated line).
            let line_end = (offset + line.len() + 1).min(source.len());
            let trimmed = line.trim();

            if trimmed.is_empty() {
                offset = line_end;
                continue;
            }

            let is_rule = trimmed.bytes().all(|b| b == b'-');
            if is_rule {
                if in_header {
                    debug!("parsed {} front matter fields", fields.len());
                    return Ok(FrontMatter {
                        fields,
                        content_start: line_end,
                    });
                }
                in_header = true;
                offset = line_end;
                continue;
            }

            if !in_header {
                return Err(DocumentError::MissingFrontMatter);
            }

            let parts: Vec<&str> = line.split(':').collect();
            if parts.len() != 2 {
                return Err(DocumentError::invalid_field(index + 1, line));
            }
            fields.insert(
                parts[0].trim().to_lowercase(),
                parts[1].trim_matches(' ').to_string(),
            );
            offset = line_end;
        }

        if in_header {
            Err(DocumentError::UnterminatedFrontMatter)
        } else {
            Err(DocumentError::MissingFrontMatter)
        }
    }

    /// Looks up a field by its lower-cased key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn fields(&self) -> &HashMap<String, String> {
        &self.fields
    }

    /// The body of the post: everything after the closing rule.
    pub fn body<'source>(&self, source: &'source str) -> &'source str {
        &source[self.content_start..]
    }
}
