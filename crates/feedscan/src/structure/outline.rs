//! Indented tag-hierarchy listing for diagnostic inspection

use std::fmt;

use crate::error::{Error, ErrorKind, Result};
use crate::scan::{Cursor, TagToken};

/// One line of the hierarchy listing: a tag and its nesting depth
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutlineEntry {
    pub text: String,
    pub depth: usize,
}

impl fmt::Display for OutlineEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.depth {
            f.write_str("    ")?;
        }
        f.write_str(&self.text)
    }
}

/// Walk the text with the same token and stack discipline as
/// [`crate::structure::validate`], collecting each encountered tag with
/// its nesting depth.
///
/// Opening tags are emitted at the depth before the push; closing tags at
/// the depth after the pop, so a closing tag lines up with its opener.
/// Declarations and self-closing tags are emitted at the current depth
/// with no stack effect. A mismatch stops the walk with the validator's
/// error; so does a tag left open at the end.
///
/// Empty input yields an empty listing.
pub fn outline(text: &str) -> Result<Vec<OutlineEntry>> {
    let mut cursor = Cursor::new(text);
    let mut stack: Vec<TagToken<'_>> = Vec::new();
    let mut entries = Vec::new();
    while let Some(token) = cursor.next_tag() {
        if token.is_declaration() || token.is_self_closing() {
            entries.push(OutlineEntry {
                text: token.text().to_string(),
                depth: stack.len(),
            });
            continue;
        }
        if token.is_closing() {
            match stack.last() {
                Some(top) if top.name() == token.name() => {
                    stack.pop();
                    entries.push(OutlineEntry {
                        text: token.text().to_string(),
                        depth: stack.len(),
                    });
                }
                Some(top) => {
                    return Err(Error::at(
                        ErrorKind::MismatchedClosingTag {
                            expected: top.text().to_string(),
                            found: token.text().to_string(),
                        },
                        token.start(),
                    ));
                }
                None => {
                    return Err(Error::at(
                        ErrorKind::UnexpectedClosingTag {
                            found: token.text().to_string(),
                        },
                        token.start(),
                    ));
                }
            }
        } else {
            entries.push(OutlineEntry {
                text: token.text().to_string(),
                depth: stack.len(),
            });
            stack.push(token);
        }
    }
    if let Some(top) = stack.last() {
        return Err(Error::at(
            ErrorKind::UnclosedTag {
                tag: top.text().to_string(),
            },
            top.start(),
        ));
    }
    Ok(entries)
}

/// Render entries as pre-indented lines, 4 spaces per depth level
pub fn render_outline(entries: &[OutlineEntry]) -> String {
    entries
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
