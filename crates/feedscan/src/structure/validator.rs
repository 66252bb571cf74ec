//! Well-formedness check over `<...>` tokens

use crate::error::{Error, ErrorKind, Result};
use crate::scan::{Cursor, TagToken};

/// Verify that every opening tag has a matching, correctly-ordered
/// closing tag.
///
/// Walks the text as a sequence of `<...>` tokens with an explicit stack
/// of open tags. Declarations (`<?...>`) and self-closing tags (`.../>`)
/// have no stack effect. Purely a bracket-matching discipline over
/// literal `<`/`>` scanning; attributes and tag bodies are never
/// inspected.
///
/// Empty input fails with `EmptySource`.
pub fn validate(text: &str) -> Result<()> {
    if text.is_empty() {
        return Err(Error::new(ErrorKind::EmptySource));
    }
    let mut cursor = Cursor::new(text);
    let mut stack: Vec<TagToken<'_>> = Vec::new();
    while let Some(token) = cursor.next_tag() {
        if token.is_declaration() || token.is_self_closing() {
            continue;
        }
        if token.is_closing() {
            match stack.last() {
                Some(top) if top.name() == token.name() => {
                    stack.pop();
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
    Ok(())
}
