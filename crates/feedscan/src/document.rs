//! Document text and literal tag lookup

use std::io::BufRead;

use crate::error::{Error, ErrorKind, Result};
use crate::structure::{self, OutlineEntry};

/// An immutable document text with read-only tag lookup operations.
///
/// The text is set once at construction; every operation is a view over
/// it. Construction rejects empty text, so lookups on a `Document` never
/// have to distinguish "no source" from "tag not found".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    text: String,
}

impl Document {
    /// Create a document from text. Fails with `EmptySource` when the
    /// text is empty.
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.is_empty() {
            return Err(Error::new(ErrorKind::EmptySource));
        }
        Ok(Self { text })
    }

    /// Read a document line by line from a file-like source.
    ///
    /// Newlines are stripped and lines are concatenated with no
    /// separator, so a tag body spanning multiple source lines carries no
    /// intervening space. Feed consumers depend on this joining behavior.
    pub fn from_reader(reader: impl BufRead) -> Result<Self> {
        let mut text = String::new();
        for line in reader.lines() {
            let line = line.map_err(|e| Error::new(ErrorKind::Io(e.to_string())))?;
            text.push_str(&line);
        }
        Self::new(text)
    }

    /// Get the document text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length of the document text in bytes
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false after construction
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the value of the `nth` occurrence of `<tag>` (1-based).
    ///
    /// Searches for the literal opening-tag substring with no attribute
    /// or whitespace tolerance, then returns the text from just after it
    /// up to the next `<`, or the rest of the document when no `<`
    /// follows. Returns `""` when the tag is absent, `nth` is zero, or
    /// `nth` exceeds the number of occurrences.
    ///
    /// Occurrence selection is ordinal, not nesting-aware: the target
    /// feeds are flat RSS fragments where the next `<` reliably marks the
    /// next markup boundary.
    pub fn tag_value(&self, tag: &str, nth: usize) -> &str {
        if nth == 0 {
            return "";
        }
        let open = format!("<{tag}>");
        let Some(first) = self.text.find(&open) else {
            return "";
        };
        let mut at = first;
        for _ in 1..nth {
            let from = at + 1;
            match self.text.get(from..).and_then(|rest| rest.find(&open)) {
                Some(rel) => at = from + rel,
                None => return "",
            }
        }
        let start = at + open.len();
        let rest = self.text.get(start..).unwrap_or("");
        match rest.find('<') {
            Some(end) => rest.get(..end).unwrap_or(""),
            None => rest,
        }
    }

    /// Get the value of the first occurrence of `<tag>`
    pub fn first_tag_value(&self, tag: &str) -> &str {
        self.tag_value(tag, 1)
    }

    /// Count non-overlapping occurrences of the literal `<tag>` substring,
    /// scanning left to right
    pub fn tag_count(&self, tag: &str) -> usize {
        let open = format!("<{tag}>");
        let mut count = 0;
        let mut from = 0;
        while let Some(rel) = self.text.get(from..).and_then(|rest| rest.find(&open)) {
            count += 1;
            from += rel + open.len();
        }
        count
    }

    /// Check that every opening tag has a matching, correctly-ordered
    /// closing tag. See [`crate::structure::validate`].
    pub fn validate(&self) -> Result<()> {
        structure::validate(&self.text)
    }

    /// Produce the indented tag hierarchy. See [`crate::structure::outline`].
    pub fn outline(&self) -> Result<Vec<OutlineEntry>> {
        structure::outline(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_text() {
        let err = Document::new("").unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::EmptySource);
    }

    #[test]
    fn test_from_reader_joins_without_separator() {
        let source = "<title>line one\nline two</title>\n";
        let doc = Document::from_reader(source.as_bytes()).unwrap();
        assert_eq!(doc.as_str(), "<title>line oneline two</title>");
        assert_eq!(doc.first_tag_value("title"), "line oneline two");
    }

    #[test]
    fn test_from_reader_empty_source() {
        let err = Document::from_reader("".as_bytes()).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::EmptySource);
    }

    #[test]
    fn test_tag_value_zero_occurrence() {
        let doc = Document::new("<a>x</a>").unwrap();
        assert_eq!(doc.tag_value("a", 0), "");
    }
}
