//! Tag token classification

/// One `<...>` span located in the document.
///
/// Borrowed view produced transiently by [`crate::scan::Cursor::next_tag`];
/// `start` and `end` are byte offsets of the `<` and `>` respectively
/// (`end` inclusive).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TagToken<'a> {
    text: &'a str,
    start: usize,
    end: usize,
}

impl<'a> TagToken<'a> {
    pub(crate) const fn new(text: &'a str, start: usize, end: usize) -> Self {
        Self { text, start, end }
    }

    /// Full tag text including the angle brackets
    pub const fn text(&self) -> &'a str {
        self.text
    }

    /// Byte offset of the opening `<`
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Byte offset of the closing `>`
    pub const fn end(&self) -> usize {
        self.end
    }

    /// `<?...>` declaration, skipped by structure walks
    pub fn is_declaration(&self) -> bool {
        self.text.starts_with("<?")
    }

    /// `<.../>` self-closing tag, skipped by structure walks.
    ///
    /// Safe on the minimal token `<>`: the suffix check never underflows.
    pub fn is_self_closing(&self) -> bool {
        self.text.ends_with("/>")
    }

    /// `</...>` closing tag
    pub fn is_closing(&self) -> bool {
        self.text.starts_with("</")
    }

    /// Inner name with the `<`/`</` prefix and `>` suffix stripped
    pub fn name(&self) -> &'a str {
        let inner = self
            .text
            .strip_prefix("</")
            .or_else(|| self.text.strip_prefix('<'))
            .unwrap_or(self.text);
        inner.strip_suffix('>').unwrap_or(inner)
    }
}
