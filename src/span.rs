//! The Span type: a half-open byte range into a piece of text.

/// A half-open range of byte offsets into the text it was computed from.
///
/// ## Byte Offsets
///
/// `start` and `end` are byte offsets, not character indices, and always lie
/// on char boundaries. This matches Rust's string slicing semantics:
///
/// ```rust
/// use mosaic::Span;
///
/// let text = "ping @alice";
/// let span = Span::new(6, 11);
///
/// assert_eq!(span.slice(text), "alice");
/// assert_eq!(&text[span.range()], "alice");
/// ```
///
/// Editors that report carets in UTF-16 code units (browsers) or grapheme
/// clusters should convert with the helpers in [`crate::caret`] first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    /// Byte offset where the span starts.
    pub start: usize,
    /// Byte offset where the span ends (exclusive).
    pub end: usize,
}

impl Span {
    /// Create a new span.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        assert!(start <= end, "span start must not exceed its end");
        Self { start, end }
    }

    /// The length of this span in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether this span is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether `offset` lies inside the span or exactly on its right edge.
    ///
    /// This is the caret rule used by autocomplete: `"@foo|"` still edits
    /// the token `foo`.
    #[must_use]
    pub const fn touches(&self, offset: usize) -> bool {
        self.start <= offset && offset <= self.end
    }

    /// The span as a range, for slicing.
    #[must_use]
    pub const fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }

    /// The text covered by this span.
    ///
    /// # Panics
    ///
    /// Panics if the span does not lie on char boundaries of `text`.
    #[must_use]
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.range()]
    }
}

impl From<Span> for std::ops::Range<usize> {
    fn from(span: Span) -> Self {
        span.range()
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touches_is_inclusive_on_the_right() {
        let span = Span::new(1, 4);
        assert!(!span.touches(0));
        assert!(span.touches(1));
        assert!(span.touches(4));
        assert!(!span.touches(5));
    }

    #[test]
    fn test_empty_span() {
        let span = Span::new(3, 3);
        assert!(span.is_empty());
        assert_eq!(span.len(), 0);
        assert!(span.touches(3));
    }

    #[test]
    fn test_display() {
        assert_eq!(Span::new(2, 7).to_string(), "2..7");
    }

    #[test]
    #[should_panic]
    fn test_inverted_span_panics() {
        let _ = Span::new(5, 2);
    }
}
