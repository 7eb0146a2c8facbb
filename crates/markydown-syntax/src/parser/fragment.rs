//! The fragment window: literal text accumulated since the last event.

use std::borrow::Cow;
use std::ops::Range;

/// Literal text waiting to be reported as one fragment.
///
/// Unescaped text is contiguous in the source, so it is tracked as a byte
/// range and reported as a borrowed slice. The first escaped character
/// switches the window to an owned buffer, since the backslash has to go.
#[derive(Debug, Default)]
pub(crate) struct Fragment {
    range: Range<usize>,
    unescaped: Option<String>,
}

impl Fragment {
    /// Extend with text found at `span` in `source`.
    pub(crate) fn push(&mut self, source: &str, span: Range<usize>) {
        match self.unescaped.as_mut() {
            Some(owned) => owned.push_str(&source[span]),
            None if self.range.is_empty() => self.range = span,
            None => {
                debug_assert_eq!(self.range.end, span.start, "fragment text must be contiguous");
                self.range.end = span.end;
            }
        }
    }

    /// Extend with a character that was escaped in the source.
    pub(crate) fn push_escaped(&mut self, source: &str, literal: &str) {
        let range = self.range.clone();
        self.unescaped
            .get_or_insert_with(|| source[range].to_owned())
            .push_str(literal);
    }

    /// Take the accumulated text and reset the window. `None` if it is empty.
    pub(crate) fn take<'src>(&mut self, source: &'src str) -> Option<Cow<'src, str>> {
        let range = std::mem::take(&mut self.range);
        match self.unescaped.take() {
            Some(owned) if owned.is_empty() => None,
            Some(owned) => Some(Cow::Owned(owned)),
            None if range.is_empty() => None,
            None => Some(Cow::Borrowed(&source[range])),
        }
    }
}
