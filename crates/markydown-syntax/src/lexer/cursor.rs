//! A clonable, read-only view of the unconsumed input.

use logos::Logos;

use super::RawKind;

/// Position in the source text, one code point at a time.
///
/// Wraps a [`logos::Lexer`]; cloning it is how we look ahead without
/// touching the real parser state. Offsets are byte offsets into the text the
/// cursor was created on.
#[derive(Clone)]
pub(crate) struct Cursor<'src> {
    raw: logos::Lexer<'src, RawKind>,
}

impl<'src> Cursor<'src> {
    pub(crate) fn new(text: &'src str) -> Self {
        Self {
            raw: RawKind::lexer(text),
        }
    }

    /// Byte offset of the first unconsumed code point.
    pub(crate) fn offset(&self) -> usize {
        self.raw.span().end
    }

    /// The unconsumed input.
    pub(crate) fn rest(&self) -> &'src str {
        self.raw.remainder()
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.rest().is_empty()
    }

    /// Consume one code point and return its class and text.
    pub(crate) fn bump(&mut self) -> Option<(RawKind, &'src str)> {
        // Every code point matches some class, but an error is still just text
        let kind = self.raw.next()?.unwrap_or(RawKind::Other);
        Some((kind, self.raw.slice()))
    }

    /// Class and text of the next code point, without consuming it.
    pub(crate) fn peek(&self) -> Option<(RawKind, &'src str)> {
        self.clone().bump()
    }

    pub(crate) fn peek_kind(&self) -> Option<RawKind> {
        self.peek().map(|(kind, _)| kind)
    }

    /// Consume the next code point only if `accept` says so.
    pub(crate) fn bump_if(&mut self, accept: impl FnOnce(RawKind, &str) -> bool) -> bool {
        let mut ahead = self.clone();
        match ahead.bump() {
            Some((kind, text)) if accept(kind, text) => {
                *self = ahead;
                true
            }
            _ => false,
        }
    }

    /// Skip `len` bytes that are already known to be whole code points.
    pub(crate) fn skip(&mut self, len: usize) {
        let len = len.min(self.rest().len());
        self.raw.bump(len);
    }

    /// Having just consumed the newline `first`, also consume its CRLF / LFCR
    /// partner. Two identical newline characters stay two line breaks.
    pub(crate) fn eat_newline_partner(&mut self, first: &str) {
        self.bump_if(|kind, text| kind == RawKind::Newline && text != first);
    }

    /// Consume one logical newline (`\n`, `\r`, `\r\n` or `\n\r`) if there is one.
    pub(crate) fn eat_newline(&mut self) -> bool {
        let mut ahead = self.clone();
        match ahead.bump() {
            Some((RawKind::Newline, first)) => {
                ahead.eat_newline_partner(first);
                *self = ahead;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn eat_horizontal_spaces(&mut self) {
        while self.bump_if(|kind, _| kind == RawKind::Space) {}
    }

    /// Consume every whitespace code point, newlines included.
    pub(crate) fn eat_spaces(&mut self) {
        while self.bump_if(|kind, _| matches!(kind, RawKind::Space | RawKind::Newline)) {}
    }

    /// Whether the input here, just after the newline `first`, holds a blank
    /// line: optional horizontal space and then another newline.
    pub(crate) fn is_blank_line_after(&self, first: &str) -> bool {
        let mut ahead = self.clone();
        ahead.eat_newline_partner(first);
        ahead.eat_horizontal_spaces();
        ahead.peek_kind() == Some(RawKind::Newline)
    }
}
