//! Link detection.
//!
//! A `[` is only a link if a matching `]` is followed right away by a
//! `(target)`. We find out by scanning ahead on a cloned cursor, so nothing is
//! consumed until the whole construct has been confirmed. Once it has, the
//! target text is remembered until the paragraph parser reaches the `]` and
//! skips the raw `(target)` with [`Lexer::consume_link_target`].
//!
//! A link never spans a paragraph break: meeting a blank line while scanning
//! means "not a link", and the `[` stays literal.

use std::borrow::Cow;

use super::{Cursor, Lexer, RawKind};

/// The target of a confirmed link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LinkTarget<'src> {
    /// The target with escapes resolved.
    pub(crate) text: Cow<'src, str>,
    /// Bytes between the parentheses in the source, escapes included.
    pub(crate) raw_len: usize,
}

impl<'src> Lexer<'src> {
    /// Called right after a `[` was consumed. Returns true (and records the
    /// pending target) if this bracket starts a well-formed link.
    pub(super) fn look_ahead_for_link(&mut self) -> bool {
        let mut ahead = self.cursor.clone();

        loop {
            let Some((kind, text)) = ahead.bump() else {
                log::trace!("unclosed `[`, treating it as text");
                return false;
            };

            match kind {
                RawKind::RBracket => break,
                RawKind::Escape => match ahead.bump() {
                    Some((RawKind::Newline, newline)) if ahead.is_blank_line_after(newline) => {
                        return false;
                    }
                    Some(_) => {}
                    None => return false,
                },
                RawKind::Newline if ahead.is_blank_line_after(text) => {
                    log::trace!("`[` runs into a paragraph break, treating it as text");
                    return false;
                }
                _ => {}
            }
        }

        match parse_link_target(ahead.rest()) {
            Some(target) => {
                log::trace!("link to {:?}", target.text);
                self.link = Some(target);
                true
            }
            None => false,
        }
    }

    /// Skip the raw `(target)` of the link whose `]` was just consumed, and
    /// forget the pending target.
    pub fn consume_link_target(&mut self) {
        if let Some(target) = self.link.take() {
            // +2 for the parentheses themselves
            self.cursor.skip(target.raw_len + 2);
        }
    }
}

/// Parse the `(target)` that `tail` must start with.
///
/// Returns `None` when `tail` does not start with `(`, when the closing `)`
/// never comes, or when the target is empty.
pub(crate) fn parse_link_target(tail: &str) -> Option<LinkTarget<'_>> {
    let mut cursor = Cursor::new(tail);
    if !cursor.bump_if(|kind, _| kind == RawKind::LParen) {
        return None;
    }

    let start = cursor.offset();
    // Only allocated once an escape shows up
    let mut unescaped: Option<String> = None;

    loop {
        let at = cursor.offset();
        let (kind, text) = cursor.bump()?;

        match kind {
            RawKind::RParen => {
                let text = match unescaped {
                    Some(owned) => Cow::Owned(owned),
                    None => Cow::Borrowed(&tail[start..at]),
                };
                if text.is_empty() {
                    return None;
                }
                return Some(LinkTarget {
                    text,
                    raw_len: at - start,
                });
            }
            RawKind::Escape => {
                let (escaped_kind, literal) = cursor.bump()?;
                let owned = unescaped.get_or_insert_with(|| tail[start..at].to_owned());
                if escaped_kind == RawKind::Newline {
                    if cursor.is_blank_line_after(literal) {
                        return None;
                    }
                    cursor.eat_newline_partner(literal);
                    owned.push('\n');
                } else {
                    owned.push_str(literal);
                }
            }
            // Every newline convention comes out as `\n`
            RawKind::Newline => {
                if cursor.is_blank_line_after(text) {
                    return None;
                }
                cursor.eat_newline_partner(text);
                unescaped
                    .get_or_insert_with(|| tail[start..at].to_owned())
                    .push('\n');
            }
            _ => {
                if let Some(owned) = unescaped.as_mut() {
                    owned.push_str(text);
                }
            }
        }
    }
}
