//! Paragraph-level grammar rules.
//!
//! A paragraph's kind is decided from the raw text at its start, before any
//! rune is lexed:
//!
//! | Prefix | Kind |
//! |--------|------|
//! | `#` + space | Heading1 |
//! | `##` + space | Heading2 |
//! | `###` + space | Heading3 |
//! | `+` + space | BulletedList |
//! | anything else | Text |
//!
//! The checks run in that order and the first match wins. A failed check
//! consumes nothing, so `####` or `+x` simply start a text paragraph whose
//! first fragment contains the marker characters.

use crate::char_class::{is_bullet, is_heading_marker, is_horizontal_space};
use crate::parser::Parser;
use crate::parser::sink::Sink;
use crate::syntax_kind::{ParagraphKind, TextStyle};

use super::inline;

/// Parse one paragraph, of whatever kind it turns out to be.
pub(super) fn paragraph<'src, S: Sink<'src>>(p: &mut Parser<'src, '_, S>) -> Result<(), S::Error> {
    if heading(p)? {
        return Ok(());
    }

    if bulleted_paragraph(p)? {
        return Ok(());
    }

    text_paragraph(p)
}

/// Parse a heading of any supported level. Returns false, without consuming
/// anything, if the input does not start with one.
fn heading<'src, S: Sink<'src>>(p: &mut Parser<'src, '_, S>) -> Result<bool, S::Error> {
    let Some((kind, marker_len)) = heading_marker(p.lexer.rest()) else {
        return Ok(false);
    };

    p.lexer.skip(marker_len);
    p.lexer.consume_raw_horizontal_spaces();
    paragraph_body(p, kind)?;
    Ok(true)
}

/// The heading kind and marker length (in bytes) at the start of `rest`.
///
/// One to three `#` followed by a horizontal space. The space is looked for
/// among the first four characters only: anything further away cannot make a
/// supported heading.
fn heading_marker(rest: &str) -> Option<(ParagraphKind, usize)> {
    let (first_space, _) = rest
        .char_indices()
        .take(4)
        .find(|&(_, c)| is_horizontal_space(c))?;

    if !rest[..first_space].chars().all(is_heading_marker) {
        return None;
    }

    // `#` is one byte, so the offset is also the level
    ParagraphKind::from_heading_level(first_space).map(|kind| (kind, first_space))
}

/// Parse a bulleted list item. Returns false, without consuming anything, if
/// the input does not start with a bullet followed by a space.
fn bulleted_paragraph<'src, S: Sink<'src>>(p: &mut Parser<'src, '_, S>) -> Result<bool, S::Error> {
    let mut chars = p.lexer.rest().chars();
    let bullet = match (chars.next(), chars.next()) {
        (Some(bullet), Some(space)) if is_bullet(bullet) && is_horizontal_space(space) => bullet,
        _ => return Ok(false),
    };

    p.lexer.skip(bullet.len_utf8());
    p.lexer.consume_raw_horizontal_spaces();
    paragraph_body(p, ParagraphKind::BulletedList)?;
    Ok(true)
}

/// Parse a regular text paragraph. The fallback, so it always succeeds.
fn text_paragraph<'src, S: Sink<'src>>(p: &mut Parser<'src, '_, S>) -> Result<(), S::Error> {
    paragraph_body(p, ParagraphKind::Text)
}

/// The notifications around a paragraph's content. Its marker, if any, has
/// been consumed already.
fn paragraph_body<'src, S: Sink<'src>>(
    p: &mut Parser<'src, '_, S>,
    kind: ParagraphKind,
) -> Result<(), S::Error> {
    log::trace!("{kind:?} paragraph");
    p.sink.start_paragraph(kind)?;

    inline::contents(p)?;

    // Styles do not carry over into the next paragraph
    if p.style != TextStyle::Regular {
        p.toggle_style(p.style)?;
    }

    p.sink.end_paragraph(kind)
}
