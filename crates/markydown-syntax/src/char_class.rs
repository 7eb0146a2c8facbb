//! Character classes of the Markydown syntax.
//!
//! These are plain predicates over a single `char`. The lexer's Logos token
//! enum encodes the same classes as patterns; the two are kept in agreement by
//! the tests in [`crate::lexer`].

/// CR or LF.
pub fn is_newline(c: char) -> bool {
    c == '\n' || c == '\r'
}

/// Any Unicode whitespace that is not a newline.
pub fn is_horizontal_space(c: char) -> bool {
    !is_newline(c) && c.is_whitespace()
}

/// Marks a bulleted list item.
pub fn is_bullet(c: char) -> bool {
    c == '+'
}

/// Emphasis marker; doubled it means strong emphasis.
pub fn is_emphasis(c: char) -> bool {
    c == '*'
}

/// Escapes the character that follows it.
pub fn is_escape(c: char) -> bool {
    c == '\\'
}

pub fn is_link_start(c: char) -> bool {
    c == '['
}

pub fn is_link_end(c: char) -> bool {
    c == ']'
}

pub fn is_link_target_start(c: char) -> bool {
    c == '('
}

pub fn is_link_target_end(c: char) -> bool {
    c == ')'
}

/// Heading marker. Never a token of its own: headings are recognised by
/// looking at the raw start of a paragraph.
pub fn is_heading_marker(c: char) -> bool {
    c == '#'
}
