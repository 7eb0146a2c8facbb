//! # Lexer - One Rune at a Time
//!
//! The first stage of parsing: turning the source text into classified
//! runes for the paragraph parser.
//!
//! Classification happens in two layers:
//!
//! 1. [`RawKind`] is a [Logos] token enum. Every code point of the input
//!    matches exactly one variant, so the raw stream never skips a byte.
//! 2. [`Lexer::next_rune`] reads raw code points and folds the Markydown
//!    rules on top: backslash escapes, `CRLF`/`LFCR` normalization, `**`
//!    versus `*`, and whether a `[` really opens a link.
//!
//! [Logos]: https://docs.rs/logos
//!
//! ## What the Lexer Does Not Know
//!
//! `#` and `+` are never special here. Headings and list items are
//! recognised by the paragraph dispatcher looking at the raw input, so the
//! lexer hands them out as ordinary text.
//!
//! Even `*`, `[` and `]` can come out as [`RuneKind::Text`] when the context
//! disqualifies them: a `[` with no well-formed `(target)` behind its `]`, or
//! a `]` while no link is open.
//!
//! ```text
//! "*a* \b"  →  Emphasis, Text(a), Emphasis, Space, Text(b, escaped)
//! ```

mod cursor;
mod link;

use std::borrow::Cow;
use std::ops::Range;

use logos::Logos;

pub(crate) use cursor::Cursor;
pub(crate) use link::LinkTarget;

/// Raw class of a single code point.
///
/// The Markydown-specific behaviour lives in [`Lexer`]; this enum only says
/// what a code point looks like.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawKind {
    /// Unicode whitespace other than CR and LF.
    #[regex(
        r"[\t\x0B\x0C \x{85}\x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}]",
        priority = 3
    )]
    Space,

    /// A single CR or LF. Pairs are folded by the lexer, not here.
    #[regex(r"[\r\n]", priority = 3)]
    Newline,

    /// `\`
    #[token("\\")]
    Escape,

    /// `*`
    #[token("*")]
    Star,

    /// `[`
    #[token("[")]
    LBracket,

    /// `]`
    #[token("]")]
    RBracket,

    /// `(`
    #[token("(")]
    LParen,

    /// `)`
    #[token(")")]
    RParen,

    /// Any other code point
    #[regex(r".", priority = 1)]
    Other,
}

/// Class of a lexed rune, after the Markydown rules are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuneKind {
    /// Literal text.
    Text,
    /// Nothing left to lex.
    EndOfInput,
    /// `*`
    Emphasis,
    /// `**`
    StrongEmphasis,
    /// One horizontal space. Runs are not collapsed here.
    Space,
    /// One logical line break, whatever newline convention produced it.
    NewLine,
    /// `[` with a confirmed `](target)` ahead.
    LinkStart,
    /// `]` closing the open link.
    LinkEnd,
}

/// A lexed rune.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rune<'src> {
    pub kind: RuneKind,
    /// The logical text: a normalized `" "` for spaces, the escaped
    /// character (without its backslash) for escapes, the raw text otherwise.
    pub text: &'src str,
    /// Where `text` sits in the source. Empty for synthesized text.
    pub span: Range<usize>,
    /// Produced through a backslash escape.
    pub escaped: bool,
}

impl<'src> Rune<'src> {
    fn new(kind: RuneKind, text: &'src str, span: Range<usize>, escaped: bool) -> Self {
        Self {
            kind,
            text,
            span,
            escaped,
        }
    }
}

/// The rune lexer.
///
/// Owns the input cursor and the pending link target; both belong to a
/// single parse run.
pub struct Lexer<'src> {
    cursor: Cursor<'src>,
    link: Option<LinkTarget<'src>>,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            cursor: Cursor::new(source),
            link: None,
        }
    }

    /// Consume and classify the next rune.
    pub fn next_rune(&mut self) -> Rune<'src> {
        let start = self.cursor.offset();
        let Some((kind, text)) = self.cursor.bump() else {
            return Rune::new(RuneKind::EndOfInput, "", start..start, false);
        };
        let end = self.cursor.offset();

        match kind {
            RawKind::Space => Rune::new(RuneKind::Space, " ", start..end, false),

            RawKind::Star => {
                if self.cursor.bump_if(|kind, _| kind == RawKind::Star) {
                    let end = self.cursor.offset();
                    Rune::new(RuneKind::StrongEmphasis, "**", start..end, false)
                } else {
                    Rune::new(RuneKind::Emphasis, text, start..end, false)
                }
            }

            // Links never nest: a `[` inside an open link is just a bracket
            RawKind::LBracket if self.link.is_none() && self.look_ahead_for_link() => {
                Rune::new(RuneKind::LinkStart, text, start..end, false)
            }

            RawKind::RBracket if self.link.is_some() => {
                Rune::new(RuneKind::LinkEnd, text, start..end, false)
            }

            RawKind::Escape => match self.cursor.bump() {
                Some((RawKind::Newline, newline)) => {
                    self.cursor.eat_newline_partner(newline);
                    let end = self.cursor.offset();
                    Rune::new(RuneKind::NewLine, "\n", start..end, true)
                }
                Some((_, literal)) => {
                    let end = self.cursor.offset();
                    Rune::new(RuneKind::Text, literal, end - literal.len()..end, true)
                }
                // A lone backslash at the very end escapes nothing
                None => Rune::new(RuneKind::Text, "", end..end, true),
            },

            RawKind::Newline => {
                self.cursor.eat_newline_partner(text);
                let end = self.cursor.offset();
                Rune::new(RuneKind::NewLine, "\n", start..end, false)
            }

            _ => Rune::new(RuneKind::Text, text, start..end, false),
        }
    }

    /// The unconsumed input.
    pub fn rest(&self) -> &'src str {
        self.cursor.rest()
    }

    pub fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    /// Skip `len` bytes of raw input (a paragraph marker already inspected by
    /// the caller).
    pub fn skip(&mut self, len: usize) {
        self.cursor.skip(len);
    }

    /// Target of the open link, if one is pending.
    pub fn pending_link(&self) -> Option<&Cow<'src, str>> {
        self.link.as_ref().map(|link| &link.text)
    }

    /// Chomp every whitespace code point, blank lines included.
    pub fn consume_raw_spaces(&mut self) {
        self.cursor.eat_spaces();
    }

    /// Chomp horizontal spaces.
    pub fn consume_raw_horizontal_spaces(&mut self) {
        self.cursor.eat_horizontal_spaces();
    }

    /// Chomp spaces, crossing at most one line break so we never slip into
    /// the next paragraph.
    pub fn consume_raw_spaces_within_paragraph(&mut self) {
        self.cursor.eat_horizontal_spaces();
        if self.cursor.eat_newline() {
            self.cursor.eat_horizontal_spaces();
        }
    }

    /// Whether the current paragraph goes on: input is left and it does not
    /// start with a line break.
    pub fn paragraph_goes_on(&self) -> bool {
        !matches!(self.cursor.peek_kind(), None | Some(RawKind::Newline))
    }

    /// Whether an escaped newline (a hard line break) comes next.
    pub fn is_hard_line_break_ahead(&self) -> bool {
        let mut ahead = self.cursor.clone();
        matches!(ahead.bump(), Some((RawKind::Escape, _)))
            && matches!(ahead.bump(), Some((RawKind::Newline, _)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::char_class;
    use pretty_assertions::assert_eq;

    fn kinds(input: &str) -> Vec<(RuneKind, String, bool)> {
        let mut lexer = Lexer::new(input);
        let mut runes = Vec::new();
        loop {
            let rune = lexer.next_rune();
            if rune.kind == RuneKind::EndOfInput {
                return runes;
            }
            runes.push((rune.kind, rune.text.to_string(), rune.escaped));
            // Skip the target the way the paragraph parser does
            if rune.kind == RuneKind::LinkEnd {
                lexer.consume_link_target();
            }
        }
    }

    fn text(s: &str) -> (RuneKind, String, bool) {
        (RuneKind::Text, s.to_string(), false)
    }

    fn escaped(s: &str) -> (RuneKind, String, bool) {
        (RuneKind::Text, s.to_string(), true)
    }

    fn special(kind: RuneKind, s: &str) -> (RuneKind, String, bool) {
        (kind, s.to_string(), false)
    }

    #[test]
    fn lex_empty_input() {
        let mut lexer = Lexer::new("");
        assert_eq!(lexer.next_rune().kind, RuneKind::EndOfInput);
        // Stays at the end
        assert_eq!(lexer.next_rune().kind, RuneKind::EndOfInput);
    }

    #[test]
    fn lex_plain_text_rune_by_rune() {
        assert_eq!(kinds("hé#"), vec![text("h"), text("é"), text("#")]);
    }

    #[test]
    fn lex_spaces_one_at_a_time() {
        assert_eq!(
            kinds("a \t\u{A0}"),
            vec![
                text("a"),
                special(RuneKind::Space, " "),
                special(RuneKind::Space, " "),
                special(RuneKind::Space, " "),
            ]
        );
    }

    #[test]
    fn lex_emphasis_markers() {
        assert_eq!(
            kinds("***"),
            vec![
                special(RuneKind::StrongEmphasis, "**"),
                special(RuneKind::Emphasis, "*"),
            ]
        );
    }

    #[test]
    fn lex_newline_conventions() {
        for input in ["\n", "\r", "\r\n", "\n\r"] {
            assert_eq!(kinds(input), vec![special(RuneKind::NewLine, "\n")], "{input:?}");
        }
        assert_eq!(kinds("\n\n").len(), 2);
        assert_eq!(kinds("\r\r").len(), 2);
        assert_eq!(kinds("\r\n\r\n").len(), 2);
    }

    #[test]
    fn lex_escapes() {
        assert_eq!(kinds("\\*\\ "), vec![escaped("*"), escaped(" ")]);
        assert_eq!(
            kinds("\\\r\n"),
            vec![(RuneKind::NewLine, "\n".to_string(), true)]
        );
    }

    #[test]
    fn escaped_rune_span_skips_backslash() {
        let mut lexer = Lexer::new("\\ü");
        let rune = lexer.next_rune();
        assert_eq!(rune.span, 1..3);
        assert_eq!(rune.text, "ü");
    }

    #[test]
    fn lone_trailing_backslash_is_harmless() {
        let mut lexer = Lexer::new("\\");
        let rune = lexer.next_rune();
        assert_eq!(rune.kind, RuneKind::Text);
        assert!(rune.escaped);
        assert_eq!(rune.text, "");
        assert_eq!(lexer.next_rune().kind, RuneKind::EndOfInput);
    }

    #[test]
    fn lex_link_brackets() {
        assert_eq!(
            kinds("[a](t)"),
            vec![
                special(RuneKind::LinkStart, "["),
                text("a"),
                special(RuneKind::LinkEnd, "]"),
            ]
        );
    }

    #[test]
    fn link_start_always_comes_with_its_target() {
        for input in ["[a](t)", "x [a\nb](t) [c](d\\))", "[[a](b)](c)", "[a](\r\nt)"] {
            let mut lexer = Lexer::new(input);
            loop {
                let rune = lexer.next_rune();
                match rune.kind {
                    RuneKind::EndOfInput => break,
                    RuneKind::LinkStart => {
                        assert!(lexer.pending_link().is_some(), "{input:?}");
                    }
                    RuneKind::LinkEnd => {
                        assert!(lexer.pending_link().is_some(), "{input:?}");
                        lexer.consume_link_target();
                    }
                    _ => {}
                }
            }
            assert_eq!(lexer.pending_link(), None, "{input:?}");
        }
    }

    #[test]
    fn brackets_without_target_are_text() {
        assert_eq!(kinds("[a]"), vec![text("["), text("a"), text("]")]);
        assert_eq!(kinds("a]"), vec![text("a"), text("]")]);
    }

    #[test]
    fn hash_and_plus_are_text() {
        assert_eq!(kinds("#+"), vec![text("#"), text("+")]);
    }

    #[test]
    fn hard_line_break_ahead() {
        let lexer = Lexer::new("\\\nx");
        assert!(lexer.is_hard_line_break_ahead());
        let lexer = Lexer::new("\\ x");
        assert!(!lexer.is_hard_line_break_ahead());
    }

    #[test]
    fn spaces_within_paragraph_cross_one_line_break() {
        let mut lexer = Lexer::new("  \n  \nnext");
        lexer.consume_raw_spaces_within_paragraph();
        assert_eq!(lexer.rest(), "\nnext");
        assert!(!lexer.paragraph_goes_on());
    }

    #[test]
    fn logos_classes_agree_with_predicates() {
        let samples = [
            ' ', '\t', '\u{0B}', '\u{0C}', '\u{85}', '\u{A0}', '\u{1680}', '\u{2000}', '\u{200A}',
            '\u{2028}', '\u{2029}', '\u{202F}', '\u{205F}', '\u{3000}', '\n', '\r', '\\', '*', '[',
            ']', '(', ')', '#', '+', 'a', 'ß', '\u{200B}', '😀',
        ];

        for c in samples {
            let source = c.to_string();
            let (kind, _) = Cursor::new(&source).bump().unwrap();
            let expected = if char_class::is_horizontal_space(c) {
                RawKind::Space
            } else if char_class::is_newline(c) {
                RawKind::Newline
            } else if char_class::is_escape(c) {
                RawKind::Escape
            } else if char_class::is_emphasis(c) {
                RawKind::Star
            } else if char_class::is_link_start(c) {
                RawKind::LBracket
            } else if char_class::is_link_end(c) {
                RawKind::RBracket
            } else if char_class::is_link_target_start(c) {
                RawKind::LParen
            } else if char_class::is_link_target_end(c) {
                RawKind::RParen
            } else {
                RawKind::Other
            };
            assert_eq!(kind, expected, "classifying {c:?}");
        }
    }
}
