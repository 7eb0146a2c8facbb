//! Paragraph content: the rune loop.
//!
//! Literal text is collected into the fragment window and flushed whenever a
//! structural rune shows up, so consecutive text runes become one
//! [`Fragment`](crate::Event::Fragment) and the sink never sees an empty one.
//!
//! Whitespace handling is where most of the subtlety lives:
//!
//! - A run of spaces, even one wrapping a single line break, is one `Space`.
//! - A single unescaped line break inside a paragraph is also a `Space`.
//! - An escaped line break is a `LineBreak`, and swallows the `Space` that
//!   would otherwise precede it.
//! - Two line breaks in a row (blank lines may hold spaces) end the paragraph.
//!   The second one is left for the document driver to skip.

use crate::lexer::RuneKind;
use crate::parser::Parser;
use crate::parser::sink::Sink;
use crate::syntax_kind::{SpecialToken, TextStyle};

/// Parse runes until the paragraph ends.
pub(super) fn contents<'src, S: Sink<'src>>(p: &mut Parser<'src, '_, S>) -> Result<(), S::Error> {
    loop {
        let rune = p.lexer.next_rune();

        match rune.kind {
            RuneKind::Text => {
                if rune.escaped {
                    p.fragment.push_escaped(p.source, rune.text);
                } else {
                    p.fragment.push(p.source, rune.span);
                }
            }

            RuneKind::Space => {
                p.emit_fragment()?;
                p.lexer.consume_raw_spaces_within_paragraph();
                if !p.lexer.paragraph_goes_on() {
                    return Ok(());
                }
                if !p.lexer.is_hard_line_break_ahead() {
                    p.sink.special_token(SpecialToken::Space)?;
                }
            }

            RuneKind::NewLine => {
                p.emit_fragment()?;
                p.lexer.consume_raw_horizontal_spaces();
                let goes_on = p.lexer.paragraph_goes_on();
                if rune.escaped {
                    p.sink.special_token(SpecialToken::LineBreak)?;
                } else if goes_on {
                    p.sink.special_token(SpecialToken::Space)?;
                }
                if !goes_on {
                    return Ok(());
                }
            }

            RuneKind::Emphasis => {
                p.emit_fragment()?;
                p.toggle_style(TextStyle::Emphasis)?;
            }

            RuneKind::StrongEmphasis => {
                p.emit_fragment()?;
                p.toggle_style(TextStyle::Strong)?;
            }

            RuneKind::LinkStart => {
                p.emit_fragment()?;
                // The lexer records the target before handing out LinkStart
                let target = p.lexer.pending_link().cloned();
                debug_assert!(target.is_some(), "LinkStart without a pending target");
                if let Some(target) = target {
                    p.sink.start_link(target)?;
                }
            }

            RuneKind::LinkEnd => {
                p.emit_fragment()?;
                p.sink.end_link()?;
                p.lexer.consume_link_target();
            }

            RuneKind::EndOfInput => return p.emit_fragment(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::event::Event;
    use crate::parser::events;
    use crate::syntax_kind::{ParagraphKind, SpecialToken, TextStyle};
    use pretty_assertions::assert_eq;

    /// The events between the first paragraph's start and end.
    fn content(input: &str) -> Vec<Event<'_>> {
        let events = events(input);
        let end = events
            .iter()
            .position(|event| matches!(event, Event::EndParagraph(_)))
            .unwrap();
        events[2..end].to_vec()
    }

    const SPACE: Event<'static> = Event::Special(SpecialToken::Space);
    const BREAK: Event<'static> = Event::Special(SpecialToken::LineBreak);

    #[test]
    fn space_runs_collapse() {
        assert_eq!(
            content("a \t  b"),
            vec![Event::fragment("a"), SPACE, Event::fragment("b")]
        );
    }

    #[test]
    fn spaces_around_one_newline_collapse() {
        assert_eq!(
            content("a  \n  b"),
            vec![Event::fragment("a"), SPACE, Event::fragment("b")]
        );
    }

    #[test]
    fn newline_is_a_space() {
        assert_eq!(
            content("a\nb"),
            vec![Event::fragment("a"), SPACE, Event::fragment("b")]
        );
    }

    #[test]
    fn trailing_space_is_dropped() {
        assert_eq!(content("a  "), vec![Event::fragment("a")]);
        assert_eq!(content("a\n"), vec![Event::fragment("a")]);
    }

    #[test]
    fn escaped_newline_is_a_line_break() {
        assert_eq!(
            content("a\\\nb"),
            vec![Event::fragment("a"), BREAK, Event::fragment("b")]
        );
    }

    #[test]
    fn line_break_swallows_preceding_space() {
        assert_eq!(
            content("a \\\n b"),
            vec![Event::fragment("a"), BREAK, Event::fragment("b")]
        );
    }

    #[test]
    fn line_break_at_the_end_is_kept() {
        assert_eq!(content("a\\\n"), vec![Event::fragment("a"), BREAK]);
    }

    #[test]
    fn escapes_join_the_fragment() {
        assert_eq!(content(r"a\*b\\c"), vec![Event::fragment(r"a*b\c")]);
        assert_eq!(content(r"a\ b"), vec![Event::fragment("a b")]);
    }

    #[test]
    fn styles_flush_and_toggle() {
        assert_eq!(
            content("a*b*c"),
            vec![
                Event::fragment("a"),
                Event::Style(TextStyle::Emphasis),
                Event::fragment("b"),
                Event::Style(TextStyle::Regular),
                Event::fragment("c"),
            ]
        );
    }

    #[test]
    fn link_content() {
        assert_eq!(
            content("[a *b*](t)c"),
            vec![
                Event::start_link("t"),
                Event::fragment("a"),
                SPACE,
                Event::Style(TextStyle::Emphasis),
                Event::fragment("b"),
                Event::Style(TextStyle::Regular),
                Event::EndLink,
                Event::fragment("c"),
            ]
        );
    }

    #[test]
    fn blank_line_ends_paragraph() {
        for input in ["a\n\nb", "a\n  \nb", "a  \n\nb", "a \n \n b", "a\r\n\r\nb"] {
            assert_eq!(
                events(input),
                vec![
                    Event::StartDocument,
                    Event::StartParagraph(ParagraphKind::Text),
                    Event::fragment("a"),
                    Event::EndParagraph(ParagraphKind::Text),
                    Event::StartParagraph(ParagraphKind::Text),
                    Event::fragment("b"),
                    Event::EndParagraph(ParagraphKind::Text),
                    Event::EndDocument,
                ],
                "{input:?}"
            );
        }
    }
}
