//! # Parser - Runes to Sink Notifications
//!
//! This module drives the [`Lexer`] rune by rune and tells a [`Sink`] what it
//! finds. There is no tree and no second pass: every decision that needs
//! context (is this `[` a link? is this `#` a heading?) is made by looking
//! ahead before anything is emitted, so the event stream never has to be
//! taken back.
//!
//! ## Parse State
//!
//! All per-run state lives in one [`Parser`] value handed by `&mut` to the
//! grammar functions:
//!
//! - the lexer (input cursor plus the pending link target)
//! - the fragment window of literal text not yet reported
//! - the active [`TextStyle`]
//! - the sink
//!
//! Nothing is global, so separate documents can be parsed concurrently.
//!
//! ## Module Structure
//!
//! - [`event`] - The Event enum
//! - [`sink`] - The Sink trait, and its `Vec<Event>` implementation
//! - `fragment` - The fragment window
//! - `grammar` - Document driver, paragraph dispatcher, paragraph content
//!
//! ## Public API
//!
//! ```
//! use markydown_syntax::{events, Event, ParagraphKind};
//!
//! let events = events("# Hello");
//! assert_eq!(events[1], Event::StartParagraph(ParagraphKind::Heading1));
//! ```

pub mod event;
pub mod sink;

mod fragment;
mod grammar;

use crate::lexer::Lexer;
use crate::syntax_kind::TextStyle;
use event::Event;
use fragment::Fragment;
use sink::Sink;

/// The state of one parse run.
pub(crate) struct Parser<'src, 's, S> {
    source: &'src str,
    lexer: Lexer<'src>,
    fragment: Fragment,
    style: TextStyle,
    sink: &'s mut S,
}

impl<'src, 's, S: Sink<'src>> Parser<'src, 's, S> {
    fn new(source: &'src str, sink: &'s mut S) -> Self {
        Self {
            source,
            lexer: Lexer::new(source),
            fragment: Fragment::default(),
            style: TextStyle::Regular,
            sink,
        }
    }

    /// Report the pending fragment, if there is one, and start a new one.
    ///
    /// Flushing an empty window is a no-op; the sink never sees empty text.
    fn emit_fragment(&mut self) -> Result<(), S::Error> {
        match self.fragment.take(self.source) {
            Some(text) => self.sink.fragment(text),
            None => Ok(()),
        }
    }

    /// Flip the text style for an emphasis marker and tell the sink.
    fn toggle_style(&mut self, marker: TextStyle) -> Result<(), S::Error> {
        self.style = self.style.toggled(marker);
        self.sink.change_text_style(self.style)
    }
}

/// Parse a Markydown document, feeding `sink` as we go.
///
/// Malformed input never fails: anything that does not parse as structure is
/// literal text. The only error is one raised by the sink itself.
pub fn parse<'src, S: Sink<'src>>(source: &'src str, sink: &mut S) -> Result<(), S::Error> {
    let mut parser = Parser::new(source, sink);
    grammar::document(&mut parser)
}

/// Parse a Markydown document into a list of events.
pub fn events(source: &str) -> Vec<Event<'_>> {
    let mut events = Vec::new();
    let Ok(()) = parse(source, &mut events);
    events
}
