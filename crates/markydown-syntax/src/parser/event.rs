//! # Parser Events
//!
//! [`Event`] is the tagged-union form of the [`Sink`](super::sink::Sink)
//! notifications: one variant per sink method, in the order the parser
//! emits them. Collecting events into a `Vec` is the easiest way to look at
//! what the parser did, and it is what the tests compare against.
//!
//! ## Grammar
//!
//! The sequence always follows this shape:
//!
//! ```text
//! Document  := StartDocument Paragraph* EndDocument
//! Paragraph := StartParagraph(k) Content* EndParagraph(k)
//! Content   := Fragment | Special | Style | Link
//! Link      := StartLink Content* EndLink
//! ```
//!
//! Links never nest, and a link never crosses a paragraph boundary.
//!
//! ## Borrowed Text
//!
//! [`Event::Fragment`] and [`Event::StartLink`] hold a [`Cow`]. It borrows
//! straight from the source unless the text contained a backslash escape, in
//! which case it is an owned copy with the backslashes removed.

use std::borrow::Cow;

use crate::syntax_kind::{ParagraphKind, SpecialToken, TextStyle};

/// One notification from the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event<'src> {
    StartDocument,
    EndDocument,
    StartParagraph(ParagraphKind),
    EndParagraph(ParagraphKind),
    /// Non-empty literal text.
    Fragment(Cow<'src, str>),
    Special(SpecialToken),
    /// The text style changed to this one.
    Style(TextStyle),
    /// A link to this (escape-free) target starts.
    StartLink(Cow<'src, str>),
    EndLink,
}

impl<'src> Event<'src> {
    /// A borrowed fragment event.
    pub fn fragment(text: &'src str) -> Self {
        Event::Fragment(Cow::Borrowed(text))
    }

    /// A borrowed start-of-link event.
    pub fn start_link(target: &'src str) -> Self {
        Event::StartLink(Cow::Borrowed(target))
    }

    /// Detach from the source text.
    pub fn into_owned(self) -> Event<'static> {
        match self {
            Event::StartDocument => Event::StartDocument,
            Event::EndDocument => Event::EndDocument,
            Event::StartParagraph(kind) => Event::StartParagraph(kind),
            Event::EndParagraph(kind) => Event::EndParagraph(kind),
            Event::Fragment(text) => Event::Fragment(Cow::Owned(text.into_owned())),
            Event::Special(token) => Event::Special(token),
            Event::Style(style) => Event::Style(style),
            Event::StartLink(target) => Event::StartLink(Cow::Owned(target.into_owned())),
            Event::EndLink => Event::EndLink,
        }
    }
}
