//! The [`Sink`] trait: where parsed Markydown goes.

use std::borrow::Cow;
use std::convert::Infallible;

use crate::parser::event::Event;
use crate::syntax_kind::{ParagraphKind, SpecialToken, TextStyle};

/// Receives the parse of a Markydown document as it happens.
///
/// The parser calls these methods synchronously, in document order, following
/// the grammar described in [`event`](super::event). Producing any output
/// (HTML, a tree, a word count...) is entirely up to the implementation.
///
/// Every method can fail. The first error stops the parse and is handed back
/// from [`parse`](crate::parse) unchanged; nothing is emitted after it.
pub trait Sink<'src> {
    type Error;

    fn start_document(&mut self) -> Result<(), Self::Error>;

    fn end_document(&mut self) -> Result<(), Self::Error>;

    fn start_paragraph(&mut self, kind: ParagraphKind) -> Result<(), Self::Error>;

    /// Always called with the same kind as the matching `start_paragraph`.
    fn end_paragraph(&mut self, kind: ParagraphKind) -> Result<(), Self::Error>;

    /// A run of literal text. Never empty.
    fn fragment(&mut self, text: Cow<'src, str>) -> Result<(), Self::Error>;

    fn special_token(&mut self, token: SpecialToken) -> Result<(), Self::Error>;

    /// Called on every style change, including the change back to `Regular`.
    fn change_text_style(&mut self, style: TextStyle) -> Result<(), Self::Error>;

    /// Start of a link. `target` has its escapes resolved.
    fn start_link(&mut self, target: Cow<'src, str>) -> Result<(), Self::Error>;

    fn end_link(&mut self) -> Result<(), Self::Error>;
}

/// Collects every notification as an [`Event`].
impl<'src> Sink<'src> for Vec<Event<'src>> {
    type Error = Infallible;

    fn start_document(&mut self) -> Result<(), Infallible> {
        self.push(Event::StartDocument);
        Ok(())
    }

    fn end_document(&mut self) -> Result<(), Infallible> {
        self.push(Event::EndDocument);
        Ok(())
    }

    fn start_paragraph(&mut self, kind: ParagraphKind) -> Result<(), Infallible> {
        self.push(Event::StartParagraph(kind));
        Ok(())
    }

    fn end_paragraph(&mut self, kind: ParagraphKind) -> Result<(), Infallible> {
        self.push(Event::EndParagraph(kind));
        Ok(())
    }

    fn fragment(&mut self, text: Cow<'src, str>) -> Result<(), Infallible> {
        self.push(Event::Fragment(text));
        Ok(())
    }

    fn special_token(&mut self, token: SpecialToken) -> Result<(), Infallible> {
        self.push(Event::Special(token));
        Ok(())
    }

    fn change_text_style(&mut self, style: TextStyle) -> Result<(), Infallible> {
        self.push(Event::Style(style));
        Ok(())
    }

    fn start_link(&mut self, target: Cow<'src, str>) -> Result<(), Infallible> {
        self.push(Event::StartLink(target));
        Ok(())
    }

    fn end_link(&mut self) -> Result<(), Infallible> {
        self.push(Event::EndLink);
        Ok(())
    }
}
