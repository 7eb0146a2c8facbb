//! # Grammar Rules
//!
//! Each function takes the `&mut Parser` and uses it to:
//!
//! 1. Look at the input (`p.lexer.rest()`, `p.lexer.paragraph_goes_on()`)
//! 2. Consume it (`p.lexer.next_rune()`, `p.lexer.consume_raw_*()`)
//! 3. Tell the sink (`p.sink.*`, `p.emit_fragment()`)
//!
//! ## Module Structure
//!
//! - [`block`] - Paragraph dispatch: heading, bulleted item or plain text
//! - [`inline`] - The content of a paragraph, rune by rune
//!
//! ## Error Recovery
//!
//! There is none to do. Every check that could fail is made before input
//! is consumed, and a construct that does not check out is read as literal
//! text instead. The only errors passing through here come from the sink and
//! are returned with `?` as soon as they happen.

mod block;
mod inline;

use crate::parser::Parser;
use crate::parser::sink::Sink;

/// Parse the whole document.
///
/// An empty or all-blank document still gets its start and end
/// notifications, with nothing in between.
pub(crate) fn document<'src, S: Sink<'src>>(p: &mut Parser<'src, '_, S>) -> Result<(), S::Error> {
    p.sink.start_document()?;

    loop {
        // Blank lines between paragraphs, and any indentation before one
        p.lexer.consume_raw_spaces();
        if p.lexer.is_at_end() {
            break;
        }
        block::paragraph(p)?;
    }

    p.sink.end_document()
}
