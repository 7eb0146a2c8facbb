//! # markydown-syntax
//!
//! A single-pass parser for Markydown, a small Markdown dialect, built on
//! [Logos].
//!
//! [Logos]: https://docs.rs/logos
//!
//! ## The Dialect
//!
//! ```text
//! # Heading 1            ## Heading 2            ### Heading 3
//! + bulleted list item
//! *emphasis*  **strong**  [link text](target)
//! \* escaped   trailing backslash\
//! forces a line break
//! ```
//!
//! Paragraphs are separated by blank lines. Anything that does not fit the
//! rules above (`#### deep`, `+no space`, `[no target]`...) is literal text:
//! parsing never fails.
//!
//! ## Architecture Overview
//!
//! There is no tree. The parser reports what it finds to a [`Sink`] while it
//! walks the input once:
//!
//! ```text
//! Source Text → Lexer → Runes → Parser → Sink calls
//!               (Logos)         (Grammar)
//! ```
//!
//! ### 1. Lexer ([`lexer`] module)
//!
//! Logos classifies code points. The lexer folds newline pairs, escapes,
//! `**` and link look-ahead on top and hands out one rune at a time.
//!
//! ```text
//! "*a*\r\n" → [Emphasis, Text(a), Emphasis, NewLine]
//! ```
//!
//! ### 2. Parser ([`parser`] module)
//!
//! Grammar rules decide each paragraph's kind from its first characters,
//! then run the rune loop: literal text accumulates into a fragment, and
//! everything else flushes the fragment and notifies the sink.
//!
//! ### 3. Sink ([`Sink`] trait)
//!
//! Rendering is entirely up to the sink. `Vec<Event>` is a sink that records
//! everything; see `markydown-html` for one that writes HTML.
//!
//! ## Module Structure
//!
//! ```text
//! markydown-syntax/
//! ├── lib.rs           # This file - public API and integration tests
//! ├── char_class.rs    # Code point predicates
//! ├── syntax_kind.rs   # ParagraphKind, TextStyle, SpecialToken
//! ├── lexer/
//! │   ├── mod.rs       # RawKind (Logos), Rune, Lexer::next_rune
//! │   ├── cursor.rs    # Clonable input cursor
//! │   └── link.rs      # Link look-ahead and target parsing
//! └── parser/
//!     ├── mod.rs       # Parser state, public parse() and events()
//!     ├── event.rs     # Event enum
//!     ├── sink.rs      # Sink trait
//!     ├── fragment.rs  # Borrowed-or-owned fragment window
//!     └── grammar/
//!         ├── mod.rs   # Document driver
//!         ├── block.rs # Paragraph dispatch
//!         └── inline.rs# Paragraph content
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use markydown_syntax::{events, Event, ParagraphKind, SpecialToken};
//!
//! let events = events("bir iki");
//! assert_eq!(
//!     events,
//!     vec![
//!         Event::StartDocument,
//!         Event::StartParagraph(ParagraphKind::Text),
//!         Event::fragment("bir"),
//!         Event::Special(SpecialToken::Space),
//!         Event::fragment("iki"),
//!         Event::EndParagraph(ParagraphKind::Text),
//!         Event::EndDocument,
//!     ]
//! );
//! ```
//!
//! Implement [`Sink`] and call [`parse`] to handle the notifications yourself
//! instead of collecting them.

pub mod char_class;
pub mod lexer;
pub mod parser;
pub mod syntax_kind;

pub use parser::event::Event;
pub use parser::sink::Sink;
pub use parser::{events, parse};
pub use syntax_kind::{ParagraphKind, SpecialToken, TextStyle};
