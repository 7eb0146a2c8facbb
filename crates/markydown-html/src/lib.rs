//! # markydown-html
//!
//! Renders Markydown to HTML by implementing [`Sink`] over any
//! [`io::Write`].
//!
//! ```
//! use markydown_html::{HtmlOptions, render_html};
//!
//! let html = render_html("Some *text*.", HtmlOptions::default()).unwrap();
//! assert_eq!(html, "<p>Some <em>text</em>.</p>\n");
//! ```
//!
//! Block elements go on their own lines. Consecutive list items share one
//! `<ul>`. Text and link targets are escaped, so the output is well-formed
//! whatever the input.

use std::borrow::Cow;
use std::io::{self, Write};

use markydown_syntax::{ParagraphKind, Sink, SpecialToken, TextStyle};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to write HTML: {0}")]
    Io(#[from] io::Error),

    #[error("Rendered HTML is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Output tweaks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Wrap the output in `<html>` and `<body>`.
    pub standalone: bool,
    /// Self-closing void elements (`<br />`).
    pub xhtml: bool,
}

/// A [`Sink`] writing HTML to `out` as the parse goes.
pub struct HtmlRenderer<W> {
    out: W,
    options: HtmlOptions,
    in_list: bool,
    style: TextStyle,
}

impl<W: Write> HtmlRenderer<W> {
    pub fn new(out: W, options: HtmlOptions) -> Self {
        Self {
            out,
            options,
            in_list: false,
            style: TextStyle::Regular,
        }
    }

    /// Give back the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn close_list(&mut self) -> io::Result<()> {
        if self.in_list {
            self.in_list = false;
            self.out.write_all(b"</ul>\n")?;
        }
        Ok(())
    }

    fn open_style(&mut self) -> io::Result<()> {
        match style_tag(self.style) {
            Some(tag) => write!(self.out, "<{tag}>"),
            None => Ok(()),
        }
    }

    fn close_style(&mut self) -> io::Result<()> {
        match style_tag(self.style) {
            Some(tag) => write!(self.out, "</{tag}>"),
            None => Ok(()),
        }
    }
}

fn paragraph_tag(kind: ParagraphKind) -> Cow<'static, str> {
    match kind.heading_level() {
        Some(level) => Cow::Owned(format!("h{level}")),
        None if kind == ParagraphKind::BulletedList => Cow::Borrowed("li"),
        None => Cow::Borrowed("p"),
    }
}

fn style_tag(style: TextStyle) -> Option<&'static str> {
    match style {
        TextStyle::Regular => None,
        TextStyle::Emphasis => Some("em"),
        TextStyle::Strong => Some("strong"),
    }
}

impl<'src, W: Write> Sink<'src> for HtmlRenderer<W> {
    type Error = RenderError;

    fn start_document(&mut self) -> Result<(), RenderError> {
        log::debug!("rendering HTML with {:?}", self.options);
        if self.options.standalone {
            self.out.write_all(b"<html>\n<body>\n")?;
        }
        Ok(())
    }

    fn end_document(&mut self) -> Result<(), RenderError> {
        self.close_list()?;
        if self.options.standalone {
            self.out.write_all(b"</body>\n</html>\n")?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn start_paragraph(&mut self, kind: ParagraphKind) -> Result<(), RenderError> {
        if kind == ParagraphKind::BulletedList {
            if !self.in_list {
                self.in_list = true;
                self.out.write_all(b"<ul>\n")?;
            }
        } else {
            self.close_list()?;
        }
        write!(self.out, "<{}>", paragraph_tag(kind))?;
        Ok(())
    }

    fn end_paragraph(&mut self, kind: ParagraphKind) -> Result<(), RenderError> {
        writeln!(self.out, "</{}>", paragraph_tag(kind))?;
        Ok(())
    }

    fn fragment(&mut self, text: Cow<'src, str>) -> Result<(), RenderError> {
        html_escape::encode_text_to_writer(&text, &mut self.out)?;
        Ok(())
    }

    fn special_token(&mut self, token: SpecialToken) -> Result<(), RenderError> {
        let html: &[u8] = match token {
            SpecialToken::Space => b" ",
            SpecialToken::LineBreak if self.options.xhtml => b"<br />",
            SpecialToken::LineBreak => b"<br>",
        };
        self.out.write_all(html)?;
        Ok(())
    }

    fn change_text_style(&mut self, style: TextStyle) -> Result<(), RenderError> {
        self.close_style()?;
        self.style = style;
        self.open_style()?;
        Ok(())
    }

    // A style may start outside a link and end inside it (or the other way
    // round), so the style element is closed and reopened around `<a>` to
    // keep the elements nested.
    fn start_link(&mut self, target: Cow<'src, str>) -> Result<(), RenderError> {
        self.close_style()?;
        self.out.write_all(b"<a href=\"")?;
        html_escape::encode_double_quoted_attribute_to_writer(&target, &mut self.out)?;
        self.out.write_all(b"\">")?;
        self.open_style()?;
        Ok(())
    }

    fn end_link(&mut self) -> Result<(), RenderError> {
        self.close_style()?;
        self.out.write_all(b"</a>")?;
        self.open_style()?;
        Ok(())
    }
}

/// Render a whole document to a string.
pub fn render_html(source: &str, options: HtmlOptions) -> Result<String, RenderError> {
    let mut renderer = HtmlRenderer::new(Vec::new(), options);
    markydown_syntax::parse(source, &mut renderer)?;
    Ok(String::from_utf8(renderer.into_inner())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(ParagraphKind::Text, "p")]
    #[case(ParagraphKind::Heading1, "h1")]
    #[case(ParagraphKind::Heading2, "h2")]
    #[case(ParagraphKind::Heading3, "h3")]
    #[case(ParagraphKind::BulletedList, "li")]
    fn paragraph_tags(#[case] kind: ParagraphKind, #[case] tag: &str) {
        assert_eq!(paragraph_tag(kind), tag);
    }

    fn render(source: &str) -> String {
        render_html(source, HtmlOptions::default()).unwrap()
    }

    #[test]
    fn empty_document_renders_nothing() {
        assert_eq!(render(""), "");
    }

    #[test]
    fn standalone_wraps_even_empty_documents() {
        let options = HtmlOptions {
            standalone: true,
            ..HtmlOptions::default()
        };
        assert_eq!(
            render_html("", options).unwrap(),
            "<html>\n<body>\n</body>\n</html>\n"
        );
    }

    #[test]
    fn headings() {
        assert_eq!(render("# a\n\n## b\n\n### c"), "<h1>a</h1>\n<h2>b</h2>\n<h3>c</h3>\n");
    }

    #[test]
    fn list_items_share_one_list() {
        assert_eq!(
            render("+ a\n\n+ b\n\nc\n\n+ d"),
            "<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n<p>c</p>\n<ul>\n<li>d</li>\n</ul>\n"
        );
    }

    #[test]
    fn style_switch_closes_previous_element() {
        assert_eq!(
            render("**a*b*"),
            "<p><strong>a</strong><em>b</em></p>\n"
        );
    }

    #[test]
    fn text_is_escaped() {
        assert_eq!(render("a < b & c"), "<p>a &lt; b &amp; c</p>\n");
    }

    #[test]
    fn href_is_attribute_escaped() {
        assert_eq!(
            render("[x](a\"b)"),
            "<p><a href=\"a&quot;b\">x</a></p>\n"
        );
    }

    #[test]
    fn line_breaks() {
        assert_eq!(render("a\\\nb"), "<p>a<br>b</p>\n");
        let xhtml = HtmlOptions {
            xhtml: true,
            ..HtmlOptions::default()
        };
        assert_eq!(render_html("a\\\nb", xhtml).unwrap(), "<p>a<br />b</p>\n");
    }

    #[test]
    fn styles_stay_nested_around_links() {
        assert_eq!(
            render("*a [b* c](t)"),
            "<p><em>a </em><a href=\"t\"><em>b</em> c</a></p>\n"
        );
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("disk on fire"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_errors_stop_rendering() {
        let mut renderer = HtmlRenderer::new(Broken, HtmlOptions::default());
        let err = markydown_syntax::parse("hello", &mut renderer).unwrap_err();
        assert!(matches!(err, RenderError::Io(_)));
        assert!(err.to_string().contains("disk on fire"));
    }
}
