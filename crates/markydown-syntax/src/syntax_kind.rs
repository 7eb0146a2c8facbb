//! The small closed vocabularies a [`Sink`](crate::Sink) is told about:
//! paragraph kinds, text styles and special tokens.

/// The kind of a paragraph, decided once from its first characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParagraphKind {
    /// Plain text paragraph; the fallback when nothing else matches.
    Text,
    /// `# ` heading
    Heading1,
    /// `## ` heading
    Heading2,
    /// `### ` heading
    Heading3,
    /// `+ ` bulleted list item
    BulletedList,
}

impl ParagraphKind {
    /// Heading level (1 to 3) for heading kinds.
    pub fn heading_level(self) -> Option<u8> {
        match self {
            Self::Heading1 => Some(1),
            Self::Heading2 => Some(2),
            Self::Heading3 => Some(3),
            Self::Text | Self::BulletedList => None,
        }
    }

    /// The heading kind for a run of `level` hash marks, if it is one we support.
    pub fn from_heading_level(level: usize) -> Option<Self> {
        match level {
            1 => Some(Self::Heading1),
            2 => Some(Self::Heading2),
            3 => Some(Self::Heading3),
            _ => None,
        }
    }
}

/// A "semantic" text style.
///
/// This says that text is emphasized, not how it looks: italics, bold or a
/// different colour are all rendering decisions left to the sink.
///
/// Only one style is active at a time. Strong text cannot also be emphasized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextStyle {
    #[default]
    Regular,
    Emphasis,
    Strong,
}

impl TextStyle {
    /// The style after meeting a `marker` (`Emphasis` for `*`, `Strong` for `**`).
    ///
    /// Meeting the marker of the active style returns to `Regular`; any other
    /// marker replaces the active style outright.
    pub fn toggled(self, marker: TextStyle) -> TextStyle {
        if self == marker {
            TextStyle::Regular
        } else {
            marker
        }
    }
}

/// Something that is neither text nor structure but still needs rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialToken {
    /// A word separator. Runs of whitespace collapse into one of these.
    Space,
    /// A hard line break inside a paragraph (backslash before a newline).
    LineBreak,
}
