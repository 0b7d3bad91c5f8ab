//! Line-level block kinds.

/// Block kind of a single source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// `## ` prefix.
    Heading,
    /// `- ` prefix.
    BulletItem,
    /// `> ` prefix.
    Blockquote,
    /// Zero-length line. Whitespace-only lines are paragraphs.
    Blank,
    /// Anything else.
    Paragraph,
}

impl LineKind {
    /// Marker stripped from the front of the line, if any.
    pub fn prefix(self) -> Option<&'static str> {
        match self {
            Self::Heading => Some("## "),
            Self::BulletItem => Some("- "),
            Self::Blockquote => Some("> "),
            Self::Blank | Self::Paragraph => None,
        }
    }
}

/// Prefixed kinds in the order they are tried.
pub(super) const PREFIXED: [LineKind; 3] =
    [LineKind::Heading, LineKind::BulletItem, LineKind::Blockquote];
