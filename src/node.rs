//! Render tree produced by the inline resolver and the block classifier.

use serde::Serialize;

/// One unit of rendered output.
///
/// Inline variants come from the inline resolver; block variants wrap the
/// resolved content of a single source line. Emphasis variants always hold
/// exactly one [`RenderNode::Text`] child since emphasis does not nest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderNode {
    /// Literal characters, rendered as-is.
    Text(String),

    /// `**strong**` text.
    Bold(Vec<RenderNode>),
    /// `*emphasized*` text.
    Italic(Vec<RenderNode>),
    /// `~~deleted~~` text.
    Strikethrough(Vec<RenderNode>),

    /// Inline code (leaf, contents are never parsed).
    Code(String),

    /// `[label](url)`. The label is plain text.
    Link {
        /// Text between the brackets.
        label: String,
        /// Destination between the parentheses.
        url: String,
    },

    /// `## ` line.
    Heading(Vec<RenderNode>),
    /// `- ` line.
    BulletItem(Vec<RenderNode>),
    /// `> ` line.
    Blockquote(Vec<RenderNode>),
    /// Any other non-empty line.
    Paragraph(Vec<RenderNode>),

    /// Zero-length source line.
    LineBreak,
}

impl RenderNode {
    /// Shorthand for a `Text` node.
    #[inline]
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Child nodes of a container, empty for leaves.
    pub fn children(&self) -> &[RenderNode] {
        match self {
            Self::Bold(children)
            | Self::Italic(children)
            | Self::Strikethrough(children)
            | Self::Heading(children)
            | Self::BulletItem(children)
            | Self::Blockquote(children)
            | Self::Paragraph(children) => children,
            Self::Text(_) | Self::Code(_) | Self::Link { .. } | Self::LineBreak => &[],
        }
    }

    /// Literal content of this node with all markup removed.
    ///
    /// Links contribute their label, not their url. A `LineBreak` contributes
    /// nothing.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.write_plain_text(&mut out);
        out
    }

    /// Append the literal content of this node to `out`.
    pub fn write_plain_text(&self, out: &mut String) {
        match self {
            Self::Text(text) | Self::Code(text) => out.push_str(text),
            Self::Link { label, .. } => out.push_str(label),
            Self::LineBreak => {}
            _ => {
                for child in self.children() {
                    child.write_plain_text(out);
                }
            }
        }
    }
}

/// Concatenate the literal content of a node sequence.
pub fn plain_text(nodes: &[RenderNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        node.write_plain_text(&mut out);
    }
    out
}
