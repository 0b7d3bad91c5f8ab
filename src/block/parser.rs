//! Block line classifier implementation.

use crate::inline::InlineResolver;
use crate::{Options, RenderNode};

use super::line::{LineKind, PREFIXED};

/// Classify one line and strip its block marker.
///
/// Returns the kind and the text left for inline resolution. Rules are tried
/// in order: `## `, `- `, `> `, zero-length, paragraph. Only the exact
/// two-byte markers followed by a space count, so `### x` and `-x` are
/// paragraphs.
///
/// # Example
/// ```
/// use submark::block::{classify_line, LineKind};
///
/// assert_eq!(classify_line("## Setup"), (LineKind::Heading, "Setup"));
/// assert_eq!(classify_line("   "), (LineKind::Paragraph, "   "));
/// ```
pub fn classify_line(line: &str) -> (LineKind, &str) {
    for kind in PREFIXED {
        if let Some(rest) = kind.prefix().and_then(|prefix| line.strip_prefix(prefix)) {
            return (kind, rest);
        }
    }

    if line.is_empty() {
        (LineKind::Blank, line)
    } else {
        (LineKind::Paragraph, line)
    }
}

/// Block renderer state.
///
/// Lines are classified independently; nothing carries over from one line
/// to the next.
#[derive(Debug, Default)]
pub struct BlockRenderer {
    inline: InlineResolver,
    options: Options,
}

impl BlockRenderer {
    /// Create a renderer with default options.
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    /// Create a renderer with the given options.
    pub fn with_options(options: Options) -> Self {
        Self {
            inline: InlineResolver::new(),
            options,
        }
    }

    /// Options in effect.
    #[inline]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Render a document into one node per line.
    pub fn render(&mut self, document: &str) -> Vec<RenderNode> {
        let mut out = Vec::with_capacity(document.len() / 32 + 1);
        self.render_into(document, &mut out);
        out
    }

    /// Render a document, appending one node per `\n`-separated line.
    ///
    /// Lines are classified exactly as split; a `\r` before the `\n` stays
    /// part of the line's text.
    pub fn render_into(&mut self, document: &str, out: &mut Vec<RenderNode>) {
        let first = out.len();
        for line in document.split('\n') {
            let node = self.render_line(line);
            out.push(node);
        }
        log::debug!(
            "rendered {} lines from {} bytes",
            out.len() - first,
            document.len()
        );
    }

    /// Render a single line (must not contain `\n`).
    pub fn render_line(&mut self, line: &str) -> RenderNode {
        let (kind, rest) = classify_line(line);
        if kind == LineKind::Blank {
            return RenderNode::LineBreak;
        }

        let children = self.inline.resolve(rest, &self.options);
        match kind {
            LineKind::Heading => RenderNode::Heading(children),
            LineKind::BulletItem => RenderNode::BulletItem(children),
            LineKind::Blockquote => RenderNode::Blockquote(children),
            LineKind::Paragraph => RenderNode::Paragraph(children),
            LineKind::Blank => RenderNode::LineBreak,
        }
    }
}
