//! submark: lightweight inline markup for submission editors
//!
//! Renders free-form text with a small set of markers into a flat render
//! tree: one node per source line, each holding the line's inline nodes.
//!
//! # Design Principles
//! - No regex: byte-level scanning per marker kind
//! - No nesting: emphasis and link labels hold literal text
//! - Overlaps resolved by fixed kind precedence, never by truncation
//! - Total: every input renders, malformed markers stay literal text
//!
//! Supported markers:
//! - Inline: `[label](url)`, `**bold**`, `*italic*`, `~~strike~~`, `` `code` ``
//! - Line: `## ` heading, `- ` bullet, `> ` blockquote

pub mod block;
pub mod escape;
pub mod inline;
pub mod node;
pub mod range;
pub mod render;

use serde::Deserialize;

// Re-export primary types
pub use block::{classify_line, BlockRenderer, LineKind};
pub use inline::span::{Span, SpanKind};
pub use inline::InlineResolver;
pub use node::{plain_text, RenderNode};
pub use range::Range;
pub use render::HtmlWriter;

/// Parsing options.
///
/// Each flag enables one inline marker kind. A disabled kind is never
/// scanned, so its markers render as literal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Options {
    /// `[label](url)` links.
    pub links: bool,
    /// `**bold**`.
    pub bold: bool,
    /// `*italic*`.
    pub italic: bool,
    /// `~~strikethrough~~`.
    pub strikethrough: bool,
    /// `` `code` `` spans.
    pub code: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            links: true,
            bold: true,
            italic: true,
            strikethrough: true,
            code: true,
        }
    }
}

impl Options {
    /// Whether the given marker kind is scanned.
    #[inline]
    pub fn enables(&self, kind: SpanKind) -> bool {
        match kind {
            SpanKind::Link => self.links,
            SpanKind::Bold => self.bold,
            SpanKind::Italic => self.italic,
            SpanKind::Strikethrough => self.strikethrough,
            SpanKind::Code => self.code,
        }
    }
}

/// Resolve inline markers in a single line.
///
/// # Example
/// ```
/// use submark::{resolve, RenderNode};
///
/// let nodes = resolve("Hello **world**!");
/// assert_eq!(
///     nodes,
///     vec![
///         RenderNode::text("Hello "),
///         RenderNode::Bold(vec![RenderNode::text("world")]),
///         RenderNode::text("!"),
///     ]
/// );
/// ```
pub fn resolve(line: &str) -> Vec<RenderNode> {
    resolve_with_options(line, &Options::default())
}

/// Resolve inline markers in a single line with options.
pub fn resolve_with_options(line: &str, options: &Options) -> Vec<RenderNode> {
    InlineResolver::new().resolve(line, options)
}

/// Render a document into one node per line.
///
/// # Example
/// ```
/// use submark::{render, RenderNode};
///
/// let nodes = render("## Setup\n\nplain");
/// assert_eq!(nodes.len(), 3);
/// assert_eq!(nodes[1], RenderNode::LineBreak);
/// ```
pub fn render(document: &str) -> Vec<RenderNode> {
    render_with_options(document, &Options::default())
}

/// Render a document with options.
pub fn render_with_options(document: &str, options: &Options) -> Vec<RenderNode> {
    BlockRenderer::with_options(*options).render(document)
}

/// Render a document to an HTML fragment.
///
/// # Example
/// ```
/// let html = submark::to_html("## Hello\n- **one**");
/// assert_eq!(html, "<h2>Hello</h2>\n<ul>\n<li><strong>one</strong></li>\n</ul>\n");
/// ```
pub fn to_html(document: &str) -> String {
    to_html_with_options(document, &Options::default())
}

/// Render a document to an HTML fragment with options.
pub fn to_html_with_options(document: &str, options: &Options) -> String {
    let nodes = render_with_options(document, options);
    let mut writer = HtmlWriter::with_capacity_for(document.len());
    writer.write_nodes(&nodes);
    writer.into_string()
}
