//! HTML output writer for render trees.

use crate::escape;
use crate::RenderNode;

/// HTML output writer with a pre-allocated, reusable buffer.
///
/// # Example
/// ```
/// use submark::{HtmlWriter, RenderNode};
///
/// let mut writer = HtmlWriter::new();
/// writer.write_nodes(&[RenderNode::Bold(vec![RenderNode::text("a < b")])]);
/// assert_eq!(writer.into_string(), "<strong>a &lt; b</strong>");
/// ```
#[derive(Debug, Default)]
pub struct HtmlWriter {
    out: String,
    /// Whether a `<ul>` is open for consecutive bullet items.
    in_list: bool,
}

impl HtmlWriter {
    /// Create a new writer with default capacity.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(1024)
    }

    /// Create with pre-allocated capacity based on expected input size.
    ///
    /// Typical HTML is ~1.5x input size for short lines.
    #[inline]
    pub fn with_capacity_for(input_len: usize) -> Self {
        Self::with_capacity(input_len + input_len / 2)
    }

    /// Create with explicit capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            out: String::with_capacity(capacity),
            in_list: false,
        }
    }

    /// Write a sequence of nodes.
    ///
    /// Consecutive bullet items share one `<ul>`; any other node closes it.
    pub fn write_nodes(&mut self, nodes: &[RenderNode]) {
        for node in nodes {
            if !matches!(node, RenderNode::BulletItem(_)) {
                self.close_list();
            }
            self.write_node(node);
        }
        self.close_list();
    }

    fn write_node(&mut self, node: &RenderNode) {
        match node {
            RenderNode::Text(text) => self.write_escaped_text(text),
            RenderNode::Bold(children) => self.write_inline("strong", children),
            RenderNode::Italic(children) => self.write_inline("em", children),
            RenderNode::Strikethrough(children) => self.write_inline("del", children),
            RenderNode::Code(code) => {
                self.out.push_str("<code>");
                self.write_escaped_text(code);
                self.out.push_str("</code>");
            }
            RenderNode::Link { label, url } => {
                self.out.push_str("<a href=\"");
                escape::escape_href_into(&mut self.out, url);
                self.out.push_str("\">");
                self.write_escaped_text(label);
                self.out.push_str("</a>");
            }
            RenderNode::Heading(children) => self.write_block("h2", children),
            RenderNode::BulletItem(children) => {
                if !self.in_list {
                    self.out.push_str("<ul>\n");
                    self.in_list = true;
                }
                self.write_block("li", children);
            }
            RenderNode::Blockquote(children) => self.write_block("blockquote", children),
            RenderNode::Paragraph(children) => self.write_block("p", children),
            RenderNode::LineBreak => self.out.push_str("<br />\n"),
        }
    }

    fn write_inline(&mut self, tag: &'static str, children: &[RenderNode]) {
        self.open_tag(tag);
        for child in children {
            self.write_node(child);
        }
        self.close_tag(tag);
    }

    fn write_block(&mut self, tag: &'static str, children: &[RenderNode]) {
        self.write_inline(tag, children);
        self.newline();
    }

    fn close_list(&mut self) {
        if self.in_list {
            self.out.push_str("</ul>\n");
            self.in_list = false;
        }
    }

    /// Write text with HTML escaping (for text content).
    #[inline]
    pub fn write_escaped_text(&mut self, text: &str) {
        escape::escape_text_into(&mut self.out, text);
    }

    /// Write a newline.
    #[inline]
    pub fn newline(&mut self) {
        self.out.push('\n');
    }

    /// Write opening tag: `<tagname>`
    #[inline]
    pub fn open_tag(&mut self, tag: &'static str) {
        self.out.push('<');
        self.out.push_str(tag);
        self.out.push('>');
    }

    /// Write closing tag: `</tagname>`
    #[inline]
    pub fn close_tag(&mut self, tag: &'static str) {
        self.out.push_str("</");
        self.out.push_str(tag);
        self.out.push('>');
    }

    /// Take ownership as String.
    #[inline]
    pub fn into_string(self) -> String {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use RenderNode::*;

    fn html(nodes: &[RenderNode]) -> String {
        let mut writer = HtmlWriter::new();
        writer.write_nodes(nodes);
        writer.into_string()
    }

    fn text(s: &str) -> RenderNode {
        RenderNode::text(s)
    }

    #[test]
    fn test_inline_tags() {
        assert_eq!(
            html(&[
                Bold(vec![text("b")]),
                Italic(vec![text("i")]),
                Strikethrough(vec![text("s")]),
                Code("<c>".into()),
            ]),
            "<strong>b</strong><em>i</em><del>s</del><code>&lt;c&gt;</code>"
        );
    }

    #[test]
    fn test_link() {
        assert_eq!(
            html(&[Link {
                label: "a & b".into(),
                url: "https://example.com/x y".into()
            }]),
            "<a href=\"https://example.com/x%20y\">a &amp; b</a>"
        );
    }

    #[test]
    fn test_blocks() {
        assert_eq!(
            html(&[
                Heading(vec![text("T")]),
                LineBreak,
                Blockquote(vec![text("q")]),
                Paragraph(vec![text("p")]),
            ]),
            "<h2>T</h2>\n<br />\n<blockquote>q</blockquote>\n<p>p</p>\n"
        );
    }

    #[test]
    fn test_bullets_grouped() {
        assert_eq!(
            html(&[
                BulletItem(vec![text("a")]),
                BulletItem(vec![text("b")]),
                Paragraph(vec![text("c")]),
                BulletItem(vec![text("d")]),
            ]),
            "<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n<p>c</p>\n<ul>\n<li>d</li>\n</ul>\n"
        );
    }

    #[test]
    fn test_list_closed_at_end_of_input() {
        let mut writer = HtmlWriter::with_capacity_for(16);
        writer.write_nodes(&[BulletItem(vec![text("x")])]);
        assert_eq!(writer.into_string(), "<ul>\n<li>x</li>\n</ul>\n");
    }
}
