//! Inline span resolver.
//!
//! Uses a three-phase approach:
//! 1. Candidate Collection: each marker kind is scanned independently
//! 2. Span Resolution: candidates are accepted by kind precedence
//!    (links → bold → italic → strikethrough → code), rejecting any that
//!    overlap an accepted span
//! 3. Node Emission: walk accepted spans and emit render nodes

mod code_span;
mod emphasis;
mod links;
pub mod span;
mod strikethrough;

use crate::{Options, RenderNode};
use code_span::find_code_spans;
use emphasis::{find_bold, find_italic};
use links::find_links;
use span::{Span, SpanKind, SpanSet};
use strikethrough::find_strikethrough;

/// Inline resolver state.
///
/// Holds scratch buffers only; reusing a resolver across lines never changes
/// its output.
#[derive(Debug, Default)]
pub struct InlineResolver {
    candidates: Vec<Span>,
    accepted: SpanSet,
}

impl InlineResolver {
    /// Create a new inline resolver.
    pub fn new() -> Self {
        Self {
            candidates: Vec::with_capacity(16),
            accepted: SpanSet::new(),
        }
    }

    /// Resolve one line into render nodes.
    pub fn resolve(&mut self, line: &str, options: &Options) -> Vec<RenderNode> {
        let mut out = Vec::new();
        self.resolve_into(line, options, &mut out);
        out
    }

    /// Resolve one line, appending render nodes to `out`.
    ///
    /// An empty line appends nothing. A line without any complete marker
    /// appends a single `Text` node.
    pub fn resolve_into(&mut self, line: &str, options: &Options, out: &mut Vec<RenderNode>) {
        if line.is_empty() {
            return;
        }

        self.resolve_spans(line, options);
        emit_nodes(line, self.accepted.as_slice(), out);
    }

    /// Resolve one line and return the accepted spans in source order.
    pub fn resolve_spans(&mut self, line: &str, options: &Options) -> &[Span] {
        let text = line.as_bytes();

        // Phase 1: Collect candidates per kind
        self.candidates.clear();
        for kind in SpanKind::PRECEDENCE {
            if !options.enables(kind) {
                continue;
            }
            match kind {
                SpanKind::Link => find_links(text, &mut self.candidates),
                SpanKind::Bold => find_bold(text, &mut self.candidates),
                SpanKind::Italic => find_italic(text, &mut self.candidates),
                SpanKind::Strikethrough => find_strikethrough(text, &mut self.candidates),
                SpanKind::Code => find_code_spans(text, &mut self.candidates),
            }
        }

        // Phase 2: Accept by precedence, then by position within a kind
        self.candidates
            .sort_by_key(|span| (span.kind.precedence(), span.range.start));
        self.accepted.clear();
        for &candidate in &self.candidates {
            if !self.accepted.try_insert(candidate) {
                log::trace!(
                    "rejected {:?} at {}..{}: overlaps an accepted span",
                    candidate.kind,
                    candidate.range.start,
                    candidate.range.end
                );
            }
        }

        self.accepted.as_slice()
    }
}

/// Walk accepted spans left to right, filling gaps with text.
fn emit_nodes(line: &str, spans: &[Span], out: &mut Vec<RenderNode>) {
    let mut cursor = 0usize;

    for span in spans {
        let start = span.range.start_usize();
        if start > cursor {
            out.push(RenderNode::text(&line[cursor..start]));
        }
        out.push(span_node(line, span));
        cursor = span.range.end_usize();
    }

    if cursor < line.len() {
        out.push(RenderNode::text(&line[cursor..]));
    }
}

fn span_node(line: &str, span: &Span) -> RenderNode {
    let content = span.content.slice(line);
    match span.kind {
        SpanKind::Link => RenderNode::Link {
            label: content.to_owned(),
            url: span.url.map(|url| url.slice(line)).unwrap_or_default().to_owned(),
        },
        SpanKind::Bold => RenderNode::Bold(vec![RenderNode::text(content)]),
        SpanKind::Italic => RenderNode::Italic(vec![RenderNode::text(content)]),
        SpanKind::Strikethrough => RenderNode::Strikethrough(vec![RenderNode::text(content)]),
        SpanKind::Code => RenderNode::Code(content.to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use RenderNode::*;

    fn resolve(line: &str) -> Vec<RenderNode> {
        InlineResolver::new().resolve(line, &Options::default())
    }

    fn text(s: &str) -> RenderNode {
        RenderNode::text(s)
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(resolve("just words"), vec![text("just words")]);
    }

    #[test]
    fn test_empty_line() {
        assert!(resolve("").is_empty());
    }

    #[test]
    fn test_bold_with_gaps() {
        assert_eq!(
            resolve("Hello **world**!"),
            vec![text("Hello "), Bold(vec![text("world")]), text("!")]
        );
    }

    #[test]
    fn test_link() {
        assert_eq!(
            resolve("Check [docs](https://example.com) now"),
            vec![
                text("Check "),
                Link {
                    label: "docs".into(),
                    url: "https://example.com".into()
                },
                text(" now"),
            ]
        );
    }

    #[test]
    fn test_all_kinds_in_order() {
        assert_eq!(
            resolve("**a** *b* ~~c~~ `d`"),
            vec![
                Bold(vec![text("a")]),
                text(" "),
                Italic(vec![text("b")]),
                text(" "),
                Strikethrough(vec![text("c")]),
                text(" "),
                Code("d".into()),
            ]
        );
    }

    #[test]
    fn test_bold_and_italic() {
        assert_eq!(
            resolve("**bold** and *italic*"),
            vec![
                Bold(vec![text("bold")]),
                text(" and "),
                Italic(vec![text("italic")]),
            ]
        );
    }

    #[test]
    fn test_triple_asterisks() {
        assert_eq!(
            resolve("***x***"),
            vec![text("*"), Bold(vec![text("x")]), text("*")]
        );
    }

    #[test]
    fn test_link_wins_over_bold_inside_label() {
        // Link label is literal, the bold candidate inside it is rejected.
        assert_eq!(
            resolve("[**a**](u)"),
            vec![Link {
                label: "**a**".into(),
                url: "u".into()
            }]
        );
    }

    #[test]
    fn test_emphasis_wins_over_code() {
        // Code has the lowest precedence and is dropped whole.
        assert_eq!(
            resolve("`*not emphasis*`"),
            vec![text("`"), Italic(vec![text("not emphasis")]), text("`")]
        );
    }

    #[test]
    fn test_containing_candidate_rejected() {
        // The code candidate contains the accepted bold span.
        assert_eq!(
            resolve("`a **b** c`"),
            vec![text("`a "), Bold(vec![text("b")]), text(" c`")]
        );
    }

    #[test]
    fn test_partial_overlap_rejected_not_truncated() {
        // Bold [0,9) is accepted; strike [4,13) overlaps it and is dropped.
        assert_eq!(
            resolve("**a ~~b** c~~"),
            vec![Bold(vec![text("a ~~b")]), text(" c~~")]
        );
    }

    #[test]
    fn test_code_contents_are_leaf() {
        assert_eq!(
            resolve("run `a_b` now"),
            vec![text("run "), Code("a_b".into()), text(" now")]
        );
    }

    #[test]
    fn test_disabled_kind_stays_literal() {
        let options = Options {
            strikethrough: false,
            ..Options::default()
        };
        let nodes = InlineResolver::new().resolve("~~gone~~ **kept**", &options);
        assert_eq!(
            nodes,
            vec![text("~~gone~~ "), Bold(vec![text("kept")])]
        );
    }

    #[test]
    fn test_italic_ignores_pairs_when_bold_disabled() {
        let options = Options {
            bold: false,
            ..Options::default()
        };
        let nodes = InlineResolver::new().resolve("**x**", &options);
        assert_eq!(nodes, vec![text("**x**")]);
    }

    #[test]
    fn test_resolver_reuse_is_stateless() {
        let mut resolver = InlineResolver::new();
        let options = Options::default();
        let first = resolver.resolve("a **b** [c](d)", &options);
        resolver.resolve("`other` line", &options);
        let again = resolver.resolve("a **b** [c](d)", &options);
        assert_eq!(first, again);
    }

    #[test]
    fn test_resolve_spans_sorted() {
        let mut resolver = InlineResolver::new();
        let spans = resolver.resolve_spans("`c` *i* **b** [l](u)", &Options::default());
        let kinds: Vec<SpanKind> = spans.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![SpanKind::Code, SpanKind::Italic, SpanKind::Bold, SpanKind::Link]
        );
    }

    #[test]
    fn test_unicode_text_around_markers() {
        assert_eq!(
            resolve("héllo **wörld** ✓"),
            vec![text("héllo "), Bold(vec![text("wörld")]), text(" ✓")]
        );
    }
}
