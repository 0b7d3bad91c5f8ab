//! Span candidates and the accepted-span interval set.

use smallvec::SmallVec;

use crate::Range;

/// Marker kind of a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SpanKind {
    /// `[label](url)`
    Link,
    /// `**text**`
    Bold,
    /// `*text*`
    Italic,
    /// `~~text~~`
    Strikethrough,
    /// `` `text` ``
    Code,
}

impl SpanKind {
    /// Kinds in acceptance order: earlier kinds win overlaps.
    pub const PRECEDENCE: [SpanKind; 5] = [
        SpanKind::Link,
        SpanKind::Bold,
        SpanKind::Italic,
        SpanKind::Strikethrough,
        SpanKind::Code,
    ];

    /// Position in [`SpanKind::PRECEDENCE`].
    #[inline]
    pub fn precedence(self) -> u8 {
        self as u8
    }
}

/// A matched marker in a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub kind: SpanKind,
    /// Full extent including delimiters.
    pub range: Range,
    /// Text between the delimiters. For links, the label.
    pub content: Range,
    /// Link destination, only set for [`SpanKind::Link`].
    pub url: Option<Range>,
}

impl Span {
    /// Span whose content is `range` minus `width` delimiter bytes per side.
    #[inline]
    pub fn delimited(kind: SpanKind, start: usize, end: usize, width: u32) -> Self {
        let range = Range::from_usize(start, end);
        Self {
            kind,
            range,
            content: range.inner(width, width),
            url: None,
        }
    }

    /// A link span with separate label and destination ranges.
    #[inline]
    pub fn link(range: Range, label: Range, url: Range) -> Self {
        Self {
            kind: SpanKind::Link,
            range,
            content: label,
            url: Some(url),
        }
    }
}

/// Accepted spans, kept sorted by start and pairwise disjoint.
///
/// Overlap checks are a binary search over the sorted vector. Most lines
/// carry only a handful of spans, so they stay inline.
#[derive(Debug, Default)]
pub struct SpanSet {
    spans: SmallVec<[Span; 8]>,
}

impl SpanSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the set for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.spans.clear();
    }

    /// Whether `range` shares a position with any accepted span.
    pub fn overlaps(&self, range: Range) -> bool {
        // Disjoint and sorted by start means also sorted by end.
        let idx = self.spans.partition_point(|s| s.range.end <= range.start);
        self.spans
            .get(idx)
            .is_some_and(|s| s.range.intersects(&range))
    }

    /// Accept `span` unless it overlaps an accepted span.
    ///
    /// Returns whether the span was accepted. Rejected spans are dropped
    /// whole, never truncated.
    pub fn try_insert(&mut self, span: Span) -> bool {
        if self.overlaps(span.range) {
            return false;
        }
        let idx = self.spans.partition_point(|s| s.range.start < span.range.start);
        self.spans.insert(idx, span);
        true
    }

    /// Accepted spans in ascending start order.
    #[inline]
    pub fn as_slice(&self) -> &[Span] {
        &self.spans
    }

    /// Number of accepted spans.
    #[inline]
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}
