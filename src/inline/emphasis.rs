//! Bold (`**text**`) and italic (`*text*`) scanning.
//!
//! Emphasis does not nest: content is kept as literal text. Bold content
//! starts with a non-asterisk byte and runs to the next `**`, so it may hold
//! single asterisks. Italic delimiters are single asterisks with no asterisk
//! on either side, which keeps italic from claiming half of a `**` pair.

use memchr::{memchr, memmem};

use super::span::{Span, SpanKind};

/// Find `**text**` spans, left to right, non-overlapping.
pub fn find_bold(text: &[u8], out: &mut Vec<Span>) {
    find_double_delimited(text, b'*', SpanKind::Bold, out);
}

/// Find `*text*` spans, left to right, non-overlapping.
pub fn find_italic(text: &[u8], out: &mut Vec<Span>) {
    let len = text.len();
    let mut pos = 0;

    while let Some(off) = memchr(b'*', &text[pos..]) {
        let open = pos + off;
        if !is_lone_asterisk(text, open) {
            pos = open + 1;
            continue;
        }

        // Content is non-empty: the byte after a lone asterisk is not `*`.
        let Some(len_to_close) = memchr(b'*', &text[open + 1..]) else {
            break;
        };
        let close = open + 1 + len_to_close;

        if close + 1 < len && text[close + 1] == b'*' {
            // Closer belongs to a `**` run. No start inside the content can
            // succeed either, so resume at the closer.
            pos = close;
            continue;
        }

        out.push(Span::delimited(SpanKind::Italic, open, close + 1, 1));
        pos = close + 1;
    }
}

/// An asterisk that can open italic: not touching another asterisk and not
/// the last byte of the line.
#[inline]
fn is_lone_asterisk(text: &[u8], pos: usize) -> bool {
    let before = pos > 0 && text[pos - 1] == b'*';
    let after = text.get(pos + 1).copied();
    !before && after.is_some() && after != Some(b'*')
}

/// Find `XX text XX` spans for a doubled delimiter byte `X`.
///
/// Content is one or more bytes, the first of them not `X`, closed by the
/// next `XX` after that first byte. An opener followed by `X` moves on to the
/// next occurrence of the doubled delimiter.
pub(super) fn find_double_delimited(text: &[u8], delim: u8, kind: SpanKind, out: &mut Vec<Span>) {
    let pair = [delim, delim];
    let finder = memmem::Finder::new(&pair);
    let len = text.len();
    let mut pos = 0;

    while let Some(off) = finder.find(&text[pos..]) {
        let open = pos + off;
        let content_start = open + 2;

        if content_start >= len || text[content_start] == delim {
            pos = open + 1;
            continue;
        }

        let Some(content_len) = finder.find(&text[content_start + 1..]) else {
            // No pair left past this content, so no later opener closes.
            break;
        };
        let close = content_start + 1 + content_len;

        out.push(Span::delimited(kind, open, close + 2, 2));
        pos = close + 2;
    }
}
