//! Code span scanning.
//!
//! A code span is a single backtick, one or more non-backtick bytes, and a
//! single closing backtick. Contents are never scanned for other markers.

use memchr::memchr;

use super::span::{Span, SpanKind};

/// Find `` `code` `` spans, left to right, non-overlapping.
pub fn find_code_spans(text: &[u8], out: &mut Vec<Span>) {
    let mut pos = 0;

    while let Some(off) = memchr(b'`', &text[pos..]) {
        let open = pos + off;
        let content_start = open + 1;

        match memchr(b'`', &text[content_start..]) {
            // Empty content: the next backtick may still open a span.
            Some(0) => pos = content_start,
            Some(content_len) => {
                let close = content_start + content_len;
                out.push(Span::delimited(SpanKind::Code, open, close + 1, 1));
                pos = close + 1;
            }
            None => break,
        }
    }
}
