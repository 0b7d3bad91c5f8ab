//! Inline link scanning: `[label](url)`.
//!
//! The label runs to the first `]` and must be non-empty; `(` has to follow
//! immediately. The url runs to the first `)` and must be non-empty. There
//! are no titles, no nested brackets and no escapes.

use memchr::memchr;

use super::span::Span;
use crate::Range;

/// Find `[label](url)` spans, left to right, non-overlapping.
pub fn find_links(text: &[u8], out: &mut Vec<Span>) {
    let mut scanner = LinkScanner {
        text,
        close_bracket: Lookahead::new(b']'),
        close_paren: Lookahead::new(b')'),
    };
    let mut pos = 0;

    while let Some(off) = memchr(b'[', &text[pos..]) {
        let open = pos + off;

        match scanner.parse_at(open) {
            LinkParse::Matched(span) => {
                pos = span.range.end_usize();
                out.push(span);
            }
            LinkParse::Failed => pos = open + 1,
            LinkParse::Exhausted => break,
        }
    }
}

enum LinkParse {
    Matched(Span),
    Failed,
    /// A required closing byte does not occur again, so no later `[` can
    /// match either.
    Exhausted,
}

struct LinkScanner<'a> {
    text: &'a [u8],
    close_bracket: Lookahead,
    close_paren: Lookahead,
}

impl LinkScanner<'_> {
    fn parse_at(&mut self, open: usize) -> LinkParse {
        let text = self.text;
        let label_start = open + 1;
        let Some(label_end) = self.close_bracket.find(text, label_start) else {
            return LinkParse::Exhausted;
        };
        if label_end == label_start {
            return LinkParse::Failed;
        }

        if text.get(label_end + 1) != Some(&b'(') {
            return LinkParse::Failed;
        }

        let url_start = label_end + 2;
        let url_end = match self.close_paren.find(text, url_start) {
            None => return LinkParse::Exhausted,
            Some(end) if end == url_start => return LinkParse::Failed,
            Some(end) => end,
        };

        LinkParse::Matched(Span::link(
            Range::from_usize(open, url_end + 1),
            Range::from_usize(label_start, label_end),
            Range::from_usize(url_start, url_end),
        ))
    }
}

/// Memoized "next occurrence of a byte" search.
///
/// Search origins only move forward, so a previous hit at or after the new
/// origin is still the first occurrence. Keeps runs like `[[[[` linear.
struct Lookahead {
    byte: u8,
    /// Origin and result of the last search.
    last: Option<(usize, Option<usize>)>,
}

impl Lookahead {
    fn new(byte: u8) -> Self {
        Self { byte, last: None }
    }

    fn find(&mut self, text: &[u8], from: usize) -> Option<usize> {
        if let Some((origin, hit)) = self.last {
            if origin <= from {
                match hit {
                    Some(p) if p >= from => return Some(p),
                    None => return None,
                    Some(_) => {}
                }
            }
        }
        let hit = memchr(self.byte, &text[from..]).map(|off| from + off);
        self.last = Some((from, hit));
        hit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links(text: &str) -> Vec<Span> {
        let mut out = Vec::new();
        find_links(text.as_bytes(), &mut out);
        out
    }

    #[test]
    fn test_simple_link() {
        let text = "Check [docs](https://example.com) now";
        let spans = links(text);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].range, Range::new(6, 33));
        assert_eq!(spans[0].content.slice(text), "docs");
        assert_eq!(spans[0].url.map(|u| u.slice(text)), Some("https://example.com"));
    }

    #[test]
    fn test_label_without_url() {
        assert!(links("just [brackets] here").is_empty());
        assert!(links("[label] (space before paren)").is_empty());
    }

    #[test]
    fn test_empty_parts_are_literal() {
        assert!(links("[]()").is_empty());
        assert!(links("[a]()").is_empty());
        assert!(links("[](b)").is_empty());
    }

    #[test]
    fn test_unclosed_url() {
        assert!(links("[a](http://never-closed").is_empty());
    }

    #[test]
    fn test_label_may_contain_open_bracket() {
        let text = "[a [b](c)";
        let spans = links(text);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].content.slice(text), "a [b");
    }

    #[test]
    fn test_failed_attempt_retries_next_bracket() {
        let text = "[x] and [y](z)";
        let spans = links(text);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].content.slice(text), "y");
    }

    #[test]
    fn test_lookahead_reuses_hits() {
        let text = b"[[[a]";
        let mut lookahead = Lookahead::new(b']');
        assert_eq!(lookahead.find(text, 1), Some(4));
        assert_eq!(lookahead.find(text, 3), Some(4));
        assert_eq!(lookahead.find(text, 5), None);
        assert_eq!(lookahead.find(text, 5), None);
    }

    #[test]
    fn test_open_brackets_without_close() {
        assert!(links("[[[[ no close").is_empty());
        assert!(links("[a](b [c](d").is_empty());
    }

    #[test]
    fn test_two_links() {
        let spans = links("[a](1) [b](2)");
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[1].range, Range::new(7, 13));
    }
}
