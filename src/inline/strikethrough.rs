//! Strikethrough scanning (`~~text~~`).
//!
//! Only doubled tildes delimit. Content starts with a non-tilde byte and
//! runs to the next `~~`, so a `~~~` run opens on its last two tildes.

use super::emphasis::find_double_delimited;
use super::span::{Span, SpanKind};

/// Find `~~text~~` spans, left to right, non-overlapping.
pub fn find_strikethrough(text: &[u8], out: &mut Vec<Span>) {
    find_double_delimited(text, b'~', SpanKind::Strikethrough, out);
}
