//! HTML escaping utilities.
//!
//! Fast-path optimized: scans for first escapable character,
//! then bulk-copies segments between escapes.

use memchr::{memchr, memchr3};

/// Lookup table for escapable characters in text content.
/// Index by byte value, true if needs escaping.
const TEXT_ESCAPE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    table[b'<' as usize] = true;
    table[b'>' as usize] = true;
    table[b'&' as usize] = true;
    table[b'"' as usize] = true;
    table
};

/// Escape HTML text content into output buffer.
///
/// Escapes `<`, `>`, `&` and `"` to their HTML entity equivalents.
///
/// # Example
/// ```
/// use submark::escape::escape_text_into;
///
/// let mut out = String::new();
/// escape_text_into(&mut out, "<script>");
/// assert_eq!(out, "&lt;script&gt;");
/// ```
#[inline]
pub fn escape_text_into(out: &mut String, input: &str) {
    let bytes = input.as_bytes();
    let Some(first) = first_text_escape(bytes) else {
        out.push_str(input);
        return;
    };

    out.reserve(input.len() + 8);
    let mut copied = 0;
    for pos in first..bytes.len() {
        let b = bytes[pos];
        if !TEXT_ESCAPE_TABLE[b as usize] {
            continue;
        }
        // Escapable bytes are ASCII, so `pos` is a char boundary.
        out.push_str(&input[copied..pos]);
        out.push_str(match b {
            b'<' => "&lt;",
            b'>' => "&gt;",
            b'&' => "&amp;",
            _ => "&quot;",
        });
        copied = pos + 1;
    }
    out.push_str(&input[copied..]);
}

#[inline]
fn first_text_escape(input: &[u8]) -> Option<usize> {
    let a = memchr3(b'<', b'>', b'&', input);
    let b = memchr(b'"', input);
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}

/// Percent-encode a link destination, then escape it for a double-quoted
/// `href` attribute.
///
/// Spaces, control bytes and non-ASCII bytes are percent-encoded; everything
/// else passes through. The url is not validated or filtered by scheme.
pub fn escape_href_into(out: &mut String, url: &str) {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";

    let mut encoded = String::with_capacity(url.len());
    for &b in url.as_bytes() {
        match b {
            b' ' | 0x00..=0x1F | 0x7F..=0xFF => {
                encoded.push('%');
                encoded.push(HEX[(b >> 4) as usize] as char);
                encoded.push(HEX[(b & 0xF) as usize] as char);
            }
            _ => encoded.push(b as char),
        }
    }
    out.push_str(&html_escape::encode_double_quoted_attribute(&encoded));
}
