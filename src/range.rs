//! Compact range representation for zero-copy text references.
//!
//! Uses `u32` offsets to save memory (8 bytes vs 16 for usize pair).
//! Lines longer than 4GB are not supported.

/// Half-open byte range `[start, end)` into a source line.
///
/// # Example
/// ```
/// use submark::Range;
///
/// let line = "Hello, World!";
/// let range = Range::new(0, 5);
/// assert_eq!(range.slice(line), "Hello");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[repr(C)]
pub struct Range {
    pub start: u32,
    pub end: u32,
}

// Compile-time size verification
const _: () = assert!(std::mem::size_of::<Range>() == 8);

impl Range {
    /// Create a new range.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Create a range from usize values.
    ///
    /// # Panics
    /// Panics in debug mode if values exceed u32::MAX.
    #[inline]
    pub fn from_usize(start: usize, end: usize) -> Self {
        debug_assert!(start <= u32::MAX as usize);
        debug_assert!(end <= u32::MAX as usize);
        Self {
            start: start as u32,
            end: end as u32,
        }
    }

    /// Get the text this range refers to.
    ///
    /// Both ends must sit on character boundaries of `line`. Ranges built by
    /// the inline scanners always start and end next to an ASCII delimiter.
    #[inline]
    pub fn slice<'a>(&self, line: &'a str) -> &'a str {
        &line[self.start_usize()..self.end_usize()]
    }

    /// Length of the range in bytes.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Check if the range is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Start position as usize.
    #[inline]
    pub const fn start_usize(&self) -> usize {
        self.start as usize
    }

    /// End position as usize.
    #[inline]
    pub const fn end_usize(&self) -> usize {
        self.end as usize
    }

    /// Check if two ranges share at least one position.
    ///
    /// Empty ranges never intersect anything.
    #[inline]
    pub const fn intersects(&self, other: &Range) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Shrink the range by `open` bytes at the front and `close` at the back.
    ///
    /// Used to strip delimiters off a matched span.
    #[inline]
    pub const fn inner(&self, open: u32, close: u32) -> Self {
        debug_assert!(open + close <= self.len());
        Self {
            start: self.start + open,
            end: self.end - close,
        }
    }
}
