//! Byte cursor over a borrowed source string.
//!
//! The cursor advances through the source byte-by-byte with at most two
//! bytes of lookahead. EOF is positional: [`current()`](Cursor::current)
//! and the peek methods return `0` once the position reaches the source
//! length. The buffer is borrowed, never copied, so token text extracted
//! via [`slice()`](Cursor::slice) aliases the caller's input directly.
//!
//! Scanning primitives that skip over long runs (`eat_until_byte`,
//! `eat_until_newline_or_eof`, `skip_to_string_delim`) use memchr for
//! SIMD-accelerated search; everything else is a plain byte loop.

/// Returns the earliest (minimum) of two optional positions.
///
/// Combines results from separate memchr calls when more needles are
/// needed than `memchr3` supports.
fn earliest_of(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    }
}

/// Byte cursor with two-byte lookahead.
///
/// The cursor is [`Copy`], enabling cheap state snapshots where a scanner
/// needs to probe ahead by a bounded amount.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// The source bytes (always valid UTF-8: constructed from `&str`).
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Source length in bytes.
    len: u32,
}

/// Size assertion: Cursor is at most 24 bytes on 64-bit platforms.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Create a cursor at position 0 over `source`.
    ///
    /// Sources longer than `u32::MAX` bytes are truncated at the largest
    /// char boundary that fits; in practice inputs are code fragments and
    /// never approach 4 GiB.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        let buf = source.as_bytes();
        let len = u32::try_from(buf.len()).unwrap_or(u32::MAX);
        Self { buf, pos: 0, len }
    }

    /// Returns the byte at the current position, or `0` at EOF.
    #[inline]
    #[must_use]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Returns the byte one position ahead, or `0` past the end.
    #[inline]
    #[must_use]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos + 1)
    }

    /// Returns the byte two positions ahead, or `0` past the end.
    #[inline]
    #[must_use]
    pub fn peek2(&self) -> u8 {
        self.byte_at(self.pos + 2)
    }

    #[inline]
    fn byte_at(&self, idx: u32) -> u8 {
        if idx < self.len {
            self.buf[idx as usize]
        } else {
            0
        }
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Advance the cursor by `n` bytes.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// Advance past one full UTF-8 character.
    ///
    /// Uses the current byte as the leading byte to determine width.
    /// ASCII and invalid/continuation bytes advance one byte.
    #[inline]
    pub fn advance_char(&mut self) {
        let width = utf8_char_width(self.current());
        // Clamp: a truncated multi-byte sequence at EOF must not push the
        // cursor past the source.
        self.pos = (self.pos + width).min(self.len);
    }

    /// Returns `true` once the cursor has consumed the whole source.
    #[inline]
    #[must_use]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.len
    }

    /// Current byte offset.
    #[inline]
    #[must_use]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Source length in bytes.
    #[inline]
    #[must_use]
    pub fn source_len(&self) -> u32 {
        self.len
    }

    /// Returns `true` if the source at the current position starts with
    /// `prefix`. Lookahead is bounded by `prefix.len()`, which is always a
    /// compile-time constant at call sites.
    #[inline]
    #[must_use]
    pub fn at(&self, prefix: &[u8]) -> bool {
        let start = (self.pos as usize).min(self.buf.len());
        self.buf[start..].starts_with(prefix)
    }

    /// Remaining source bytes from the current position.
    #[inline]
    fn remaining(&self) -> &'a [u8] {
        let start = (self.pos as usize).min(self.len as usize);
        &self.buf[start..self.len as usize]
    }

    /// Extract a source substring as `&str`.
    ///
    /// # Contract
    ///
    /// `start..end` must fall within the source and on char boundaries.
    /// This holds whenever both offsets come from the scanner's token
    /// boundary tracking, since the source is `&str` and scanners advance
    /// by whole characters.
    #[allow(
        unsafe_code,
        reason = "from_utf8_unchecked on a source that was originally &str"
    )]
    #[must_use]
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        debug_assert!(end <= self.len, "slice end {end} exceeds source length {}", self.len);
        // SAFETY: the buffer was constructed from `&str` (valid UTF-8) and
        // scanners only produce offsets on character boundaries.
        unsafe { std::str::from_utf8_unchecked(&self.buf[start as usize..end as usize]) }
    }

    /// Extract a source substring from `start` to the current position.
    #[inline]
    #[must_use]
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` returns `true` for the current byte.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while self.pos < self.len && pred(self.buf[self.pos as usize]) {
            self.pos += 1;
        }
    }

    /// Advance past horizontal whitespace (spaces and tabs).
    ///
    /// A plain byte loop beats vectorized search for the short runs (1-4
    /// bytes) typical between tokens.
    #[inline]
    pub fn eat_whitespace(&mut self) {
        while self.pos < self.len {
            let b = self.buf[self.pos as usize];
            if b == b' ' || b == b'\t' {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    /// Advance to the next `\n` byte or EOF using SIMD-accelerated search.
    ///
    /// Used by line-comment scanners to skip comment bodies. The cursor
    /// stops *at* the newline (exclusive).
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets are bounded by len which fits in u32"
    )]
    pub fn eat_until_newline_or_eof(&mut self) {
        let remaining = self.remaining();
        if let Some(offset) = memchr::memchr(b'\n', remaining) {
            self.pos += offset as u32;
        } else {
            self.pos = self.len;
        }
    }

    /// Advance to the next `\n` or `\r` byte, or EOF, using
    /// SIMD-accelerated search. Used by line-oriented scanners that emit
    /// the line break separately.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets are bounded by len which fits in u32"
    )]
    pub fn eat_until_line_break(&mut self) {
        let remaining = self.remaining();
        if let Some(offset) = memchr::memchr2(b'\n', b'\r', remaining) {
            self.pos += offset as u32;
        } else {
            self.pos = self.len;
        }
    }

    /// Advance until `byte` is found or EOF is reached, using
    /// SIMD-accelerated search. The cursor stops at the found byte.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets are bounded by len which fits in u32"
    )]
    pub fn eat_until_byte(&mut self, byte: u8) {
        let remaining = self.remaining();
        if let Some(offset) = memchr::memchr(byte, remaining) {
            self.pos += offset as u32;
        } else {
            self.pos = self.len;
        }
    }

    /// Advance past ordinary string content to the next interesting byte:
    /// the closing `quote`, a backslash, or a line break. Returns the byte
    /// found, or `0` at EOF.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets are bounded by len which fits in u32"
    )]
    pub fn skip_to_string_delim(&mut self, quote: u8) -> u8 {
        let remaining = self.remaining();
        // memchr3 handles the three common terminators; \r needs a second
        // search (rare, but a lone CR still ends a single-line string).
        let primary = memchr::memchr3(quote, b'\\', b'\n', remaining);
        let cr = memchr::memchr(b'\r', remaining);

        if let Some(off) = earliest_of(primary, cr) {
            self.pos += off as u32;
            self.buf[self.pos as usize]
        } else {
            self.pos = self.len;
            0
        }
    }
}

/// Returns the byte width of the UTF-8 character starting with `byte`.
///
/// ASCII, continuation, and invalid bytes all report width 1 so that a
/// malformed sequence still advances and terminates.
#[inline]
#[must_use]
pub fn utf8_char_width(byte: u8) -> u32 {
    match byte {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}
