/*!
 * The read-only input model every matcher operates on.
 */
use std::fmt;

/// Sentinel byte reported at and beyond the end of the input buffer.
///
/// The terminator is a valid position: character-level matchers treat it as
/// matchable but never consume past it, so `byte(TERMINATOR)` doubles as an
/// end-of-input assertion.
pub const TERMINATOR: u8 = 0;

/// An immutable position within one input buffer.
///
/// Cursors are tiny copyable values; advancing produces a new cursor rather
/// than mutating in place. A cursor at (or past) the end of the buffer reports
/// [`TERMINATOR`] from [`peek`](Cursor::peek), and [`advance`](Cursor::advance)
/// refuses to move it further. A `TERMINATOR` byte embedded in the buffer ends
/// the matchable input early, the same way it would end a C string.
///
/// ```
/// use pegma::{Cursor, TERMINATOR};
///
/// let cur = Cursor::new(b"ab");
/// assert_eq!(cur.peek(), b'a');
/// let cur = cur.advance().advance();
/// assert_eq!(cur.peek(), TERMINATOR);
/// assert_eq!(cur.advance(), cur);
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'s> {
    buf: &'s [u8],
    pos: usize,
}

impl<'s> Cursor<'s> {
    /// Creates a cursor at the start of `buf`.
    pub fn new(buf: &'s [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// The byte under the cursor, or [`TERMINATOR`] at end of input.
    pub fn peek(&self) -> u8 {
        self.buf.get(self.pos).copied().unwrap_or(TERMINATOR)
    }

    /// Whether the cursor sits on the terminator.
    pub fn at_terminator(&self) -> bool {
        self.peek() == TERMINATOR
    }

    /// The cursor one byte further along, or `self` unchanged at the
    /// terminator.
    #[must_use]
    pub fn advance(self) -> Self {
        if self.at_terminator() {
            self
        } else {
            Self {
                buf: self.buf,
                pos: self.pos + 1,
            }
        }
    }

    /// Byte offset from the start of the buffer.
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// The bytes between this cursor and `end`, half-open.
    pub fn span_to(&self, end: &Cursor<'s>) -> &'s [u8] {
        &self.buf[self.pos..end.pos]
    }
}

impl fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("offset", &self.pos)
            .field("rest", &String::from_utf8_lossy(&self.buf[self.pos.min(self.buf.len())..]))
            .finish()
    }
}
