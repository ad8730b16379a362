//! Append-only write buffer with caller-visible growth policy

use std::{io, ptr};

use crate::{arena::ByteArena, transport::view::ShareableView};

/// Append-only writer over a [`ByteArena`].
///
/// The buffer owns exactly one arena handle plus a write cursor. When a
/// write does not fit, the buffer allocates a larger arena, copies the
/// bytes written so far into it itself, and swaps handles - the old arena
/// is left untouched, so snapshots taken earlier keep reading the bytes
/// they were given.
///
/// The growth policy is `new_capacity = incoming_len + 2 * written_len`,
/// which always fits the incoming chunk no matter how large a single write
/// is. Capacities resulting from this formula are part of the observable
/// contract; see [`capacity`] and [`growth_events`].
///
/// [`capacity`]: WriteBuffer::capacity
/// [`growth_events`]: WriteBuffer::growth_events
#[derive(Debug)]
pub struct WriteBuffer {
    /// Storage handle; replaced wholesale on growth
    arena: ByteArena,
    /// Bytes written so far (always <= arena capacity)
    cursor: usize,
    /// Number of growth events since construction
    growth_events: u64,
}

impl WriteBuffer {
    /// Create a buffer with the default reserved capacity
    pub fn new() -> Self {
        Self::with_capacity(crate::config::DEFAULT_RESERVE)
    }

    /// Create a buffer with the given initial capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: ByteArena::allocate(capacity),
            cursor: 0,
            growth_events: 0,
        }
    }

    /// Append `bytes` at the write cursor, growing the buffer if needed.
    ///
    /// Returns the number of bytes written, which is always the full
    /// requested length - this design has no short writes.
    pub fn write(&mut self, bytes: &[u8]) -> usize {
        if bytes.is_empty() {
            return 0;
        }

        if self.cursor + bytes.len() > self.arena.capacity() {
            self.grow_for(bytes.len());
        }

        // Safety: growth guaranteed cursor + len <= capacity, the source is
        // a distinct allocation, and this buffer is the storage's only writer.
        unsafe {
            ptr::copy_nonoverlapping(
                bytes.as_ptr(),
                self.arena.as_mut_ptr().add(self.cursor),
                bytes.len(),
            );
        }
        self.cursor += bytes.len();
        bytes.len()
    }

    /// Grow the arena, preserving written bytes.
    ///
    /// Arena growth drops old content, so the copy happens here: keep a
    /// handle on the old storage, grow, copy the written prefix across.
    fn grow_for(&mut self, incoming: usize) {
        // cursor + incoming > capacity implies this exceeds the capacity too,
        // so the grow below is never a no-op
        let new_capacity = incoming + 2 * self.cursor;

        let old = self.arena.share_handle();
        self.arena.grow(new_capacity);

        // Safety: both allocations are live and distinct, and cursor is
        // within both the old capacity and new_capacity.
        unsafe {
            ptr::copy_nonoverlapping(old.as_ptr(), self.arena.as_mut_ptr(), self.cursor);
        }

        self.growth_events += 1;
    }

    /// Point-in-time shared view of `[0, written_len)`.
    ///
    /// This shares storage with the buffer rather than copying. It stays
    /// valid and unchanged across later writes: appends land at or above
    /// the snapshot length, and growth swaps in a new allocation instead of
    /// mutating the old one. The buffer remains writable after extraction.
    pub fn snapshot(&self) -> ShareableView {
        ShareableView::new(self.arena.share_handle(), self.cursor)
    }

    /// Bytes written so far
    pub fn written_len(&self) -> usize {
        self.cursor
    }

    /// Current capacity of the backing arena
    pub fn capacity(&self) -> usize {
        self.arena.capacity()
    }

    /// Number of growth events since construction
    pub fn growth_events(&self) -> u64 {
        self.growth_events
    }

    /// Whether nothing has been written yet
    pub fn is_empty(&self) -> bool {
        self.cursor == 0
    }
}

impl Default for WriteBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl io::Write for WriteBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(WriteBuffer::write(self, buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        // Writes are committed directly into the arena; nothing is staged.
        Ok(())
    }
}
