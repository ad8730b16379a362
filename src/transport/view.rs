//! Immutable shared views over written buffer bytes

use std::slice;

use crate::arena::ByteArena;

/// An immutable, length-bounded reference to arena storage.
///
/// Produced by [`WriteBuffer::snapshot`]; aliases the buffer's storage
/// without copying. The view covers a prefix the writer never touches
/// again (appends happen at or above the captured length, growth swaps
/// the allocation), so the bytes are frozen for the view's lifetime.
///
/// Views are cheap to clone and safe to read from multiple readers at
/// once. Handing one to another thread requires the usual synchronized
/// transfer (channel, mutex hand-off); the view itself does no locking.
///
/// [`WriteBuffer::snapshot`]: crate::transport::WriteBuffer::snapshot
#[derive(Debug, Clone)]
pub struct ShareableView {
    arena: ByteArena,
    len: usize,
}

impl ShareableView {
    pub(crate) fn new(arena: ByteArena, len: usize) -> Self {
        debug_assert!(len <= arena.capacity());
        Self { arena, len }
    }

    /// Length of the view in bytes, fixed at snapshot time
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the view covers zero bytes
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The viewed bytes
    pub fn as_slice(&self) -> &[u8] {
        // Safety: [0, len) was fully written before the snapshot and is
        // never mutated afterwards; the arena handle keeps it alive.
        unsafe { slice::from_raw_parts(self.arena.as_ptr(), self.len) }
    }

    /// Number of live handles on the underlying storage
    pub fn handle_count(&self) -> usize {
        self.arena.handle_count()
    }
}

impl AsRef<[u8]> for ShareableView {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::writer::WriteBuffer;

    #[test]
    fn test_view_matches_written_bytes() {
        let mut buf = WriteBuffer::with_capacity(16);
        buf.write(b"view me");
        let view = buf.snapshot();
        assert_eq!(view.len(), 7);
        assert_eq!(view.as_slice(), b"view me");
        assert_eq!(view.as_ref(), b"view me");
    }

    #[test]
    fn test_empty_view() {
        let buf = WriteBuffer::with_capacity(8);
        let view = buf.snapshot();
        assert!(view.is_empty());
        assert_eq!(view.as_slice(), b"");
    }

    #[test]
    fn test_view_shares_storage_until_growth() {
        let mut buf = WriteBuffer::with_capacity(8);
        buf.write(b"abc");
        let view = buf.snapshot();
        // Buffer + view
        assert_eq!(view.handle_count(), 2);

        // Growth moves the buffer onto fresh storage; the view keeps the old
        buf.write(b"0123456789");
        assert_eq!(view.handle_count(), 1);
        assert_eq!(view.as_slice(), b"abc");
    }

    #[test]
    fn test_clone_is_shallow() {
        let mut buf = WriteBuffer::with_capacity(8);
        buf.write(b"xyz");
        let view = buf.snapshot();
        let clone = view.clone();
        assert_eq!(clone.as_slice(), view.as_slice());
        assert_eq!(view.handle_count(), 3);
    }
}
