//! Sequential bounded reader over a shared view

use std::io;

use crate::{
    error::{Result, VellumError},
    transport::view::ShareableView,
};

/// Sequential reader over a [`ShareableView`].
///
/// The cursor starts at zero and only moves forward; the shared bytes are
/// never mutated. Exhaustion is a distinguished sentinel ([`read`] returns
/// `None`), separate from a successful zero-length read, so it can serve
/// directly as a loop-termination signal.
///
/// [`read`]: ReadCursor::read
#[derive(Debug)]
pub struct ReadCursor {
    view: ShareableView,
    cursor: usize,
}

impl ReadCursor {
    /// Create a cursor positioned at the start of the view
    pub fn new(view: ShareableView) -> Self {
        Self { view, cursor: 0 }
    }

    /// Read up to `max_len` bytes, advancing the cursor by the amount returned.
    ///
    /// Returns `None` once zero bytes remain. A `read(0)` while data remains
    /// returns `Some(&[])` - asking for nothing is not the same as having
    /// nothing left.
    pub fn read(&mut self, max_len: usize) -> Option<&[u8]> {
        if self.remaining() == 0 {
            return None;
        }
        let take = max_len.min(self.remaining());
        let start = self.cursor;
        self.cursor += take;
        Some(&self.view.as_slice()[start..start + take])
    }

    /// Fill `dst` completely or fail.
    ///
    /// A short read here is an integrity violation: the producer and
    /// consumer disagree about the buffer's contents. The cursor is not
    /// advanced on failure.
    pub fn read_exact_into(&mut self, dst: &mut [u8]) -> Result<()> {
        if dst.len() > self.remaining() {
            return Err(VellumError::integrity_violation(dst.len(), self.remaining()));
        }
        let start = self.cursor;
        dst.copy_from_slice(&self.view.as_slice()[start..start + dst.len()]);
        self.cursor += dst.len();
        Ok(())
    }

    /// Bytes not yet consumed
    pub fn remaining(&self) -> usize {
        self.view.len() - self.cursor
    }

    /// Bytes consumed so far
    pub fn consumed(&self) -> usize {
        self.cursor
    }

    /// The view this cursor reads from
    pub fn view(&self) -> &ShareableView {
        &self.view
    }
}

impl io::Read for ReadCursor {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let take = buf.len().min(self.remaining());
        let start = self.cursor;
        buf[..take].copy_from_slice(&self.view.as_slice()[start..start + take]);
        self.cursor += take;
        Ok(take)
    }
}
