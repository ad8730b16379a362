//! Counted message emission into a write buffer

use std::marker::PhantomData;

use crate::{
    archive::codec::{MessageCodec, StructuredCodec},
    error::Result,
    transport::{view::ShareableView, writer::WriteBuffer},
};

/// Emits a counted sequence of `M` values into a [`WriteBuffer`].
///
/// The codec parameter `C` fixes the encoding strategy at compile time;
/// use the [`RawEncoder`]/[`StructuredEncoder`] aliases rather than
/// spelling it out. The buffer holds a flat concatenation of per-message
/// encodings with no header or count - the emitted count travels
/// out-of-band via [`count`] and must be handed to the decoder.
///
/// [`RawEncoder`]: crate::archive::RawEncoder
/// [`StructuredEncoder`]: crate::archive::StructuredEncoder
/// [`count`]: MessageEncoder::count
#[derive(Debug)]
pub struct MessageEncoder<M, C = StructuredCodec> {
    buffer: WriteBuffer,
    count: usize,
    _marker: PhantomData<(M, C)>,
}

impl<M, C: MessageCodec<M>> MessageEncoder<M, C> {
    /// Create an encoder over a fresh buffer with the given reserved capacity
    pub fn new(reserved: usize) -> Self {
        Self::from_buffer(WriteBuffer::with_capacity(reserved))
    }

    /// Create an encoder over an existing buffer.
    ///
    /// Messages append after whatever the buffer already holds.
    pub fn from_buffer(buffer: WriteBuffer) -> Self {
        Self {
            buffer,
            count: 0,
            _marker: PhantomData,
        }
    }

    /// Serialize one message and count it
    pub fn emit(&mut self, msg: &M) -> Result<()> {
        C::encode(msg, &mut self.buffer)?;
        self.count += 1;
        Ok(())
    }

    /// Finalize any codec state buffered in the transport.
    ///
    /// A no-op for the raw-copy path, whose writes commit immediately.
    pub fn flush(&mut self) -> Result<()> {
        C::flush(&mut self.buffer)
    }

    /// Number of messages emitted so far
    pub fn count(&self) -> usize {
        self.count
    }

    /// Bytes written so far
    pub fn size(&self) -> usize {
        self.buffer.written_len()
    }

    /// Shared snapshot of the emitted bytes.
    ///
    /// Valid to take after [`flush`]; the encoder stays usable afterwards
    /// and later emissions do not disturb the snapshot.
    ///
    /// [`flush`]: MessageEncoder::flush
    pub fn buffer_snapshot(&self) -> ShareableView {
        self.buffer.snapshot()
    }

    /// Consume the encoder, releasing its buffer
    pub fn into_buffer(self) -> WriteBuffer {
        self.buffer
    }
}
