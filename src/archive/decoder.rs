//! Counted message absorption from a shared view

use std::marker::PhantomData;

use crate::{
    archive::codec::{MessageCodec, StructuredCodec},
    error::Result,
    transport::{reader::ReadCursor, view::ShareableView},
};

/// Reconstructs a counted sequence of `M` values from a [`ShareableView`].
///
/// The expected count comes from the matching encoder and is trusted: the
/// buffer itself stores no count or per-message framing. [`absorb`] returns
/// `Ok(None)` once the count is exhausted - a normal end-of-sequence
/// signal, not an error - and calling it further stays at `Ok(None)`
/// without touching the underlying storage.
///
/// [`absorb`]: MessageDecoder::absorb
#[derive(Debug)]
pub struct MessageDecoder<M, C = StructuredCodec> {
    cursor: ReadCursor,
    remaining: usize,
    _marker: PhantomData<(M, C)>,
}

impl<M, C: MessageCodec<M>> MessageDecoder<M, C> {
    /// Create a decoder expecting `count` messages in `view`
    pub fn new(view: ShareableView, count: usize) -> Self {
        Self {
            cursor: ReadCursor::new(view),
            remaining: count,
            _marker: PhantomData,
        }
    }

    /// Reconstruct the next message, or `Ok(None)` at end of sequence.
    ///
    /// Messages come back in emission order. A decode failure
    /// ([`IntegrityViolation`] on the raw path, [`Serialization`] on the
    /// structured path) means buffer and count disagree; the decoder is
    /// not usable afterwards.
    ///
    /// [`IntegrityViolation`]: crate::error::VellumError::IntegrityViolation
    /// [`Serialization`]: crate::error::VellumError::Serialization
    pub fn absorb(&mut self) -> Result<Option<M>> {
        if self.remaining == 0 {
            return Ok(None);
        }
        self.remaining -= 1;
        let msg = C::decode(&mut self.cursor)?;
        Ok(Some(msg))
    }

    /// Messages not yet absorbed
    pub fn remaining_count(&self) -> usize {
        self.remaining
    }

    /// Bytes not yet consumed
    pub fn remaining_bytes(&self) -> usize {
        self.cursor.remaining()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::{codec::RawCopyCodec, encoder::MessageEncoder};

    #[test]
    fn test_absorb_in_emission_order() {
        let mut encoder: MessageEncoder<u32, RawCopyCodec> = MessageEncoder::new(64);
        for i in 10..13u32 {
            encoder.emit(&i).unwrap();
        }
        encoder.flush().unwrap();

        let mut decoder: MessageDecoder<u32, RawCopyCodec> =
            MessageDecoder::new(encoder.buffer_snapshot(), encoder.count());
        assert_eq!(decoder.absorb().unwrap(), Some(10));
        assert_eq!(decoder.absorb().unwrap(), Some(11));
        assert_eq!(decoder.absorb().unwrap(), Some(12));
        assert_eq!(decoder.absorb().unwrap(), None);
    }

    #[test]
    fn test_zero_count_never_touches_storage() {
        let encoder: MessageEncoder<u64, RawCopyCodec> = MessageEncoder::new(16);
        let mut decoder: MessageDecoder<u64, RawCopyCodec> =
            MessageDecoder::new(encoder.buffer_snapshot(), 0);

        assert_eq!(decoder.absorb().unwrap(), None);
        assert_eq!(decoder.remaining_bytes(), 0);
        assert_eq!(decoder.remaining_count(), 0);
    }

    #[test]
    fn test_accessors_do_not_mutate() {
        let mut encoder: MessageEncoder<u16, RawCopyCodec> = MessageEncoder::new(16);
        encoder.emit(&7).unwrap();
        encoder.emit(&8).unwrap();

        let mut decoder: MessageDecoder<u16, RawCopyCodec> =
            MessageDecoder::new(encoder.buffer_snapshot(), 2);
        assert_eq!(decoder.remaining_count(), 2);
        assert_eq!(decoder.remaining_count(), 2);
        assert_eq!(decoder.remaining_bytes(), 4);
        assert_eq!(decoder.remaining_bytes(), 4);

        decoder.absorb().unwrap();
        assert_eq!(decoder.remaining_count(), 1);
        assert_eq!(decoder.remaining_bytes(), 2);
    }

    #[test]
    fn test_count_beyond_buffer_is_integrity_violation() {
        let mut encoder: MessageEncoder<u64, RawCopyCodec> = MessageEncoder::new(16);
        encoder.emit(&42).unwrap();

        // Caller lies about the count
        let mut decoder: MessageDecoder<u64, RawCopyCodec> =
            MessageDecoder::new(encoder.buffer_snapshot(), 2);
        assert_eq!(decoder.absorb().unwrap(), Some(42));
        let err = decoder.absorb().unwrap_err();
        assert!(matches!(
            err,
            crate::error::VellumError::IntegrityViolation { .. }
        ));
    }
}
