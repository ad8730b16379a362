//! Codec strategies for the message archive.
//!
//! Two codecs cover the type space: [`RawCopyCodec`] for types whose value
//! is exactly their bytes, and [`StructuredCodec`] for everything serde can
//! describe. Which one a message type uses is fixed by a generic parameter
//! on the encoder/decoder, so the choice is resolved at compile time and
//! the raw path carries no per-field or per-message dispatch cost.

use std::{mem, slice};

use serde::{de::DeserializeOwned, Serialize};

use crate::{
    error::Result,
    transport::{reader::ReadCursor, writer::WriteBuffer},
};

/// Marker for types fully described by their raw memory layout.
///
/// # Safety
///
/// Implementors guarantee the type has no invariants beyond its bytes: any
/// bit pattern of `size_of::<Self>()` bytes produced by copying a valid
/// value back into another valid value is itself valid. In practice that
/// means `#[repr(C)]` field-only structs of integers and floats, with no
/// references, pointers, `bool`/`char`, enums with invalid discriminants,
/// or heap-owning fields.
///
/// `Copy + Default` are required so decode can stamp bytes over a default
/// instance without running any construction logic.
pub unsafe trait PlainData: Copy + Default {}

macro_rules! impl_plain_data {
    ($($ty:ty),* $(,)?) => {
        $(unsafe impl PlainData for $ty {})*
    };
}

impl_plain_data!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

/// A codec turns messages into transport bytes and back.
///
/// `encode` followed by `decode` must reproduce the message exactly; both
/// operate incrementally against the stream cursors rather than requiring
/// the whole buffer at once.
pub trait MessageCodec<M> {
    /// Serialize `msg` into the write buffer
    fn encode(msg: &M, buffer: &mut WriteBuffer) -> Result<()>;

    /// Reconstruct one message from the read cursor
    fn decode(cursor: &mut ReadCursor) -> Result<M>;

    /// Finalize any state the codec staged in the transport
    fn flush(_buffer: &mut WriteBuffer) -> Result<()> {
        Ok(())
    }
}

/// Zero-overhead codec for [`PlainData`] types: one `memcpy` per message.
#[derive(Debug)]
pub struct RawCopyCodec;

impl<M: PlainData> MessageCodec<M> for RawCopyCodec {
    fn encode(msg: &M, buffer: &mut WriteBuffer) -> Result<()> {
        // Safety: PlainData promises the value is exactly its bytes.
        let bytes =
            unsafe { slice::from_raw_parts(msg as *const M as *const u8, mem::size_of::<M>()) };
        buffer.write(bytes);
        Ok(())
    }

    fn decode(cursor: &mut ReadCursor) -> Result<M> {
        let mut msg = M::default();
        // Safety: PlainData promises any copied-in value bytes are valid,
        // and the destination is a live, properly aligned M.
        let dst = unsafe {
            slice::from_raw_parts_mut(&mut msg as *mut M as *mut u8, mem::size_of::<M>())
        };
        // A short read means buffer and count disagree; read_exact_into
        // surfaces that as an integrity violation rather than tolerating it.
        cursor.read_exact_into(dst)?;
        Ok(msg)
    }
}

/// Field-by-field codec for structured types, backed by serde + bincode.
///
/// Fields are encoded in declaration order; nested values, ordered
/// sequences and key-unique mappings reconstruct recursively. The wire
/// format is bincode's and is not otherwise specified here - the archive
/// only relies on encode/decode being exact inverses over the stream
/// adapters.
#[derive(Debug)]
pub struct StructuredCodec;

impl<M: Serialize + DeserializeOwned> MessageCodec<M> for StructuredCodec {
    fn encode(msg: &M, buffer: &mut WriteBuffer) -> Result<()> {
        bincode::serialize_into(&mut *buffer, msg)?;
        Ok(())
    }

    fn decode(cursor: &mut ReadCursor) -> Result<M> {
        Ok(bincode::deserialize_from(&mut *cursor)?)
    }
}
