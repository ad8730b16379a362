//! Typed message archives - counted sequences of homogeneous messages
//! serialized into a transport buffer and reconstructed in order.
//!
//! The codec is chosen per message type at compile time: plain-data types
//! (fully described by their memory layout) go through [`RawCopyCodec`],
//! a straight byte copy with no per-field work; everything else goes
//! through [`StructuredCodec`], which serializes declared fields in order
//! via serde/bincode and handles nesting, sequences and mappings.

pub mod codec;
pub mod decoder;
pub mod encoder;

pub use codec::{MessageCodec, PlainData, RawCopyCodec, StructuredCodec};
pub use decoder::MessageDecoder;
pub use encoder::MessageEncoder;

/// Encoder statically bound to the raw-copy codec
pub type RawEncoder<M> = MessageEncoder<M, RawCopyCodec>;
/// Decoder statically bound to the raw-copy codec
pub type RawDecoder<M> = MessageDecoder<M, RawCopyCodec>;
/// Encoder statically bound to the structured codec
pub type StructuredEncoder<M> = MessageEncoder<M, StructuredCodec>;
/// Decoder statically bound to the structured codec
pub type StructuredDecoder<M> = MessageDecoder<M, StructuredCodec>;
