//! # Vellum - In-Process Binary Transport
//!
//! Vellum is a small in-memory binary transport: a growable byte buffer
//! written sequentially by one owner, handed off as an immutable shared
//! view, and read back sequentially by independent readers. On top sits a
//! typed message archive that serializes a counted sequence of homogeneous
//! messages and reconstructs them in order.
//!
//! ## Features
//!
//! - **Shared byte arenas**: reference-counted storage handles; growth
//!   allocates fresh storage instead of mutating in place, so issued views
//!   are never invalidated by later writes
//! - **Append-only write buffers**: deterministic growth policy
//!   (`incoming + 2 * written`), full-length writes, point-in-time
//!   zero-copy snapshots
//! - **Sequential read cursors**: bounded reads with a distinguished
//!   exhausted sentinel
//! - **Typed archives**: compile-time codec fork between a raw-copy path
//!   for plain-data types and a serde/bincode path for structured types
//! - **Stream adapters**: `std::io::Write`/`std::io::Read` impls so codecs
//!   operate incrementally against the transport
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │              MessageEncoder<M, C>                │
//! │  emit() ──> RawCopyCodec │ StructuredCodec       │
//! ├──────────────────────────┼───────────────────────┤
//! │        WriteBuffer       │                       │
//! │  (growth + write cursor) │                       │
//! │            │ snapshot()  │                       │
//! │            ▼             ▼                       │
//! │      ShareableView ──> ReadCursor                │
//! │            │                                     │
//! │            ▼                                     │
//! │              MessageDecoder<M, C>                │
//! │  absorb() x count  (count travels out-of-band)   │
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! Single-threaded by design: a writer/encoder pair belongs to one owner,
//! and no operation locks internally. A [`ShareableView`] may be read from
//! several cursors at once; handing it across threads is the caller's
//! synchronization to arrange.

// Core modules
pub mod arena;
pub mod archive;
pub mod error;
pub mod transport;

// Main API re-exports
pub use arena::ByteArena;
pub use archive::{
    MessageCodec, MessageDecoder, MessageEncoder, PlainData, RawCopyCodec, RawDecoder, RawEncoder,
    StructuredCodec, StructuredDecoder, StructuredEncoder,
};
pub use error::{Result, VellumError};
pub use transport::{ReadCursor, ShareableView, WriteBuffer};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const VERSION_MAJOR: u32 = 0;
pub const VERSION_MINOR: u32 = 1;
pub const VERSION_PATCH: u32 = 0;

/// Default configuration constants
pub mod config {
    /// Default reserved capacity for new write buffers (512 bytes)
    pub const DEFAULT_RESERVE: usize = 512;
}
