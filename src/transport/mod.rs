//! Sequential byte transport - append-only writer, shared views, bounded reader

pub mod reader;
pub mod view;
pub mod writer;

pub use reader::ReadCursor;
pub use view::ShareableView;
pub use writer::WriteBuffer;
