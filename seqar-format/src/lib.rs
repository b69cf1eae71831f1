//! Reader and writer for the seqar sequential archive format.
//!
//! An archive is a plain concatenation of records, terminated by the end of
//! the stream:
//!
//! ```text
//! name_length    u32 big-endian, > 0
//! name           name_length bytes, UTF-8
//! content_length u64 big-endian
//! content        content_length bytes
//! ```
//!
//! There is no header, no record count and no trailer. Content is always
//! streamed through a fixed-size buffer, so neither side ever holds a whole
//! file in memory.

mod de;
mod error;
mod file;
mod record;
mod ser;

pub use error::{Error, Result};
pub use file::reader::{decode, ArchiveReader, Entry};
pub use file::writer::{encode, ArchiveWriter};
pub use record::{constants, RecordHeader};
