//! Binary-access substrate for executable-image analysis.
//!
//! This crate is the layer a disassembler or loader sits on top of: safe,
//! bounds-checked little-endian decoding and encoding over a raw file
//! buffer, a forward-only [`Cursor`] for sequential parsing, and the
//! translation between an executable's virtual address space and file
//! offsets driven by a section table — including sections whose declared
//! virtual size exceeds their on-disk size, where the tail reads as zeros.
//!
//! Parsing the section/directory metadata out of a file header, and
//! interpreting any particular directory's content, are upstream and
//! downstream collaborators respectively; this crate consumes the metadata
//! and hands back raw blocks.

/// Little-endian codec primitives over byte buffers.
pub mod codec;
/// Forward-only sequential reader.
pub mod cursor;
/// Access-layer error types.
pub mod error;
/// Image, section/directory metadata and address translation.
pub mod image;
/// Bounded file loading.
pub mod io;
/// Tracing initialization.
pub mod logging;

pub use codec::{repr, ReadExt, WriteExt};
pub use cursor::Cursor;
pub use error::{AccessError, Result};
pub use image::{Directory, DirectoryTable, Image, Section, SectionTable};
