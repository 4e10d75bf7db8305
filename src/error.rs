//! Error types for the binary-access layer.
//!
//! All fatal access failures are carried by a single [`AccessError`] enum so
//! callers can match on the distinguished kind and decide whether to
//! log-and-abort or surface the failure to an outer tool. Expected absence
//! (probing a virtual address no section covers) is never an error; those
//! operations return `Ok(None)` instead.

use thiserror::Error;

/// Fatal access failures: malformed metadata or caller misuse.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// A direct buffer access ran past the end of the buffer.
    #[error("read of {len} bytes at offset {offset:#x} exceeds buffer size {size:#x}")]
    OutOfBounds { offset: u64, len: u64, size: u64 },

    /// A write targeted a virtual address no section covers.
    #[error("write to unmapped virtual address {address:#x}")]
    UnmappedAddress { address: u64 },

    /// A write targeted the zero-filled tail of a section, which has no
    /// backing storage in the file buffer.
    #[error("write into zero-padded region at virtual address {address:#x}")]
    PaddedRegionWrite { address: u64 },

    /// Directory name not present in the image metadata.
    #[error("unknown directory: {name}")]
    UnknownDirectory { name: String },

    /// Section name not present in the image metadata.
    #[error("unknown section: {name}")]
    UnknownSection { name: String },
}

/// Result type alias for access-layer operations.
pub type Result<T> = std::result::Result<T, AccessError>;
