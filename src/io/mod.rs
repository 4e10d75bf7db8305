//! Bounded loading of raw file content.
//!
//! [`read_file`] produces the owned buffer an [`crate::image::Image`]
//! wraps: the complete file content, read in one pass through a read-only
//! memory map, with a hard size cap so a hostile path cannot balloon
//! memory. Everything downstream of the returned buffer is pure in-memory
//! work; this is the only place the crate touches the filesystem.

pub mod error;

use crate::io::error::{IoError, Result};
use memmap2::Mmap;
use std::fs::File;
use std::path::Path;
use tracing::{debug, warn};

/// Resource limits for loading a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IoLimits {
    /// The absolute maximum file size that can be loaded.
    pub max_file_size: u64,
}

impl Default for IoLimits {
    fn default() -> Self {
        Self {
            max_file_size: 100 * 1024 * 1024, // 100MB
        }
    }
}

/// Read a file's complete content into an owned buffer.
///
/// Fails with [`IoError::FileTooLarge`] if the file exceeds
/// `limits.max_file_size`. Zero-length files are returned as an empty
/// buffer without mapping (memmap cannot map empty files).
pub fn read_file<P: AsRef<Path>>(path: P, limits: &IoLimits) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let file_size = file.metadata()?.len();

    debug!(
        path = %path.display(),
        size = file_size,
        limits.max_file_size = limits.max_file_size,
        "Loading raw file content"
    );

    if file_size > limits.max_file_size {
        warn!(
            path = %path.display(),
            size = file_size,
            limit = limits.max_file_size,
            "File is too large"
        );
        return Err(IoError::FileTooLarge {
            limit: limits.max_file_size,
            found: file_size,
        });
    }

    if file_size == 0 {
        return Ok(Vec::new());
    }

    // Safety: the file is backed by a real file on disk and we only request
    // a read-only map, which is copied out before the map is dropped.
    let mmap = unsafe { Mmap::map(&file)? };
    Ok(mmap.to_vec())
}
