//! Executable image: raw buffer plus section/directory metadata, and the
//! translation between virtual addresses and file offsets.
//!
//! An [`Image`] owns the complete raw file content and the metadata an
//! upstream header parser produced. Reads by virtual address scan the
//! section table in insertion order, map the address to a file offset and
//! delegate to the codec; addresses past a section's raw data fall in its
//! zero-filled tail and are synthesized without touching the buffer.
//! Probing an address no section covers is a normal outcome (`Ok(None)`),
//! not an error — writes there are.

pub mod directory;
pub mod section;

pub use directory::{Directory, DirectoryTable};
pub use section::{Section, SectionTable};

use bytes::Bytes;
use tracing::{debug, trace};

use crate::codec::{ReadExt, WriteExt};
use crate::error::{AccessError, Result};

/// A raw file buffer with its section and directory metadata.
pub struct Image {
    data: Vec<u8>,
    sections: SectionTable,
    directories: DirectoryTable,
}

impl Image {
    pub fn new(data: Vec<u8>, sections: SectionTable, directories: DirectoryTable) -> Self {
        Self {
            data,
            sections,
            directories,
        }
    }

    /// The raw file content.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable access to the raw file content, for direct codec-level
    /// patching at known file offsets.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn sections(&self) -> &SectionTable {
        &self.sections
    }

    pub fn directories(&self) -> &DirectoryTable {
        &self.directories
    }

    /// Read `size` bytes at a virtual address.
    ///
    /// Returns `Ok(None)` when no section covers `address`. A read starting
    /// at or past the containing section's raw size falls in the zero tail
    /// and yields all zeros. A read that starts inside the raw region and
    /// extends past `raw_size` is not split: it is served directly from the
    /// file buffer and fails only if it runs off the end of the buffer.
    pub fn read_virtual(&self, address: u64, size: u64) -> Result<Option<Bytes>> {
        let Some(section) = self.sections.containing(address) else {
            trace!(address, "no section covers address");
            return Ok(None);
        };
        let delta = address - section.address;
        if delta >= section.raw_size {
            trace!(
                address,
                section = %section.name,
                size,
                "read satisfied from zero tail"
            );
            return Ok(Some(Bytes::from(vec![0u8; size as usize])));
        }
        let offset = (section.raw_offset + delta) as usize;
        let block = self.data.read_block(offset, size as usize)?;
        Ok(Some(Bytes::copy_from_slice(block)))
    }

    /// Read a NUL-terminated block at a virtual address.
    ///
    /// Scans forward from the translated file offset, stopping at the first
    /// zero byte or at the section's raw-size boundary, whichever comes
    /// first; the terminator is excluded. Returns `Ok(None)` when no
    /// section covers `address`; a start address already inside the zero
    /// tail yields an empty block.
    pub fn read_virtual_until_zero(&self, address: u64) -> Result<Option<Bytes>> {
        let Some(section) = self.sections.containing(address) else {
            return Ok(None);
        };
        let delta = address - section.address;
        if delta >= section.raw_size {
            return Ok(Some(Bytes::new()));
        }
        let start = (section.raw_offset + delta) as usize;
        let window = self
            .data
            .read_block(start, (section.raw_size - delta) as usize)?;
        let len = memchr::memchr(0, window).unwrap_or(window.len());
        Ok(Some(Bytes::copy_from_slice(&window[..len])))
    }

    /// Write `block` in place at a virtual address.
    ///
    /// Writing to an unmapped address or into a section's zero tail is a
    /// caller error: the tail has no backing storage, even though reads
    /// there succeed with zero-fill.
    pub fn write_virtual(&mut self, address: u64, block: &[u8]) -> Result<()> {
        let Some(section) = self.sections.containing(address) else {
            return Err(AccessError::UnmappedAddress { address });
        };
        let delta = address - section.address;
        if delta + block.len() as u64 > section.raw_size {
            return Err(AccessError::PaddedRegionWrite { address });
        }
        let offset = (section.raw_offset + delta) as usize;
        debug!(
            address,
            section = %section.name,
            offset,
            len = block.len(),
            "writing through virtual address"
        );
        self.data.write_block(offset, block)
    }

    /// Read a directory's content by name.
    ///
    /// Fails with `UnknownDirectory` for a name absent from the metadata;
    /// returns `Ok(None)` when the directory's address is not covered by
    /// any section.
    pub fn read_directory(&self, name: &str) -> Result<Option<Bytes>> {
        let directory = self
            .directories
            .get(name)
            .ok_or_else(|| AccessError::UnknownDirectory {
                name: name.to_string(),
            })?;
        self.read_virtual(directory.address, directory.size)
    }

    /// Materialize a section's full logical content: its raw bytes followed
    /// by the zero-filled tail up to `logical_size`.
    pub fn read_section(&self, name: &str) -> Result<Bytes> {
        let section = self
            .sections
            .by_name(name)
            .ok_or_else(|| AccessError::UnknownSection {
                name: name.to_string(),
            })?;
        let raw = self
            .data
            .read_block(section.raw_offset as usize, section.raw_size as usize)?;
        let mut content = Vec::with_capacity(section.logical_size() as usize);
        content.extend_from_slice(raw);
        content.resize(section.logical_size() as usize, 0);
        Ok(Bytes::from(content))
    }
}
