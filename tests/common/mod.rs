//! Common test utilities and helpers.
//!
//! Builds a small synthetic executable image: a header region that no
//! section covers, a `.text` section fully backed by raw data carrying an
//! import-directory-like record, and a `.data` section whose virtual size
//! exceeds its raw size (zero tail).

use scatha::{Directory, DirectoryTable, Image, Section, SectionTable};

/// Virtual address of the import-style directory inside `.text`.
pub const IMPORT_DIR_VA: u64 = 0x1100;
/// Virtual address of the NUL-terminated module name inside `.text`.
pub const MODULE_NAME_VA: u64 = 0x1180;
/// First virtual address of the `.data` zero tail.
pub const DATA_TAIL_VA: u64 = 0x2080;

/// Build the raw buffer backing [`test_image`].
pub fn test_buffer() -> Vec<u8> {
    let mut data = vec![0u8; 0x2c0];

    // Pseudo header bytes, outside any section.
    data[..4].copy_from_slice(b"MZ\x90\x00");

    // .text raw content: recognizable pattern.
    for (i, byte) in data[0x40..0x240].iter_mut().enumerate() {
        *byte = (i % 0xef) as u8 + 1;
    }

    // Import-style record at VA 0x1100 (file offset 0x140): name pointer,
    // then two table entries.
    data[0x140..0x144].copy_from_slice(&(MODULE_NAME_VA as u32).to_le_bytes());
    data[0x144..0x148].copy_from_slice(&0x0000_2010u32.to_le_bytes());
    data[0x148..0x14c].copy_from_slice(&0x0000_2018u32.to_le_bytes());
    data[0x14c..0x150].copy_from_slice(&0u32.to_le_bytes());

    // Module name at VA 0x1180 (file offset 0x1c0).
    let name = b"KERNEL32.dll\0";
    data[0x1c0..0x1c0 + name.len()].copy_from_slice(name);

    // .data raw content.
    for (i, byte) in data[0x240..0x2c0].iter_mut().enumerate() {
        *byte = 0xd0 + (i % 16) as u8;
    }

    data
}

/// Section and directory metadata matching [`test_buffer`].
pub fn test_metadata() -> (SectionTable, DirectoryTable) {
    let sections = SectionTable::new(vec![
        Section::new(".text", 0x1000, 0x1200, 0x40, 0x200),
        Section::new(".data", 0x2000, 0x2400, 0x240, 0x80),
    ]);
    let directories: DirectoryTable = [Directory::new("import", IMPORT_DIR_VA, 0x10)]
        .into_iter()
        .collect();
    (sections, directories)
}

pub fn test_image() -> Image {
    let (sections, directories) = test_metadata();
    Image::new(test_buffer(), sections, directories)
}
