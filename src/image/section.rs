//! Section metadata and the insertion-ordered section table.
//!
//! A section is a named contiguous virtual-address range backed by zero or
//! more bytes of on-disk data. Its declared virtual size may exceed its raw
//! size; the excess is uninitialized data, implicitly zero-filled on read.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named virtual-address range and its backing file region.
///
/// Invariants (callers supply well-formed metadata, see crate docs):
/// `address <= address_end`, and `raw_offset + raw_size` must not exceed
/// the backing buffer's length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section name (e.g., ".text", ".data").
    pub name: String,
    /// First virtual address of the section.
    pub address: u64,
    /// One past the last virtual address of the section.
    pub address_end: u64,
    /// File offset where the section's raw data begins.
    pub raw_offset: u64,
    /// Number of bytes of raw data on disk.
    pub raw_size: u64,
}

impl Section {
    pub fn new(
        name: impl Into<String>,
        address: u64,
        address_end: u64,
        raw_offset: u64,
        raw_size: u64,
    ) -> Self {
        Self {
            name: name.into(),
            address,
            address_end,
            raw_offset,
            raw_size,
        }
    }

    /// Size of the section in the virtual address space.
    pub fn virtual_size(&self) -> u64 {
        self.address_end - self.address
    }

    /// Full size of the section's logical content: raw bytes plus any
    /// zero-filled tail.
    pub fn logical_size(&self) -> u64 {
        self.raw_size.max(self.virtual_size())
    }

    /// Whether `address` falls within the half-open range
    /// `[address, address_end)`.
    pub fn contains(&self, address: u64) -> bool {
        self.address <= address && address < self.address_end
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Section '{}' ({:#x}..{:#x}, raw {:#x}+{:#x})",
            self.name, self.address, self.address_end, self.raw_offset, self.raw_size
        )
    }
}

/// Insertion-ordered section table with first-match address lookup.
///
/// Sections are assumed non-overlapping by format convention, but lookup
/// deliberately stays a linear scan in insertion order: if ranges do
/// overlap, the first inserted match wins, and that tie-break is an
/// observable behavior downstream code relies on. Do not replace this with
/// a sorted or tree-based structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionTable {
    sections: Vec<Section>,
}

impl SectionTable {
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// Append a section, keeping insertion order.
    pub fn push(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// All sections in insertion order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Find a section by name.
    pub fn by_name(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    /// First section whose virtual range contains `address`.
    pub fn containing(&self, address: u64) -> Option<&Section> {
        self.sections.iter().find(|s| s.contains(address))
    }
}

impl FromIterator<Section> for SectionTable {
    fn from_iter<I: IntoIterator<Item = Section>>(iter: I) -> Self {
        Self {
            sections: iter.into_iter().collect(),
        }
    }
}
