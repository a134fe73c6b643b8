//! Cross-reference table.
//!
//! Each entry is exactly 20 bytes: a 10-digit offset, a 5-digit generation,
//! the entry type and a two-byte line end (`" \n"`).

use std::collections::BTreeMap;
use std::io::{self, Write};

/// Generation number of free entries that must never be reused.
const FREE_GENERATION: u16 = 65535;

/// One row of the cross-reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XrefEntry {
    /// Unused identifier
    Free {
        /// Next free object number
        next: u32,
        /// Generation to use if the number is reused
        gen: u16,
    },
    /// Object written at `offset` bytes from the start of the file
    InUse {
        /// Byte offset of `id gen obj`
        offset: usize,
        /// Generation number
        gen: u16,
    },
}

impl XrefEntry {
    /// Write the fixed-width 20-byte line for this entry.
    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        match self {
            XrefEntry::Free { next, gen } => write!(w, "{:010} {:05} f \n", next, gen),
            XrefEntry::InUse { offset, gen } => write!(w, "{:010} {:05} n \n", offset, gen),
        }
    }
}

/// Byte offsets of written objects, keyed by object number.
#[derive(Debug, Clone, Default)]
pub struct XrefTable {
    entries: BTreeMap<u32, XrefEntry>,
}

impl XrefTable {
    /// Create an empty table. Object 0 is implied.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that object `id` starts at `offset`.
    pub fn record(&mut self, id: u32, gen: u16, offset: usize) {
        self.entries.insert(id, XrefEntry::InUse { offset, gen });
    }

    /// One greater than the highest object number (the trailer `/Size`).
    pub fn size(&self) -> u32 {
        self.entries.keys().next_back().map_or(1, |max| max + 1)
    }

    /// Object numbers below [`size`](Self::size) with no recorded object.
    fn gaps(&self) -> Vec<u32> {
        (1..self.size())
            .filter(|id| !self.entries.contains_key(id))
            .collect()
    }

    /// Write the `xref` section: keyword, subsection header and every row.
    ///
    /// Gaps between recorded objects are written as free entries linked from
    /// object 0 in ascending order; the last one links back to 0.
    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        let size = self.size();
        let gaps = self.gaps();
        let next_free = |id: u32| gaps.iter().copied().find(|gap| *gap > id).unwrap_or(0);

        write!(w, "xref\n0 {}\n", size)?;
        XrefEntry::Free {
            next: next_free(0),
            gen: FREE_GENERATION,
        }
        .write_to(w)?;

        for id in 1..size {
            let entry = self.entries.get(&id).copied().unwrap_or(XrefEntry::Free {
                next: next_free(id),
                gen: FREE_GENERATION,
            });
            entry.write_to(w)?;
        }
        Ok(())
    }
}
