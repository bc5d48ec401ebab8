use std::fmt;

use crate::math::{bytes_to_sectors, count_to_bytes};
use crate::sector::params::DiskParameters;

//------------------------------------------

/// Space needed to track the allocation state of every sector, plus the
/// space needed to track the sectors holding that state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OverheadReport {
    pub sector_count: u64,
    pub descriptor_count: u64,
    pub descriptor_memory_bytes: u64,
    pub descriptor_sector_count: u64,
    pub meta_descriptor_count: u64,
    pub meta_descriptor_memory_bytes: u64,
    pub meta_descriptor_sector_count: u64,
}

impl OverheadReport {
    pub fn fields(&self) -> [(&'static str, u64); 7] {
        [
            ("sector_count", self.sector_count),
            ("descriptor_count", self.descriptor_count),
            ("descriptor_memory_bytes", self.descriptor_memory_bytes),
            ("descriptor_sector_count", self.descriptor_sector_count),
            ("meta_descriptor_count", self.meta_descriptor_count),
            (
                "meta_descriptor_memory_bytes",
                self.meta_descriptor_memory_bytes,
            ),
            (
                "meta_descriptor_sector_count",
                self.meta_descriptor_sector_count,
            ),
        ]
    }

    pub fn total_metadata_sectors(&self) -> u64 {
        self.descriptor_sector_count + self.meta_descriptor_sector_count
    }
}

impl fmt::Display for OverheadReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, value) in self.fields() {
            writeln!(f, "{}: {}", label, value)?;
        }
        Ok(())
    }
}

/// Two levels only: the descriptors for the sectors holding meta
/// descriptors are not accounted for.  All sector counts truncate.
pub fn compute_overhead(params: &DiskParameters) -> OverheadReport {
    let shift = params.sector_size_shift();
    let descriptor_size = params.descriptor_size_bytes();

    let sector_count = bytes_to_sectors(params.disk_size_bytes(), shift);
    let descriptor_count = sector_count;
    let descriptor_memory_bytes = count_to_bytes(descriptor_count, descriptor_size);
    let descriptor_sector_count = bytes_to_sectors(descriptor_memory_bytes, shift);

    let meta_descriptor_count = descriptor_sector_count;
    let meta_descriptor_memory_bytes = count_to_bytes(meta_descriptor_count, descriptor_size);
    let meta_descriptor_sector_count = bytes_to_sectors(meta_descriptor_memory_bytes, shift);

    OverheadReport {
        sector_count,
        descriptor_count,
        descriptor_memory_bytes,
        descriptor_sector_count,
        meta_descriptor_count,
        meta_descriptor_memory_bytes,
        meta_descriptor_sector_count,
    }
}

//------------------------------------------


//------------------------------------------
