use crate::error::{Result, SectorMetaError};
use crate::math::{bytes_to_sectors, sector_shift};
use crate::sector::descriptor::DEFAULT_DESCRIPTOR_SIZE_BYTES;
use crate::units::{to_bytes, Units};

//------------------------------------------

pub const DEFAULT_DISK_SIZE: u64 = 16 * 1073741824;
pub const DEFAULT_SECTOR_SIZE_BYTES: u64 = 512;
pub const DEFAULT_SECTOR_SIZE_SHIFT: u32 = 9;

/// Geometry of the medium being described.  Immutable once built.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DiskParameters {
    disk_size_bytes: u64,
    sector_size_shift: u32,
    descriptor_size_bytes: u64,
}

impl DiskParameters {
    pub fn new(disk_size_bytes: u64, sector_size_bytes: u64) -> Result<Self> {
        Self::with_descriptor_size(
            disk_size_bytes,
            sector_size_bytes,
            DEFAULT_DESCRIPTOR_SIZE_BYTES,
        )
    }

    pub fn with_descriptor_size(
        disk_size_bytes: u64,
        sector_size_bytes: u64,
        descriptor_size_bytes: u64,
    ) -> Result<Self> {
        let sector_size_shift = sector_shift(sector_size_bytes).ok_or_else(|| {
            SectorMetaError::InvalidConfiguration(format!(
                "sector size must be a power of two, got {}",
                sector_size_bytes
            ))
        })?;

        if descriptor_size_bytes == 0 {
            return Err(SectorMetaError::InvalidConfiguration(
                "descriptor size must be positive".to_string(),
            ));
        }

        // The calculator does unchecked arithmetic, so both levels must fit here.
        let fits = bytes_to_sectors(disk_size_bytes, sector_size_shift)
            .checked_mul(descriptor_size_bytes)
            .and_then(|memory| {
                bytes_to_sectors(memory, sector_size_shift).checked_mul(descriptor_size_bytes)
            })
            .is_some();
        if !fits {
            return Err(SectorMetaError::InvalidConfiguration(format!(
                "descriptor memory for a {} byte disk with {} byte sectors overflows 64 bits",
                disk_size_bytes, sector_size_bytes
            )));
        }

        Ok(DiskParameters {
            disk_size_bytes,
            sector_size_shift,
            descriptor_size_bytes,
        })
    }

    pub fn disk_size_bytes(&self) -> u64 {
        self.disk_size_bytes
    }

    pub fn sector_size_shift(&self) -> u32 {
        self.sector_size_shift
    }

    pub fn sector_size_bytes(&self) -> u64 {
        1 << self.sector_size_shift
    }

    pub fn descriptor_size_bytes(&self) -> u64 {
        self.descriptor_size_bytes
    }
}

impl Default for DiskParameters {
    fn default() -> Self {
        DiskParameters {
            disk_size_bytes: DEFAULT_DISK_SIZE,
            sector_size_shift: DEFAULT_SECTOR_SIZE_SHIFT,
            descriptor_size_bytes: DEFAULT_DESCRIPTOR_SIZE_BYTES,
        }
    }
}

/// Converts a magnitude and unit into a byte count, as given on the command line.
pub fn disk_size_from_units(size: u64, unit: Units) -> Result<u64> {
    if size == 0 {
        return Err(SectorMetaError::InvalidConfiguration(
            "disk size must be positive".to_string(),
        ));
    }

    to_bytes(size, unit).ok_or_else(|| {
        SectorMetaError::InvalidConfiguration(format!(
            "disk size {}{} is too large",
            size,
            unit.to_string_short()
        ))
    })
}

//------------------------------------------


//------------------------------------------
