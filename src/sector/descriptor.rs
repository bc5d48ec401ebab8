//------------------------------------------

/// Allocation state of a single sector.
///
/// bits: | 31 ... 16 | 15 ... 0 |
///       |  reserved |  filled  |
///
/// `filled` is the number of bytes of the sector that are in use.
pub type SectorDescriptor = u32;

pub const DEFAULT_DESCRIPTOR_SIZE_BYTES: u64 = std::mem::size_of::<SectorDescriptor>() as u64;

//------------------------------------------


//------------------------------------------
