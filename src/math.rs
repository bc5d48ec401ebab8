//------------------------------------------

/// Number of whole sectors covered by `bytes`.  Partial sectors are dropped.
pub fn bytes_to_sectors(bytes: u64, shift: u32) -> u64 {
    bytes.checked_shr(shift).unwrap_or(0)
}

pub fn count_to_bytes(count: u64, entry_size: u64) -> u64 {
    count * entry_size
}

/// Returns log2 of the sector size, or None if it isn't a power of two.
pub fn sector_shift(sector_size_bytes: u64) -> Option<u32> {
    if sector_size_bytes.is_power_of_two() {
        Some(sector_size_bytes.trailing_zeros())
    } else {
        None
    }
}

pub fn div_up(v: u64, divisor: u64) -> u64 {
    v / divisor + (v % divisor != 0) as u64
}

//------------------------------------------


//------------------------------------------
