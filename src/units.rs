use std::str::FromStr;

use crate::error::SectorMetaError;

//------------------------------------------

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Units {
    Kibibyte,
    Mebibyte,
    Gibibyte,
}

impl Units {
    pub fn size_bytes(&self) -> u64 {
        use Units::*;

        match self {
            Kibibyte => 1024,
            Mebibyte => 1048576,
            Gibibyte => 1073741824,
        }
    }

    pub fn to_string_short(&self) -> String {
        use Units::*;

        String::from(match self {
            Kibibyte => "KiB",
            Mebibyte => "MiB",
            Gibibyte => "GiB",
        })
    }
}

// Only the binary multipliers are accepted for disk sizes.
impl FromStr for Units {
    type Err = SectorMetaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "KiB" => Ok(Units::Kibibyte),
            "MiB" => Ok(Units::Mebibyte),
            "GiB" => Ok(Units::Gibibyte),
            _ => Err(SectorMetaError::UnrecognizedUnit(s.to_string())),
        }
    }
}

/// Returns None if the product doesn't fit in 64 bits.
pub fn to_bytes(size: u64, unit: Units) -> Option<u64> {
    size.checked_mul(unit.size_bytes())
}

//------------------------------------------


//------------------------------------------
