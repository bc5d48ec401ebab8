//------------------------------------------

#[macro_export]
macro_rules! path_to {
    ($name: literal) => {
        env!(concat!("CARGO_BIN_EXE_", $name))
    };
}

//------------------------------------------

pub const SECTOR_METADATA_SIZE: &str = path_to!("sector_metadata_size");
pub const SECTOR_TOOLS: &str = path_to!("sector_tools");

//------------------------------------------

pub mod msg {
    pub const MISSING_DISK_SIZE: &str = "No disk size provided.";

    pub fn bad_option_hint(option: &str) -> String {
        format!("unexpected argument '{}'", option)
    }

    pub fn unrecognized_unit(unit: &str) -> String {
        format!("Unrecognized unit: {}", unit)
    }
}

//------------------------------------------
