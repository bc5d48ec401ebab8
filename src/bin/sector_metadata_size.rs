use std::process::exit;

use sector_meta::commands::sector_metadata_size::SectorMetadataSizeCommand;
use sector_meta::commands::Command;

fn main() {
    let mut args = std::env::args_os();
    exit(SectorMetadataSizeCommand.run(&mut args))
}
