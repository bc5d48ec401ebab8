use anyhow::Result;
use clap::{value_parser, Arg, ArgAction};
use std::ffi::OsString;
use std::fmt::Write;
use std::sync::Arc;

use crate::commands::utils::*;
use crate::commands::Command;
use crate::error::SectorMetaError;
use crate::math::div_up;
use crate::report::{mk_simple_report, Report};
use crate::sector::overhead::{compute_overhead, OverheadReport};
use crate::sector::params::*;
use crate::units::Units;
use crate::version::*;

//------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq)]
enum OutputFormat {
    Full,
    NumericOnly,
}

pub struct SectorMetadataSizeOptions {
    pub params: DiskParameters,
    format: OutputFormat,
    verbose: bool,
}

pub struct SectorMetadataSizeCommand;

impl SectorMetadataSizeCommand {
    fn cli(&self) -> clap::Command {
        let cmd = clap::Command::new(self.name())
            .next_display_order(None)
            .version(crate::tools_version!())
            .disable_version_flag(true)
            .about("Estimate the space needed to describe every sector of a disk, and the sectors holding those descriptors.")
            // flags
            .arg(
                Arg::new("NUMERIC_ONLY")
                    .help("Output numeric values only")
                    .short('n')
                    .long("numeric-only")
                    .action(ArgAction::SetTrue),
            )
            .arg(
                Arg::new("VERBOSE")
                    .help("Also show the sector counts a round-up policy would give")
                    .short('v')
                    .long("verbose")
                    .action(ArgAction::SetTrue),
            )
            // options
            .arg(
                Arg::new("DISK_SIZE")
                    .help("Specify the size of the disk")
                    .short('s')
                    .long("disk-size")
                    .requires("DISK_SIZE_UNIT")
                    .value_name("NUM")
                    .value_parser(value_parser!(u64)),
            )
            .arg(
                Arg::new("DISK_SIZE_UNIT")
                    .help("Specify the unit of the disk size in {KiB, MiB, GiB}")
                    .short('u')
                    .long("disk-size-unit")
                    .value_name("UNIT"),
            )
            .arg(
                Arg::new("SECTOR_SIZE")
                    .help("Specify the sector size, a power of two")
                    .long("sector-size")
                    .value_name("BYTES")
                    .value_parser(value_parser!(u64))
                    .default_value("512"),
            )
            .arg(
                Arg::new("DESCRIPTOR_SIZE")
                    .help("Specify the size of a sector descriptor")
                    .long("descriptor-size")
                    .value_name("BYTES")
                    .value_parser(value_parser!(u64))
                    .default_value("4"),
            );

        version_args(cmd)
    }

    fn parse_args<I, T>(&self, args: I) -> Result<SectorMetadataSizeOptions>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self.cli().get_matches_from(args);
        display_version(&matches);

        let disk_size = matches
            .get_one::<u64>("DISK_SIZE")
            .ok_or_else(|| SectorMetaError::MissingInput("No disk size provided.".to_string()))?;

        // DISK_SIZE requires the unit, so this is always present here.
        let unit = matches
            .get_one::<String>("DISK_SIZE_UNIT")
            .ok_or_else(|| SectorMetaError::MissingInput("No disk size unit provided.".to_string()))?
            .parse::<Units>()?;

        let disk_size_bytes = disk_size_from_units(*disk_size, unit)?;
        let sector_size = *matches.get_one::<u64>("SECTOR_SIZE").unwrap();
        let descriptor_size = *matches.get_one::<u64>("DESCRIPTOR_SIZE").unwrap();
        let params =
            DiskParameters::with_descriptor_size(disk_size_bytes, sector_size, descriptor_size)?;

        let format = if matches.get_flag("NUMERIC_ONLY") {
            OutputFormat::NumericOnly
        } else {
            OutputFormat::Full
        };

        Ok(SectorMetadataSizeOptions {
            params,
            format,
            verbose: matches.get_flag("VERBOSE"),
        })
    }
}

fn format_overhead(overhead: &OverheadReport, format: &OutputFormat) -> String {
    match format {
        OutputFormat::Full => overhead.to_string(),
        OutputFormat::NumericOnly => {
            let mut output = String::new();
            for (_, value) in overhead.fields() {
                let _ = writeln!(output, "{}", value);
            }
            output
        }
    }
}

// The counts truncate partial sectors; show what rounding up would give.
fn log_rounding(report: &Arc<Report>, params: &DiskParameters, overhead: &OverheadReport) {
    let sector_size = params.sector_size_bytes();

    report.info(&format!(
        "descriptor sectors: {} (rounded up: {})",
        overhead.descriptor_sector_count,
        div_up(overhead.descriptor_memory_bytes, sector_size)
    ));
    report.info(&format!(
        "meta descriptor sectors: {} (rounded up: {})",
        overhead.meta_descriptor_sector_count,
        div_up(overhead.meta_descriptor_memory_bytes, sector_size)
    ));
    report.info(&format!(
        "total metadata sectors: {}",
        overhead.total_metadata_sectors()
    ));
}

pub fn sector_metadata_size(report: &Arc<Report>, opts: &SectorMetadataSizeOptions) -> Result<()> {
    let overhead = compute_overhead(&opts.params);
    let output = format_overhead(&overhead, &opts.format);

    if opts.verbose {
        log_rounding(report, &opts.params, &overhead);
    }

    report.to_stdout(output.trim_end_matches('\n'));
    Ok(())
}

impl<'a> Command<'a> for SectorMetadataSizeCommand {
    fn name(&self) -> &'a str {
        "sector_metadata_size"
    }

    fn run(&self, args: &mut dyn Iterator<Item = std::ffi::OsString>) -> exitcode::ExitCode {
        let report = mk_simple_report();

        let opts = self.parse_args(args);
        if opts.is_err() {
            return to_exit_code(&report, opts);
        }

        let opts = opts.unwrap();
        to_exit_code(&report, sector_metadata_size(&report, &opts))
    }
}

//------------------------------------------


//------------------------------------------
