extern crate anyhow;
extern crate thiserror;

pub mod commands;
pub mod error;
pub mod math;
pub mod report;
pub mod sector;
pub mod units;
pub mod version;
