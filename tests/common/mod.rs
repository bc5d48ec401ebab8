#![allow(dead_code)]

pub mod common_args;
pub mod process;
pub mod target;
