use anyhow::Result;
use sector_meta::version::tools_version;

use crate::common::process::*;
use crate::common::target::msg;

//------------------------------------------
// help

pub fn test_help_short(program: &str, about: &str) -> Result<()> {
    let stdout = run_ok(program, ["-h"])?;
    assert!(stdout.contains(about));
    Ok(())
}

pub fn test_help_long(program: &str, about: &str) -> Result<()> {
    let stdout = run_ok(program, ["--help"])?;
    assert!(stdout.contains(about));
    Ok(())
}

#[macro_export]
macro_rules! test_accepts_help {
    ($program: expr, $about: expr) => {
        #[test]
        fn accepts_h() -> Result<()> {
            test_help_short($program, $about)
        }

        #[test]
        fn accepts_help() -> Result<()> {
            test_help_long($program, $about)
        }
    };
}

//------------------------------------------
// version

pub fn test_version_short(program: &str) -> Result<()> {
    let stdout = run_ok(program, ["-V"])?;
    assert!(stdout.contains(tools_version()));
    Ok(())
}

pub fn test_version_long(program: &str) -> Result<()> {
    let stdout = run_ok(program, ["--version"])?;
    assert!(stdout.contains(tools_version()));
    Ok(())
}

#[macro_export]
macro_rules! test_accepts_version {
    ($program: expr) => {
        #[test]
        fn accepts_v() -> Result<()> {
            test_version_short($program)
        }

        #[test]
        fn accepts_version() -> Result<()> {
            test_version_long($program)
        }
    };
}

//------------------------------------------

pub fn test_rejects_bad_option(program: &str) -> Result<()> {
    let stderr = run_fail(program, ["--hedgehogs-only"])?;
    assert!(stderr.contains(&msg::bad_option_hint("--hedgehogs-only")));
    Ok(())
}

#[macro_export]
macro_rules! test_rejects_bad_option {
    ($program: expr) => {
        #[test]
        fn rejects_bad_option() -> Result<()> {
            test_rejects_bad_option($program)
        }
    };
}

//------------------------------------------
