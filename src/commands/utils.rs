use std::sync::Arc;

use crate::report::*;

//------------------------------------------

pub fn to_exit_code<T>(report: &Arc<Report>, result: anyhow::Result<T>) -> exitcode::ExitCode {
    if let Err(e) = result {
        report.fatal(&format!("{}", e));

        // every failure here is a bad input
        exitcode::USAGE
    } else {
        exitcode::OK
    }
}

//------------------------------------------


//------------------------------------------
