// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! caliber: compilation-test driver

mod args;
mod color;
mod exit_error;
mod logging;
mod output;
mod run;

use std::process::ExitCode;

use caliber_core::exit_code;
use clap::error::ErrorKind;
use clap::Parser;

use crate::args::{clap_message, Cli};
use crate::exit_error::ExitError;

const PROGRAM: &str = "caliber";

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return status(exit_code::SUCCESS);
        }
        Err(e) => {
            eprintln!("{PROGRAM}: {}", clap_message(&e));
            return status(exit_code::BAD_ARGS);
        }
    };

    logging::init(cli.verbose);
    tracing::debug!(?cli, "starting");

    match run::run(cli).await {
        Ok(code) => status(code),
        Err(e) => {
            let exit = ExitError::from_anyhow(&e);
            tracing::debug!(code = exit.code, error = %exit, "exiting");
            eprintln!("{PROGRAM}: {exit}");
            status(exit.code)
        }
    }
}

fn status(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
