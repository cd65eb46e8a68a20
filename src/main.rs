// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use std::{io, process::ExitCode};

use clap::Parser;
use mutation_scaffold::cli::{Cli, display_root, init_tracing, print_report, run};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(report) => {
            if !cli.quiet
                && let Err(err) = print_report(&report, display_root(&cli), &mut io::stdout())
            {
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!(error = ?err, "generation failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
