// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Optsift - sift exact-match options out of an argument list
//!
//! This is the main entry point for the optsift CLI, a shell-script helper
//! in the spirit of getopt(1) but restricted to whole-token matching: no
//! clustering, no `--name=value` splitting, no prefix matching.
//!
//! ## Output
//!
//! - One line per occurrence taken: `NAME` for flags, `NAME VALUE` for
//!   options that carry a value
//! - A final line with `--` followed by the leftover tokens

mod plan;

use owo_colors::OwoColorize;
use plan::SiftPlan;
use std::env;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        // No arguments - print a usage hint
        None => {
            println!(
                "{} {}",
                "Usage:".white().bold(),
                "optsift [OPTIONS] [SPEC]... [--] [TOKEN]..."
            );
            println!("Use {} for usage information", "--help".cyan());
            ExitCode::SUCCESS
        }
        Some("-h") | Some("--help") => {
            print_help();
            ExitCode::SUCCESS
        }
        Some("-V") | Some("--version") => {
            print_version();
            ExitCode::SUCCESS
        }
        Some(_) => sift(args),
    }
}

/// Parse the invocation, sift the target tokens, print the report.
fn sift(args: Vec<String>) -> ExitCode {
    let plan = match SiftPlan::parse(args) {
        Ok(plan) => plan,
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            eprintln!("Use {} for usage information", "--help".cyan());
            return ExitCode::FAILURE;
        }
    };

    let quiet = plan.quiet;

    match plan.run() {
        Ok(report) => {
            if !quiet {
                for line in &report.lines {
                    println!("{}", line);
                }
            }
            if report.rest.is_empty() {
                println!("--");
            } else {
                println!("-- {}", report.rest.join(" "));
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn print_help() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "\n  {} v{}\n",
        "Optsift".white().bold(),
        version.yellow()
    );
    println!("  Sift exact-match options out of an argument list.\n");

    println!("{}", "USAGE:".white().bold());
    println!(
        "    {} [OPTIONS] [SPEC]... [--] [TOKEN]...",
        "optsift".green()
    );
    println!();

    println!("{}", "OPTIONS:".white().bold());
    println!(
        "    {:20} {}",
        "-h, --help".cyan(),
        "Print this help message"
    );
    println!(
        "    {:20} {}",
        "-V, --version".cyan(),
        "Print version information"
    );
    println!(
        "    {:20} {}",
        "-q, --quiet".cyan(),
        "Print only the leftover line"
    );
    println!();

    println!("{}", "SPECS:".white().bold());
    println!(
        "    {:20} {}",
        "-f, --flag <NAME>".cyan(),
        "Take every NAME token as a flag"
    );
    println!(
        "    {:20} {}",
        "-o, --option <NAME>".cyan(),
        "Take every NAME token and the value token after it"
    );
    println!();

    println!("{}", "ARGUMENTS:".white().bold());
    println!(
        "    {:20} {}",
        "[TOKEN]...".cyan(),
        "The argument list to sift, after an optional --"
    );
    println!();

    println!("{}", "OUTPUT:".white().bold());
    println!("    One line per occurrence taken (NAME, or NAME VALUE), then a");
    println!("    final line: -- followed by the tokens that were not taken.");
    println!("    Names match whole tokens only, byte for byte.");
    println!();

    println!("{}", "EXAMPLES:".white().bold());
    println!(
        "    {} {} -- prog -v -o out.txt file   # Take -v, and -o with its value",
        "optsift".green(),
        "-f -v -o -o".cyan()
    );
    println!(
        "    {} {} -- run --trace target        # Leftover line only",
        "optsift".green(),
        "-q -f --trace".cyan()
    );
    println!();
}

fn print_version() {
    let version = env!("CARGO_PKG_VERSION");
    println!("{} {}", "optsift".bright_cyan().bold(), version.yellow());
}
