// src/main.rs

use anyhow::Result;
use clap::Parser;
use dirls::cli::{validate_args, Cli};
use dirls::config::ConfigBuilder;
use dirls::errors::Error;
use dirls::run;
use std::ffi::OsString;
use std::io::{self, IsTerminal};

fn main() -> Result<()> {
    // Initialize logging on stderr so listings on stdout stay clean.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                if cfg!(debug_assertions) {
                    "dirls=debug".parse()?
                } else {
                    "dirls=warn".parse()?
                },
            ),
        )
        .init();

    let args: Vec<OsString> = std::env::args_os().collect();
    log::debug!("Raw arguments: {:?}", args);

    // --- Setup ---
    // Unknown flags are rejected here, before the filesystem is touched.
    if let Err(e) = validate_args(args.iter().skip(1)) {
        exit_with(&e);
    }
    let cli = Cli::parse_from(args);

    let stdout = io::stdout();
    let highlight = stdout.is_terminal();

    // --- Configuration & Execution ---
    let result = ConfigBuilder::from_cli(cli)
        .highlight_dirs(highlight)
        .build()
        .and_then(|config| run(&config, &mut stdout.lock()));

    // --- Error Handling ---
    if let Err(e) = result {
        exit_with(&e);
    }

    Ok(())
}

fn exit_with(e: &Error) -> ! {
    eprintln!("dirls: {}", e);
    std::process::exit(if e.is_usage() { 2 } else { 1 });
}
