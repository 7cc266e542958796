/*
MIT License with ARTmie Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: ARTmie 0.1.1
Copyright (c) 2025 Enrico P. Metzner.
*/

//! Main executable for artmie-rs

use artmie_rs::cli::Cli;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();
    log::debug!("artmie-rs v{}: {:?}", artmie_rs::VERSION, cli.command);

    let stdout = std::io::stdout();
    let passed = cli.run(&mut stdout.lock())?;
    if !passed {
        std::process::exit(1);
    }

    Ok(())
}
