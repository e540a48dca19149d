use anyhow::Result;
use clap::Parser;
use log::info;

use framecut::cli::CliArgs;
use framecut::split::{SplitOptions, run_batch};

#[allow(clippy::print_stderr)]
fn main() {
    if let Err(e) = run() {
        // Use eprintln instead of error! so failures before logger init
        // are still visible
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = CliArgs::parse();

    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_timestamp(None)
        .format_target(false)
        .init();

    info!("Framecut sprite splitter v{}", env!("CARGO_PKG_VERSION"));

    run_batch(
        &cli.root,
        SplitOptions {
            compress: cli.compress,
        },
    )?;

    info!("Done!");

    Ok(())
}
