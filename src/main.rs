use clap::Parser;
use ipcalc::{cli::Cli, common::OutputFormat, output::render, process::process_input};
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Cli::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(text) => {
            print!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// アプリケーションのメインロジック
fn run(args: &Cli) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
    let format = OutputFormat::from_str(&args.output_format);
    debug!(format = format.as_str(), "selected output format");

    let cidr = process_input(&args.address, args.mask.as_deref())?;
    Ok(render(&cidr, format)?)
}

/// RUST_LOG が設定されていればそちらを優先する
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
