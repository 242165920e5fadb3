mod cli;
mod commands;
mod config;
mod error;
mod paths;
mod session_store;
mod settings;
mod table;

use std::fs;
use std::fs::File;
use std::process::ExitCode;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

/// Starts a fresh `latest.log` in the cache directory.
///
/// Logging is skipped when the directory cannot be created.
fn init_logging(verbose: bool) {
    paths::rotate_logs();
    let Some(path) = paths::log_file() else { return };
    if let Some(dir) = path.parent() {
        if fs::create_dir_all(dir).is_err() {
            return;
        }
    }
    let Ok(file) = File::create(&path) else { return };

    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let config = ConfigBuilder::new()
        .add_filter_ignore_str("hyper_util")
        .add_filter_ignore_str("rustls")
        .build();
    let _ = WriteLogger::init(level, config, file);
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    init_logging(cli.verbose);

    match commands::run(cli).await {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            if let Some(hint) = e.hint() {
                eprintln!("hint: {}", hint);
            }
            ExitCode::FAILURE
        }
    }
}
