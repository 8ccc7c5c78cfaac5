//! `roster` command-line entry point.
//!
//! # Responsibility
//! - Gate the session behind the configured login pair.
//! - Load the record file, run one command or an interactive shell.

mod cli;
mod commands;
mod render;
mod shell;

use anyhow::{anyhow, Result};
use clap::Parser;
use cli::{Cli, Command};
use log::info;
use roster_core::{init_logging, EditorController};
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.config();
    if let Some(log_dir) = &config.log_dir {
        init_logging(&config.log_level, log_dir)
            .map_err(|err| anyhow!("failed to initialize logging: {err}"))?;
    }

    config.credentials.attempt(&cli.user, &cli.password)?;

    let mut editor = EditorController::open(config.record_file());
    if let Some(err) = editor.load_error() {
        eprintln!("warning: {err}; starting with no records");
    }
    info!(
        "event=cli_start module=cli status=ok version={}",
        roster_core::core_version()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Command::List(args) => commands::list(&mut editor, &args, &mut out)?,
        Command::Add(args) => commands::add(&mut editor, args, &mut out)?,
        Command::Update(args) => commands::update(&mut editor, &args, &mut out)?,
        Command::Delete(args) => commands::delete(&mut editor, &args, &mut out)?,
        Command::Shell => shell::run(&mut editor, io::stdin().lock(), &mut out)?,
    }
    out.flush()?;
    Ok(())
}
