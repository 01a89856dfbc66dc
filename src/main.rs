//! # tasklist - interactive task list
//!
//! A small terminal task manager. Each task carries a priority, a due date and
//! time, and a free-text description; the list is kept in `tasklist.json` in
//! the working directory.
//!
//! ## Usage
//!
//! ```bash
//! # Start an interactive session
//! tasklist
//!
//! # Print the current table and exit
//! tasklist print
//!
//! # Use another data file
//! tasklist --file ~/work.json
//! ```
//!
//! Inside a session, type one of `add`, `print`, `edit`, `delete` or `end`.
//! Changes are written to disk only when the session ends with `end`.
//!
//! Priorities are `C` (critical), `H` (high), `N` (normal) and `L` (low). The
//! `D` column shows whether a task is due in the future, today or overdue.
//!
//! Set `TASKLIST_LOG` (e.g. `TASKLIST_LOG=tasklist=debug`) or pass `--verbose`
//! to see log output on stderr.

use std::io;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

pub mod cli;
pub mod cmd;
pub mod db;
pub mod error;
pub mod fields;
pub mod prompt;
pub mod render;
pub mod task;
pub mod validate;

use cli::Cli;
use cmd::*;
use prompt::Prompter;

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("tasklist=debug")
    } else {
        EnvFilter::try_from_env("TASKLIST_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Completions { shell }) => {
            generate(shell, &mut Cli::command(), "tasklist", &mut io::stdout());
        },
        Some(Commands::Print) => {
            if let Err(e) = cmd_print_file(&cli.file, utc_today(), &mut io::stdout().lock()) {
                tracing::error!("print failed: {e}");
                eprintln!("{e}");
                std::process::exit(1);
            }
        },
        None => {
            let prompter = Prompter::new(io::stdin().lock(), io::stdout());
            let mut session = match Session::open(cli.file, prompter, utc_today, cli.reload_every_turn) {
                Ok(session) => session,
                Err(e) => {
                    tracing::error!("failed to open task list: {e}");
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            };
            if let Err(e) = session.run() {
                tracing::error!("session ended abnormally: {e}");
                eprintln!("{e}");
                std::process::exit(1);
            }
        },
    }
}
