use std::path::PathBuf;

use clap::Parser;

use crate::cmd::Commands;
use crate::db::DEFAULT_FILE;

/// Interactive, file-backed task list.
/// Storage defaults to ./tasklist.json or a path passed via --file.
#[derive(Parser)]
#[command(name = "tasklist", version, about = "Interactive task list with priorities and due dates")]
pub struct Cli {
    /// Path to the JSON task file.
    #[arg(long, env = "TASKLIST_FILE", default_value = DEFAULT_FILE, global = true)]
    pub file: PathBuf,

    /// Reload the task file before every action, dropping unsaved changes.
    #[arg(long)]
    pub reload_every_turn: bool,

    /// Log debug output to stderr.
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["tasklist"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("tasklist.json"));
        assert!(!cli.reload_every_turn);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_print_with_file() {
        let cli = Cli::try_parse_from(["tasklist", "print", "--file", "other.json"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Print)));
        assert_eq!(cli.file, PathBuf::from("other.json"));
    }
}
