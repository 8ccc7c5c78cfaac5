//! Command-line argument definitions.

use clap::{Args, Parser, Subcommand};
use roster_core::{RecordColumn, RosterConfig, DEFAULT_DATA_FILE};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "roster",
    version,
    about = "Student record manager",
    long_about = "View, search, add, edit and delete student records stored in a\n\
                  comma-separated flat file (one `name,dept,year,course` per line)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Record file to load and save.
    #[arg(long, value_name = "PATH", env = "ROSTER_FILE", default_value = DEFAULT_DATA_FILE, global = true)]
    pub file: PathBuf,

    /// Absolute directory for rotated log files (logging is off when unset).
    #[arg(long = "log-dir", value_name = "DIR", env = "ROSTER_LOG_DIR", global = true)]
    pub log_dir: Option<PathBuf>,

    /// Log level: trace, debug, info, warn or error.
    #[arg(long = "log-level", value_name = "LEVEL", env = "ROSTER_LOG_LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Login username.
    #[arg(long, env = "ROSTER_USER")]
    pub user: String,

    /// Login password.
    #[arg(long, env = "ROSTER_PASSWORD", hide_env_values = true)]
    pub password: String,
}

impl Cli {
    /// Session configuration with flag and environment overrides applied.
    pub fn config(&self) -> RosterConfig {
        let mut config = RosterConfig::default().with_data_file(self.file.clone());
        config.log_dir = self.log_dir.clone();
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
        config
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Print records, optionally filtered and sorted.
    List(ListArgs),

    /// Add a record and save.
    Add(AddArgs),

    /// Edit the record at a store position and save.
    Update(UpdateArgs),

    /// Delete the record at a store position and save.
    Delete(DeleteArgs),

    /// Interactive session with search, sort, selection and explicit save.
    Shell,
}

#[derive(Args)]
pub struct ListArgs {
    /// Case-insensitive substring matched against every column.
    #[arg(long, value_name = "TEXT")]
    pub search: Option<String>,

    /// Column to sort by (name, department, year, course).
    #[arg(long, value_name = "COLUMN")]
    pub sort: Option<RecordColumn>,

    /// Sort descending instead of ascending.
    #[arg(long, requires = "sort")]
    pub desc: bool,

    /// Emit JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct AddArgs {
    pub name: String,
    pub department: String,
    pub year: String,
    pub course: String,
}

#[derive(Args)]
pub struct UpdateArgs {
    /// 1-based store position as shown by `list`.
    pub position: usize,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long, alias = "dept")]
    pub department: Option<String>,

    #[arg(long)]
    pub year: Option<String>,

    #[arg(long)]
    pub course: Option<String>,
}

impl UpdateArgs {
    /// Column overrides in column order.
    pub fn overrides(&self) -> impl Iterator<Item = (RecordColumn, &str)> + '_ {
        RecordColumn::ALL
            .into_iter()
            .zip([&self.name, &self.department, &self.year, &self.course])
            .filter_map(|(column, value)| value.as_deref().map(|value| (column, value)))
    }
}

#[derive(Args)]
pub struct DeleteArgs {
    /// 1-based store position as shown by `list`.
    pub position: usize,
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::Parser;
    use roster_core::RecordColumn;

    #[test]
    fn list_parses_sort_column_and_direction() {
        let cli = Cli::try_parse_from([
            "roster", "--user", "admin", "--password", "admin", "list", "--sort", "dept", "--desc",
        ])
        .expect("valid args");
        let Command::List(args) = cli.command else {
            panic!("expected list");
        };
        assert_eq!(args.sort, Some(RecordColumn::Department));
        assert!(args.desc);
    }

    #[test]
    fn unknown_sort_column_is_rejected() {
        let result = Cli::try_parse_from([
            "roster", "--user", "a", "--password", "b", "list", "--sort", "gpa",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn update_overrides_only_given_columns() {
        let cli = Cli::try_parse_from([
            "roster", "--user", "a", "--password", "b", "--file", "x.txt", "update", "2",
            "--year", "3",
        ])
        .expect("valid args");
        assert_eq!(cli.config().data_file.to_str(), Some("x.txt"));
        let Command::Update(args) = cli.command else {
            panic!("expected update");
        };
        assert_eq!(args.position, 2);
        assert_eq!(
            args.overrides().collect::<Vec<_>>(),
            vec![(RecordColumn::Year, "3")]
        );
    }
}
