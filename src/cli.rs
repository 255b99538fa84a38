use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// weekly_shopping — Turn seven daily food logs into a priced weekly shopping list.
#[derive(Parser, Debug)]
#[command(name = "weekly_shopping")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Day files (monday.json .. sunday.json). Defaults to every JSON file in --dir.
    #[arg(long, global = true, num_args = 1..)]
    pub days: Vec<PathBuf>,

    /// Directory searched for day files when none are given.
    #[arg(short, long, global = true, default_value = ".")]
    pub dir: PathBuf,

    /// Catalog of unit sizes and prices: a file path or an http(s) URL.
    #[arg(short, long, global = true, default_value = "catalog.json")]
    pub catalog: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the weekly shopping table.
    Summary {
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Print the table, then edit or delete rows interactively.
    Edit,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
}

impl Default for Command {
    fn default() -> Self {
        Command::Summary {
            format: OutputFormat::Table,
        }
    }
}
