use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use weekly_shopping_rs::cli::{Cli, Command, OutputFormat};
use weekly_shopping_rs::error::Result;
use weekly_shopping_rs::interface::{display_table, run_edit_session, write_csv};
use weekly_shopping_rs::run_week;
use weekly_shopping_rs::state::{find_day_files, CatalogSource, RowStore};

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    let catalog = CatalogSource::parse(&cli.catalog);
    let day_files = resolve_day_files(&cli.days, &cli.dir, &catalog)?;
    let mut store = run_week(&day_files, &catalog)?;

    match command {
        Command::Summary { format } => cmd_summary(&store, format),
        Command::Edit => cmd_edit(&mut store),
    }
}

/// Explicit day files win; otherwise scan the directory.
fn resolve_day_files(days: &[PathBuf], dir: &Path, catalog: &CatalogSource) -> Result<Vec<PathBuf>> {
    if !days.is_empty() {
        return Ok(days.to_vec());
    }

    let catalog_file = match catalog {
        CatalogSource::File(path) => Some(path.as_path()),
        CatalogSource::Url(_) => None,
    };
    find_day_files(dir, catalog_file)
}

/// Print the result table.
fn cmd_summary(store: &RowStore, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => display_table(store),
        OutputFormat::Csv => write_csv(store, std::io::stdout().lock())?,
    }
    Ok(())
}

/// Edit the table interactively, then print the final result.
fn cmd_edit(store: &mut RowStore) -> Result<()> {
    run_edit_session(store)?;

    println!("Final table:");
    display_table(store);
    Ok(())
}
