mod cli;
mod db;
mod error;
mod fmt;
mod importer;
mod ledger;
mod models;
mod settings;
mod store;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { data_dir } => cli::init::run(data_dir),
        Commands::Import { file } => cli::import::run(&file),
        Commands::Add {
            title,
            kind,
            value,
            category,
        } => cli::add::run(&title, &kind, value, category.as_deref()),
        Commands::List { month, category } => {
            cli::list::run(month.as_deref(), category.as_deref())
        }
        Commands::Balance => cli::balance::run(),
        Commands::Categories => cli::categories::run(),
        Commands::Delete { id } => cli::delete::run(id),
        Commands::Backup { output } => cli::backup::run(output),
        Commands::Status => cli::status::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
