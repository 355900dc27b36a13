use anyhow::Result;
use clap::{CommandFactory, Parser};
use is_terminal::IsTerminal;
use log::info;

mod cli;
mod commands;
mod ui;

use cli::Cli;
use cli::app::Commands;
use cli::commands::InteractiveCommands;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logger to file (truncate on each run)
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("compat-finder.log")?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    let cli = Cli::parse();
    info!("Starting compat-finder");

    match cli.command {
        Some(Commands::Search(args)) => commands::search_command(args).await?,
        Some(Commands::Columns(args)) => commands::columns_command(args).await?,
        Some(Commands::Sheets(args)) => commands::sheets_command(args).await?,
        Some(Commands::Interactive(args)) => commands::interactive_command(args).await?,
        Some(Commands::Settings(args)) => commands::settings_command(args).await?,
        None if std::io::stdin().is_terminal() => {
            commands::interactive_command(InteractiveCommands::default()).await?
        }
        None => {
            // Non-interactive mode without subcommand - show help
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
