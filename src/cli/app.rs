use super::commands::{
    ColumnsCommands, InteractiveCommands, SearchCommands, SettingsCommands, SheetsCommands,
};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "compat-finder")]
#[command(about = "Find device models by the models they are compatible with")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the compatibility column for a model
    Search(SearchCommands),
    /// Show detected columns and sample rows
    Columns(ColumnsCommands),
    /// List the sheets of a workbook
    Sheets(SheetsCommands),
    /// Interactive search session (default in a terminal)
    Interactive(InteractiveCommands),
    /// Application settings management
    Settings(SettingsCommands),
}
