use clap::Args;
use compat_finder::export::OutputFormat;
use std::path::PathBuf;

use super::DataArgs;

#[derive(Args)]
pub struct SearchCommands {
    /// Model to look for in the compatibility column
    #[arg(help = "Model to look for (e.g., 'iphone 8')")]
    pub query: String,
    #[command(flatten)]
    pub data: DataArgs,
    /// Also match individual entries of separated lists (comma | ; /)
    #[arg(long, conflicts_with = "no_split")]
    pub split: bool,
    /// Only match the whole compatibility field
    #[arg(long)]
    pub no_split: bool,
    /// Output format
    #[arg(short = 'F', long, value_enum, default_value = "table")]
    pub format: OutputFormat,
    /// Save results to a file (.xlsx, .csv or .json)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

impl SearchCommands {
    /// Split flag from the command line, if one was given
    pub fn split_override(&self) -> Option<bool> {
        match (self.split, self.no_split) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}
