use clap::Args;
use std::path::PathBuf;

/// Where to load the table from and which columns to use.
///
/// Anything left unset falls back to the saved settings, then to column
/// auto-detection.
#[derive(Args, Debug, Clone, Default)]
pub struct DataArgs {
    /// Spreadsheet to search (xlsx, xls, ods or csv)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,
    /// Sheet name (defaults to the first sheet)
    #[arg(long)]
    pub sheet: Option<String>,
    /// Column holding the device model
    #[arg(long, value_name = "NAME")]
    pub model_column: Option<String>,
    /// Column holding the compatibility list
    #[arg(long, value_name = "NAME")]
    pub compat_column: Option<String>,
}

#[derive(Args)]
pub struct ColumnsCommands {
    #[command(flatten)]
    pub data: DataArgs,
    /// Number of sample rows to show
    #[arg(short = 'n', long)]
    pub rows: Option<usize>,
}

#[derive(Args)]
pub struct SheetsCommands {
    /// Workbook to inspect
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

#[derive(Args, Default)]
pub struct InteractiveCommands {
    #[command(flatten)]
    pub data: DataArgs,
}
