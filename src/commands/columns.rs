use anyhow::Result;
use colored::*;
use compat_finder::config::Config;
use compat_finder::table::list_sheets;

use super::session::open_session;
use crate::cli::commands::{ColumnsCommands, SheetsCommands};
use crate::ui::output::print_columns;

/// Show which columns will be searched, with a few sample rows
pub async fn columns_command(args: ColumnsCommands) -> Result<()> {
    let config = Config::load()?;
    let settings = config.get_settings();

    let session = open_session(&args.data, settings, false).await?;
    println!("📄 {}", session.path.display().to_string().cyan());

    print_columns(&session, args.rows.unwrap_or(settings.sample_rows))
}

/// List workbook sheets
pub async fn sheets_command(args: SheetsCommands) -> Result<()> {
    let config = Config::load()?;
    let path = args.file.unwrap_or_else(|| config.get_settings().data_path.clone());
    let configured = config.get_settings().sheet.as_deref();

    let sheets = list_sheets(&path)?;
    println!("📄 {}", path.display().to_string().cyan());
    for (index, sheet) in sheets.iter().enumerate() {
        let selected = match configured {
            Some(name) => name == sheet,
            None => index == 0,
        };
        if selected {
            println!("  {} {}", "●".bright_green(), sheet.bright_green().bold());
        } else {
            println!("  {} {}", "○".dimmed(), sheet.white());
        }
    }
    Ok(())
}
