//! Interactive search session

use anyhow::Result;
use colored::*;
use compat_finder::config::Config;
use compat_finder::export::{OutputFormat, export_results};
use compat_finder::{MatchRow, search};
use dialoguer::Select;
use log::info;

use super::session::{Session, open_session};
use crate::cli::commands::InteractiveCommands;
use crate::ui::output::{is_empty_query, print_columns, print_results, warn_empty_query};
use crate::ui::prompts::{prompt_query, text_input};

#[derive(Debug)]
enum MenuOption {
    Search,
    ToggleSplit,
    Sample,
    Export,
    Exit,
}

impl MenuOption {
    fn label(&self, split: bool) -> String {
        match self {
            MenuOption::Search => format!("🔍 {} - {}", "Search".bright_blue().bold(), "Look up a compatible model".dimmed()),
            MenuOption::ToggleSplit => {
                let state = if split { "on".bright_green() } else { "off".bright_red() };
                format!(
                    "✂️  {} [{}] - {}",
                    "Split lists".bright_yellow().bold(),
                    state,
                    "Also match single entries separated by , | ; /".dimmed()
                )
            }
            MenuOption::Sample => format!("📋 {} - {}", "Sample rows".bright_cyan().bold(), "Show detected columns and rows".dimmed()),
            MenuOption::Export => format!("💾 {} - {}", "Export".bright_green().bold(), "Save the last results to a file".dimmed()),
            MenuOption::Exit => format!("🚪 {} - {}", "Exit".bright_red().bold(), "Leave compat-finder".dimmed()),
        }
    }
}

/// Load the table once and loop over searches until the user exits
pub async fn interactive_command(args: InteractiveCommands) -> Result<()> {
    let config = Config::load()?;
    let settings = config.get_settings();

    println!();
    println!("  {}", "📱 LCD Model Compatibility Finder".bright_blue().bold());
    println!("  {}", "═════════════════════════════════".bright_blue());

    let session = open_session(&args.data, settings, true).await?;
    println!("  {} {}", "Data file:".dimmed(), session.path.display().to_string().cyan());
    print_columns(&session, settings.sample_rows)?;

    let mut split = settings.split;
    let mut last_results: Vec<MatchRow> = Vec::new();

    loop {
        println!();
        let options = [
            MenuOption::Search,
            MenuOption::ToggleSplit,
            MenuOption::Sample,
            MenuOption::Export,
            MenuOption::Exit,
        ];
        let labels: Vec<String> = options.iter().map(|o| o.label(split)).collect();

        let selection = Select::new()
            .with_prompt("What would you like to do?")
            .items(&labels)
            .default(0)
            .interact()?;

        match options[selection] {
            MenuOption::Search => {
                if let Some(rows) = run_search(&session, split)? {
                    last_results = rows;
                }
            }
            MenuOption::ToggleSplit => {
                split = !split;
                info!("Split toggled to {}", split);
            }
            MenuOption::Sample => print_columns(&session, settings.sample_rows)?,
            MenuOption::Export => export_last(&session, &last_results)?,
            MenuOption::Exit => break,
        }
    }

    Ok(())
}

/// Prompt for a query and show its results. `None` when the query was empty.
fn run_search(session: &Session, split: bool) -> Result<Option<Vec<MatchRow>>> {
    let query = prompt_query()?;
    if is_empty_query(&query) {
        warn_empty_query();
        return Ok(None);
    }

    let rows = search(&session.table, &session.model, &session.compat, &query, split);
    print_results(&rows, OutputFormat::Table, session.headers())?;
    Ok(Some(rows))
}

fn export_last(session: &Session, rows: &[MatchRow]) -> Result<()> {
    if rows.is_empty() {
        println!("⚠️  {}", "Nothing to export yet. Run a search with results first.".bright_yellow());
        return Ok(());
    }

    let path = text_input("Export to (.xlsx, .csv or .json)", Some("results.xlsx"))?;
    match export_results(&path, rows, session.headers()) {
        Ok(()) => println!("💾 Saved {} row(s) to {}", rows.len(), path.bright_green()),
        // Keep the session alive on a bad path
        Err(e) => println!("❌ {}", format!("{:#}", e).bright_red()),
    }
    Ok(())
}
