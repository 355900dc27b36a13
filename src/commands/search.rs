use anyhow::Result;
use colored::*;
use compat_finder::config::Config;
use compat_finder::export::{OutputFormat, export_results};
use compat_finder::search;
use log::info;

use super::session::open_session;
use crate::cli::commands::SearchCommands;
use crate::ui::output::{is_empty_query, print_results, warn_empty_query};

/// Run a single search and print (or save) the matches
pub async fn search_command(args: SearchCommands) -> Result<()> {
    if is_empty_query(&args.query) {
        warn_empty_query();
        return Ok(());
    }

    let config = Config::load()?;
    let settings = config.get_settings();
    let split = args.split_override().unwrap_or(settings.split);

    let session = open_session(&args.data, settings, false).await?;
    info!("Searching '{}' (split={})", args.query, split);

    let rows = search(&session.table, &session.model, &session.compat, &args.query, split);

    if let Some(output) = &args.output {
        export_results(output, &rows, session.headers())?;
        if args.format == OutputFormat::Table {
            println!(
                "💾 {} match(es) saved to: {}",
                rows.len(),
                output.display().to_string().bright_green()
            );
            return Ok(());
        }
    }

    print_results(&rows, args.format, session.headers())
}
