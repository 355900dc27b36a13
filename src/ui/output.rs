//! Coloured terminal rendering for results and column summaries

use colored::*;
use compat_finder::MatchRow;
use compat_finder::export::{Headers, OutputFormat, format_results};
use anyhow::Result;

use crate::commands::session::Session;

/// Only a truly empty query is refused; whitespace still goes to the matcher.
pub fn is_empty_query(query: &str) -> bool {
    query.is_empty()
}

pub fn warn_empty_query() {
    println!("⚠️  {}", "Please type something to search.".bright_yellow());
}

/// Print a result set the way the search command and the interactive loop
/// both show it.
pub fn print_results(rows: &[MatchRow], format: OutputFormat, headers: Headers<'_>) -> Result<()> {
    if format != OutputFormat::Table {
        print!("{}", format_results(rows, format, headers)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("⚠️  {}", "No match found.".bright_yellow());
        return Ok(());
    }

    println!();
    println!("  {}", format!("✅ {} match(es):", rows.len()).bright_green().bold());
    println!();
    print_rows(&format_results(rows, format, headers)?);
    Ok(())
}

/// Print detected columns plus the first `limit` projected rows
pub fn print_columns(session: &Session, limit: usize) -> Result<()> {
    let table = &session.table;

    println!();
    println!("  {}", "📋 Detected columns:".bright_blue().bold());
    for header in table.headers() {
        let marker = if header == session.model.name() {
            " (model)".bright_green().to_string()
        } else if header == session.compat.name() {
            " (compatible)".bright_green().to_string()
        } else {
            String::new()
        };
        println!("    {} {}{}", "•".dimmed(), header.cyan(), marker);
    }

    println!();
    println!(
        "  {} {}",
        "Sample rows:".bright_white().bold(),
        format!("({} of {})", limit.min(table.row_count()), table.row_count()).dimmed()
    );
    println!();

    let sample: Vec<MatchRow> = table
        .preview(&session.model, &session.compat, limit)
        .into_iter()
        .map(|(model, compat)| MatchRow { model, compat })
        .collect();
    print_rows(&format_results(&sample, OutputFormat::Table, session.headers())?);
    Ok(())
}

fn print_rows(rendered: &str) {
    for (index, line) in rendered.lines().enumerate() {
        if index < 2 {
            println!("  {}", line.bright_white().bold());
        } else {
            println!("  {}", line);
        }
    }
}
